use core::fmt;
use dyn_stack::{PodBuffer, PodStack, StackReq};
use equator::assert;

extern crate alloc;

mod error;
pub use error::{Error, Result};

mod store;

mod mul;
pub use mul::{simd_available, SimdLevel, Strategy};

mod radix;

mod convert;

mod podstack;
pub use podstack::{temp_limbs_scratch, temp_limbs_uninit, temp_spill_zero, temp_wide_scratch, temp_wide_zero};

/// One base `10^9` digit.
pub type Limb = u32;
/// Intermediate type wide enough for `Limb * Limb + 2 * Limb`.
pub type Wide = u64;

pub mod utils {
    use crate::Limb;

    /// Prints a limb as its 9 decimal digits.
    #[repr(transparent)]
    pub struct LimbRepr(pub Limb);

    unsafe impl bytemuck::TransparentWrapper<Limb> for LimbRepr {}

    impl core::fmt::Debug for LimbRepr {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            let width = crate::consts::LIMB_DIGITS;
            write!(f, "{:0>width$}", self.0)
        }
    }
}

pub mod consts {
    use crate::{Limb, Wide};

    pub const RADIX: Limb = 1_000_000_000;
    pub const RADIX_WIDE: Wide = RADIX as Wide;
    pub const LIMB_DIGITS: usize = 9;

    pub const LIMB_ZERO: Limb = 0;
    pub const LIMB_MAX: Limb = RADIX - 1;

    /// Limbs of the right operand handled per batch by the batched multiplier.
    pub const BATCH_LANES: usize = 4;

    /// Rows accumulated into the `u64` slots before they are folded into the
    /// `u128` spill array. `SPILL_ROWS * LIMB_MAX^2` must stay below `u64::MAX`.
    pub const SPILL_ROWS: usize = 16;

    const _: () = {
        let max_product = LIMB_MAX as u128 * LIMB_MAX as u128;
        if max_product * SPILL_ROWS as u128 > u64::MAX as u128 {
            panic!()
        }
    };
}

pub mod math {
    use super::*;

    /// Parses a string of ASCII decimal digits.
    pub use radix::from_decimal;

    /// Writes the decimal representation using caller-provided scratch memory.
    pub use radix::to_decimal;

    /// Scratch requirement of [`to_decimal`].
    pub use radix::to_decimal_scratch;

    /// Exact product of two integers using caller-provided scratch memory.
    pub use mul::mul;

    /// Scratch requirement of [`mul`].
    pub use mul::mul_scratch;
}

/// Non-negative integer stored as base `10^9` limbs, least significant first.
///
/// The limb vector never carries most significant zero limbs, so zero is the
/// empty vector and two equal values always have identical limbs.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BigUint {
    limbs: alloc::vec::Vec<Limb>,
}

impl BigUint {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            limbs: alloc::vec::Vec::new(),
        }
    }

    /// Number of significant limbs.
    #[inline]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Number of limbs the storage can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.limbs.capacity()
    }

    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    #[inline]
    pub fn parse(text: &str) -> Result<Self> {
        radix::from_decimal(text)
    }
}

impl fmt::Debug for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use bytemuck::TransparentWrapper;
        f.debug_struct("BigUint")
            .field("limbs", &utils::LimbRepr::wrap_slice(&self.limbs))
            .finish()
    }
}

/// Multiplication context holding the strategy used by [`MulCtx::mul`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MulCtx {
    strategy: Strategy,
}

impl MulCtx {
    #[inline]
    pub fn new(strategy: Strategy) -> Self {
        if let Strategy::Batched(level) = strategy {
            if !level.is_available() {
                tracing::debug!(requested = %level, "SIMD level unavailable, batched multiplier uses portable lanes");
            }
        }
        Self { strategy }
    }

    /// Context using the best strategy for the running CPU.
    #[inline]
    pub fn detect() -> Self {
        Self::new(Strategy::detect())
    }

    #[inline]
    pub fn strategy(self) -> Strategy {
        self.strategy
    }

    pub fn mul(self, lhs: &BigUint, rhs: &BigUint) -> Result<BigUint> {
        let req: StackReq = math::mul_scratch(lhs.len(), rhs.len(), self.strategy);
        let mut mem = PodBuffer::try_new(req).map_err(|_| Error::OutOfMemory)?;
        math::mul(lhs, rhs, self.strategy, PodStack::new(&mut mem))
    }
}

impl Default for MulCtx {
    #[inline]
    fn default() -> Self {
        Self::detect()
    }
}

/// Parses a decimal string. See [`math::from_decimal`].
#[inline]
pub fn parse(text: &str) -> Result<BigUint> {
    radix::from_decimal(text)
}

/// Renders `x` in decimal without leading zeros.
#[inline]
pub fn render(x: &BigUint) -> Result<String> {
    radix::render(x)
}

/// Exact product using the strategy detected for the running CPU.
#[inline]
pub fn multiply(lhs: &BigUint, rhs: &BigUint) -> Result<BigUint> {
    MulCtx::detect().mul(lhs, rhs)
}

#[inline]
pub fn multiply_with(lhs: &BigUint, rhs: &BigUint, strategy: Strategy) -> Result<BigUint> {
    MulCtx::new(strategy).mul(lhs, rhs)
}

#[inline]
#[track_caller]
pub(crate) fn assert_normalized(x: &BigUint) {
    assert!(all(
        x.limbs.last() != Some(&consts::LIMB_ZERO),
        x.limbs.iter().all(|&l| l < consts::RADIX),
    ));
}
