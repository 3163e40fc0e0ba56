use super::*;

mod batched;
mod detect;
mod lanes;
mod schoolbook;

pub use detect::{simd_available, SimdLevel};

/// Multiplication algorithm. Every strategy computes the same limbs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Row by row with the carry resolved after every limb product.
    Schoolbook,
    /// Deferred carries over wide accumulators, vectorized at the given level.
    /// Falls back to portable lanes if the level is unavailable at runtime.
    Batched(SimdLevel),
}

impl Strategy {
    /// Strategies that run on every CPU.
    pub const ALL_PORTABLE: &'static [Self] = &[Self::Schoolbook, Self::Batched(SimdLevel::None)];

    /// `Batched` if the CPU has vector support, `Schoolbook` otherwise.
    pub fn detect() -> Self {
        let strategy = match SimdLevel::detect() {
            SimdLevel::None => Strategy::Schoolbook,
            level => Strategy::Batched(level),
        };
        tracing::debug!(?strategy, "detected multiplication strategy");
        strategy
    }
}

impl Default for Strategy {
    #[inline]
    fn default() -> Self {
        Self::detect()
    }
}

#[inline]
pub fn mul_scratch(lhs_len: usize, rhs_len: usize, strategy: Strategy) -> StackReq {
    match strategy {
        Strategy::Schoolbook => StackReq::EMPTY,
        Strategy::Batched(_) => {
            if lhs_len == 0 || rhs_len == 0 {
                StackReq::EMPTY
            } else {
                batched::mul_bigint_scratch(lhs_len + rhs_len + 1)
            }
        }
    }
}

/// Exact product of `lhs` and `rhs`. Neither input is modified.
///
/// `stack` must satisfy [`mul_scratch`] for the same lengths and strategy.
pub fn mul(lhs: &BigUint, rhs: &BigUint, strategy: Strategy, stack: &mut PodStack) -> Result<BigUint> {
    if lhs.is_zero() || rhs.is_zero() {
        return Ok(BigUint::zero());
    }

    let out_len = lhs.len() + rhs.len() + 1;
    let mut out = BigUint::with_capacity(out_len)?;
    out.limbs.resize(out_len, consts::LIMB_ZERO);

    tracing::debug!(lhs_len = lhs.len(), rhs_len = rhs.len(), ?strategy, "multiplying");
    match strategy {
        Strategy::Schoolbook => schoolbook::mul_bigint(&mut out.limbs, lhs.limbs(), rhs.limbs()),
        Strategy::Batched(level) => batched::mul_bigint(&mut out.limbs, lhs.limbs(), rhs.limbs(), level.or_portable(), stack),
    }
    out.trim();

    if cfg!(debug_assertions) {
        assert_normalized(&out);
    }
    Ok(out)
}
