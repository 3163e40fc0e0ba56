use super::*;
use equator::debug_assert;

impl BigUint {
    /// Empty integer whose storage holds at least `capacity` limbs.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self> {
        let mut limbs = alloc::vec::Vec::new();
        limbs.try_reserve_exact(Ord::max(capacity, 1)).map_err(|_| Error::OutOfMemory)?;
        Ok(Self { limbs })
    }

    /// Grows the storage to hold at least `capacity` limbs. Never shrinks.
    pub(crate) fn reserve(&mut self, capacity: usize) -> Result<()> {
        if capacity <= self.limbs.capacity() {
            return Ok(());
        }
        self.limbs
            .try_reserve_exact(capacity - self.limbs.len())
            .map_err(|_| Error::OutOfMemory)
    }

    #[inline]
    pub(crate) fn trim(&mut self) {
        while self.limbs.last() == Some(&consts::LIMB_ZERO) {
            self.limbs.pop();
        }
    }

    /// `self *= RADIX`, in place.
    pub(crate) fn scale_by_radix(&mut self) -> Result<()> {
        self.reserve(self.len() + 1)?;

        let mut carry: Wide = 0;
        for limb in &mut self.limbs {
            let wide = *limb as Wide * consts::RADIX_WIDE + carry;
            *limb = (wide % consts::RADIX_WIDE) as Limb;
            carry = wide / consts::RADIX_WIDE;
        }
        if carry != 0 {
            debug_assert!(carry < consts::RADIX_WIDE);
            self.limbs.push(carry as Limb);
        }
        Ok(())
    }

    /// `self += small`, in place, with `small < RADIX`.
    pub(crate) fn add_small(&mut self, small: Limb) -> Result<()> {
        debug_assert!(small < consts::RADIX);
        self.reserve(self.len() + 1)?;

        let mut carry = small as Wide;
        let mut i = 0;
        while carry != 0 {
            if i == self.limbs.len() {
                self.limbs.push(consts::LIMB_ZERO);
            }
            let wide = self.limbs[i] as Wide + carry;
            self.limbs[i] = (wide % consts::RADIX_WIDE) as Limb;
            carry = wide / consts::RADIX_WIDE;
            i += 1;
        }
        Ok(())
    }
}
