use super::*;

impl BigUint {
    pub fn from_u64(mut value: u64) -> Self {
        let mut limbs = alloc::vec::Vec::with_capacity(3);
        while value != 0 {
            limbs.push((value % consts::RADIX_WIDE) as Limb);
            value /= consts::RADIX_WIDE;
        }
        Self { limbs }
    }

    /// Returns `None` if the value does not fit in a `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        self.limbs
            .iter()
            .rev()
            .try_fold(0u64, |acc, &limb| acc.checked_mul(consts::RADIX_WIDE)?.checked_add(limb as u64))
    }
}

impl From<u64> for BigUint {
    #[inline]
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}
