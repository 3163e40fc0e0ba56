use super::*;
use equator::debug_assert;

#[inline]
pub fn mul_bigint(full_mul: &mut [Limb], lhs: &[Limb], rhs: &[Limb]) {
    debug_assert!(full_mul.len() == lhs.len() + rhs.len() + 1);
    full_mul.fill(consts::LIMB_ZERO);
    for (i, &l) in lhs.iter().enumerate() {
        let dst = &mut full_mul[i..];
        let mut carry: Wide = 0;
        for (dst, &r) in core::iter::zip(&mut *dst, rhs) {
            let wide = *dst as Wide + l as Wide * r as Wide + carry;
            *dst = (wide % consts::RADIX_WIDE) as Limb;
            carry = wide / consts::RADIX_WIDE;
        }
        for dst in &mut dst[rhs.len()..] {
            if carry == 0 {
                break;
            }
            let wide = *dst as Wide + carry;
            *dst = (wide % consts::RADIX_WIDE) as Limb;
            carry = wide / consts::RADIX_WIDE;
        }
        debug_assert!(carry == 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;

    #[test]
    fn test_limb_boundary_carry() {
        let mut out = [7; 3];
        mul_bigint(&mut out, &[consts::LIMB_MAX], &[consts::LIMB_MAX]);
        assert!(out == [1, 999999998, 0_u32]);
    }

    #[test]
    fn test_carry_runs_past_row() {
        let lhs = [consts::LIMB_MAX; 3];
        let rhs = [consts::LIMB_MAX; 2];
        let mut out = [0; 6];
        mul_bigint(&mut out, &lhs, &rhs);
        // (10^27 - 1)(10^18 - 1) = 10^45 - 10^27 - 10^18 + 1
        assert!(out == [1, 0, 999999999, 999999998, 999999999, 0_u32]);
    }
}
