use super::*;
use equator::debug_assert;

pub fn mul_bigint_scratch(out_len: usize) -> StackReq {
    temp_wide_scratch(out_len)
}

/// Same result as the schoolbook product. Partial products are summed into
/// wide slots without carrying, and carries are resolved by a single pass at
/// the end.
pub fn mul_bigint(full_mul: &mut [Limb], lhs: &[Limb], rhs: &[Limb], level: SimdLevel, stack: &mut PodStack) {
    debug_assert!(full_mul.len() == lhs.len() + rhs.len() + 1);
    let out_len = full_mul.len();

    let (acc, stack) = temp_wide_zero(out_len, stack);
    let (spill, _) = temp_spill_zero(out_len, stack);

    let mut row = 0;
    for rows in lhs.chunks(consts::SPILL_ROWS) {
        for &l in rows {
            lanes::mul_acc(level, l, rhs, &mut acc[row..row + rhs.len()]);
            row += 1;
        }

        if row < lhs.len() {
            // each slot holds at most SPILL_ROWS products here
            let touched = row - rows.len()..row - 1 + rhs.len();
            for (spill, acc) in core::iter::zip(&mut spill[touched.clone()], &mut acc[touched]) {
                *spill += *acc as u128;
                *acc = 0;
            }
            tracing::trace!(row, "spilled accumulators");
        }
    }

    let radix = consts::RADIX_WIDE as u128;
    let mut carry = 0u128;
    for (dst, (&spill, &acc)) in core::iter::zip(full_mul, core::iter::zip(&*spill, &*acc)) {
        let total = spill + acc as u128 + carry;
        *dst = (total % radix) as Limb;
        carry = total / radix;
    }
    debug_assert!(carry == 0);
}
