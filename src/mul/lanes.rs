//! Row kernels of the batched multiplier: `acc[j] += lhs * rhs[j]` without
//! carries, [`consts::BATCH_LANES`] limbs at a time.

use super::*;
use equator::debug_assert;

#[inline]
pub fn mul_acc(level: SimdLevel, lhs: Limb, rhs: &[Limb], acc: &mut [Wide]) {
    debug_assert!(acc.len() == rhs.len());
    match level {
        #[cfg(target_arch = "x86_64")]
        // SAFETY: callers resolve `level` through `SimdLevel::or_portable`
        SimdLevel::Avx2 => unsafe { x86::mul_acc_avx2(lhs, rhs, acc) },
        #[cfg(target_arch = "aarch64")]
        SimdLevel::Neon => unsafe { aarch64::mul_acc_neon(lhs, rhs, acc) },
        _ => mul_acc_portable(lhs, rhs, acc),
    }
}

#[inline]
pub fn mul_acc_portable(lhs: Limb, rhs: &[Limb], acc: &mut [Wide]) {
    let l = lhs as Wide;
    let mut acc_chunks = acc.chunks_exact_mut(consts::BATCH_LANES);
    let mut rhs_chunks = rhs.chunks_exact(consts::BATCH_LANES);
    for (acc, rhs) in core::iter::zip(&mut acc_chunks, &mut rhs_chunks) {
        for (acc, &r) in core::iter::zip(acc, rhs) {
            *acc += l * r as Wide;
        }
    }
    for (acc, &r) in core::iter::zip(acc_chunks.into_remainder(), rhs_chunks.remainder()) {
        *acc += l * r as Wide;
    }
}

#[cfg(target_arch = "x86_64")]
mod x86 {
    use super::*;
    use core::arch::x86_64::*;

    /// # Safety
    /// The CPU must support AVX2.
    #[target_feature(enable = "avx2")]
    pub unsafe fn mul_acc_avx2(lhs: Limb, rhs: &[Limb], acc: &mut [Wide]) {
        let vl = _mm256_set1_epi64x(lhs as i64);

        let mut acc_chunks = acc.chunks_exact_mut(4);
        let mut rhs_chunks = rhs.chunks_exact(4);
        for (acc, rhs) in core::iter::zip(&mut acc_chunks, &mut rhs_chunks) {
            // zero extend 4x u32 into 4x u64 lanes, the multiply reads the low halves
            let vr = _mm256_cvtepu32_epi64(_mm_loadu_si128(rhs.as_ptr() as *const __m128i));
            let prod = _mm256_mul_epu32(vl, vr);
            let sum = _mm256_add_epi64(_mm256_loadu_si256(acc.as_ptr() as *const __m256i), prod);
            _mm256_storeu_si256(acc.as_mut_ptr() as *mut __m256i, sum);
        }
        let l = lhs as Wide;
        for (acc, &r) in core::iter::zip(acc_chunks.into_remainder(), rhs_chunks.remainder()) {
            *acc += l * r as Wide;
        }
    }
}

#[cfg(target_arch = "aarch64")]
mod aarch64 {
    use super::*;
    use core::arch::aarch64::*;

    /// # Safety
    /// NEON is part of the aarch64 baseline, the slices only need equal lengths.
    #[inline]
    pub unsafe fn mul_acc_neon(lhs: Limb, rhs: &[Limb], acc: &mut [Wide]) {
        let vl = vdup_n_u32(lhs);

        let mut acc_chunks = acc.chunks_exact_mut(4);
        let mut rhs_chunks = rhs.chunks_exact(4);
        for (acc, rhs) in core::iter::zip(&mut acc_chunks, &mut rhs_chunks) {
            let vr = vld1q_u32(rhs.as_ptr());
            let lo = vmull_u32(vl, vget_low_u32(vr));
            let hi = vmull_u32(vl, vget_high_u32(vr));

            let acc = acc.as_mut_ptr();
            vst1q_u64(acc, vaddq_u64(vld1q_u64(acc), lo));
            vst1q_u64(acc.add(2), vaddq_u64(vld1q_u64(acc.add(2)), hi));
        }
        let l = lhs as Wide;
        for (acc, &r) in core::iter::zip(acc_chunks.into_remainder(), rhs_chunks.remainder()) {
            *acc += l * r as Wide;
        }
    }
}
