use super::*;

#[inline]
pub fn temp_limbs_scratch(len: usize) -> StackReq {
    StackReq::new::<Limb>(len)
}

#[inline]
pub fn temp_wide_scratch(len: usize) -> StackReq {
    StackReq::all_of(&[StackReq::new::<Wide>(len), StackReq::new::<u128>(len)])
}

/// Carves `len` limbs off `stack`. Their contents are unspecified.
#[inline]
#[track_caller]
pub fn temp_limbs_uninit(len: usize, stack: &mut PodStack) -> (&mut [Limb], &mut PodStack) {
    stack.make_raw::<Limb>(len)
}

#[inline]
#[track_caller]
pub fn temp_wide_zero(len: usize, stack: &mut PodStack) -> (&mut [Wide], &mut PodStack) {
    let (buf, stack) = stack.make_raw::<Wide>(len);
    buf.fill(0);
    (buf, stack)
}

#[inline]
#[track_caller]
pub fn temp_spill_zero(len: usize, stack: &mut PodStack) -> (&mut [u128], &mut PodStack) {
    let (buf, stack) = stack.make_raw::<u128>(len);
    buf.fill(0);
    (buf, stack)
}
