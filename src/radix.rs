use super::*;
use core::str::FromStr;
use equator::debug_assert;

#[inline]
fn group_value(digits: &[u8]) -> Limb {
    digits.iter().fold(consts::LIMB_ZERO, |acc, &d| acc * 10 + (d - b'0') as Limb)
}

pub fn from_decimal(text: &str) -> Result<BigUint> {
    let bytes = text.as_bytes();
    if let Some(position) = bytes.iter().position(|b| !b.is_ascii_digit()) {
        // every byte before `position` is ascii, so it is a char boundary
        let found = text[position..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
        return Err(Error::InvalidDigit { position, found });
    }

    let digits = match bytes.iter().position(|&b| b != b'0') {
        Some(start) => &bytes[start..],
        None => return Ok(BigUint::zero()),
    };

    let mut x = BigUint::with_capacity(digits.len().div_ceil(consts::LIMB_DIGITS) + 2)?;

    let (head, tail) = digits.split_at((digits.len() - 1) % consts::LIMB_DIGITS + 1);
    x.limbs.push(group_value(head));
    for group in tail.chunks_exact(consts::LIMB_DIGITS) {
        x.scale_by_radix()?;
        x.add_small(group_value(group))?;
    }
    x.trim();

    tracing::trace!(digits = digits.len(), limbs = x.len(), "parsed decimal");
    if cfg!(debug_assertions) {
        assert_normalized(&x);
    }
    Ok(x)
}

pub fn to_decimal_scratch(len: usize) -> StackReq {
    StackReq::all_of(&[temp_limbs_scratch(len), temp_limbs_scratch(len)])
}

pub fn to_decimal(f: &mut dyn fmt::Write, x: &BigUint, stack: &mut PodStack) -> fmt::Result {
    if x.is_zero() {
        return f.write_str("0");
    }

    let (quo, stack) = temp_limbs_uninit(x.len(), stack);
    let (groups, _) = temp_limbs_uninit(x.len(), stack);
    quo.copy_from_slice(x.limbs());

    let mut len = quo.len();
    let mut ngroups = 0;
    while len != 0 {
        let mut rem: Wide = 0;
        for limb in quo[..len].iter_mut().rev() {
            let cur = *limb as Wide + rem * consts::RADIX_WIDE;
            *limb = (cur / consts::RADIX_WIDE) as Limb;
            rem = cur % consts::RADIX_WIDE;
        }
        while len != 0 && quo[len - 1] == consts::LIMB_ZERO {
            len -= 1;
        }
        groups[ngroups] = rem as Limb;
        ngroups += 1;
    }
    debug_assert!(ngroups == x.len());

    let Some((&leading, rest)) = groups[..ngroups].split_last() else {
        return Ok(());
    };
    write!(f, "{leading}")?;
    let width = consts::LIMB_DIGITS;
    for group in rest.iter().rev() {
        write!(f, "{group:0>width$}")?;
    }
    Ok(())
}

pub fn render(x: &BigUint) -> Result<String> {
    let mut out = String::new();
    out.try_reserve_exact(Ord::max(x.len(), 1) * consts::LIMB_DIGITS)
        .map_err(|_| Error::OutOfMemory)?;
    let mut mem = PodBuffer::try_new(to_decimal_scratch(x.len())).map_err(|_| Error::OutOfMemory)?;
    // writing into a `String` only fails if it cannot grow
    to_decimal(&mut out, x, PodStack::new(&mut mem)).map_err(|_| Error::OutOfMemory)?;
    tracing::trace!(limbs = x.len(), digits = out.len(), "rendered decimal");
    Ok(out)
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        to_decimal(f, self, PodStack::new(&mut PodBuffer::new(to_decimal_scratch(self.len()))))
    }
}

impl FromStr for BigUint {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self> {
        from_decimal(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;

    #[test]
    fn test_parse_zero() {
        for text in ["", "0", "0000000000000000000000"] {
            let x = from_decimal(text).unwrap();
            assert!(x.is_zero());
            assert!(render(&x).unwrap() == "0");
        }
    }

    #[test]
    fn test_parse_groups() {
        let x = from_decimal("1234567890123456789").unwrap();
        assert!(x.limbs() == &[123456789, 234567890, 1_u32]);

        let x = from_decimal("999999999").unwrap();
        assert!(x.limbs() == &[999999999_u32]);

        let x = from_decimal("1000000000").unwrap();
        assert!(x.limbs() == &[0, 1_u32]);
    }

    #[test]
    fn test_parse_leading_zeros() {
        let a = from_decimal("000123").unwrap();
        let b = from_decimal("123").unwrap();
        assert!(a == b);
        assert!(render(&a).unwrap() == "123");

        let a = from_decimal("0000000000001000000000").unwrap();
        assert!(a.limbs() == &[0, 1_u32]);
    }

    #[test]
    fn test_parse_invalid_digit() {
        assert!(from_decimal("12a3") == Err(Error::InvalidDigit { position: 2, found: 'a' }));
        assert!(from_decimal("-1") == Err(Error::InvalidDigit { position: 0, found: '-' }));
        assert!(from_decimal("1 000") == Err(Error::InvalidDigit { position: 1, found: ' ' }));
        assert!(from_decimal("12é") == Err(Error::InvalidDigit { position: 2, found: 'é' }));
        assert!("7x".parse::<BigUint>() == Err(Error::InvalidDigit { position: 1, found: 'x' }));
    }

    #[test]
    fn test_render_interior_groups_are_padded() {
        let cases = [
            "1",
            "999999999",
            "1000000000",
            "1000000001",
            "123000000000000000456",
            "100000000000000000000000000",
            "42000000007000000000000000003",
        ];
        for text in cases {
            let x = from_decimal(text).unwrap();
            assert!(render(&x).unwrap() == text);
            assert!(x.to_string() == text);
        }
    }

    #[test]
    fn test_to_decimal_with_scratch() {
        let x = from_decimal("98765432109876543210987654321").unwrap();
        let mut out = String::new();
        to_decimal(&mut out, &x, PodStack::new(bytemuck::cast_slice_mut(&mut [0u64; 16]))).unwrap();
        assert!(out == "98765432109876543210987654321");
    }

    #[test]
    fn test_render_does_not_touch_input() {
        let x = from_decimal("5000000000000000000000000000000000007").unwrap();
        let before = x.clone();
        _ = render(&x).unwrap();
        assert!(x == before);
    }
}
