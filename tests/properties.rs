use bigmul::{multiply_with, parse, render, BigUint, Error, SimdLevel, Strategy};
use proptest::prelude::*;

fn strategies() -> Vec<Strategy> {
    let mut all = Strategy::ALL_PORTABLE.to_vec();
    all.push(Strategy::Batched(SimdLevel::detect()));
    all
}

fn reference_product(a: &str, b: &str) -> String {
    let a: rug::Integer = a.parse().unwrap();
    let b: rug::Integer = b.parse().unwrap();
    (a * b).to_string()
}

proptest! {
    #[test]
    fn roundtrip(s in "(0|[1-9][0-9]{0,400})") {
        prop_assert_eq!(render(&parse(&s).unwrap()).unwrap(), s);
    }

    #[test]
    fn leading_zeros_are_stripped(zeros in 0usize..40, s in "[1-9][0-9]{0,60}") {
        let padded = format!("{}{}", "0".repeat(zeros), s);
        let x = parse(&padded).unwrap();
        prop_assert_eq!(&x, &parse(&s).unwrap());
        prop_assert_eq!(render(&x).unwrap(), s);
    }

    #[test]
    fn non_digit_is_rejected(prefix in "[0-9]{0,30}", bad in "[^0-9]", suffix in "[0-9]{0,30}") {
        let text = format!("{prefix}{bad}{suffix}");
        let found = bad.chars().next().unwrap();
        prop_assert_eq!(parse(&text), Err(Error::InvalidDigit { position: prefix.len(), found }));
    }

    #[test]
    fn strategies_agree_with_reference(a in "(0|[1-9][0-9]{0,300})", b in "(0|[1-9][0-9]{0,300})") {
        let expected = reference_product(&a, &b);
        let x = parse(&a).unwrap();
        let y = parse(&b).unwrap();
        for strategy in strategies() {
            let xy = multiply_with(&x, &y, strategy).unwrap();
            let yx = multiply_with(&y, &x, strategy).unwrap();
            prop_assert_eq!(&xy, &yx);
            prop_assert_eq!(render(&xy).unwrap(), expected.clone());
        }
    }

    #[test]
    fn zero_and_one(s in "(0|[1-9][0-9]{0,200})") {
        let x = parse(&s).unwrap();
        for strategy in strategies() {
            prop_assert!(multiply_with(&parse("0").unwrap(), &x, strategy).unwrap().is_zero());
            prop_assert_eq!(multiply_with(&parse("1").unwrap(), &x, strategy).unwrap(), x.clone());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn thousand_digit_operands(a in "[1-9][0-9]{999}", b in "[1-9][0-9]{999}") {
        let expected = reference_product(&a, &b);
        let x = parse(&a).unwrap();
        let y = parse(&b).unwrap();

        let mut products = strategies().into_iter().map(|strategy| multiply_with(&x, &y, strategy).unwrap());
        let first = products.next().unwrap();
        for other in products {
            prop_assert_eq!(&first, &other);
        }

        let digits = render(&first).unwrap();
        prop_assert!(digits.len() == 1999 || digits.len() == 2000);
        prop_assert_eq!(digits, expected);
    }
}

#[test]
fn worst_case_all_nines() {
    let a = "9".repeat(2000);
    let b = "9".repeat(1500);
    let expected = reference_product(&a, &b);
    let x = parse(&a).unwrap();
    let y = parse(&b).unwrap();
    for strategy in strategies() {
        assert_eq!(render(&multiply_with(&x, &y, strategy).unwrap()).unwrap(), expected);
    }
}

#[test]
fn display_and_from_str() {
    let x: BigUint = "000340282366920938463463374607431768211456".parse().unwrap();
    assert_eq!(x.to_string(), "340282366920938463463374607431768211456");
    assert_eq!(BigUint::from(0u64).to_string(), "0");
}
