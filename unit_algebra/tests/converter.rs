/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::num::NonZeroU64;
use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use unit_algebra::{
    AddConverter, Converter, MathContext, MultiplyConverter,
    PowerOfTenConverter, RationalConverter, UnitError,
};

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

fn context(precision: u64, rounding: RoundingMode) -> MathContext {
    MathContext::new(NonZeroU64::new(precision).unwrap(), rounding)
}

#[test]
fn power_of_ten_concatenation() {
    let kilo = Converter::power_of_ten(3).unwrap();
    let milli = Converter::power_of_ten(-3).unwrap();
    let micro = Converter::power_of_ten(-6).unwrap();

    assert_eq!(kilo.concatenate(&milli), Converter::Identity);
    assert_eq!(milli.concatenate(&milli), micro);
    assert_eq!(kilo.inverse(), milli);
    assert_eq!(kilo.convert(1.5), 1500.0);
    assert_eq!(micro.convert(2.0), 2e-6);
}

#[test]
fn power_of_ten_rejects_zero_exponent() {
    assert!(matches!(
        PowerOfTenConverter::new(0),
        Err(UnitError::InvalidConverter(_))
    ));
    assert_eq!(Converter::pow10(0), Converter::Identity);
}

#[test]
fn power_of_ten_factor_outside_table() {
    let c = PowerOfTenConverter::new(30).unwrap();
    assert!((c.factor() / 1e30 - 1.0).abs() < 1e-12);
    assert_eq!(PowerOfTenConverter::new(-24).unwrap().factor(), 1e-24);
}

#[test]
fn power_of_ten_exact_shift() {
    let c = Converter::power_of_ten(-40).unwrap();
    let ctx = MathContext::default();
    assert_eq!(c.convert_exact(&dec("12.5"), &ctx), dec("1.25e-39"));
    assert_eq!(
        c.inverse().convert_exact(&dec("1.25e-39"), &ctx),
        dec("12.5")
    );
}

#[test]
fn rational_construction() {
    assert!(matches!(
        RationalConverter::new(3, 0),
        Err(UnitError::InvalidConverter(_))
    ));
    assert!(matches!(
        RationalConverter::new(3, -4),
        Err(UnitError::InvalidConverter(_))
    ));
    assert!(matches!(
        RationalConverter::new(7, 7),
        Err(UnitError::InvalidConverter(_))
    ));
    assert!(matches!(
        RationalConverter::new(0, 7),
        Err(UnitError::InvalidConverter(_))
    ));

    let c = RationalConverter::new(-2, 3).unwrap();
    assert_eq!(c.inverse(), RationalConverter::new(-3, 2).unwrap());
    assert_eq!(c.inverse().inverse(), c);
}

#[test]
fn rational_concatenation_reduces() {
    let a = Converter::rational(2, 3).unwrap();
    let b = Converter::rational(3, 4).unwrap();
    let ab = a.concatenate(&b);

    assert_eq!(ab, Converter::rational(1, 2).unwrap());
    assert_eq!(ab.convert(10.0), a.convert(b.convert(10.0)));
    assert_eq!(a.concatenate(&a.inverse()), Converter::Identity);
}

#[test]
fn rational_canonical_forms() {
    assert_eq!(Converter::ratio(1000, 1).unwrap(), Converter::pow10(3));
    assert_eq!(Converter::ratio(1, 1_000_000).unwrap(), Converter::pow10(-6));
    assert_eq!(Converter::ratio(5, 5).unwrap(), Converter::Identity);
    assert_eq!(
        Converter::ratio(6, -4).unwrap(),
        Converter::rational(-3, 2).unwrap()
    );
    assert!(matches!(
        Converter::ratio(0, 4),
        Err(UnitError::InvalidConverter(_))
    ));

    let third = Converter::rational(1, 3).unwrap();
    assert_eq!(
        third.concatenate(&Converter::rational(3, 1).unwrap()),
        Converter::Identity
    );
    assert_eq!(
        Converter::rational(1, 3)
            .unwrap()
            .concatenate(&Converter::rational(3, 10).unwrap()),
        Converter::pow10(-1)
    );
}

#[test]
fn rational_absorbs_power_of_ten() {
    let per_hour = Converter::rational(1, 3600).unwrap();
    let kilo = Converter::pow10(3);
    let expected = Converter::rational(5, 18).unwrap();

    assert_eq!(kilo.concatenate(&per_hour), expected);
    assert_eq!(per_hour.concatenate(&kilo), expected);
    assert_eq!(expected.convert(36.0), 10.0);
}

#[test]
fn fraction_is_canonical() {
    let n = |v| NonZeroU64::new(v).unwrap();
    assert_eq!(Converter::fraction(n(100), n(1)), Converter::pow10(2));
    assert_eq!(Converter::fraction(n(60), n(60)), Converter::Identity);
    assert_eq!(
        Converter::fraction(n(60), n(1)),
        Converter::rational(60, 1).unwrap()
    );
}

#[test]
fn rational_exact_conversion_rounds() {
    let ctx = MathContext::decimal128();
    let third = Converter::rational(1, 3).unwrap();
    let rounded = third.convert_exact(&dec("1"), &ctx);

    assert_eq!(rounded, dec("0.3333333333333333333333333333333333"));
    assert_eq!(
        Converter::rational(3, 1).unwrap().convert_exact(&dec("0.5"), &ctx),
        dec("1.5")
    );
}

#[test]
fn offsets() {
    let celsius = Converter::offset(dec("273.15")).unwrap();
    let ctx = MathContext::default();

    assert!((celsius.convert(0.0) - 273.15).abs() < 1e-9);
    assert_eq!(celsius.convert_exact(&dec("20"), &ctx), dec("293.15"));
    assert_eq!(celsius.concatenate(&celsius.inverse()), Converter::Identity);
    assert_eq!(
        celsius.concatenate(&celsius).convert_exact(&dec("0"), &ctx),
        dec("546.30")
    );
    assert!(!celsius.is_linear());
    assert_eq!(celsius.factor(), None);
    assert!(matches!(
        AddConverter::new(dec("0")),
        Err(UnitError::InvalidConverter(_))
    ));
}

#[test]
fn multiply_inverse_is_exact() {
    let pi = MultiplyConverter::new(std::f64::consts::PI).unwrap();
    assert_eq!(pi.inverse().inverse(), pi);

    let pi = Converter::multiply(std::f64::consts::PI).unwrap();
    assert_eq!(pi.concatenate(&pi.inverse()), Converter::Identity);
    assert_eq!(pi.inverse().concatenate(&pi), Converter::Identity);
    assert_eq!(pi.convert(1.0), std::f64::consts::PI);

    assert!(matches!(
        Converter::multiply(1.0),
        Err(UnitError::InvalidConverter(_))
    ));
    assert!(matches!(
        Converter::multiply(f64::NAN),
        Err(UnitError::InvalidConverter(_))
    ));
}

#[test]
fn chains() {
    let offset = Converter::offset(dec("10")).unwrap();
    let kilo = Converter::pow10(3);

    /* Scale first, then shift. */
    let chain = offset.concatenate(&kilo);
    assert_eq!(chain.steps(), vec![offset.clone(), kilo.clone()]);
    assert_eq!(chain.convert(2.0), 2010.0);
    assert!(!chain.is_linear());

    let inverse = chain.inverse();
    assert_eq!(inverse.convert(2010.0), 2.0);
    assert_eq!(chain.concatenate(&inverse), Converter::Identity);
    assert_eq!(inverse.concatenate(&chain), Converter::Identity);

    /* Adjacent scale steps merge inside the chain. */
    let longer = chain.concatenate(&Converter::pow10(-3));
    assert_eq!(longer.steps(), vec![offset.clone()]);
    assert_eq!(longer, offset);

    let ctx = MathContext::default();
    assert_eq!(chain.convert_exact(&dec("2"), &ctx), dec("2010"));
}

#[test]
fn linear_chain_factor() {
    let double = Converter::multiply(2.0).unwrap();
    let third = Converter::rational(1, 3).unwrap();
    let chain = double.concatenate(&third);

    assert_eq!(chain.steps().len(), 2);
    assert!(chain.is_linear());
    assert_eq!(chain.factor(), Some(2.0 * (1.0 / 3.0)));
}

#[test]
fn identity() {
    let id = Converter::Identity;
    let third = Converter::rational(1, 3).unwrap();

    assert!(id.is_identity());
    assert!(id.steps().is_empty());
    assert_eq!(id.inverse(), id);
    assert_eq!(id.concatenate(&third), third);
    assert_eq!(third.concatenate(&id), third);
    assert_eq!(id.convert(4.2), 4.2);
}

#[test]
fn display() {
    assert_eq!(Converter::pow10(-3).to_string(), "PowerOfTen(-3)");
    assert_eq!(
        Converter::rational(1, 3600).unwrap().to_string(),
        "Rational(1,3600)"
    );
    assert_eq!(Converter::multiply(2.5).unwrap().to_string(), "Multiply(2.5)");
    assert_eq!(
        Converter::multiply(2.5).unwrap().inverse().to_string(),
        "Divide(2.5)"
    );
}

#[test]
fn serde_round_trip() {
    let c = Converter::pow10(-3)
        .concatenate(&Converter::rational(1, 7).unwrap())
        .concatenate(&Converter::offset(dec("1.5")).unwrap());
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(serde_json::from_str::<Converter>(&json).unwrap(), c);

    assert!(serde_json::from_str::<PowerOfTenConverter>("0").is_err());
}

#[test]
fn math_context_wraps_decimal_context() {
    let ctx = MathContext::default();
    assert_eq!(ctx.precision().get(), 34);
    assert_eq!(ctx.rounding(), RoundingMode::HalfEven);
    assert_eq!(ctx.context().precision(), ctx.precision());

    let short = context(3, RoundingMode::Down);
    assert_eq!(short.round(dec("1.23999")), dec("1.23"));
    assert_eq!(short.context().rounding_mode(), RoundingMode::Down);
}

#[test]
fn exact_division_rounds_once() {
    let ctx = context(200, RoundingMode::HalfEven);
    let third = Converter::rational(1, 3).unwrap();
    let expected = format!("0.{}", "3".repeat(200));
    assert_eq!(third.convert_exact(&dec("1"), &ctx), dec(&expected));

    /* Just below a tie at the 34th digit: a first rounding to more
     * digits would land on the tie and round up. */
    let scale = BigInt::from(10).pow(70);
    let numerator: BigInt = (BigInt::from(10).pow(33) + 1) * 6 * &scale
        + BigInt::from(3) * &scale
        - 2;
    let denominator = BigInt::from(6) * &scale;
    let quotient = MathContext::decimal128().divide(
        &BigDecimal::new(numerator.clone(), 0),
        &BigDecimal::new(denominator.clone(), 0),
    );
    assert_eq!(quotient, dec("1000000000000000000000000000000001"));
    assert_eq!(
        Converter::ratio(numerator, denominator)
            .unwrap()
            .convert_exact(&dec("1"), &MathContext::decimal128()),
        dec("1000000000000000000000000000000001")
    );
}

#[test]
fn exact_division_rounding_modes() {
    let divide = |a: &str, b: &str, rounding| {
        context(1, rounding).divide(&dec(a), &dec(b))
    };

    assert_eq!(divide("5", "2", RoundingMode::HalfEven), dec("2"));
    assert_eq!(divide("7", "2", RoundingMode::HalfEven), dec("4"));
    assert_eq!(divide("5", "2", RoundingMode::HalfUp), dec("3"));
    assert_eq!(divide("5", "2", RoundingMode::HalfDown), dec("2"));
    assert_eq!(divide("-5", "2", RoundingMode::HalfUp), dec("-3"));
    assert_eq!(divide("-5", "2", RoundingMode::Floor), dec("-3"));
    assert_eq!(divide("-5", "2", RoundingMode::Ceiling), dec("-2"));
    assert_eq!(divide("2", "3", RoundingMode::Down), dec("0.6"));
    assert_eq!(divide("999", "1", RoundingMode::HalfUp), dec("1000"));
    assert_eq!(divide("0", "7", RoundingMode::HalfUp), dec("0"));

    let ctx = MathContext::decimal128();
    assert_eq!(ctx.divide(&dec("1.5"), &dec("0.5")), dec("3"));
    assert_eq!(
        ctx.divide(&dec("1"), &dec("0.007")),
        dec("142.8571428571428571428571428571429")
    );
}

/// Converters with denominators other than one, and powers of ten.
fn scale_converters() -> Vec<Converter> {
    vec![
        Converter::rational(2, 3).unwrap(),
        Converter::rational(-7, 9).unwrap(),
        Converter::rational(1, 3600).unwrap(),
        Converter::ratio(5, 18).unwrap(),
        Converter::pow10(-5),
        Converter::pow10(4),
    ]
}

#[test]
fn exact_concatenation_matches_sequential_application() {
    let ctx = MathContext::decimal128();
    let wide = context(200, RoundingMode::HalfEven);
    let values = ["1", "2.5", "-0.125", "123456789.987654321", "3"];

    for a in scale_converters() {
        for b in scale_converters() {
            let ab = a.concatenate(&b);
            for value in values {
                let value = dec(value);
                let sequential = a.convert_exact(
                    &b.convert_exact(&value, &wide),
                    &wide,
                );
                assert_eq!(
                    ab.convert_exact(&value, &ctx),
                    ctx.round(sequential),
                    "{} ∘ {} applied to {}",
                    a,
                    b,
                    value
                );
            }
        }
    }
}

#[test]
fn concatenation_is_associative() {
    let mut converters = scale_converters();
    converters.push(Converter::offset(dec("1.5")).unwrap());
    converters.push(Converter::multiply(2.0).unwrap());

    for a in &converters {
        for b in &converters {
            for c in &converters {
                assert_eq!(
                    a.concatenate(b).concatenate(c),
                    a.concatenate(&b.concatenate(c)),
                    "({} ∘ {}) ∘ {}",
                    a,
                    b,
                    c
                );
            }
        }
    }
}

#[test]
fn power_of_ten_overflow_stays_a_chain() {
    let max = Converter::pow10(i32::MAX);
    let beyond = max.concatenate(&Converter::pow10(1));

    assert_eq!(beyond.steps(), vec![max.clone(), Converter::pow10(1)]);
    assert_eq!(beyond.concatenate(&beyond.inverse()), Converter::Identity);
    assert_eq!(beyond.inverse().concatenate(&beyond), Converter::Identity);
    assert_eq!(
        beyond.convert_exact(&dec("1"), &MathContext::default()),
        BigDecimal::new(BigInt::from(1), -(i64::from(i32::MAX) + 1))
    );

    assert!(matches!(
        PowerOfTenConverter::new(i32::MIN),
        Err(UnitError::InvalidConverter(_))
    ));
    assert!(serde_json::from_str::<PowerOfTenConverter>("-2147483648")
        .is_err());
    assert_eq!(Converter::pow10(i32::MIN).steps().len(), 2);
    assert_eq!(Converter::pow10(i32::MIN).inverse(), beyond);
    assert_eq!(
        Converter::pow10(i32::MIN).concatenate(&Converter::pow10(1)),
        Converter::pow10(i32::MIN + 1)
    );
}

#[test]
fn rational_absorbs_bounded_powers_of_ten() {
    let third = Converter::rational(1, 3).unwrap();
    let three = Converter::rational(3, 1).unwrap();

    assert_eq!(
        third.concatenate(&Converter::pow10(40)).concatenate(&three),
        Converter::pow10(40)
    );
    assert!(matches!(
        third.concatenate(&Converter::pow10(4096)),
        Converter::Rational(_)
    ));

    let far = third.concatenate(&Converter::pow10(1_000_000));
    assert_eq!(far.steps(), vec![third.clone(), Converter::pow10(1_000_000)]);
    assert_eq!(far.concatenate(&far.inverse()), Converter::Identity);
}

#[test]
fn offsets_compare_by_decimal_value() {
    let sum = Converter::offset(dec("0.1"))
        .unwrap()
        .concatenate(&Converter::offset(dec("0.2")).unwrap());
    assert_eq!(sum, Converter::offset(dec("0.3")).unwrap());
    assert_eq!(sum.convert(0.0), 0.3);

    let exact = AddConverter::new(dec("1.5")).unwrap();
    assert_eq!(AddConverter::from_f64(1.5).unwrap(), exact);
    assert_eq!(exact.exact_offset(), &dec("1.5"));
    assert_eq!(exact.offset(), 1.5);
    assert!(matches!(
        AddConverter::from_f64(0.0),
        Err(UnitError::InvalidConverter(_))
    ));
    assert!(matches!(
        AddConverter::from_f64(f64::INFINITY),
        Err(UnitError::InvalidConverter(_))
    ));
    assert!(matches!(
        AddConverter::new(dec("1e400")),
        Err(UnitError::InvalidConverter(_))
    ));
}

#[test]
fn multiply_compares_by_decimal_value() {
    let a = Converter::multiply(0.1).unwrap();
    let b = Converter::multiply(3.0).unwrap();
    let ab = a.concatenate(&b);

    assert_eq!(ab, b.concatenate(&a));
    assert_eq!(ab.inverse().concatenate(&ab), Converter::Identity);
    assert!((ab.factor().unwrap() - 0.3).abs() < 1e-15);

    let json = serde_json::to_string(&ab).unwrap();
    assert_eq!(serde_json::from_str::<Converter>(&json).unwrap(), ab);
}

#[test]
fn deserialization_validates() {
    let rejected = [
        r#"{"Rational":{"numerator":[1,[1]],"denominator":[0,[]]}}"#,
        r#"{"Rational":{"numerator":[1,[1]],"denominator":[-1,[2]]}}"#,
        r#"{"Rational":{"numerator":[1,[2]],"denominator":[1,[2]]}}"#,
        r#"{"PowerOfTen":0}"#,
        r#"{"Add":"0"}"#,
        r#"{"Multiply":{"exact":"1","divide":false}}"#,
        r#"{"Multiply":{"exact":"0","divide":true}}"#,
        r#"{"Chain":[]}"#,
        r#"{"Chain":[{"PowerOfTen":3}]}"#,
        r#"{"Chain":[{"PowerOfTen":3},{"PowerOfTen":-3}]}"#,
        r#"{"Chain":[{"PowerOfTen":3},{"PowerOfTen":2}]}"#,
        r#"{"Chain":["Identity",{"Add":"1"}]}"#,
    ];
    for json in rejected {
        assert!(serde_json::from_str::<Converter>(json).is_err(), "{}", json);
    }

    let accepted = Converter::offset(dec("1"))
        .unwrap()
        .concatenate(&Converter::multiply(2.5).unwrap().inverse());
    let json = serde_json::to_string(&accepted).unwrap();
    assert_eq!(serde_json::from_str::<Converter>(&json).unwrap(), accepted);
    assert_eq!(
        serde_json::from_str::<Converter>(
            r#"{"Rational":{"numerator":[1,[2]],"denominator":[1,[4]]}}"#
        )
        .unwrap(),
        Converter::Rational(RationalConverter::new(2, 4).unwrap())
    );
}
