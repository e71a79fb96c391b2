use super::*;
use pretty_assertions::assert_eq;

#[test]
fn table_key_restricted() {
    assert!(ValueType::table(ValueType::int(), ValueType::Text).is_some());
    assert!(ValueType::table(ValueType::Text, ValueType::Boolean).is_some());
    assert!(ValueType::table(ValueType::Boolean, ValueType::Text).is_none());
    assert!(ValueType::table(ValueType::list(ValueType::Text), ValueType::Text).is_none());
}

#[test]
fn display_matches_type_syntax() {
    assert_eq!(ValueType::int().to_string(), "-oo..oo");
    assert_eq!(
        ValueType::int_range(Some(BigInt::from(0)), None).to_string(),
        "0..oo"
    );
    assert_eq!(
        ValueType::array(ValueType::Text, 3).to_string(),
        "(Array Text 3)"
    );
    assert_eq!(
        ValueType::table(ValueType::Text, ValueType::list(ValueType::Boolean))
            .map(|t| t.to_string()),
        Some("(Table Text (List Bool))".to_string())
    );
}

#[test]
fn fits_within_bounds() {
    let min = BigInt::from(-10);
    let max = BigInt::from(10);
    assert!(ValueType::int_exact(&BigInt::from(3)).fits_within(&min, &max));
    assert!(!ValueType::int_exact(&BigInt::from(11)).fits_within(&min, &max));
    assert!(!ValueType::int().fits_within(&min, &max));
    assert!(!ValueType::Text.fits_within(&min, &max));
}
