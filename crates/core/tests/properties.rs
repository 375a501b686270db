use chrono::NaiveDate;
use nic_core::calendar::days_in_year;
use nic_core::{decode, encode, DecodeErrorKind, Decoder, FormatVariant, Sex};
use proptest::prelude::*;

fn sex_from(female: bool) -> Sex {
    if female {
        Sex::Female
    } else {
        Sex::Male
    }
}

fn date_from(year: i32, ordinal_seed: u32) -> NaiveDate {
    let ordinal = ordinal_seed % days_in_year(year) + 1;
    NaiveDate::from_yo_opt(year, ordinal).expect("ordinal within year")
}

#[test]
fn documented_examples() {
    let cases = [
        ("199635601234", 1996, 12, 21, Sex::Male),
        ("199685601234", 1996, 12, 21, Sex::Female),
        ("963562345V", 1996, 12, 21, Sex::Male),
    ];

    for (nic, year, month, day, sex) in cases {
        let identity = decode(nic).unwrap_or_else(|e| panic!("{nic} should decode: {e}"));
        assert_eq!(
            identity.birth_date,
            NaiveDate::from_ymd_opt(year, month, day).expect("valid date"),
            "{nic}"
        );
        assert_eq!(identity.sex, sex, "{nic}");
    }

    assert_eq!(
        decode("abc").expect_err("abc").kind(),
        DecodeErrorKind::Format
    );
}

proptest! {
    #[test]
    fn modern_round_trip(
        year in 1i32..=9999,
        ordinal_seed in 0u32..366,
        female in any::<bool>(),
        serial in 0u32..=99_999,
    ) {
        let birth_date = date_from(year, ordinal_seed);
        let sex = sex_from(female);

        let nic = encode(birth_date, sex, FormatVariant::Modern, serial).expect("encode");
        prop_assert_eq!(nic.len(), 12);

        let identity = decode(&nic).expect("decode");
        prop_assert_eq!(identity.birth_date, birth_date);
        prop_assert_eq!(identity.sex, sex);
        prop_assert_eq!(identity.format, FormatVariant::Modern);
    }

    #[test]
    fn legacy_and_modern_decode_identically(
        year in 1900i32..=1999,
        ordinal_seed in 0u32..366,
        female in any::<bool>(),
        serial in 0u32..=9_999,
    ) {
        let birth_date = date_from(year, ordinal_seed);
        let sex = sex_from(female);
        let decoder = Decoder::default();

        let legacy = encode(birth_date, sex, FormatVariant::Legacy, serial).expect("legacy");
        let modern = decoder.to_modern(&legacy).expect("convert");

        let from_legacy = decode(&legacy).expect("decode legacy");
        let from_modern = decode(&modern).expect("decode modern");
        prop_assert_eq!(from_legacy.birth_date, birth_date);
        prop_assert_eq!(from_legacy.birth_date, from_modern.birth_date);
        prop_assert_eq!(from_legacy.sex, from_modern.sex);
    }

    #[test]
    fn sex_partition_follows_the_500_offset(
        year in 0i32..=9999,
        raw_day in 0u32..=999,
        serial in 0u32..=99_999,
    ) {
        let nic = format!("{year:04}{raw_day:03}{serial:05}");
        let expected = if raw_day > 500 { Sex::Female } else { Sex::Male };

        match decode(&nic) {
            Ok(identity) => {
                prop_assert_eq!(identity.sex, expected);
            }
            Err(err) => {
                prop_assert_eq!(err.kind(), DecodeErrorKind::Range);
                prop_assert_eq!(err.sex(), Some(expected));
            }
        }
    }

    #[test]
    fn wrong_lengths_never_decode(input in "[0-9A-Za-z]{0,30}") {
        prop_assume!(input.len() != 10 && input.len() != 12);
        let err = decode(&input).expect_err("wrong length");
        prop_assert_eq!(err.kind(), DecodeErrorKind::Format);
    }

    #[test]
    fn ten_characters_without_suffix_are_rejected(input in "[0-9]{9}[0-9A-UWYZ]") {
        let err = decode(&input).expect_err("no V/X suffix");
        prop_assert_eq!(err.kind(), DecodeErrorKind::Format);
    }

    #[test]
    fn twelve_characters_with_a_letter_are_rejected(
        prefix in "[0-9]{0,11}",
        letter in "[A-Za-z]",
    ) {
        let mut input = prefix;
        input.push_str(&letter);
        while input.chars().count() < 12 {
            input.push('0');
        }
        let err = decode(&input).expect_err("non-digit");
        prop_assert_eq!(err.kind(), DecodeErrorKind::Format);
    }

    #[test]
    fn decode_is_total(input in any::<String>()) {
        // Any input yields either an identity or an error, never a panic.
        if let Ok(identity) = decode(&input) {
            prop_assert!(identity.birth_date.to_string().len() >= 10);
        }
    }
}
