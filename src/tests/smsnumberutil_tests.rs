use strum::IntoEnumIterator;

use crate::{
    Classification, CcAreaLocalExceptions, DigitString, NetworkType, NumberPlanForm,
    SmsNumberUtil, StaticLookupSource,
    errors::{ExtractNumberError, FormatError},
};

use super::mcc::{Mcc, test_lookup_source};

static ONCE: std::sync::Once = std::sync::Once::new();

fn get_sms_util() -> SmsNumberUtil<StaticLookupSource> {
    get_sms_util_for(test_lookup_source())
}

fn get_sms_util_for(source: StaticLookupSource) -> SmsNumberUtil<StaticLookupSource> {
    ONCE.call_once(|| {
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
    SmsNumberUtil::new(source)
}

fn format(
    util: &SmsNumberUtil<StaticLookupSource>,
    number: &str,
    mcc: &str,
    network_type: NetworkType,
) -> String {
    util.format_number(number, mcc, network_type).unwrap()
}

fn classify(
    util: &SmsNumberUtil<StaticLookupSource>,
    number: &str,
    mcc: &str,
    network_type: NetworkType,
) -> NumberPlanForm {
    util.classify(&DigitString::parse(number).unwrap(), mcc, network_type).form
}

#[test]
fn nanp_local_numbers_are_never_rewritten() {
    let sms_util = get_sms_util();
    for first in '2'..='9' {
        for rest in ["000000", "555123", "999999", "010101"] {
            let number = format!("{first}{rest}");
            for network_type in NetworkType::iter() {
                for mcc in [Mcc::us(), Mcc::cn(), Mcc::unknown()] {
                    assert_eq!(
                        classify(&sms_util, &number, mcc, network_type),
                        NumberPlanForm::NanpLocal
                    );
                    assert_eq!(format(&sms_util, &number, mcc, network_type), number);
                }
            }
        }
    }
}

#[test]
fn nanp_numbers_without_prefix() {
    let sms_util = get_sms_util();
    for network_type in NetworkType::iter() {
        assert_eq!(
            classify(&sms_util, "8005551234", Mcc::us(), network_type),
            NumberPlanForm::NanpAreaLocal
        );
        assert_eq!(format(&sms_util, "8005551234", Mcc::us(), network_type), "8005551234");
        assert_eq!(
            classify(&sms_util, "18005551234", Mcc::us(), network_type),
            NumberPlanForm::NanpNddAreaLocal
        );
        assert_eq!(format(&sms_util, "18005551234", Mcc::us(), network_type), "18005551234");
    }
}

#[test]
fn nanp_with_plus() {
    let sms_util = get_sms_util();
    assert_eq!(
        classify(&sms_util, "+18005551234", Mcc::us(), NetworkType::CdmaHome),
        NumberPlanForm::NanpNbpcdCcAreaLocal
    );
    assert_eq!(format(&sms_util, "+18005551234", Mcc::us(), NetworkType::CdmaHome), "18005551234");
    assert_eq!(
        format(&sms_util, "+18005551234", Mcc::cn(), NetworkType::CdmaRoaming),
        "18005551234"
    );
    assert_eq!(format(&sms_util, "+18005551234", Mcc::us(), NetworkType::GsmUmts), "+18005551234");
}

#[test]
fn nanp_with_local_idd() {
    let sms_util = get_sms_util();
    assert_eq!(
        sms_util.classify(
            &DigitString::parse("0018005551234").unwrap(),
            Mcc::cn(),
            NetworkType::GsmUmts,
        ),
        Classification {
            form: NumberPlanForm::NanpLocalIddCcAreaLocal,
            idd: Some("00".to_owned()),
            country_code: None,
        }
    );
    assert_eq!(
        format(&sms_util, "0018005551234", Mcc::cn(), NetworkType::CdmaHome),
        "0018005551234"
    );
    assert_eq!(format(&sms_util, "0018005551234", Mcc::cn(), NetworkType::GsmUmts), "+18005551234");
    assert_eq!(
        format(&sms_util, "0018005551234", Mcc::cn(), NetworkType::CdmaRoaming),
        "18005551234"
    );

    assert_eq!(
        format(&sms_util, "001118005551234", Mcc::au(), NetworkType::GsmUmts),
        "+18005551234"
    );
    assert_eq!(
        format(&sms_util, "001118005551234", Mcc::au(), NetworkType::CdmaRoaming),
        "18005551234"
    );
    assert_eq!(
        format(&sms_util, "81018005551234", Mcc::ru(), NetworkType::GsmUmts),
        "+18005551234"
    );
}

#[test]
fn nanp_with_plus_and_home_idd() {
    let sms_util = get_sms_util();
    let number = "+01118005551234";
    assert_eq!(
        classify(&sms_util, number, Mcc::cn(), NetworkType::GsmUmts),
        NumberPlanForm::NanpNbpcdHomeIddCcAreaLocal
    );
    assert_eq!(format(&sms_util, number, Mcc::cn(), NetworkType::GsmUmts), "01118005551234");

    // CDMA networks resolve the country code instead.
    for network_type in [NetworkType::CdmaHome, NetworkType::CdmaRoaming] {
        assert_eq!(
            classify(&sms_util, number, Mcc::cn(), network_type),
            NumberPlanForm::NbpcdHomeIddCcAreaLocal
        );
        assert_eq!(format(&sms_util, number, Mcc::cn(), network_type), number);
    }

    // Without country code 1 in the tables only the plus sign is dropped.
    let no_nanp = get_sms_util_for(StaticLookupSource::new().with_country_codes([86, 44]));
    assert_eq!(classify(&no_nanp, number, Mcc::cn(), NetworkType::CdmaHome), NumberPlanForm::None);
    assert_eq!(format(&no_nanp, number, Mcc::cn(), NetworkType::CdmaHome), "01118005551234");
    assert_eq!(format(&no_nanp, number, Mcc::cn(), NetworkType::GsmUmts), "01118005551234");
}

#[test]
fn international_with_plus() {
    let sms_util = get_sms_util();
    for network_type in NetworkType::iter() {
        assert_eq!(
            classify(&sms_util, "+8625086281234", Mcc::us(), network_type),
            NumberPlanForm::NbpcdCcAreaLocal
        );
        assert_eq!(
            format(&sms_util, "+8625086281234", Mcc::us(), network_type),
            "0118625086281234"
        );
        assert_eq!(format(&sms_util, "+442087654321", Mcc::cn(), network_type), "011442087654321");
    }
}

#[test]
fn international_with_plus_and_home_idd() {
    let sms_util = get_sms_util();
    let number = "+0118625086281234";
    assert_eq!(
        classify(&sms_util, number, Mcc::cn(), NetworkType::CdmaHome),
        NumberPlanForm::NbpcdHomeIddCcAreaLocal
    );
    assert_eq!(format(&sms_util, number, Mcc::cn(), NetworkType::GsmUmts), "0118625086281234");
    assert_eq!(format(&sms_util, number, Mcc::cn(), NetworkType::CdmaHome), number);
    assert_eq!(format(&sms_util, number, Mcc::cn(), NetworkType::CdmaRoaming), number);
}

#[test]
fn international_with_home_idd() {
    let sms_util = get_sms_util();
    for network_type in NetworkType::iter() {
        for mcc in [Mcc::us(), Mcc::cn()] {
            assert_eq!(
                classify(&sms_util, "0118625086281234", mcc, network_type),
                NumberPlanForm::HomeIddCcAreaLocal
            );
            assert_eq!(
                format(&sms_util, "0118625086281234", mcc, network_type),
                "0118625086281234"
            );
        }
    }
}

#[test]
fn international_with_local_idd() {
    let sms_util = get_sms_util();
    let classification = sms_util.classify(
        &DigitString::parse("008525086281234").unwrap(),
        Mcc::cn(),
        NetworkType::CdmaRoaming,
    );
    assert_eq!(classification.form, NumberPlanForm::LocalIddCcAreaLocal);
    assert_eq!(classification.idd.as_deref(), Some("00"));
    assert_eq!(classification.country_code, Some(852));

    assert_eq!(
        format(&sms_util, "008625086281234", Mcc::cn(), NetworkType::GsmUmts),
        "0118625086281234"
    );
    assert_eq!(
        format(&sms_util, "008625086281234", Mcc::cn(), NetworkType::CdmaRoaming),
        "0118625086281234"
    );
    assert_eq!(
        format(&sms_util, "008625086281234", Mcc::cn(), NetworkType::CdmaHome),
        "008625086281234"
    );

    assert_eq!(
        format(&sms_util, "00118625086281234", Mcc::au(), NetworkType::GsmUmts),
        "0118625086281234"
    );
    assert_eq!(
        format(&sms_util, "007008625086281234", Mcc::kr(), NetworkType::GsmUmts),
        "0118625086281234"
    );
    assert_eq!(
        format(&sms_util, "0108625086281234", Mcc::jp(), NetworkType::CdmaRoaming),
        "0118625086281234"
    );
}

#[test]
fn international_without_prefix() {
    let sms_util = get_sms_util();
    for network_type in NetworkType::iter() {
        assert_eq!(
            classify(&sms_util, "861234567890", Mcc::cn(), network_type),
            NumberPlanForm::CcAreaLocal
        );
        assert_eq!(format(&sms_util, "861234567890", Mcc::cn(), network_type), "011861234567890");
        assert_eq!(format(&sms_util, "8625086281234", Mcc::us(), network_type), "0118625086281234");

        // Twelve digit numbers of these countries are dialed as they are.
        for number in ["712345678901", "201234567890", "651234567890", "901234567890"] {
            assert_eq!(
                classify(&sms_util, number, Mcc::cn(), network_type),
                NumberPlanForm::CcAreaLocal
            );
            assert_eq!(format(&sms_util, number, Mcc::cn(), network_type), number);
        }
        assert_eq!(format(&sms_util, "2012345678901", Mcc::cn(), network_type), "0112012345678901");

        // NANP country code
        assert_eq!(format(&sms_util, "123456789012", Mcc::cn(), network_type), "123456789012");
    }
}

#[test]
fn unclassified_numbers() {
    let sms_util = get_sms_util();
    assert_eq!(
        classify(&sms_util, "+99912345678", Mcc::us(), NetworkType::CdmaHome),
        NumberPlanForm::None
    );
    assert_eq!(
        format(&sms_util, "+99912345678", Mcc::us(), NetworkType::CdmaHome),
        "01199912345678"
    );
    assert_eq!(
        format(&sms_util, "+99912345678", Mcc::us(), NetworkType::CdmaRoaming),
        "01199912345678"
    );
    assert_eq!(format(&sms_util, "+99912345678", Mcc::us(), NetworkType::GsmUmts), "+99912345678");
    assert_eq!(
        format(&sms_util, "+0119991234567", Mcc::us(), NetworkType::CdmaHome),
        "0119991234567"
    );

    // Unknown MCC, so "00" is not an IDD here.
    assert_eq!(
        format(&sms_util, "0018005551234", Mcc::unknown(), NetworkType::GsmUmts),
        "0018005551234"
    );
    assert_eq!(format(&sms_util, "12345", Mcc::us(), NetworkType::CdmaHome), "12345");
}

#[test]
fn empty_lookup_tables() {
    let sms_util = get_sms_util_for(StaticLookupSource::new());
    for network_type in NetworkType::iter() {
        for number in ["+8625086281234", "0118625086281234", "008625086281234", "8625086281234"] {
            assert_eq!(classify(&sms_util, number, Mcc::cn(), network_type), NumberPlanForm::None);
        }
        assert_eq!(
            format(&sms_util, "008625086281234", Mcc::cn(), network_type),
            "008625086281234"
        );
        assert_eq!(format(&sms_util, "8625086281234", Mcc::cn(), network_type), "8625086281234");
        assert_eq!(format(&sms_util, "5551234", Mcc::cn(), network_type), "5551234");
    }
    assert_eq!(
        format(&sms_util, "+8625086281234", Mcc::cn(), NetworkType::GsmUmts),
        "+8625086281234"
    );
    assert_eq!(
        format(&sms_util, "+8625086281234", Mcc::cn(), NetworkType::CdmaHome),
        "0118625086281234"
    );
}

#[test]
fn formatting_twice_is_stable() {
    let sms_util = get_sms_util();
    let numbers = [
        "5551234",
        "8005551234",
        "18005551234",
        "+18005551234",
        "0018005551234",
        "+01118005551234",
        "+0118625086281234",
        "+8625086281234",
        "0118625086281234",
        "008625086281234",
        "8625086281234",
        "201234567890",
        "+99912345678",
        "+0119991234567",
    ];
    for network_type in NetworkType::iter() {
        for number in numbers {
            let once = format(&sms_util, number, Mcc::cn(), network_type);
            let twice = format(&sms_util, &once, Mcc::cn(), network_type);
            assert_eq!(once, twice, "{number} on {network_type:?}");
        }
    }
}

#[test]
fn decorated_input() {
    let sms_util = get_sms_util();
    assert_eq!(
        format(&sms_util, "+1 (800) 555-1234", Mcc::us(), NetworkType::CdmaHome),
        "18005551234"
    );
    assert_eq!(format(&sms_util, "800.555.1234", Mcc::us(), NetworkType::GsmUmts), "8005551234");
    assert_eq!(
        format(&sms_util, "+86 25 0862 81234;ext", Mcc::us(), NetworkType::GsmUmts),
        "0118625086281234"
    );
    assert_eq!(format(&sms_util, "８００５５５１２３４", Mcc::us(), NetworkType::GsmUmts), "8005551234");
}

#[test]
fn invalid_input() {
    let sms_util = get_sms_util();
    assert_eq!(
        sms_util.format_number("", Mcc::us(), NetworkType::GsmUmts),
        Err(FormatError::EmptyNumber)
    );
    assert_eq!(
        sms_util.format_number("8005551234", " ", NetworkType::GsmUmts),
        Err(FormatError::EmptyMcc)
    );
    assert_eq!(
        sms_util.format_number("+", Mcc::us(), NetworkType::GsmUmts),
        Err(FormatError::InvalidNumber(ExtractNumberError::NoDigits))
    );
    assert_eq!(
        sms_util.format_number("abc", Mcc::us(), NetworkType::GsmUmts),
        Err(FormatError::InvalidNumber(ExtractNumberError::InvalidCharacter {
            character: 'a',
            position: 0
        }))
    );
    // Dropping the star would send "678005551234", a different number.
    for network_type in NetworkType::iter() {
        assert_eq!(
            sms_util.format_number("*67 8005551234", Mcc::us(), network_type),
            Err(FormatError::InvalidNumber(ExtractNumberError::InvalidCharacter {
                character: '*',
                position: 0
            }))
        );
    }
}

#[test]
fn configurable_policies() {
    let no_exceptions = get_sms_util().with_exceptions(CcAreaLocalExceptions::empty());
    assert_eq!(
        format(&no_exceptions, "201234567890", Mcc::cn(), NetworkType::GsmUmts),
        "011201234567890"
    );

    let more_exceptions =
        get_sms_util().with_exceptions(CcAreaLocalExceptions::default().with_rule(86, 12));
    assert_eq!(
        format(&more_exceptions, "861234567890", Mcc::cn(), NetworkType::GsmUmts),
        "861234567890"
    );

    let longer_minimum = get_sms_util().with_min_country_area_local_length(14);
    assert_eq!(
        format(&longer_minimum, "+8625086281234", Mcc::cn(), NetworkType::GsmUmts),
        "+8625086281234"
    );
    assert_eq!(
        format(&longer_minimum, "+8625086281234", Mcc::cn(), NetworkType::CdmaHome),
        "0118625086281234"
    );
}

#[test]
fn country_code_tie_break_follows_table_order() {
    let short_first = get_sms_util_for(StaticLookupSource::new().with_country_codes([44, 441]));
    let classification = short_first.classify(
        &DigitString::parse("+4412345678901").unwrap(),
        Mcc::cn(),
        NetworkType::GsmUmts,
    );
    assert_eq!(classification.country_code, Some(44));

    let long_first = get_sms_util_for(StaticLookupSource::new().with_country_codes([441, 44]));
    let classification = long_first.classify(
        &DigitString::parse("+4412345678901").unwrap(),
        Mcc::cn(),
        NetworkType::GsmUmts,
    );
    assert_eq!(classification.country_code, Some(441));
}
