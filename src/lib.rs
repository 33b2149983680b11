mod interfaces;
mod smsnumberutil;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use interfaces::LookupSource;
pub use smsnumberutil::{
    Classification, DigitString, MIN_COUNTRY_AREA_LOCAL_LENGTH, NANP_COUNTRY_CODE, NANP_IDD,
    NetworkType, NumberEntry, NumberPlanForm, PhoneType,
    carrier_config::{ConversionConfig, ConversionRule},
    classifier::{classify_international, classify_nanp},
    country_code_resolver::CountryCodeResolver,
    errors,
    exceptions::{CcAreaLocalExceptions, ExceptionRule},
    is_global_phone_number, is_iso_digit, is_nanp, is_nanp_local,
    lookup_tables::{CountryCodeTable, LookupCache, StaticLookupSource},
    network::{DeviceState, is_international_roaming},
    rewrite::Rewrite,
    smsnumberutil::SmsNumberUtil,
};
