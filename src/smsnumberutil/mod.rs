mod helper_constants;
mod helper_functions;
mod helper_types;

pub mod enums;
pub mod errors;
pub mod smsnumberutil;

pub mod carrier_config;
pub mod classifier;
pub mod country_code_resolver;
pub mod exceptions;
pub mod lookup_tables;
pub mod network;
pub mod rewrite;

pub use enums::{NetworkType, NumberPlanForm, PhoneType};
pub use helper_constants::{MIN_COUNTRY_AREA_LOCAL_LENGTH, NANP_COUNTRY_CODE, NANP_IDD};
pub use helper_functions::{is_global_phone_number, is_iso_digit, is_nanp, is_nanp_local};
pub use helper_types::{Classification, DigitString, NumberEntry};
