use std::sync::Arc;

use crate::smsnumberutil::errors::LookupError;

/// Source of the numbering plan lookup tables, usually a database keyed by
/// mobile country code. Implementations are only queried the first time a
/// key is needed, results are memoized by [`crate::LookupCache`].
pub trait LookupSource: Send + Sync {
  /// Returns the international dialing prefixes used in the country of the
  /// given mobile country code, in lookup order. An unknown MCC yields an
  /// empty list.
  fn idds_for_country(&self, mcc: &str) -> Result<Vec<String>, LookupError>;

  /// Returns every known country calling code, in table order. The order
  /// matters: country code resolution returns the first code of this list
  /// that prefixes the number.
  fn all_country_codes(&self) -> Result<Vec<u32>, LookupError>;
}

impl<T: LookupSource + ?Sized> LookupSource for Arc<T> {
  fn idds_for_country(&self, mcc: &str) -> Result<Vec<String>, LookupError> {
    (**self).idds_for_country(mcc)
  }

  fn all_country_codes(&self) -> Result<Vec<u32>, LookupError> {
    (**self).all_country_codes()
  }
}

impl<T: LookupSource + ?Sized> LookupSource for &T {
  fn idds_for_country(&self, mcc: &str) -> Result<Vec<String>, LookupError> {
    (**self).idds_for_country(mcc)
  }

  fn all_country_codes(&self) -> Result<Vec<u32>, LookupError> {
    (**self).all_country_codes()
  }
}
