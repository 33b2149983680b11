use log::{debug, warn};

use super::{
    NetworkType, NumberPlanForm,
    carrier_config::ConversionConfig,
    classifier::{classify_international, classify_nanp},
    country_code_resolver::CountryCodeResolver,
    errors::FormatError,
    exceptions::CcAreaLocalExceptions,
    helper_constants::{MIN_COUNTRY_AREA_LOCAL_LENGTH, NANP_IDD},
    helper_functions::is_global_phone_number,
    helper_types::{Classification, DigitString, NumberEntry},
    lookup_tables::{CountryCodeTable, LookupCache},
    network::DeviceState,
    rewrite::Rewrite,
};
use crate::interfaces::LookupSource;

// Helper type for Result
pub type Result<T> = std::result::Result<T, FormatError>;

/// Formats destination numbers of outgoing messages for the network they are
/// sent over.
///
/// Lookup tables are read through the owned [`LookupCache`], so one instance
/// should be shared by everything sending messages for the same source.
pub struct SmsNumberUtil<S: LookupSource> {
    lookup: LookupCache<S>,

    /// `<Country_code><Area_code><Phone Number>` numbers that are sent
    /// without the home IDD.
    exceptions: CcAreaLocalExceptions,

    /// Shortest number a country calling code is looked up for.
    min_country_area_local_length: usize,
}

impl<S: LookupSource> SmsNumberUtil<S> {
    pub fn new(source: S) -> Self {
        Self {
            lookup: LookupCache::new(source),
            exceptions: CcAreaLocalExceptions::default(),
            min_country_area_local_length: MIN_COUNTRY_AREA_LOCAL_LENGTH,
        }
    }

    pub fn with_exceptions(mut self, exceptions: CcAreaLocalExceptions) -> Self {
        self.exceptions = exceptions;
        self
    }

    pub fn with_min_country_area_local_length(mut self, min_length: usize) -> Self {
        self.min_country_area_local_length = min_length;
        self
    }

    pub fn lookup(&self) -> &LookupCache<S> {
        &self.lookup
    }

    pub fn exceptions(&self) -> &CcAreaLocalExceptions {
        &self.exceptions
    }

    /// Breaks the given number down and formats it according to the rules
    /// for the number plan it is written in and the network it is sent over.
    ///
    /// `active_mcc` is the mobile country code of the current network, it
    /// selects the local international dialing prefixes.
    pub fn format_number(
        &self,
        number: &str,
        active_mcc: &str,
        network_type: NetworkType,
    ) -> Result<String> {
        if number.is_empty() {
            return Err(FormatError::EmptyNumber);
        }
        if active_mcc.trim().is_empty() {
            return Err(FormatError::EmptyMcc);
        }
        let network_portion = DigitString::extract(number)?;
        Ok(self.format_network_portion(network_portion, active_mcc, network_type))
    }

    /// Formats a number that already is a network portion. Never fails,
    /// numbers no rule applies to are returned as they are.
    pub fn format_network_portion(
        &self,
        network_portion: DigitString,
        active_mcc: &str,
        network_type: NetworkType,
    ) -> String {
        let idds = self.lookup.idds_for_country(active_mcc);
        let country_codes = self.lookup.country_codes();

        let rewrite = {
            let mut entry = NumberEntry::new(network_portion.as_str());
            let form = self.classify_entry(&mut entry, &idds, &country_codes, network_type);
            Rewrite::for_form(form, &entry, network_type, &self.exceptions)
        };
        debug!("Rewrite for {:?}: {:?}", network_type, rewrite);
        rewrite.apply(network_portion.into_string())
    }

    /// Classifies the number the way [`Self::format_number`] does before
    /// rewriting it.
    pub fn classify(
        &self,
        number: &DigitString,
        active_mcc: &str,
        network_type: NetworkType,
    ) -> Classification {
        let idds = self.lookup.idds_for_country(active_mcc);
        let country_codes = self.lookup.country_codes();
        let mut entry = NumberEntry::new(number.as_str());
        let form = self.classify_entry(&mut entry, &idds, &country_codes, network_type);
        Classification::new(form, &entry)
    }

    fn classify_entry<'a>(
        &self,
        entry: &mut NumberEntry<'a>,
        idds: &'a [String],
        country_codes: &CountryCodeTable,
        network_type: NetworkType,
    ) -> NumberPlanForm {
        // First check whether the number is a NANP number.
        let nanp_form = classify_nanp(entry, idds);
        debug!("NANP type: {}", nanp_form.name());
        if !nanp_form.needs_international_phase(network_type) {
            return nanp_form;
        }

        let resolver = CountryCodeResolver::new(country_codes)
            .with_min_length(self.min_country_area_local_length);
        let international_form = classify_international(entry, idds, NANP_IDD, &resolver);
        debug!("International type: {}", international_form.name());
        international_form
    }

    /// Formats the destination address of an outgoing message if the carrier
    /// requires it. Falls back to `dest_addr` whenever the number can't be
    /// converted.
    pub fn filter_dest_addr(
        &self,
        dest_addr: &str,
        device: &DeviceState,
        config: &ConversionConfig,
    ) -> String {
        debug!("enter filterDestAddr. destAddr=\"{}\"", dest_addr);

        if !is_global_phone_number(dest_addr) {
            warn!("destAddr {} is not a global phone number!", dest_addr);
            return dest_addr.to_owned();
        }

        let result = self.convert_dest_addr(dest_addr, device, config);
        debug!("leave filterDestAddr, new destAddr=\"{:?}\"", result);
        result.unwrap_or_else(|| dest_addr.to_owned())
    }

    fn convert_dest_addr(
        &self,
        dest_addr: &str,
        device: &DeviceState,
        config: &ConversionConfig,
    ) -> Option<String> {
        if !config.need_to_convert(device.gid1.as_deref()) {
            return None;
        }
        let network_type = device.network_type()?;
        let mcc = device.network_mcc()?;
        match self.format_number(dest_addr, mcc, network_type) {
            Ok(formatted) => Some(formatted),
            Err(err) => {
                warn!("Can't format destAddr {}: {}", dest_addr, err);
                None
            }
        }
    }
}
