//! # Shipment Request Draft
//!
//! Flat, string-typed draft behind the "new request" form. Values stay as typed
//! until submission; [`ShipmentDraft::to_payload`] validates and converts them.

use shared::dto::CreateShipmentRequest;

use crate::core::{AppError, Result};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Veuillez remplir tous les champs obligatoires";
pub const DIMENSIONS_MESSAGE: &str = "Les dimensions doivent être au format longueur,largeur,hauteur";

/// Urgency picked in the form. Informational only, never sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Urgency {
    #[default]
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn all() -> &'static [Urgency] {
        &[Urgency::Low, Urgency::Medium, Urgency::High]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "Pas urgent",
            Urgency::Medium => "Modéré",
            Urgency::High => "Urgent",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipmentDraft {
    pub title: String,
    pub description: String,
    pub origin_address: String,
    pub origin_latitude: String,
    pub origin_longitude: String,
    pub origin_city: String,
    pub origin_zipcode: String,
    pub origin_country: String,
    pub destination_address: String,
    pub destination_latitude: String,
    pub destination_longitude: String,
    pub destination_city: String,
    pub destination_zipcode: String,
    pub destination_country: String,
    pub preferred_date: String,
    pub urgency: Urgency,
    pub weight: String,
    pub volume: String,
    pub max_price: String,
    /// `longueur,largeur,hauteur`
    pub dimensions: String,
    pub fragile: bool,
    pub refrigerated: bool,
}

impl ShipmentDraft {
    /// Back to the empty initial shape.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn missing_required(&self) -> bool {
        [
            &self.title,
            &self.description,
            &self.origin_city,
            &self.destination_city,
            &self.origin_address,
            &self.destination_address,
            &self.origin_zipcode,
            &self.destination_zipcode,
            &self.origin_country,
            &self.destination_country,
            &self.preferred_date,
        ]
        .iter()
        .any(|value| value.trim().is_empty())
    }

    /// Validate the draft and build the creation payload.
    ///
    /// Fails before any network call when a required field is blank or the
    /// dimensions are not exactly three numbers.
    pub fn to_payload(&self) -> Result<CreateShipmentRequest> {
        if self.missing_required() {
            return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }
        let dimensions = parse_dimensions(&self.dimensions)?;

        let description = [&self.title, &self.description]
            .into_iter()
            .map(|text| text.trim())
            .find(|text| !text.is_empty())
            .map(str::to_string);

        Ok(CreateShipmentRequest {
            origin_address: self.origin_address.clone(),
            origin_latitude: parse_optional_number(&self.origin_latitude),
            origin_longitude: parse_optional_number(&self.origin_longitude),
            origin_city: self.origin_city.clone(),
            origin_zipcode: self.origin_zipcode.clone(),
            origin_country: self.origin_country.clone(),
            destination_address: self.destination_address.clone(),
            destination_latitude: parse_optional_number(&self.destination_latitude),
            destination_longitude: parse_optional_number(&self.destination_longitude),
            destination_city: self.destination_city.clone(),
            destination_zipcode: self.destination_zipcode.clone(),
            destination_country: self.destination_country.clone(),
            preferred_date: self.preferred_date.clone(),
            weight: parse_optional_number(&self.weight),
            volume: parse_optional_number(&self.volume),
            dimensions,
            description,
            fragile: self.fragile,
            refrigerated: self.refrigerated,
            max_price: parse_optional_number(&self.max_price),
        })
    }
}

/// Parse `"longueur,largeur,hauteur"` into exactly three numbers.
///
/// Any blank or non-numeric token rejects the whole input.
///
/// ```rust
/// use freight_desk::forms::shipment::parse_dimensions;
///
/// assert_eq!(parse_dimensions("120,80,100").unwrap(), vec![120.0, 80.0, 100.0]);
/// assert!(parse_dimensions("120,80").is_err());
/// assert!(parse_dimensions("a,80,100").is_err());
/// ```
pub fn parse_dimensions(raw: &str) -> Result<Vec<f64>> {
    let invalid = || AppError::Validation(DIMENSIONS_MESSAGE.to_string());

    let values = raw
        .split(',')
        .map(|token| {
            let token = token.trim();
            if token.is_empty() {
                return None;
            }
            token.parse::<f64>().ok().filter(|value| value.is_finite())
        })
        .collect::<Option<Vec<f64>>>()
        .ok_or_else(invalid)?;

    if values.len() != 3 {
        return Err(invalid());
    }
    Ok(values)
}

/// Lenient numeric field: the leading number of the input, or `None` when
/// there is none, or when it is zero or not finite.
///
/// ```rust
/// use freight_desk::forms::shipment::parse_optional_number;
///
/// assert_eq!(parse_optional_number("12kg"), Some(12.0));
/// assert_eq!(parse_optional_number(" 2.5"), Some(2.5));
/// assert_eq!(parse_optional_number(""), None);
/// assert_eq!(parse_optional_number("0"), None);
/// assert_eq!(parse_optional_number("abc"), None);
/// ```
pub fn parse_optional_number(raw: &str) -> Option<f64> {
    let value = numeric_prefix(raw.trim_start())?.parse::<f64>().ok()?;
    (value.is_finite() && value != 0.0).then_some(value)
}

/// Longest prefix shaped like `[+-]digits[.digits][e[+-]digits]`.
fn numeric_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let digits_from = |mut at: usize| {
        while at < bytes.len() && bytes[at].is_ascii_digit() {
            at += 1;
        }
        at
    };

    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut end = digits_from(sign);
    let mut has_digits = end > sign;

    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_from(end + 1);
        if fraction_end > end + 1 {
            end = fraction_end;
            has_digits = true;
        }
    }
    if !has_digits {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exponent_sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent_start = end + 1 + exponent_sign;
        let exponent_end = digits_from(exponent_start);
        if exponent_end > exponent_start {
            end = exponent_end;
        }
    }

    Some(&text[..end])
}
