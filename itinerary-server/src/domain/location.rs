//! Search endpoint codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Why a string is not a location code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidLocationCode {
    #[error("invalid location code: expected 3 letters, got {0}")]
    WrongLength(usize),

    #[error("invalid location code: {0:?} is not an uppercase letter")]
    NotUppercase(char),
}

/// The origin or destination of a search, e.g. `LON` or `NYC`.
///
/// Three uppercase ASCII letters, in the style of IATA city codes. Hubs
/// inside an itinerary are free-form and do not use this type.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::LocationCode;
///
/// let lon: LocationCode = "LON".parse().unwrap();
/// assert_eq!(lon.to_string(), "LON");
///
/// // Form input is trimmed and upper-cased first
/// assert_eq!(LocationCode::parse_normalized(" lon ").unwrap(), lon);
/// assert!(LocationCode::parse("lon").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationCode([u8; 3]);

impl LocationCode {
    /// Parse an exact code. No case folding or trimming.
    pub fn parse(s: &str) -> Result<Self, InvalidLocationCode> {
        if let Some(bad) = s.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(InvalidLocationCode::NotUppercase(bad));
        }

        // All ASCII from here, so byte length is character count
        let letters: [u8; 3] = s
            .as_bytes()
            .try_into()
            .map_err(|_| InvalidLocationCode::WrongLength(s.len()))?;

        Ok(Self(letters))
    }

    /// Parse user input, trimming whitespace and upper-casing first.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidLocationCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for LocationCode {
    type Err = InvalidLocationCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LocationCode {
    type Error = InvalidLocationCode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<LocationCode> for String {
    fn from(code: LocationCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Debug for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationCode({})", self.as_str())
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_and_station_codes() {
        for code in ["LON", "NYC", "KEF", "AMS", "ISS"] {
            assert_eq!(LocationCode::parse(code).unwrap().as_str(), code);
        }
    }

    #[test]
    fn reports_offending_character() {
        assert_eq!(
            LocationCode::parse("nYC"),
            Err(InvalidLocationCode::NotUppercase('n'))
        );
        assert_eq!(
            LocationCode::parse("L-N"),
            Err(InvalidLocationCode::NotUppercase('-'))
        );
        assert_eq!(
            LocationCode::parse("LÖN"),
            Err(InvalidLocationCode::NotUppercase('Ö'))
        );
    }

    #[test]
    fn reports_length() {
        assert_eq!(LocationCode::parse(""), Err(InvalidLocationCode::WrongLength(0)));
        assert_eq!(
            LocationCode::parse("KEFX"),
            Err(InvalidLocationCode::WrongLength(4))
        );
        assert_eq!(
            LocationCode::parse("LONDON").unwrap_err().to_string(),
            "invalid location code: expected 3 letters, got 6"
        );
    }

    #[test]
    fn normalizes_form_input() {
        let code = LocationCode::parse_normalized("  nyc\n").unwrap();
        assert_eq!(code, "NYC".parse::<LocationCode>().unwrap());
        assert_eq!(
            LocationCode::parse_normalized("new york"),
            Err(InvalidLocationCode::NotUppercase(' '))
        );
    }

    #[test]
    fn debug_names_the_type() {
        let code = LocationCode::parse("AMS").unwrap();
        assert_eq!(format!("{code:?}"), "LocationCode(AMS)");
    }

    #[test]
    fn json_is_a_bare_string() {
        let code = LocationCode::parse("KEF").unwrap();
        assert_eq!(serde_json::to_value(code).unwrap(), serde_json::json!("KEF"));

        let back: LocationCode = serde_json::from_str("\"KEF\"").unwrap();
        assert_eq!(back, code);

        let err = serde_json::from_str::<LocationCode>("\"kef\"").unwrap_err();
        assert!(err.to_string().contains("not an uppercase letter"));
    }
}
