//! Transport modes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a leg is travelled.
///
/// The provider sends the mode as a free-form string. `flight` and `orbital`
/// are recognised; anything else is kept verbatim in [`TransportMode::Other`]
/// rather than rejected. Every calculator treats `Other` exactly like
/// `Flight`, the non-orbital default branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransportMode {
    Flight,
    Orbital,
    Other(String),
}

impl TransportMode {
    /// Look up a mode by its wire name.
    pub fn parse(s: &str) -> Self {
        match s {
            "flight" => TransportMode::Flight,
            "orbital" => TransportMode::Orbital,
            other => TransportMode::Other(other.to_string()),
        }
    }

    /// Returns the wire name of this mode.
    pub fn as_str(&self) -> &str {
        match self {
            TransportMode::Flight => "flight",
            TransportMode::Orbital => "orbital",
            TransportMode::Other(s) => s,
        }
    }

    /// Returns true for orbital legs, the only mode with its own tariffs.
    pub fn is_orbital(&self) -> bool {
        matches!(self, TransportMode::Orbital)
    }
}

impl From<String> for TransportMode {
    fn from(s: String) -> Self {
        match s.as_str() {
            "flight" => TransportMode::Flight,
            "orbital" => TransportMode::Orbital,
            _ => TransportMode::Other(s),
        }
    }
}

impl From<TransportMode> for String {
    fn from(mode: TransportMode) -> Self {
        match mode {
            TransportMode::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
