//! Optimization objectives.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which scoring formula ranks the plans.
///
/// Higher scores always rank first; objectives only change how the score
/// is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    Cheapest,
    Fastest,
    Greenest,
    #[default]
    Balanced,
}

impl Objective {
    /// All objectives, in declaration order.
    pub const ALL: [Objective; 4] = [
        Objective::Cheapest,
        Objective::Fastest,
        Objective::Greenest,
        Objective::Balanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Objective::Cheapest => "cheapest",
            Objective::Fastest => "fastest",
            Objective::Greenest => "greenest",
            Objective::Balanced => "balanced",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
