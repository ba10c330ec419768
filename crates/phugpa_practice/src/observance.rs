//! Observance types and entries.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PracticeError;

/// Category of an observance; each has its own display calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ObservanceType {
    #[serde(rename = "BUDDHA_DAY")]
    BuddhaCommemoration,
    #[serde(rename = "MOON")]
    LunarPhase,
    #[serde(rename = "TSOG")]
    TsogOffering,
    #[serde(rename = "TARA")]
    Tara,
    #[serde(rename = "MEDICINE_BUDDHA")]
    MedicineBuddha,
    #[serde(rename = "PRECEPTS")]
    EightPrecepts,
    #[serde(rename = "PROTECTOR_PUJA")]
    ProtectorPuja,
    #[serde(rename = "OTHER")]
    Other,
}

impl ObservanceType {
    /// All types in display order.
    pub const ALL: [ObservanceType; 8] = [
        Self::BuddhaCommemoration,
        Self::LunarPhase,
        Self::TsogOffering,
        Self::Tara,
        Self::MedicineBuddha,
        Self::EightPrecepts,
        Self::ProtectorPuja,
        Self::Other,
    ];

    /// Stable text code, as used in UIDs and calendar selections.
    pub const fn code(self) -> &'static str {
        match self {
            Self::BuddhaCommemoration => "BUDDHA_DAY",
            Self::LunarPhase => "MOON",
            Self::TsogOffering => "TSOG",
            Self::Tara => "TARA",
            Self::MedicineBuddha => "MEDICINE_BUDDHA",
            Self::EightPrecepts => "PRECEPTS",
            Self::ProtectorPuja => "PROTECTOR_PUJA",
            Self::Other => "OTHER",
        }
    }
}

impl Display for ObservanceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ObservanceType {
    type Err = PracticeError;

    /// Parse a code, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| PracticeError::UnknownObservance(code.to_string()))
    }
}

/// One observance on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observance {
    pub kind: ObservanceType,
    pub name: String,
    /// Full text, starting with the lunar day it belongs to.
    pub description: String,
}

impl Observance {
    pub fn new(kind: ObservanceType, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
        }
    }
}
