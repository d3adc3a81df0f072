//! Badge status shared by every record type.

use serde::{Deserialize, Serialize};

/// Colour family a badge is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
}

impl Tone {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
        }
    }
}

/// Any status a badge can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Regular,
    Probationary,
    Resigned,
    Pending,
    Approved,
    Rejected,
    Present,
    Late,
    Absent,
    OnLeave,
    HalfDay,
}

impl Status {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Probationary => "Probationary",
            Self::Resigned => "Resigned",
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Present => "Present",
            Self::Late => "Late",
            Self::Absent => "Absent",
            Self::OnLeave => "On Leave",
            Self::HalfDay => "Half Day",
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::Regular | Self::Approved | Self::Present => Tone::Success,
            Self::Probationary | Self::Pending | Self::Late | Self::HalfDay => Tone::Warning,
            Self::Resigned | Self::Rejected | Self::Absent => Tone::Danger,
            Self::OnLeave => Tone::Info,
        }
    }
}

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;
