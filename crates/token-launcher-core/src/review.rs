//! Review summary derived from wizard state
//!
//! Never stored; rebuilt from the state every time the Review step draws.

use crate::wizard::WizardState;
use std::fmt;

/// Shown when no description was entered
pub const DESCRIPTION_FALLBACK: &str = "Not provided";

/// Shown when no supply was entered
pub const SUPPLY_FALLBACK: &str = "Not specified";

/// Whether a logo was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoStatus {
    Uploaded,
    NotUploaded,
}

impl fmt::Display for LogoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogoStatus::Uploaded => write!(f, "Uploaded"),
            LogoStatus::NotUploaded => write!(f, "Not uploaded"),
        }
    }
}

/// Read-only projection shown on the Review step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    pub name: String,
    pub symbol: String,
    pub logo_status: LogoStatus,
    pub description: String,
    pub supply: String,
}

impl ReviewSummary {
    pub fn from_state(state: &WizardState) -> Self {
        Self {
            name: state.token_name().to_string(),
            symbol: state.token_symbol().to_string(),
            logo_status: if state.token_logo().is_some() {
                LogoStatus::Uploaded
            } else {
                LogoStatus::NotUploaded
            },
            description: or_fallback(state.token_description(), DESCRIPTION_FALLBACK),
            supply: or_fallback(state.total_supply(), SUPPLY_FALLBACK),
        }
    }

    /// Label/value rows in display order
    pub fn rows(&self) -> [(&'static str, String); 5] {
        [
            ("Name:", self.name.clone()),
            ("Symbol:", self.symbol.clone()),
            ("Logo:", self.logo_status.to_string()),
            ("Description:", self.description.clone()),
            ("Total Supply:", self.supply.clone()),
        ]
    }
}

fn or_fallback(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
