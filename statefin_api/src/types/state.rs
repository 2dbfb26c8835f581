use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Jurisdictions with an indexed filing feed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StateCode {
    Tx,
    Mi,
}

impl StateCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateCode::Tx => "tx",
            StateCode::Mi => "mi",
        }
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StateCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tx" => Ok(StateCode::Tx),
            "mi" => Ok(StateCode::Mi),
            _ => Err(Error::InvalidInput(format!(
                "unknown state code '{}'. Valid codes: tx, mi",
                s
            ))),
        }
    }
}
