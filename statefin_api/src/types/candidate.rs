use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A candidate as embedded in contribution and report documents.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Candidate {
    pub candidate_id: String,
    pub name: String,
    pub party: String,
    pub house: HouseLevel,
    pub district: i64,
}

/// Legislative chamber of a seat. Every supported state has exactly two.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HouseLevel {
    Lower,
    Upper,
}

impl HouseLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HouseLevel::Lower => "lower",
            HouseLevel::Upper => "upper",
        }
    }
}

impl fmt::Display for HouseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HouseLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lower" => Ok(HouseLevel::Lower),
            "upper" => Ok(HouseLevel::Upper),
            _ => Err(Error::InvalidInput(format!(
                "unknown house '{}'. Valid values: lower, upper",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_house_levels() {
        assert_eq!("lower".parse::<HouseLevel>().unwrap(), HouseLevel::Lower);
        assert_eq!("UPPER".parse::<HouseLevel>().unwrap(), HouseLevel::Upper);
    }

    #[test]
    fn parse_unknown_house_rejected() {
        assert!(matches!(
            "senate".parse::<HouseLevel>(),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn house_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(HouseLevel::Lower).unwrap(),
            serde_json::json!("lower")
        );
    }
}
