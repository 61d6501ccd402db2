use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Female => write!(f, "Female"),
            Gender::Male => write!(f, "Male"),
        }
    }
}

/// The customer age bracket. The variant order is the display order
/// (Youth < Adults < Seniors), which `derive(Ord)` preserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    Youth,
    Adults,
    Seniors,
}

impl AgeGroup {
    /// The full category domain in display order.
    pub const ALL: [AgeGroup; 3] = [AgeGroup::Youth, AgeGroup::Adults, AgeGroup::Seniors];
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeGroup::Youth => write!(f, "Youth"),
            AgeGroup::Adults => write!(f, "Adults"),
            AgeGroup::Seniors => write!(f, "Seniors"),
        }
    }
}

impl FromStr for AgeGroup {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Youth" => Ok(AgeGroup::Youth),
            "Adults" => Ok(AgeGroup::Adults),
            "Seniors" => Ok(AgeGroup::Seniors),
            other => Err(CoreError::InvalidCategory(
                "age_group".to_string(),
                other.to_string(),
            )),
        }
    }
}

/// Selects which demographic attribute a breakdown is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemographicField {
    Gender,
    AgeGroup,
    State,
}

impl DemographicField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemographicField::Gender => "gender",
            DemographicField::AgeGroup => "age_group",
            DemographicField::State => "state",
        }
    }
}

impl fmt::Display for DemographicField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_groups_order_youth_first() {
        assert!(AgeGroup::Youth < AgeGroup::Adults);
        assert!(AgeGroup::Adults < AgeGroup::Seniors);
    }

    #[test]
    fn age_group_rejects_unknown_category() {
        assert!("Teenagers".parse::<AgeGroup>().is_err());
        assert_eq!("Seniors".parse::<AgeGroup>().unwrap(), AgeGroup::Seniors);
    }
}
