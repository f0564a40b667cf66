//! Mission scenario configuration.
//!
//! The editor's scenario panel sets crew size, mission length and
//! destination. This module holds that data and validates it, independent
//! of any UI framework.
//!
//! ```
//! use habitat_logic::scenario::{validate_scenario, Scenario};
//!
//! let mut scenario = Scenario::default();
//! scenario.crew_size = 6;
//! scenario.mission_days = 180;
//! assert!(validate_scenario(&scenario).is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::mission::{MAX_CREW, MAX_MISSION_DAYS};
use crate::mission::{mission_multipliers, Destination, MissionMultipliers};

/// Mission parameters a layout is checked against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub crew_size: u32,
    pub mission_days: u32,
    pub destination: Destination,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            crew_size: 4,
            mission_days: 30,
            destination: Destination::LunarSurface,
        }
    }
}

impl Scenario {
    pub fn multipliers(&self) -> MissionMultipliers {
        mission_multipliers(self.mission_days)
    }
}

/// Scenario validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// No crew.
    EmptyCrew,
    /// Crew larger than a single habitat supports.
    CrewTooLarge(u32),
    /// Mission length of zero days.
    ZeroDuration,
    /// Mission longer than supported.
    DurationTooLong(u32),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::EmptyCrew => write!(f, "Crew size must be at least 1"),
            ScenarioError::CrewTooLarge(n) => {
                write!(f, "Crew size {} exceeds maximum of {}", n, MAX_CREW)
            }
            ScenarioError::ZeroDuration => write!(f, "Mission duration must be at least 1 day"),
            ScenarioError::DurationTooLong(d) => write!(
                f,
                "Mission duration {} days exceeds maximum of {}",
                d, MAX_MISSION_DAYS
            ),
        }
    }
}

impl std::error::Error for ScenarioError {}

/// Validate a scenario, returning all errors found.
pub fn validate_scenario(scenario: &Scenario) -> Vec<ScenarioError> {
    let mut errors = Vec::new();

    if scenario.crew_size == 0 {
        errors.push(ScenarioError::EmptyCrew);
    }
    if scenario.crew_size > MAX_CREW {
        errors.push(ScenarioError::CrewTooLarge(scenario.crew_size));
    }
    if scenario.mission_days == 0 {
        errors.push(ScenarioError::ZeroDuration);
    }
    if scenario.mission_days > MAX_MISSION_DAYS {
        errors.push(ScenarioError::DurationTooLong(scenario.mission_days));
    }

    errors
}
