//! Mission profile: destination and duration-scaled provisioning.
//!
//! Long missions need more redundancy, stowage, medical and exercise
//! capacity. The scaler is a pure function of mission length; it never
//! looks at the module list.

use serde::{Deserialize, Serialize};

use crate::constants::mission::LONG_DURATION_DAYS;

// ============================================================================
// DESTINATIONS
// ============================================================================

/// Where the habitat is deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Destination {
    /// Low Earth orbit station.
    LowEarthOrbit = 0,
    /// Cislunar orbit (Gateway-class).
    LunarOrbit = 1,
    /// Lunar surface outpost.
    LunarSurface = 2,
    /// Deep-space Mars transit vehicle.
    MarsTransit = 3,
    /// Mars surface base.
    MarsSurface = 4,
}

/// Destination metadata.
#[derive(Debug, Clone)]
pub struct DestinationInfo {
    pub name: &'static str,
    /// Surface gravity in g (0 for free-fall).
    pub gravity_g: f32,
    pub orbital: bool,
}

impl Destination {
    pub fn info(&self) -> DestinationInfo {
        match self {
            Self::LowEarthOrbit => DestinationInfo {
                name: "Low Earth Orbit",
                gravity_g: 0.0,
                orbital: true,
            },
            Self::LunarOrbit => DestinationInfo {
                name: "Lunar Orbit",
                gravity_g: 0.0,
                orbital: true,
            },
            Self::LunarSurface => DestinationInfo {
                name: "Lunar Surface",
                gravity_g: 0.166,
                orbital: false,
            },
            Self::MarsTransit => DestinationInfo {
                name: "Mars Transit",
                gravity_g: 0.0,
                orbital: true,
            },
            Self::MarsSurface => DestinationInfo {
                name: "Mars Surface",
                gravity_g: 0.38,
                orbital: false,
            },
        }
    }

    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            0 => Some(Self::LowEarthOrbit),
            1 => Some(Self::LunarOrbit),
            2 => Some(Self::LunarSurface),
            3 => Some(Self::MarsTransit),
            4 => Some(Self::MarsSurface),
            _ => None,
        }
    }
}

// ============================================================================
// DURATION SCALING
// ============================================================================

/// Mission length class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationClass {
    /// Up to 30 days.
    Short,
    /// More than 30 days.
    Long,
}

impl DurationClass {
    pub fn for_days(mission_days: u32) -> Self {
        if mission_days > LONG_DURATION_DAYS {
            Self::Long
        } else {
            Self::Short
        }
    }
}

/// Provisioning multipliers for a mission length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionMultipliers {
    pub class: DurationClass,
    pub redundancy: f32,
    pub storage: f32,
    pub medical: f32,
    pub exercise: f32,
    pub description: String,
}

/// Scale provisioning requirements by mission length.
pub fn mission_multipliers(mission_days: u32) -> MissionMultipliers {
    match DurationClass::for_days(mission_days) {
        DurationClass::Short => MissionMultipliers {
            class: DurationClass::Short,
            redundancy: 1.0,
            storage: 1.0,
            medical: 1.0,
            exercise: 1.0,
            description: "Short-duration mission: basic requirements".to_string(),
        },
        DurationClass::Long => MissionMultipliers {
            class: DurationClass::Long,
            redundancy: 1.5,
            storage: 2.0,
            medical: 1.3,
            exercise: 1.2,
            description: "Long-duration mission: enhanced requirements for crew health"
                .to_string(),
        },
    }
}
