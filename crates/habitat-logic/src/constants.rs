//! Compliance thresholds: separation distances, corridor bands, mission cutoffs.
//!
//! Plain `f32`/`u32` constants with no dependencies. Distances are metres
//! measured on the x/z ground plane.

pub mod separation {
    /// Minimum clean↔dirty separation. A pair closer than this is a violation.
    pub const MIN_DISTANCE: f32 = 3.0;
    /// Radius of the exclusion sphere drawn around every dirty module.
    pub const DANGER_ZONE_RADIUS: f32 = 3.0;
    /// Pairs closer than `MIN_DISTANCE * SEVERE_FACTOR` are severe violations.
    pub const SEVERE_FACTOR: f32 = 0.5;
    /// Pairs inside `[MIN_DISTANCE, MIN_DISTANCE * WARNING_FACTOR)` get a warning.
    pub const WARNING_FACTOR: f32 = 1.2;
}

pub mod corridors {
    /// At or below this distance two modules are adjacent; no corridor is needed.
    pub const MIN_DISTANCE: f32 = 2.0;
    /// Pairs farther apart than this are never considered for a corridor.
    pub const MAX_CONNECTION_RANGE: f32 = 50.0;
    /// Corridors longer than this exceed standards.
    pub const MAX_LENGTH: f32 = 30.0;
    /// Corridors longer than this need intermediate support.
    pub const LONG_LENGTH: f32 = 20.0;
    /// Critical modules must be reachable within this distance.
    pub const CRITICAL_PROXIMITY: f32 = 15.0;
    /// Corridors shorter than this restrict movement.
    pub const TIGHT_LENGTH: f32 = 3.0;
}

pub mod mission {
    /// Missions longer than this many days use long-duration provisioning.
    pub const LONG_DURATION_DAYS: u32 = 30;
    /// Largest crew a single habitat design is validated for.
    pub const MAX_CREW: u32 = 12;
    /// Longest supported mission (roughly a Mars conjunction-class round trip).
    pub const MAX_MISSION_DAYS: u32 = 1100;
}
