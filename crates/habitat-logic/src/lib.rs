//! Pure compliance logic for habitat layouts.
//!
//! This crate holds every rule that judges a habitat design and nothing
//! that draws it. Functions take plain module data and return results,
//! making them unit-testable and usable from the editor backend, native
//! CLI tools, or any renderer.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`compliance`] | Combined analysis snapshot (separation + corridors) |
//! | [`constants`] | Separation, corridor and mission thresholds |
//! | [`corridors`] | Candidate corridors, length/criticality bands, isolation |
//! | [`layout`] | Module types, categories, placed modules, layout validation |
//! | [`mission`] | Destinations and mission-duration multipliers |
//! | [`requirements`] | Required module counts and compliance percentage |
//! | [`scenario`] | Crew/duration/destination config and validation |
//! | [`separation`] | Clean/dirty separation violations and danger zones |

pub mod compliance;
pub mod constants;
pub mod corridors;
pub mod layout;
pub mod mission;
pub mod requirements;
pub mod scenario;
pub mod separation;
