//! Clean/dirty separation analysis.
//!
//! Dirty areas (exercise, hygiene, waste, ...) are contamination and noise
//! sources; clean areas (sleep, galley, medical, ...) must keep at least
//! [`MIN_DISTANCE`] metres from them on the ground plane. Technical modules
//! take no part in the pairwise check.
//!
//! Statuses only ever escalate: a module touching several pairs ends with
//! the worst status any of them produced, whatever the input order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::separation::{
    DANGER_ZONE_RADIUS, MIN_DISTANCE, SEVERE_FACTOR, WARNING_FACTOR,
};
use crate::layout::{planar_distance, AreaCategory, Module, Vec3};

/// Per-module compliance status, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    Compliant,
    Warning,
    Violation,
}

impl ComplianceStatus {
    /// Raise `self` to `other` if `other` is worse. Never lowers.
    pub fn escalate(&mut self, other: ComplianceStatus) {
        if other > *self {
            *self = other;
        }
    }
}

/// A clean/dirty pair closer than the minimum separation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeparationViolation {
    /// The clean module.
    pub clean_module: String,
    /// The dirty module.
    pub dirty_module: String,
    pub distance: f32,
    pub min_distance: f32,
    /// `Violation` below half the minimum, `Warning` otherwise.
    pub severity: ComplianceStatus,
}

/// Exclusion sphere around a dirty module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DangerZone {
    pub module_id: String,
    pub center: Vec3,
    pub radius: f32,
}

/// Output of [`analyze_separation`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeparationAnalysis {
    pub violations: Vec<SeparationViolation>,
    pub statuses: BTreeMap<String, ComplianceStatus>,
    pub danger_zones: Vec<DangerZone>,
}

/// Classify a clean/dirty pair at planar distance `distance`.
///
/// Returns the status both modules should be raised to, and whether the pair
/// is recorded as a violation.
pub fn classify_separation(distance: f32) -> Option<(ComplianceStatus, bool)> {
    if distance < MIN_DISTANCE {
        let severity = if distance < MIN_DISTANCE * SEVERE_FACTOR {
            ComplianceStatus::Violation
        } else {
            ComplianceStatus::Warning
        };
        Some((severity, true))
    } else if distance < MIN_DISTANCE * WARNING_FACTOR {
        Some((ComplianceStatus::Warning, false))
    } else {
        None
    }
}

/// Run the separation check over every clean/dirty pair.
pub fn analyze_separation(modules: &[Module]) -> SeparationAnalysis {
    let mut result = SeparationAnalysis::default();

    for m in modules {
        result
            .statuses
            .insert(m.id.clone(), ComplianceStatus::Compliant);
    }

    let clean: Vec<&Module> = modules
        .iter()
        .filter(|m| m.category() == AreaCategory::Clean)
        .collect();
    let dirty: Vec<&Module> = modules
        .iter()
        .filter(|m| m.category() == AreaCategory::Dirty)
        .collect();

    // Every dirty module gets a zone, partner or not
    for d in &dirty {
        result.danger_zones.push(DangerZone {
            module_id: d.id.clone(),
            center: d.position,
            radius: DANGER_ZONE_RADIUS,
        });
    }

    for c in &clean {
        for d in &dirty {
            let distance = planar_distance(c, d);
            let Some((status, is_violation)) = classify_separation(distance) else {
                continue;
            };

            if is_violation {
                result.violations.push(SeparationViolation {
                    clean_module: c.id.clone(),
                    dirty_module: d.id.clone(),
                    distance,
                    min_distance: MIN_DISTANCE,
                    severity: status,
                });
            }
            for id in [&c.id, &d.id] {
                result
                    .statuses
                    .entry(id.clone())
                    .or_insert(ComplianceStatus::Compliant)
                    .escalate(status);
            }
        }
    }

    log::debug!(
        "Separation: {} clean, {} dirty, {} violations, {} danger zones",
        clean.len(),
        dirty.len(),
        result.violations.len(),
        result.danger_zones.len()
    );
    result
}
