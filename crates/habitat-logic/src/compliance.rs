//! Combined habitat compliance snapshot.
//!
//! Runs the separation and corridor analyses over the same borrowed module
//! slice and bundles the results for the renderer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::corridors::{analyze_corridors, CorridorAnalysis};
use crate::layout::Module;
use crate::separation::{analyze_separation, ComplianceStatus, DangerZone, SeparationViolation};

/// Immutable result of one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub violations: Vec<SeparationViolation>,
    pub module_status: BTreeMap<String, ComplianceStatus>,
    pub danger_zones: Vec<DangerZone>,
    pub corridor_analysis: CorridorAnalysis,
}

impl ComplianceResult {
    pub fn status_of(&self, module_id: &str) -> Option<ComplianceStatus> {
        self.module_status.get(module_id).copied()
    }

    /// No separation violations, no isolated modules, no corridor issues.
    pub fn is_fully_compliant(&self) -> bool {
        self.violations.is_empty()
            && self.corridor_analysis.unconnected_modules.is_empty()
            && self.corridor_analysis.connection_issues.is_empty()
    }

    /// Worst status across all modules (`Compliant` for an empty layout).
    pub fn worst_status(&self) -> ComplianceStatus {
        self.module_status
            .values()
            .copied()
            .max()
            .unwrap_or(ComplianceStatus::Compliant)
    }
}

/// Analyze a module collection.
pub fn analyze_compliance(modules: &[Module]) -> ComplianceResult {
    let separation = analyze_separation(modules);
    let corridor_analysis = analyze_corridors(modules);

    ComplianceResult {
        violations: separation.violations,
        module_status: separation.statuses,
        danger_zones: separation.danger_zones,
        corridor_analysis,
    }
}
