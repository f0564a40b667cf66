//! Required module counts per scenario, and how much of it a layout covers.
//!
//! Counts scale with crew size and with the mission-duration multipliers
//! from [`crate::mission`]. The compliance percentage is the share of
//! requirement lines a layout fully meets.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::layout::{Module, ModuleType};
use crate::scenario::Scenario;

/// How many modules of one type a scenario needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRequirement {
    pub kind: ModuleType,
    pub required: u32,
}

/// One requirement line checked against a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementStatus {
    pub kind: ModuleType,
    pub required: u32,
    pub present: u32,
    pub met: bool,
}

/// Output of [`check_requirements`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementReport {
    pub lines: Vec<RequirementStatus>,
    /// Met lines / total lines × 100.
    pub compliance_percent: f32,
}

impl RequirementReport {
    pub fn missing(&self) -> impl Iterator<Item = &RequirementStatus> {
        self.lines.iter().filter(|l| !l.met)
    }
}

fn scaled(base: u32, multiplier: f32) -> u32 {
    (base as f32 * multiplier).ceil() as u32
}

/// Minimum module counts for a scenario.
pub fn required_modules(scenario: &Scenario) -> Vec<ModuleRequirement> {
    let m = scenario.multipliers();
    let crew = scenario.crew_size;

    [
        (ModuleType::CrewSleep, crew),
        (ModuleType::Hygiene, scaled(crew, m.redundancy)),
        (ModuleType::FoodPrep, scaled(1, m.redundancy)),
        (ModuleType::Medical, scaled(1, m.medical)),
        (ModuleType::Exercise, scaled(1, m.exercise)),
        (ModuleType::Stowage, scaled(crew.div_ceil(2), m.storage)),
        (ModuleType::Eclss, scaled(1, m.redundancy)),
        (ModuleType::Airlock, 1),
        (ModuleType::Waste, 1),
    ]
    .into_iter()
    .map(|(kind, required)| ModuleRequirement { kind, required })
    .collect()
}

/// Check a layout against the scenario's required module counts.
pub fn check_requirements(modules: &[Module], scenario: &Scenario) -> RequirementReport {
    let mut counts: HashMap<ModuleType, u32> = HashMap::new();
    for m in modules {
        *counts.entry(m.kind).or_default() += 1;
    }

    let lines: Vec<RequirementStatus> = required_modules(scenario)
        .into_iter()
        .map(|req| {
            let present = counts.get(&req.kind).copied().unwrap_or(0);
            RequirementStatus {
                kind: req.kind,
                required: req.required,
                present,
                met: present >= req.required,
            }
        })
        .collect();

    let compliance_percent = if lines.is_empty() {
        100.0
    } else {
        let met = lines.iter().filter(|l| l.met).count();
        met as f32 / lines.len() as f32 * 100.0
    };

    log::debug!(
        "Requirements: {:.0}% met for crew {} over {} days",
        compliance_percent,
        scenario.crew_size,
        scenario.mission_days
    );
    RequirementReport {
        lines,
        compliance_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Vec3;

    fn required(reqs: &[ModuleRequirement], kind: ModuleType) -> u32 {
        reqs.iter().find(|r| r.kind == kind).unwrap().required
    }

    fn make_modules(kinds: &[(ModuleType, u32)]) -> Vec<Module> {
        let mut modules = Vec::new();
        for &(kind, n) in kinds {
            for i in 0..n {
                let x = modules.len() as f32 * 4.0;
                modules.push(Module::new(
                    format!("{}-{}", kind.tag(), i),
                    kind,
                    Vec3::new(x, 0.0, 0.0),
                ));
            }
        }
        modules
    }

    #[test]
    fn test_short_mission_requirements() {
        let scenario = Scenario {
            crew_size: 4,
            mission_days: 14,
            ..Scenario::default()
        };
        let reqs = required_modules(&scenario);
        assert_eq!(required(&reqs, ModuleType::CrewSleep), 4);
        assert_eq!(required(&reqs, ModuleType::Hygiene), 4);
        assert_eq!(required(&reqs, ModuleType::Medical), 1);
        assert_eq!(required(&reqs, ModuleType::Stowage), 2);
        assert_eq!(required(&reqs, ModuleType::Eclss), 1);
    }

    #[test]
    fn test_long_mission_requirements() {
        let scenario = Scenario {
            crew_size: 3,
            mission_days: 180,
            ..Scenario::default()
        };
        let reqs = required_modules(&scenario);
        assert_eq!(required(&reqs, ModuleType::Hygiene), 5); // ceil(3 × 1.5)
        assert_eq!(required(&reqs, ModuleType::FoodPrep), 2);
        assert_eq!(required(&reqs, ModuleType::Medical), 2);
        assert_eq!(required(&reqs, ModuleType::Exercise), 2);
        assert_eq!(required(&reqs, ModuleType::Stowage), 4); // ceil(2 × 2.0)
        assert_eq!(required(&reqs, ModuleType::Airlock), 1);
    }

    #[test]
    fn test_empty_layout_meets_nothing() {
        let report = check_requirements(&[], &Scenario::default());
        assert_eq!(report.compliance_percent, 0.0);
        assert_eq!(report.missing().count(), report.lines.len());
    }

    #[test]
    fn test_full_layout_is_compliant() {
        let scenario = Scenario {
            crew_size: 2,
            mission_days: 10,
            ..Scenario::default()
        };
        let modules = make_modules(&[
            (ModuleType::CrewSleep, 2),
            (ModuleType::Hygiene, 2),
            (ModuleType::FoodPrep, 1),
            (ModuleType::Medical, 1),
            (ModuleType::Exercise, 1),
            (ModuleType::Stowage, 1),
            (ModuleType::Eclss, 1),
            (ModuleType::Airlock, 1),
            (ModuleType::Waste, 1),
        ]);
        let report = check_requirements(&modules, &scenario);
        assert_eq!(report.compliance_percent, 100.0);
        assert_eq!(report.missing().count(), 0);
    }

    #[test]
    fn test_partial_layout_percentage() {
        let scenario = Scenario {
            crew_size: 2,
            mission_days: 10,
            ..Scenario::default()
        };
        // Meets crew sleep, airlock and waste: 3 of 9 lines
        let modules = make_modules(&[
            (ModuleType::CrewSleep, 3),
            (ModuleType::Airlock, 1),
            (ModuleType::Waste, 1),
            (ModuleType::Hygiene, 1),
        ]);
        let report = check_requirements(&modules, &scenario);
        assert!((report.compliance_percent - 100.0 / 3.0).abs() < 0.01);
        let hygiene = report
            .lines
            .iter()
            .find(|l| l.kind == ModuleType::Hygiene)
            .unwrap();
        assert_eq!(hygiene.present, 1);
        assert!(!hygiene.met);
    }
}
