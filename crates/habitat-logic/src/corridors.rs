//! Corridor and connectivity analysis.
//!
//! Every pair of modules between [`MIN_DISTANCE`] (exclusive) and
//! [`MAX_CONNECTION_RANGE`] (inclusive) apart gets a candidate corridor.
//! Corridors are classified by length, with a stricter limit whenever a
//! critical module (airlock, hygiene, medical, ECLSS) is involved.
//! Nothing here persists between calls.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

use crate::constants::corridors::{
    CRITICAL_PROXIMITY, LONG_LENGTH, MAX_CONNECTION_RANGE, MAX_LENGTH, MIN_DISTANCE, TIGHT_LENGTH,
};
use crate::layout::{planar_distance, Module, ModuleType, Vec3};

/// Corridor classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorridorValidation {
    Valid,
    Warning,
    Invalid,
}

/// A candidate corridor between two modules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corridor {
    pub module_a: String,
    pub module_b: String,
    /// Planar distance between module centres.
    pub length: f32,
    /// Midpoint of the edge of `module_a` facing `module_b`.
    pub start: Vec3,
    /// Midpoint of the edge of `module_b` facing `module_a`.
    pub end: Vec3,
    pub validation: CorridorValidation,
    pub issue: Option<String>,
}

/// A corridor that is not fully valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionIssue {
    pub module_a: String,
    pub module_b: String,
    pub issue: String,
}

/// Output of [`analyze_corridors`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorridorAnalysis {
    pub corridors: Vec<Corridor>,
    /// Modules that appear in no corridor, in input order.
    pub unconnected_modules: Vec<String>,
    pub connection_issues: Vec<ConnectionIssue>,
}

impl CorridorAnalysis {
    /// Connected components of the corridor graph, in first-seen order.
    ///
    /// Only modules that appear in at least one corridor are included;
    /// isolated modules are already listed in `unconnected_modules`.
    pub fn connection_groups(&self) -> Vec<Vec<String>> {
        let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for c in &self.corridors {
            for (from, to) in [(&c.module_a, &c.module_b), (&c.module_b, &c.module_a)] {
                let entry = adj.entry(from.as_str()).or_default();
                if entry.is_empty() {
                    order.push(from.as_str());
                }
                entry.push(to.as_str());
            }
        }

        let mut visited: HashSet<&str> = HashSet::new();
        let mut groups = Vec::new();
        for &start in &order {
            if !visited.insert(start) {
                continue;
            }
            let mut group = vec![start.to_string()];
            let mut queue = VecDeque::new();
            queue.push_back(start);

            while let Some(current) = queue.pop_front() {
                if let Some(neighbors) = adj.get(current) {
                    for &next in neighbors {
                        if visited.insert(next) {
                            group.push(next.to_string());
                            queue.push_back(next);
                        }
                    }
                }
            }
            groups.push(group);
        }
        groups
    }

    pub fn count(&self, validation: CorridorValidation) -> usize {
        self.corridors
            .iter()
            .filter(|c| c.validation == validation)
            .count()
    }
}

/// Classify a corridor of `length` metres between modules of the given types.
pub fn classify_corridor(
    length: f32,
    kind_a: ModuleType,
    kind_b: ModuleType,
) -> (CorridorValidation, Option<String>) {
    let mut validation = CorridorValidation::Valid;
    let mut issue = None;

    if length > MAX_LENGTH {
        validation = CorridorValidation::Invalid;
        issue = Some(format!(
            "Corridor too long ({:.1}m), exceeds standards",
            length
        ));
    } else if length > LONG_LENGTH {
        validation = CorridorValidation::Warning;
        issue = Some(format!(
            "Long corridor ({:.1}m), consider intermediate support",
            length
        ));
    }

    // Critical proximity overrides the length bands
    if (kind_a.is_critical() || kind_b.is_critical()) && length > CRITICAL_PROXIMITY {
        validation = CorridorValidation::Invalid;
        issue = Some(format!(
            "Critical modules must be within {}m (currently {:.1}m)",
            CRITICAL_PROXIMITY, length
        ));
    }

    if length < TIGHT_LENGTH {
        validation = CorridorValidation::Warning;
        issue = Some(format!(
            "Tight corridor ({:.1}m), may restrict movement",
            length
        ));
    }

    (validation, issue)
}

/// Facing-edge midpoints of `a` and `b`, split along the dominant axis.
fn corridor_endpoints(a: &Module, b: &Module) -> (Vec3, Vec3) {
    let dx = b.position.x - a.position.x;
    let dz = b.position.z - a.position.z;
    let mut start = a.position;
    let mut end = b.position;

    if dx.abs() >= dz.abs() {
        let dir = dx.signum();
        start.x += dir * a.size.width / 2.0;
        end.x -= dir * b.size.width / 2.0;
    } else {
        let dir = dz.signum();
        start.z += dir * a.size.length / 2.0;
        end.z -= dir * b.size.length / 2.0;
    }
    (start, end)
}

/// Build and classify every candidate corridor.
pub fn analyze_corridors(modules: &[Module]) -> CorridorAnalysis {
    let mut result = CorridorAnalysis::default();
    let mut connected: HashSet<&str> = HashSet::new();

    for i in 0..modules.len() {
        for j in (i + 1)..modules.len() {
            let a = &modules[i];
            let b = &modules[j];
            let length = planar_distance(a, b);

            // Adjacent modules share a wall; distant ones are out of range.
            // A NaN distance fails both bounds and is skipped
            if !(length > MIN_DISTANCE && length <= MAX_CONNECTION_RANGE) {
                continue;
            }

            let (start, end) = corridor_endpoints(a, b);
            let (validation, issue) = classify_corridor(length, a.kind, b.kind);

            connected.insert(a.id.as_str());
            connected.insert(b.id.as_str());

            if let Some(text) = &issue {
                result.connection_issues.push(ConnectionIssue {
                    module_a: a.id.clone(),
                    module_b: b.id.clone(),
                    issue: text.clone(),
                });
            }
            result.corridors.push(Corridor {
                module_a: a.id.clone(),
                module_b: b.id.clone(),
                length,
                start,
                end,
                validation,
                issue,
            });
        }
    }

    result.unconnected_modules = modules
        .iter()
        .filter(|m| !connected.contains(m.id.as_str()))
        .map(|m| m.id.clone())
        .collect();

    log::debug!(
        "Corridors: {} candidates ({} invalid, {} warning), {} unconnected modules",
        result.corridors.len(),
        result.count(CorridorValidation::Invalid),
        result.count(CorridorValidation::Warning),
        result.unconnected_modules.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Footprint;

    fn make_module(id: &str, kind: ModuleType, x: f32, z: f32) -> Module {
        Module::new(id, kind, Vec3::new(x, 0.0, z))
    }

    #[test]
    fn test_single_module_unconnected() {
        let modules = vec![make_module("a", ModuleType::CrewSleep, 0.0, 0.0)];
        let result = analyze_corridors(&modules);
        assert!(result.corridors.is_empty());
        assert_eq!(result.unconnected_modules, vec!["a".to_string()]);
    }

    #[test]
    fn test_too_close_no_corridor() {
        let modules = vec![
            make_module("a", ModuleType::CrewSleep, 0.0, 0.0),
            make_module("b", ModuleType::Workstation, 2.0, 0.0),
        ];
        let result = analyze_corridors(&modules);
        assert!(result.corridors.is_empty());
        assert!(result.connection_issues.is_empty());
        assert_eq!(result.unconnected_modules.len(), 2);
    }

    #[test]
    fn test_out_of_range_no_corridor() {
        let modules = vec![
            make_module("a", ModuleType::Stowage, 0.0, 0.0),
            make_module("b", ModuleType::Stowage, 50.5, 0.0),
        ];
        let result = analyze_corridors(&modules);
        assert!(result.corridors.is_empty());
    }

    #[test]
    fn test_length_bands() {
        let (v, issue) = classify_corridor(10.0, ModuleType::CrewSleep, ModuleType::Stowage);
        assert_eq!(v, CorridorValidation::Valid);
        assert!(issue.is_none());

        let (v, issue) = classify_corridor(25.0, ModuleType::CrewSleep, ModuleType::Stowage);
        assert_eq!(v, CorridorValidation::Warning);
        assert!(issue.unwrap().contains("Long corridor"));

        let (v, issue) = classify_corridor(30.0, ModuleType::CrewSleep, ModuleType::Stowage);
        assert_eq!(v, CorridorValidation::Warning);
        assert!(issue.is_some());

        let (v, issue) = classify_corridor(35.0, ModuleType::CrewSleep, ModuleType::Stowage);
        assert_eq!(v, CorridorValidation::Invalid);
        assert!(issue.unwrap().contains("exceeds standards"));

        let (v, issue) = classify_corridor(2.5, ModuleType::CrewSleep, ModuleType::Stowage);
        assert_eq!(v, CorridorValidation::Warning);
        assert!(issue.unwrap().contains("Tight"));
    }

    #[test]
    fn test_critical_override() {
        let (v, issue) = classify_corridor(18.0, ModuleType::Airlock, ModuleType::CrewSleep);
        assert_eq!(v, CorridorValidation::Invalid);
        assert!(issue.unwrap().contains("15m"));

        // Also overrides the "long corridor" warning band
        let (v, issue) = classify_corridor(25.0, ModuleType::CrewSleep, ModuleType::Eclss);
        assert_eq!(v, CorridorValidation::Invalid);
        assert!(issue.unwrap().contains("Critical"));

        let (v, _) = classify_corridor(15.0, ModuleType::Medical, ModuleType::Hygiene);
        assert_eq!(v, CorridorValidation::Valid);

        // Beyond 30m the critical message replaces "too long"
        let (v, issue) = classify_corridor(35.0, ModuleType::Airlock, ModuleType::Stowage);
        assert_eq!(v, CorridorValidation::Invalid);
        assert!(issue
            .unwrap()
            .contains("Critical modules must be within 15m"));

        let (v, issue) = classify_corridor(35.0, ModuleType::CrewSleep, ModuleType::Stowage);
        assert_eq!(v, CorridorValidation::Invalid);
        assert!(issue.unwrap().contains("exceeds standards"));
    }

    #[test]
    fn test_non_finite_position_gets_no_corridor() {
        let modules = vec![
            make_module("bed", ModuleType::CrewSleep, f32::NAN, 0.0),
            make_module("lock", ModuleType::Airlock, 500.0, 0.0),
            make_module("desk", ModuleType::Workstation, 10.0, f32::INFINITY),
        ];
        let result = analyze_corridors(&modules);
        assert!(result.corridors.is_empty());
        assert!(result.connection_issues.is_empty());
        assert_eq!(result.unconnected_modules, vec!["bed", "lock", "desk"]);
    }

    #[test]
    fn test_endpoints_on_x_axis() {
        let a = make_module("a", ModuleType::CommonArea, 0.0, 0.0); // 5 wide
        let b = make_module("b", ModuleType::CrewSleep, 10.0, 1.0); // 2 wide
        let (start, end) = corridor_endpoints(&a, &b);
        assert_eq!(start, Vec3::new(2.5, 0.0, 0.0));
        assert_eq!(end, Vec3::new(9.0, 0.0, 1.0));
    }

    #[test]
    fn test_endpoints_on_z_axis_negative() {
        let a = make_module("a", ModuleType::Stowage, 0.0, 0.0).with_size(Footprint {
            width: 2.0,
            length: 4.0,
            height: 2.5,
        });
        let b = make_module("b", ModuleType::Stowage, 1.0, -10.0);
        let (start, end) = corridor_endpoints(&a, &b);
        assert_eq!(start, Vec3::new(0.0, 0.0, -2.0));
        assert_eq!(end, Vec3::new(1.0, 0.0, -9.0));
    }

    #[test]
    fn test_connection_issues_only_for_non_valid() {
        let modules = vec![
            make_module("a", ModuleType::CrewSleep, 0.0, 0.0),
            make_module("b", ModuleType::Workstation, 10.0, 0.0),
            make_module("c", ModuleType::Stowage, 35.0, 0.0),
        ];
        let result = analyze_corridors(&modules);
        // a-b 10 valid, a-c 35 invalid, b-c 25 warning
        assert_eq!(result.corridors.len(), 3);
        assert_eq!(result.count(CorridorValidation::Valid), 1);
        assert_eq!(result.connection_issues.len(), 2);
        assert_eq!(result.connection_issues[0].module_a, "a");
        assert_eq!(result.connection_issues[0].module_b, "c");
        assert!(result.unconnected_modules.is_empty());
    }

    #[test]
    fn test_invalid_corridor_still_connects() {
        let modules = vec![
            make_module("lock", ModuleType::Airlock, 0.0, 0.0),
            make_module("bed", ModuleType::CrewSleep, 40.0, 0.0),
        ];
        let result = analyze_corridors(&modules);
        assert_eq!(result.count(CorridorValidation::Invalid), 1);
        assert!(result.unconnected_modules.is_empty());
    }

    #[test]
    fn test_connection_groups() {
        let modules = vec![
            make_module("a", ModuleType::CrewSleep, 0.0, 0.0),
            make_module("b", ModuleType::Workstation, 5.0, 0.0),
            make_module("c", ModuleType::Stowage, 200.0, 0.0),
            make_module("d", ModuleType::Stowage, 205.0, 0.0),
            make_module("e", ModuleType::Stowage, 500.0, 0.0),
        ];
        let result = analyze_corridors(&modules);
        let groups = result.connection_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], vec!["a".to_string(), "b".to_string()]);
        assert_eq!(groups[1], vec!["c".to_string(), "d".to_string()]);
        assert_eq!(result.unconnected_modules, vec!["e".to_string()]);
    }
}
