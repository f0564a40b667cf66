//! Habitat Headless Analysis Harness
//!
//! Loads a habitat design and runs every compliance analysis on it,
//! then sweeps the analyzers over generated layouts to check their
//! invariants. Runs entirely in-process with no renderer and no network.
//!
//! Usage:
//!   cargo run -p habitat-simtest
//!   cargo run -p habitat-simtest -- path/to/design.json --verbose
//!   cargo run -p habitat-simtest -- --strict

mod design;

use habitat_logic::compliance::analyze_compliance;
use habitat_logic::constants::{corridors, separation};
use habitat_logic::corridors::{analyze_corridors, CorridorValidation};
use habitat_logic::layout::{planar_distance, AreaCategory, Module, ModuleType, Vec3};
use habitat_logic::mission::{mission_multipliers, DurationClass};
use habitat_logic::requirements::check_requirements;
use habitat_logic::scenario::validate_scenario;
use habitat_logic::separation::analyze_separation;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

use design::{load_design, HabitatDesign};

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

const USAGE: &str = "Usage: habitat-simtest [DESIGN.json] [--verbose] [--strict]";

#[derive(Debug, PartialEq)]
struct Options {
    verbose: bool,
    strict: bool,
    help: bool,
    design_path: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, String> {
    let mut options = Options {
        verbose: false,
        strict: false,
        help: false,
        design_path: None,
    };
    for arg in args {
        match arg.as_str() {
            "--verbose" => options.verbose = true,
            "--strict" => options.strict = true,
            "--help" | "-h" => options.help = true,
            flag if flag.starts_with('-') => return Err(format!("unknown flag '{}'", flag)),
            _ => {
                if options.design_path.is_some() {
                    return Err(format!("unexpected extra argument '{}'", arg));
                }
                options.design_path = Some(PathBuf::from(arg));
            }
        }
    }
    Ok(options)
}

fn main() {
    env_logger::init();
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            std::process::exit(2);
        }
    };
    if options.help {
        println!("{}", USAGE);
        return;
    }
    println!("=== Habitat Compliance Harness ===\n");

    let design = match load_design(options.design_path.as_deref()) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Failed to load design: {}", e);
            std::process::exit(2);
        }
    };
    log::info!(
        "Design '{}': {} modules, crew {}, {} days, {}",
        design.name,
        design.modules.len(),
        design.scenario.crew_size,
        design.scenario.mission_days,
        design.scenario.destination.info().name
    );

    let mut results = Vec::new();

    // 1. Design & scenario
    results.extend(validate_design(&design, options.verbose));

    // 2. Separation
    results.extend(validate_separation(&design.modules, options.verbose));

    // 3. Corridors
    results.extend(validate_corridors(&design.modules, options.verbose));

    // 4. Requirements & overall compliance
    results.extend(validate_compliance(&design, options.strict, options.verbose));

    // 5. Mission scaler sweep
    results.extend(validate_mission_scaler(options.verbose));

    // 6. Generated layout sweep
    results.extend(validate_random_layouts(options.verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || options.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Design ───────────────────────────────────────────────────────────

fn validate_design(design: &HabitatDesign, verbose: bool) -> Vec<TestResult> {
    println!("--- Design ---");
    let mut results = Vec::new();

    results.push(TestResult {
        name: "design_not_empty".into(),
        passed: !design.modules.is_empty(),
        detail: format!("{} modules placed", design.modules.len()),
    });

    let scenario_errors = validate_scenario(&design.scenario);
    results.push(TestResult {
        name: "scenario_valid".into(),
        passed: scenario_errors.is_empty(),
        detail: if scenario_errors.is_empty() {
            format!(
                "crew {}, {} days",
                design.scenario.crew_size, design.scenario.mission_days
            )
        } else {
            scenario_errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ")
        },
    });

    if verbose {
        for w in &design.warnings {
            println!("  ! {}", w);
        }
    }

    results
}

// ── 2. Separation ───────────────────────────────────────────────────────

fn validate_separation(modules: &[Module], verbose: bool) -> Vec<TestResult> {
    println!("--- Separation ---");
    let mut results = Vec::new();
    let analysis = analyze_separation(modules);

    let dirty = modules
        .iter()
        .filter(|m| m.category() == AreaCategory::Dirty)
        .count();
    results.push(TestResult {
        name: "danger_zone_per_dirty_module".into(),
        passed: analysis.danger_zones.len() == dirty,
        detail: format!(
            "{} danger zones for {} dirty modules",
            analysis.danger_zones.len(),
            dirty
        ),
    });

    let all_have_status = modules
        .iter()
        .all(|m| analysis.statuses.contains_key(&m.id));
    results.push(TestResult {
        name: "status_for_every_module".into(),
        passed: all_have_status,
        detail: format!("{} statuses", analysis.statuses.len()),
    });

    let bad_distance = analysis
        .violations
        .iter()
        .filter(|v| v.distance >= separation::MIN_DISTANCE)
        .count();
    results.push(TestResult {
        name: "violations_below_minimum".into(),
        passed: bad_distance == 0,
        detail: format!(
            "{} violations, {} at or above {}m",
            analysis.violations.len(),
            bad_distance,
            separation::MIN_DISTANCE
        ),
    });

    if verbose {
        for v in &analysis.violations {
            println!(
                "  {} ↔ {}: {:.2}m ({:?})",
                v.clean_module, v.dirty_module, v.distance, v.severity
            );
        }
    }

    results
}

// ── 3. Corridors ────────────────────────────────────────────────────────

fn validate_corridors(modules: &[Module], verbose: bool) -> Vec<TestResult> {
    println!("--- Corridors ---");
    let mut results = Vec::new();
    let analysis = analyze_corridors(modules);

    let out_of_range = analysis
        .corridors
        .iter()
        .filter(|c| {
            c.length <= corridors::MIN_DISTANCE || c.length > corridors::MAX_CONNECTION_RANGE
        })
        .count();
    results.push(TestResult {
        name: "corridors_in_range".into(),
        passed: out_of_range == 0,
        detail: format!(
            "{} corridors, {} outside ({}, {}]m",
            analysis.corridors.len(),
            out_of_range,
            corridors::MIN_DISTANCE,
            corridors::MAX_CONNECTION_RANGE
        ),
    });

    let non_valid = analysis.corridors.len() - analysis.count(CorridorValidation::Valid);
    results.push(TestResult {
        name: "issue_per_non_valid_corridor".into(),
        passed: analysis.connection_issues.len() == non_valid,
        detail: format!(
            "{} issues ({} warning, {} invalid)",
            analysis.connection_issues.len(),
            analysis.count(CorridorValidation::Warning),
            analysis.count(CorridorValidation::Invalid)
        ),
    });

    let groups = analysis.connection_groups();
    results.push(TestResult {
        name: "corridor_graph_groups".into(),
        passed: groups_cover_modules(modules, &groups, &analysis.unconnected_modules),
        detail: format!(
            "{} connected group(s), {} unconnected module(s)",
            groups.len(),
            analysis.unconnected_modules.len()
        ),
    });

    if verbose {
        for issue in &analysis.connection_issues {
            println!("  {} ↔ {}: {}", issue.module_a, issue.module_b, issue.issue);
        }
        for id in &analysis.unconnected_modules {
            println!("  unconnected: {}", id);
        }
    }

    results
}

/// Every module id appears exactly once across the groups and the unconnected list.
fn groups_cover_modules(modules: &[Module], groups: &[Vec<String>], unconnected: &[String]) -> bool {
    let mut seen: Vec<&str> = groups
        .iter()
        .flatten()
        .chain(unconnected)
        .map(|id| id.as_str())
        .collect();
    let mut expected: Vec<&str> = modules.iter().map(|m| m.id.as_str()).collect();
    seen.sort_unstable();
    expected.sort_unstable();
    seen == expected
}

// ── 4. Compliance ───────────────────────────────────────────────────────

fn validate_compliance(design: &HabitatDesign, strict: bool, verbose: bool) -> Vec<TestResult> {
    println!("--- Compliance ---");
    let mut results = Vec::new();

    let report = check_requirements(&design.modules, &design.scenario);
    if verbose {
        for line in &report.lines {
            let icon = if line.met { "✓" } else { "✗" };
            println!(
                "  {} {}: {}/{}",
                icon,
                line.kind.tag(),
                line.present,
                line.required
            );
        }
    }
    results.push(TestResult {
        name: "module_requirements".into(),
        passed: !strict || report.compliance_percent >= 100.0,
        detail: format!(
            "{:.0}% of requirements met ({})",
            report.compliance_percent,
            design.scenario.multipliers().description
        ),
    });

    let result = analyze_compliance(&design.modules);
    results.push(TestResult {
        name: "layout_compliance".into(),
        passed: !strict || result.is_fully_compliant(),
        detail: format!(
            "worst status {:?}, {} violations, {} connection issues",
            result.worst_status(),
            result.violations.len(),
            result.corridor_analysis.connection_issues.len()
        ),
    });

    results
}

// ── 5. Mission scaler ───────────────────────────────────────────────────

fn validate_mission_scaler(verbose: bool) -> Vec<TestResult> {
    println!("--- Mission Scaler ---");
    let mut results = Vec::new();

    let mut misclassified = Vec::new();
    let mut below_one = Vec::new();
    for days in 0..=60u32 {
        let m = mission_multipliers(days);
        if verbose && (29..=32).contains(&days) {
            println!(
                "  day {:>2}: {:?} redundancy {} storage {} medical {} exercise {}",
                days, m.class, m.redundancy, m.storage, m.medical, m.exercise
            );
        }
        let expected = if days > 30 {
            DurationClass::Long
        } else {
            DurationClass::Short
        };
        if m.class != expected {
            misclassified.push(days);
        }
        if m.redundancy < 1.0 || m.storage < 1.0 || m.medical < 1.0 || m.exercise < 1.0 {
            below_one.push(days);
        }
    }

    results.push(TestResult {
        name: "mission_threshold_30_days".into(),
        passed: misclassified.is_empty(),
        detail: if misclassified.is_empty() {
            "days 0–30 short, 31–60 long".into()
        } else {
            format!("misclassified days: {:?}", misclassified)
        },
    });
    results.push(TestResult {
        name: "mission_multipliers_at_least_one".into(),
        passed: below_one.is_empty(),
        detail: format!("{} durations with a multiplier below 1.0", below_one.len()),
    });

    results
}

// ── 6. Generated layouts ────────────────────────────────────────────────

fn random_layout(rng: &mut StdRng, n: usize) -> Vec<Module> {
    (0..n)
        .map(|i| {
            let kind = ModuleType::ALL[rng.gen_range(0..ModuleType::ALL.len())];
            let position = Vec3::new(rng.gen_range(-40.0..40.0), 0.0, rng.gen_range(-40.0..40.0));
            Module::new(format!("gen-{}", i), kind, position)
        })
        .collect()
}

fn validate_random_layouts(verbose: bool) -> Vec<TestResult> {
    println!("--- Generated Layouts ---");
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(42);

    let layouts = 200;
    let mut asymmetric = 0;
    let mut zone_mismatch = 0;
    let mut partition_broken = 0;

    for _ in 0..layouts {
        let n = rng.gen_range(0..16);
        let modules = random_layout(&mut rng, n);

        // Reversed input must give the same classification
        let mut reversed = modules.clone();
        reversed.reverse();
        let forward = analyze_compliance(&modules);
        let backward = analyze_compliance(&reversed);
        if forward.module_status != backward.module_status
            || forward.violations.len() != backward.violations.len()
            || forward.corridor_analysis.corridors.len()
                != backward.corridor_analysis.corridors.len()
        {
            asymmetric += 1;
        }

        let dirty = modules
            .iter()
            .filter(|m| m.category() == AreaCategory::Dirty)
            .count();
        if forward.danger_zones.len() != dirty {
            zone_mismatch += 1;
        }

        let analysis = &forward.corridor_analysis;
        for m in &modules {
            let has_partner = modules.iter().any(|o| {
                let d = planar_distance(m, o);
                o.id != m.id && d > corridors::MIN_DISTANCE && d <= corridors::MAX_CONNECTION_RANGE
            });
            let unconnected = analysis.unconnected_modules.contains(&m.id);
            if has_partner == unconnected {
                partition_broken += 1;
            }
        }
    }

    if verbose {
        println!("  swept {} generated layouts", layouts);
    }

    results.push(TestResult {
        name: "generated_order_independent".into(),
        passed: asymmetric == 0,
        detail: format!("{} of {} layouts changed under reordering", asymmetric, layouts),
    });
    results.push(TestResult {
        name: "generated_danger_zones".into(),
        passed: zone_mismatch == 0,
        detail: format!("{} layouts with wrong danger-zone count", zone_mismatch),
    });
    results.push(TestResult {
        name: "generated_isolation".into(),
        passed: partition_broken == 0,
        detail: format!("{} modules misreported as (un)connected", partition_broken),
    });

    results
}
