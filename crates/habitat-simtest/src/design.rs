//! Habitat design fixtures for the harness.
//!
//! A design file is the scenario plus the placed modules. `size` may be
//! omitted per module, in which case the type's default footprint is used.

use habitat_logic::layout::{validate_modules, Footprint, LayoutError, Module, ModuleType, Vec3};
use habitat_logic::scenario::Scenario;
use serde::Deserialize;
use std::path::Path;

/// Design bundled with the harness.
pub const SAMPLE_DESIGN_JSON: &str = include_str!("../../../data/sample_habitat.json");

#[derive(Debug, Deserialize)]
struct DesignFile {
    #[serde(default)]
    name: String,
    #[serde(default)]
    scenario: Scenario,
    modules: Vec<ModuleSpec>,
}

#[derive(Debug, Deserialize)]
struct ModuleSpec {
    id: String,
    #[serde(rename = "type")]
    kind: ModuleType,
    position: Vec3,
    #[serde(default)]
    size: Option<Footprint>,
}

impl From<ModuleSpec> for Module {
    fn from(spec: ModuleSpec) -> Self {
        let module = Module::new(spec.id, spec.kind, spec.position);
        match spec.size {
            Some(size) => module.with_size(size),
            None => module,
        }
    }
}

/// A loaded, validated design.
#[derive(Debug, Clone)]
pub struct HabitatDesign {
    pub name: String,
    pub scenario: Scenario,
    pub modules: Vec<Module>,
    /// Non-fatal layout findings (unrecognized types).
    pub warnings: Vec<LayoutError>,
}

/// Errors that can occur while loading a design.
#[derive(Debug)]
pub enum HarnessError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidDesign(Vec<LayoutError>),
}

impl From<std::io::Error> for HarnessError {
    fn from(e: std::io::Error) -> Self {
        HarnessError::Io(e)
    }
}

impl From<serde_json::Error> for HarnessError {
    fn from(e: serde_json::Error) -> Self {
        HarnessError::Json(e)
    }
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HarnessError::Io(e) => write!(f, "IO error: {}", e),
            HarnessError::Json(e) => write!(f, "JSON parse error: {}", e),
            HarnessError::InvalidDesign(errors) => {
                write!(f, "Invalid design ({} errors)", errors.len())?;
                for e in errors {
                    write!(f, "\n  - {}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for HarnessError {}

/// Parse and validate a design from JSON text.
pub fn parse_design(json: &str) -> Result<HabitatDesign, HarnessError> {
    let file: DesignFile = serde_json::from_str(json)?;
    let modules: Vec<Module> = file.modules.into_iter().map(Module::from).collect();

    let (warnings, errors): (Vec<_>, Vec<_>) = validate_modules(&modules)
        .into_iter()
        .partition(|e| e.is_warning());
    if !errors.is_empty() {
        return Err(HarnessError::InvalidDesign(errors));
    }

    Ok(HabitatDesign {
        name: file.name,
        scenario: file.scenario,
        modules,
        warnings,
    })
}

/// Load a design from `path`, or the bundled sample when `path` is `None`.
pub fn load_design(path: Option<&Path>) -> Result<HabitatDesign, HarnessError> {
    match path {
        Some(p) => {
            log::info!("Loading design from {}", p.display());
            let json = std::fs::read_to_string(p)?;
            parse_design(&json)
        }
        None => {
            log::info!("Loading bundled sample design");
            parse_design(SAMPLE_DESIGN_JSON)
        }
    }
}
