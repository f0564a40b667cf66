//! Habitat layout data: module types, placed modules, and layout validation.
//!
//! The analyzers only need the plain structs here. `validate_modules` is an
//! independent sanity pass: findings are reported, never enforced.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Functional-area tag of a placed module.
///
/// Serialized as the editor's SCREAMING_SNAKE_CASE tags. Any tag not listed
/// here deserializes to [`ModuleType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModuleType {
    // Clean
    CrewSleep,
    FoodPrep,
    Medical,
    Workstation,
    CommonArea,
    Recreation,
    // Dirty
    Exercise,
    Hygiene,
    Waste,
    Maintenance,
    TrashManagement,
    // Technical
    Eclss,
    Stowage,
    Airlock,
    Glovebox,
    #[serde(other)]
    Unknown,
}

/// Separation category of a module type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaCategory {
    /// Needs buffer distance from contamination and noise sources.
    Clean,
    /// Contamination or noise source.
    Dirty,
    /// Excluded from separation checks.
    Technical,
}

impl ModuleType {
    /// Every recognized module type (excludes `Unknown`).
    pub const ALL: [ModuleType; 15] = [
        Self::CrewSleep,
        Self::FoodPrep,
        Self::Medical,
        Self::Workstation,
        Self::CommonArea,
        Self::Recreation,
        Self::Exercise,
        Self::Hygiene,
        Self::Waste,
        Self::Maintenance,
        Self::TrashManagement,
        Self::Eclss,
        Self::Stowage,
        Self::Airlock,
        Self::Glovebox,
    ];

    pub fn category(self) -> AreaCategory {
        match self {
            Self::CrewSleep
            | Self::FoodPrep
            | Self::Medical
            | Self::Workstation
            | Self::CommonArea
            | Self::Recreation => AreaCategory::Clean,
            Self::Exercise
            | Self::Hygiene
            | Self::Waste
            | Self::Maintenance
            | Self::TrashManagement => AreaCategory::Dirty,
            Self::Eclss | Self::Stowage | Self::Airlock | Self::Glovebox | Self::Unknown => {
                AreaCategory::Technical
            }
        }
    }

    /// Critical modules must sit close to the rest of the habitat.
    pub fn is_critical(self) -> bool {
        matches!(
            self,
            Self::Airlock | Self::Hygiene | Self::Medical | Self::Eclss
        )
    }

    /// Footprint used when the editor drops a module without an explicit size.
    pub fn default_footprint(self) -> Footprint {
        let (width, length, height) = match self {
            Self::CrewSleep => (2.0, 2.0, 2.5),
            Self::FoodPrep => (3.0, 2.5, 2.5),
            Self::Medical => (3.0, 3.0, 2.5),
            Self::Workstation => (2.5, 2.0, 2.5),
            Self::CommonArea => (5.0, 4.0, 2.5),
            Self::Recreation => (4.0, 3.0, 2.5),
            Self::Exercise => (3.0, 3.0, 2.5),
            Self::Hygiene => (2.0, 2.0, 2.5),
            Self::Waste => (1.5, 1.5, 2.5),
            Self::Maintenance => (3.0, 2.5, 2.5),
            Self::TrashManagement => (1.5, 1.5, 2.0),
            Self::Eclss => (3.0, 2.0, 2.5),
            Self::Stowage => (2.0, 2.0, 2.5),
            Self::Airlock => (2.5, 2.5, 2.5),
            Self::Glovebox => (1.5, 1.0, 1.5),
            Self::Unknown => (2.0, 2.0, 2.5),
        };
        Footprint {
            width,
            length,
            height,
        }
    }

    /// Editor tag, e.g. `"CREW_SLEEP"`.
    pub fn tag(self) -> &'static str {
        match self {
            Self::CrewSleep => "CREW_SLEEP",
            Self::FoodPrep => "FOOD_PREP",
            Self::Medical => "MEDICAL",
            Self::Workstation => "WORKSTATION",
            Self::CommonArea => "COMMON_AREA",
            Self::Recreation => "RECREATION",
            Self::Exercise => "EXERCISE",
            Self::Hygiene => "HYGIENE",
            Self::Waste => "WASTE",
            Self::Maintenance => "MAINTENANCE",
            Self::TrashManagement => "TRASH_MANAGEMENT",
            Self::Eclss => "ECLSS",
            Self::Stowage => "STOWAGE",
            Self::Airlock => "AIRLOCK",
            Self::Glovebox => "GLOVEBOX",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Parse an editor tag. Unrecognized tags map to `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.tag() == tag)
            .unwrap_or(Self::Unknown)
    }
}

/// 3D position in metres. `y` is up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Module footprint: width along x, length along z, height along y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: f32,
    pub length: f32,
    pub height: f32,
}

/// A placed habitat module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ModuleType,
    pub position: Vec3,
    pub size: Footprint,
}

impl Module {
    /// Place a module with its type's default footprint.
    pub fn new(id: impl Into<String>, kind: ModuleType, position: Vec3) -> Self {
        Self {
            id: id.into(),
            kind,
            position,
            size: kind.default_footprint(),
        }
    }

    pub fn with_size(mut self, size: Footprint) -> Self {
        self.size = size;
        self
    }

    pub fn category(&self) -> AreaCategory {
        self.kind.category()
    }
}

/// Euclidean distance between module centres on the x/z ground plane.
pub fn planar_distance(a: &Module, b: &Module) -> f32 {
    let dx = b.position.x - a.position.x;
    let dz = b.position.z - a.position.z;
    dx.hypot(dz)
}

// ── Layout validation ───────────────────────────────────────────────────

/// A problem found in a module collection.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Two or more modules share this id.
    DuplicateId(String),
    /// Module at this index has an empty id.
    EmptyId(usize),
    /// Footprint has a zero or negative dimension.
    NonPositiveSize { id: String, size: Footprint },
    /// Position contains NaN or infinity.
    NonFinitePosition(String),
    /// Type tag was not recognized; module is treated as technical.
    UnrecognizedType(String),
}

impl LayoutError {
    /// Whether analysis results are still meaningful despite this finding.
    pub fn is_warning(&self) -> bool {
        matches!(self, LayoutError::UnrecognizedType(_))
    }
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::DuplicateId(id) => write!(f, "Duplicate module id '{}'", id),
            LayoutError::EmptyId(index) => write!(f, "Module at index {} has an empty id", index),
            LayoutError::NonPositiveSize { id, size } => write!(
                f,
                "Module '{}' has non-positive size: {}×{}×{}",
                id, size.width, size.length, size.height
            ),
            LayoutError::NonFinitePosition(id) => {
                write!(f, "Module '{}' has a non-finite position", id)
            }
            LayoutError::UnrecognizedType(id) => write!(
                f,
                "Module '{}' has an unrecognized type, treated as technical",
                id
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Check a module collection, returning every problem found.
pub fn validate_modules(modules: &[Module]) -> Vec<LayoutError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut reported: HashSet<&str> = HashSet::new();

    for (index, m) in modules.iter().enumerate() {
        if m.id.is_empty() {
            errors.push(LayoutError::EmptyId(index));
        } else if !seen.insert(m.id.as_str()) && reported.insert(m.id.as_str()) {
            errors.push(LayoutError::DuplicateId(m.id.clone()));
        }

        let s = m.size;
        if s.width <= 0.0 || s.length <= 0.0 || s.height <= 0.0 {
            errors.push(LayoutError::NonPositiveSize {
                id: m.id.clone(),
                size: s,
            });
        }

        let p = m.position;
        if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
            errors.push(LayoutError::NonFinitePosition(m.id.clone()));
        }

        if m.kind == ModuleType::Unknown {
            errors.push(LayoutError::UnrecognizedType(m.id.clone()));
        }
    }

    for e in &errors {
        if e.is_warning() {
            log::debug!("{}", e);
        } else {
            log::warn!("{}", e);
        }
    }
    errors
}
