//! Per-category iteration caps and their configuration source.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// Prefix under which every resolution cap is configured in the flat
/// key-value store handed to [`ResolutionCaps::from_properties`].
pub const PROPERTY_PREFIX: &str = "import.dependency_resolution";

/// Error raised when a configured cap value cannot be read.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid iteration cap {PROPERTY_PREFIX}.{key} = {value:?}: {source}")]
    InvalidCap {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// The kind of reference through which a type name was discovered during
/// class import. Each category is gated by its own [`IterationCap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependencyCategory {
    MemberType,
    AccessToType,
    Supertype,
    EnclosingType,
    AnnotationType,
    GenericSignatureType,
}

impl DependencyCategory {
    pub const ALL: [DependencyCategory; 6] = [
        DependencyCategory::MemberType,
        DependencyCategory::AccessToType,
        DependencyCategory::Supertype,
        DependencyCategory::EnclosingType,
        DependencyCategory::AnnotationType,
        DependencyCategory::GenericSignatureType,
    ];

    /// Configuration key suffix under [`PROPERTY_PREFIX`].
    pub fn property_key(self) -> &'static str {
        match self {
            DependencyCategory::MemberType => "max_iterations_for_member_types",
            DependencyCategory::AccessToType => "max_iterations_for_accesses_to_types",
            DependencyCategory::Supertype => "max_iterations_for_supertypes",
            DependencyCategory::EnclosingType => "max_iterations_for_enclosing_types",
            DependencyCategory::AnnotationType => "max_iterations_for_annotation_types",
            DependencyCategory::GenericSignatureType => {
                "max_iterations_for_generic_signature_types"
            }
        }
    }

    /// Direct members and accesses are only resolved at the first depth;
    /// structural relationships are resolved to full closure.
    fn default_cap(self) -> IterationCap {
        match self {
            DependencyCategory::MemberType | DependencyCategory::AccessToType => {
                IterationCap::Bounded(1)
            }
            DependencyCategory::Supertype
            | DependencyCategory::EnclosingType
            | DependencyCategory::AnnotationType
            | DependencyCategory::GenericSignatureType => IterationCap::Unbounded,
        }
    }
}

/// Maximum round number through which registrations of a category are still
/// honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IterationCap {
    /// Registrations are honored during rounds `1..=max` only.
    Bounded(u32),
    /// Registrations are honored in every round.
    Unbounded,
}

impl IterationCap {
    pub(crate) fn admits(self, round: u32) -> bool {
        match self {
            IterationCap::Bounded(max) => round <= max,
            IterationCap::Unbounded => true,
        }
    }

    /// Configured values keep the conventional encoding: negative means
    /// unbounded, non-negative is the literal cap. Values past `u32::MAX`
    /// are treated as unbounded as well.
    fn from_configured(raw: i64) -> IterationCap {
        match u32::try_from(raw) {
            Ok(max) => IterationCap::Bounded(max),
            Err(_) => IterationCap::Unbounded,
        }
    }
}

impl fmt::Display for IterationCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IterationCap::Bounded(max) => write!(f, "{max}"),
            IterationCap::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// Immutable set of per-category iteration caps for one resolution run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionCaps {
    caps: [IterationCap; 6],
}

impl Default for ResolutionCaps {
    fn default() -> Self {
        let mut caps = [IterationCap::Unbounded; 6];
        for category in DependencyCategory::ALL {
            caps[category as usize] = category.default_cap();
        }
        Self { caps }
    }
}

impl ResolutionCaps {
    /// Reads the six recognized cap keys under [`PROPERTY_PREFIX`] from a
    /// flat key-value store. Absent keys fall back to the defaults;
    /// unrelated keys are ignored; a value that is not a parseable integer
    /// fails construction.
    pub fn from_properties(properties: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let mut caps = Self::default();
        for category in DependencyCategory::ALL {
            let key = category.property_key();
            if let Some(value) = properties.get(&format!("{PROPERTY_PREFIX}.{key}")) {
                let raw =
                    value
                        .trim()
                        .parse::<i64>()
                        .map_err(|source| ConfigError::InvalidCap {
                            key,
                            value: value.clone(),
                            source,
                        })?;
                caps.caps[category as usize] = IterationCap::from_configured(raw);
            }
        }
        Ok(caps)
    }

    pub fn with_cap(mut self, category: DependencyCategory, cap: IterationCap) -> Self {
        self.caps[category as usize] = cap;
        self
    }

    pub fn cap(&self, category: DependencyCategory) -> IterationCap {
        self.caps[category as usize]
    }
}
