//! Bounded transitive dependency resolution for compiled class imports.
//!
//! While a class is imported, it references further type names (member
//! types, accessed types, supertypes, enclosing types, annotation types,
//! types in generic signatures). Each reference category carries an
//! iteration cap that decides up to which resolution round newly discovered
//! names of that category are still queued for import. [`ResolutionRun`]
//! drains the queued names round by round until a round imports nothing new.

mod config;
mod importer;
mod resolution;

pub use config::{
    ConfigError, DependencyCategory, IterationCap, ResolutionCaps, PROPERTY_PREFIX,
};
pub use importer::{ClassImporter, ImportState};
pub use resolution::ResolutionRun;

#[cfg(test)]
mod tests;
