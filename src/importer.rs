//! Seam to the external collaborator that materializes class definitions.

use crate::resolution::ResolutionRun;

/// Outcome of asking the importer to make a type available in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportState {
    /// The type was already part of the imported model; nothing happened.
    AlreadyPresent,
    /// A new class definition was materialized just now.
    HadToBeImported,
}

/// Materializes a class definition for a type name unless it is already
/// present.
///
/// `ensure_present` receives the resolution run so that importing a
/// previously-unseen type can register the references discovered while
/// parsing it. The run has already advanced its round counter when the call
/// happens, so those registrations are gated by the next round's caps and
/// land in the next round's pending set.
///
/// Errors are not interpreted by the resolution loop; whatever error type
/// the importer raises aborts the run and propagates unchanged.
pub trait ClassImporter {
    type Error;

    fn ensure_present(
        &mut self,
        type_name: &str,
        resolution: &mut ResolutionRun,
    ) -> Result<ImportState, Self::Error>;
}
