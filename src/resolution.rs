//! Round-driven resolution loop over pending type names.

use crate::config::{DependencyCategory, ResolutionCaps, PROPERTY_PREFIX};
use crate::importer::{ClassImporter, ImportState};
use std::collections::HashSet;
use std::fmt::Write as _;
use std::mem;
use tracing::{debug, info};

/// One complete resolution run: the cap policy, the round counter, and the
/// pending set of type names queued for the upcoming round.
///
/// Create one per import pass and discard it afterwards; nothing is shared
/// between runs. Registrations and draining must not interleave from
/// different threads; the run assumes one sequential caller.
#[derive(Debug)]
pub struct ResolutionRun {
    caps: ResolutionCaps,
    round: u32,
    pending: HashSet<String>,
}

impl ResolutionRun {
    pub fn new(caps: ResolutionCaps) -> Self {
        Self {
            caps,
            round: 1,
            pending: HashSet::new(),
        }
    }

    /// The round number registrations are currently checked against, i.e.
    /// the round about to run next.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn caps(&self) -> &ResolutionCaps {
        &self.caps
    }

    /// Queues `type_name` for the upcoming round if `category`'s cap still
    /// admits the current round number; otherwise the name is dropped
    /// silently. Repeated registrations of the same name within a round
    /// collapse to one entry, across categories as well.
    pub fn register(&mut self, category: DependencyCategory, type_name: impl Into<String>) {
        if self.caps.cap(category).admits(self.round) {
            self.pending.insert(type_name.into());
        }
    }

    /// Registers every name in `type_names`, one at a time. Equivalent to
    /// the same individual [`register`](Self::register) calls; no ordering
    /// guarantee.
    pub fn register_all<I>(&mut self, category: DependencyCategory, type_names: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for type_name in type_names {
            self.register(category, type_name);
        }
    }

    /// Drains and resolves the pending names round by round until a round
    /// imports nothing new. At least one round always executes, even over an
    /// empty pending set. Any error from the importer aborts the run
    /// mid-round and propagates unchanged.
    pub fn execute<I>(&mut self, classes: &mut I) -> Result<(), I::Error>
    where
        I: ClassImporter,
    {
        self.log_configuration();
        loop {
            debug!(
                round = self.round,
                pending = self.pending.len(),
                "resolving pending type names"
            );
            // The counter advances before the batch is drained, so
            // registrations made while resolving round r are checked
            // against round r + 1 caps.
            self.round += 1;
            let batch = mem::take(&mut self.pending);
            let mut new_imports = false;
            for type_name in &batch {
                let state = classes.ensure_present(type_name, self)?;
                new_imports = new_imports || state == ImportState::HadToBeImported;
            }
            if !new_imports {
                return Ok(());
            }
        }
    }

    fn log_configuration(&self) {
        let mut rendered = String::new();
        for category in DependencyCategory::ALL {
            let _ = write!(
                rendered,
                "\n{PROPERTY_PREFIX}.{} = {}",
                category.property_key(),
                self.caps.cap(category)
            );
        }
        info!(
            "automatically resolving transitive class dependencies \
             with the following configuration:{rendered}"
        );
    }
}
