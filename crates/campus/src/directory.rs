//! Spot directory with load-time alias expansion.
//!
//! Aliases are resolved while the directory is built: each alias is
//! normalized and its target's entry is copied under the alias's
//! normalized key. Lookup is therefore always a single map access, never
//! a runtime indirection. An unknown name resolves to `None` rather than
//! an error; remote data may reference spots not yet known locally.

use std::collections::HashMap;
use std::sync::Arc;

use crate::identifiers::SpotIdentifier;
use crate::name::normalize_name;
use crate::spot::{campus_aliases, campus_spots, Spot};

pub struct SpotDirectory {
    /// Insertion order; drives the nearest-spot tie-break.
    spots: Vec<Arc<Spot>>,
    by_name: HashMap<String, Arc<Spot>>,
    by_id: HashMap<SpotIdentifier, Arc<Spot>>,
}

impl SpotDirectory {
    /// Build a directory from a spot list and `(alias, canonical name)`
    /// pairs. An alias whose target is not in the list is skipped.
    pub fn new(spots: Vec<Spot>, aliases: &[(&str, &str)]) -> Self {
        let spots: Vec<Arc<Spot>> = spots.into_iter().map(Arc::new).collect();

        let mut by_name: HashMap<String, Arc<Spot>> = spots
            .iter()
            .map(|s| (normalize_name(&s.name), s.clone()))
            .collect();

        for (alias, target) in aliases {
            if let Some(spot) = by_name.get(&normalize_name(target)).cloned() {
                by_name.insert(normalize_name(alias), spot);
            }
        }

        let by_id = spots.iter().map(|s| (s.id.clone(), s.clone())).collect();

        Self { spots, by_name, by_id }
    }

    /// The builtin campus registry with its alias table.
    pub fn campus() -> Self {
        Self::new(campus_spots(), &campus_aliases())
    }

    /// Resolve a raw (possibly aliased, possibly dirty) display name.
    pub fn resolve(&self, raw_name: &str) -> Option<&Arc<Spot>> {
        self.by_name.get(&normalize_name(raw_name))
    }

    pub fn get(&self, id: &SpotIdentifier) -> Option<&Arc<Spot>> {
        self.by_id.get(id)
    }

    /// All spots, in directory order.
    pub fn spots(&self) -> &[Arc<Spot>] {
        &self.spots
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}
