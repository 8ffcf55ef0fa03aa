//! Locally owned institution list, updated through a reducer.
//!
//! Every change to the list goes through [`InstitutionList::apply`], which is
//! the only place that decides ordering:
//! - `Loaded` replaces everything and takes the server's order as-is
//! - `Added` appends and re-sorts by `uf` (stable)
//! - `Updated` and `Removed` patch by ID and never re-sort

use common::InstitutionId;

use crate::model::Institution;

/// A confirmed change to the institution list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// The full list was (re)fetched.
    Loaded(Vec<Institution>),
    /// The server created this institution.
    Added(Institution),
    /// The server accepted new fields for this institution.
    Updated(Institution),
    /// The server removed the institution with this ID.
    Removed(InstitutionId),
}

/// Ordered sequence of institution snapshots mirroring the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstitutionList {
    items: Vec<Institution>,
}

impl InstitutionList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a confirmed change.
    ///
    /// Returns false if the event referred to an ID that is not in the list.
    pub fn apply(&mut self, event: ListEvent) -> bool {
        match event {
            ListEvent::Loaded(items) => {
                self.items = items;
                true
            }
            ListEvent::Added(institution) => {
                self.items.push(institution);
                self.items.sort_by(|a, b| a.uf.cmp(&b.uf));
                true
            }
            ListEvent::Updated(institution) => {
                match self.items.iter_mut().find(|i| i.id == institution.id) {
                    Some(slot) => {
                        *slot = institution;
                        true
                    }
                    None => false,
                }
            }
            ListEvent::Removed(id) => {
                let before = self.items.len();
                self.items.retain(|i| i.id != id);
                self.items.len() != before
            }
        }
    }

    /// The institutions in display order.
    pub fn items(&self) -> &[Institution] {
        &self.items
    }

    /// Looks up a row by ID.
    pub fn get(&self, id: InstitutionId) -> Option<&Institution> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
