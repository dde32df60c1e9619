//! Selection tracker for bulk bed actions.

use serde::{Deserialize, Serialize};

use crate::models::{Bed, BedStatus};

/// What a click on a bed resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BedClick {
    /// Bed added to the selection set
    Selected,
    /// Bed removed from the selection set
    Deselected,
    /// Occupied bed: open the occupancy detail panel instead
    OpenDetail,
    /// Reserved/maintenance bed: disabled, nothing happens
    Ignored,
}

/// Insertion-ordered set of bed ids chosen for bulk actions.
///
/// Order matters: the transfer workflow takes the first selected bed as its
/// destination. Not persisted; lives and dies with the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, bed_id: &str) -> bool {
        self.ids.iter().any(|id| id == bed_id)
    }

    /// Toggle membership, preserving insertion order. Returns `true` when
    /// the bed is selected after the call.
    pub fn toggle(&mut self, bed_id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|id| id == bed_id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(bed_id.to_string());
            true
        }
    }

    pub fn remove(&mut self, bed_id: &str) {
        self.ids.retain(|id| id != bed_id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// The first selected bed id, if any.
    pub fn first(&self) -> Option<&str> {
        self.ids.first().map(String::as_str)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Resolve a click against the bed's status and mutate the set accordingly.
///
/// Occupied beds never toggle selection: the click routes to the occupancy
/// detail panel. Reserved and maintenance beds are inert.
pub fn classify_click(bed: &Bed, selection: &mut SelectionSet) -> BedClick {
    match bed.status() {
        BedStatus::Occupied => BedClick::OpenDetail,
        BedStatus::Reserved | BedStatus::Maintenance => BedClick::Ignored,
        BedStatus::Available => {
            if selection.toggle(&bed.bed_id) {
                BedClick::Selected
            } else {
                BedClick::Deselected
            }
        }
    }
}
