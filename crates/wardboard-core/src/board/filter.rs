//! Bed filter engine.
//!
//! Pure narrowing of the catalog tree to the visible subset. Reserved and
//! maintenance beds are excluded from this view before any user criterion
//! applies; remaining criteria combine with logical AND.

use serde::{Deserialize, Serialize};

use crate::models::{BedCatalog, BedStatus, BedType, Floor};

/// Filter criteria for the bed board.
///
/// `Default` means "no criteria": every available or occupied bed is visible.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BedFilter {
    /// Free-text search over bed number, ward name, and occupant name
    pub search: String,
    pub floor_id: Option<String>,
    pub ward_id: Option<String>,
    pub status: Option<BedStatus>,
    pub bed_type: Option<BedType>,
}

impl BedFilter {
    pub fn is_empty(&self) -> bool {
        *self == BedFilter::default()
    }
}

/// The visible subset of the catalog after filtering.
///
/// Floors whose wards are all empty after bed-level filtering are pruned,
/// as are wards left without beds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredBoard {
    pub floors: Vec<Floor>,
}

impl FilteredBoard {
    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn bed_count(&self) -> usize {
        self.floors
            .iter()
            .flat_map(|f| f.wards.iter())
            .map(|w| w.beds.len())
            .sum()
    }
}

/// Apply filter criteria to a catalog snapshot.
///
/// Pure: the same `(catalog, filter)` pair always yields the same board,
/// and the result is a subset of the unfiltered view.
pub fn filter_board(catalog: &BedCatalog, filter: &BedFilter) -> FilteredBoard {
    let search = filter.search.trim().to_lowercase();

    let floors = catalog
        .floors
        .iter()
        .filter(|floor| match &filter.floor_id {
            Some(id) => &floor.floor_id == id,
            None => true,
        })
        .filter_map(|floor| {
            let wards: Vec<_> = floor
                .wards
                .iter()
                .filter(|ward| match &filter.ward_id {
                    Some(id) => &ward.ward_id == id,
                    None => true,
                })
                .filter_map(|ward| {
                    let beds: Vec<_> = ward
                        .beds
                        .iter()
                        .filter(|bed| bed_visible(bed, &ward.name, filter, &search))
                        .cloned()
                        .collect();
                    if beds.is_empty() {
                        None
                    } else {
                        let mut ward = ward.clone();
                        ward.beds = beds;
                        Some(ward)
                    }
                })
                .collect();

            if wards.is_empty() {
                None
            } else {
                let mut floor = floor.clone();
                floor.wards = wards;
                Some(floor)
            }
        })
        .collect();

    FilteredBoard { floors }
}

fn bed_visible(
    bed: &crate::models::Bed,
    ward_name: &str,
    filter: &BedFilter,
    search: &str,
) -> bool {
    // Only available and occupied beds ever appear on this view.
    if !matches!(bed.status(), BedStatus::Available | BedStatus::Occupied) {
        return false;
    }

    if let Some(status) = filter.status {
        if bed.status() != status {
            return false;
        }
    }

    if let Some(bed_type) = filter.bed_type {
        if bed.bed_type != bed_type {
            return false;
        }
    }

    if search.is_empty() {
        return true;
    }

    bed.bed_number.to_lowercase().contains(search)
        || ward_name.to_lowercase().contains(search)
        || bed
            .occupant()
            .map(|o| o.name.to_lowercase().contains(search))
            .unwrap_or(false)
}

/// Memoizing wrapper around [`filter_board`].
///
/// Derived state is recomputed on every keystroke in the UI shell; caching
/// on the criteria tuple keeps repeat lookups free without giving up the
/// purity of the underlying function.
#[derive(Debug, Default)]
pub struct FilterEngine {
    cache: Option<(BedFilter, FilteredBoard)>,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the catalog, reusing the cached result when criteria are
    /// unchanged since the last call.
    pub fn apply(&mut self, catalog: &BedCatalog, filter: &BedFilter) -> &FilteredBoard {
        let stale = match &self.cache {
            Some((cached_filter, _)) => cached_filter != filter,
            None => true,
        };
        if stale {
            let board = filter_board(catalog, filter);
            self.cache = Some((filter.clone(), board));
        }
        // Cache was just populated above when empty.
        &self.cache.as_ref().unwrap().1
    }

    /// Drop the cached result (after a catalog refresh).
    pub fn invalidate(&mut self) {
        self.cache = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bed, BedState, BedType, Floor, Occupant, Ward};

    fn occupant(name: &str) -> Occupant {
        Occupant {
            name: name.into(),
            mrn: "MRN-1".into(),
            admitted_at: "2026-08-20T09:00:00+00:00".into(),
            acuity: None,
            diagnosis: None,
            attending_doctor: None,
        }
    }

    fn catalog() -> BedCatalog {
        let mut b1 = Bed::new("WA-101-1".into(), "101".into(), "101-1".into(), BedType::Ward, 3500);
        b1.state = BedState::Occupied(occupant("Harish Kalyan"));
        let b2 = Bed::new("WA-102-1".into(), "102".into(), "102-1".into(), BedType::Ward, 3500);
        let mut b3 = Bed::new("WA-103-1".into(), "103".into(), "103-1".into(), BedType::Ward, 3500);
        b3.state = BedState::Reserved;
        let mut b4 = Bed::new("IC-201-1".into(), "201".into(), "201-1".into(), BedType::Icu, 9000);
        b4.state = BedState::Maintenance;
        let b5 = Bed::new("IC-201-2".into(), "201".into(), "201-2".into(), BedType::Icu, 9000);

        BedCatalog::new(vec![
            Floor {
                floor_id: "F1".into(),
                name: "First Floor".into(),
                level: 1,
                wards: vec![Ward {
                    ward_id: "WA".into(),
                    name: "General Ward A".into(),
                    beds: vec![b1, b2, b3],
                }],
            },
            Floor {
                floor_id: "F2".into(),
                name: "Second Floor".into(),
                level: 2,
                wards: vec![Ward {
                    ward_id: "IC".into(),
                    name: "Intensive Care".into(),
                    beds: vec![b4, b5],
                }],
            },
        ])
    }

    #[test]
    fn test_reserved_and_maintenance_never_visible() {
        let board = filter_board(&catalog(), &BedFilter::default());
        for floor in &board.floors {
            for ward in &floor.wards {
                for bed in &ward.beds {
                    assert!(matches!(
                        bed.status(),
                        BedStatus::Available | BedStatus::Occupied
                    ));
                }
            }
        }
        assert_eq!(board.bed_count(), 3);
    }

    #[test]
    fn test_search_matches_occupant_name() {
        let filter = BedFilter {
            search: "harish".into(),
            ..Default::default()
        };
        let board = filter_board(&catalog(), &filter);
        assert_eq!(board.bed_count(), 1);
        assert_eq!(board.floors[0].wards[0].beds[0].bed_id, "WA-101-1");
    }

    #[test]
    fn test_search_matches_ward_name() {
        let filter = BedFilter {
            search: "intensive".into(),
            ..Default::default()
        };
        let board = filter_board(&catalog(), &filter);
        // Only the available ICU bed; the maintenance one stays hidden.
        assert_eq!(board.bed_count(), 1);
        assert_eq!(board.floors[0].wards[0].beds[0].bed_id, "IC-201-2");
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let filter = BedFilter {
            floor_id: Some("F1".into()),
            status: Some(BedStatus::Available),
            ..Default::default()
        };
        let board = filter_board(&catalog(), &filter);
        assert_eq!(board.bed_count(), 1);
        assert_eq!(board.floors[0].wards[0].beds[0].bed_id, "WA-102-1");
    }

    #[test]
    fn test_empty_result_prunes_floors() {
        let filter = BedFilter {
            search: "no such bed".into(),
            ..Default::default()
        };
        let board = filter_board(&catalog(), &filter);
        assert!(board.is_empty());
        assert!(board.floors.is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let filter = BedFilter {
            bed_type: Some(BedType::Ward),
            ..Default::default()
        };
        let once = filter_board(&catalog(), &filter);
        let narrowed = BedCatalog::new(once.floors.clone());
        let twice = filter_board(&narrowed, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_engine_reuses_cache_until_criteria_change() {
        let catalog = catalog();
        let mut engine = FilterEngine::new();
        let filter = BedFilter {
            search: "ward a".into(),
            ..Default::default()
        };

        let first = engine.apply(&catalog, &filter).clone();
        let second = engine.apply(&catalog, &filter).clone();
        assert_eq!(first, second);

        let relaxed = engine.apply(&catalog, &BedFilter::default()).clone();
        assert!(relaxed.bed_count() >= first.bed_count());
    }
}
