//! Property-based tests for the filter engine, the selection set, and the
//! transfer workflow, over randomly generated catalogs.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use wardboard_core::board::{classify_click, filter_board, BedClick, BedFilter, SelectionSet};
use wardboard_core::models::{
    AcuityLevel, Bed, BedCatalog, BedState, BedStatus, BedType, DestinationBed, Floor, Occupant,
    Patient, TransferReason, Ward,
};
use wardboard_core::transfer::{TransferWorkflow, WorkflowStage};

fn arb_bed_type() -> impl Strategy<Value = BedType> {
    prop_oneof![
        Just(BedType::Icu),
        Just(BedType::Hdu),
        Just(BedType::Ward),
        Just(BedType::Private),
        Just(BedType::Isolation),
    ]
}

fn arb_state() -> impl Strategy<Value = BedState> {
    prop_oneof![
        Just(BedState::Available),
        Just(BedState::Reserved),
        Just(BedState::Maintenance),
        "[A-Z][a-z]{2,8}".prop_map(|name| {
            BedState::Occupied(Occupant {
                name,
                mrn: "MRN-0001".into(),
                admitted_at: "2026-08-20T09:00:00+00:00".into(),
                acuity: Some(AcuityLevel::Medium),
                diagnosis: None,
                attending_doctor: None,
            })
        }),
    ]
}

fn arb_bed(index: usize) -> impl Strategy<Value = Bed> {
    (arb_bed_type(), arb_state(), 500i64..10_000).prop_map(move |(bed_type, state, price)| {
        let mut bed = Bed::new(
            format!("BED-{index}"),
            format!("{}", 100 + index),
            format!("{}-1", 100 + index),
            bed_type,
            price,
        );
        bed.state = state;
        bed
    })
}

/// A single-floor catalog of up to twelve beds split over two wards.
fn arb_catalog() -> impl Strategy<Value = BedCatalog> {
    (1usize..=12)
        .prop_flat_map(|n| (0..n).map(|i| arb_bed(i).boxed()).collect::<Vec<_>>())
        .prop_map(|beds| {
            let split = beds.len() / 2;
            let (a, b) = beds.split_at(split);
            let mut wards = Vec::new();
            if !a.is_empty() {
                wards.push(Ward {
                    ward_id: "WA".into(),
                    name: "General Ward A".into(),
                    beds: a.to_vec(),
                });
            }
            if !b.is_empty() {
                wards.push(Ward {
                    ward_id: "WB".into(),
                    name: "General Ward B".into(),
                    beds: b.to_vec(),
                });
            }
            BedCatalog::new(vec![Floor {
                floor_id: "F1".into(),
                name: "Ground Floor".into(),
                level: 1,
                wards,
            }])
        })
}

fn arb_filter() -> impl Strategy<Value = BedFilter> {
    (
        prop_oneof![Just(String::new()), "[a-z]{1,4}".prop_map(String::from)],
        proptest::option::of(prop_oneof![
            Just(BedStatus::Available),
            Just(BedStatus::Occupied)
        ]),
        proptest::option::of(arb_bed_type()),
    )
        .prop_map(|(search, status, bed_type)| BedFilter {
            search,
            floor_id: None,
            ward_id: None,
            status,
            bed_type,
        })
}

fn bed_ids(catalog: &BedCatalog) -> Vec<String> {
    catalog.beds().map(|b| b.bed_id.clone()).collect()
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).single().unwrap()
}

proptest! {
    /// Reserved and maintenance beds never reach the visible board, under
    /// any combination of criteria.
    #[test]
    fn filter_hides_unselectable_statuses(catalog in arb_catalog(), filter in arb_filter()) {
        let board = filter_board(&catalog, &filter);
        for floor in &board.floors {
            for ward in &floor.wards {
                for bed in &ward.beds {
                    prop_assert!(
                        matches!(bed.status(), BedStatus::Available | BedStatus::Occupied),
                        "bed {} leaked with status {:?}",
                        bed.bed_id,
                        bed.status()
                    );
                }
            }
        }
    }

    /// The visible board is always a subset of the catalog.
    #[test]
    fn filter_narrows(catalog in arb_catalog(), filter in arb_filter()) {
        let board = filter_board(&catalog, &filter);
        let all = bed_ids(&catalog);
        let visible = bed_ids(&BedCatalog::new(board.floors.clone()));
        prop_assert!(visible.len() <= all.len());
        for id in &visible {
            prop_assert!(all.contains(id), "bed {} not in the source catalog", id);
        }
    }

    /// Filtering an already-filtered board with the same criteria changes
    /// nothing.
    #[test]
    fn filter_is_idempotent(catalog in arb_catalog(), filter in arb_filter()) {
        let once = filter_board(&catalog, &filter);
        let twice = filter_board(&BedCatalog::new(once.floors.clone()), &filter);
        prop_assert_eq!(once, twice);
    }

    /// Pruning leaves no empty wards or floors behind.
    #[test]
    fn filter_prunes_empty_groups(catalog in arb_catalog(), filter in arb_filter()) {
        let board = filter_board(&catalog, &filter);
        for floor in &board.floors {
            prop_assert!(!floor.wards.is_empty());
            for ward in &floor.wards {
                prop_assert!(!ward.beds.is_empty());
            }
        }
    }

    /// Clicking an available bed twice restores the selection exactly.
    #[test]
    fn available_click_is_an_involution(catalog in arb_catalog()) {
        let mut selection = SelectionSet::new();
        let available: Vec<Bed> = catalog
            .beds()
            .filter(|b| b.is_selectable())
            .cloned()
            .collect();

        for bed in &available {
            let before: Vec<String> = selection.ids().to_vec();
            let first = classify_click(bed, &mut selection);
            let second = classify_click(bed, &mut selection);
            prop_assert_eq!(first, BedClick::Selected);
            prop_assert_eq!(second, BedClick::Deselected);
            prop_assert_eq!(selection.ids(), &before[..]);
        }
    }

    /// Clicks on occupied, reserved, or maintenance beds never change the
    /// selection.
    #[test]
    fn non_available_clicks_leave_selection_alone(catalog in arb_catalog()) {
        let mut selection = SelectionSet::new();
        for bed in catalog.beds().filter(|b| !b.is_selectable()) {
            let before: Vec<String> = selection.ids().to_vec();
            let outcome = classify_click(bed, &mut selection);
            prop_assert_ne!(outcome, BedClick::Selected);
            prop_assert_eq!(selection.ids(), &before[..]);
        }
    }

    /// Opening the wizard yields the initial state no matter what was left
    /// behind by an earlier, abandoned run.
    #[test]
    fn workflow_open_always_resets(
        search in "[a-z ]{0,12}",
        notes in "[a-z ]{0,12}",
        pick_reason in any::<bool>(),
        pick_patient in any::<bool>(),
    ) {
        let mut workflow = TransferWorkflow::new();
        workflow.open_with(None, now());
        workflow.set_search_text(search);
        workflow.set_notes(notes);
        if pick_reason {
            workflow.set_reason(Some(TransferReason::Administrative));
        }
        if pick_patient {
            workflow.select_patient(Patient::new("Priya Sharma".into(), "MRN-1042".into()));
        }

        let destination = DestinationBed {
            bed_id: "WA-102-1".into(),
            bed_number: "102-1".into(),
            ward_name: "General Ward A".into(),
            price_per_day: 3500,
        };
        workflow.open_with(Some(destination), now());

        prop_assert!(workflow.is_open());
        prop_assert_eq!(workflow.stage(), WorkflowStage::SearchingPatient);
        prop_assert!(workflow.patient().is_none());
        prop_assert!(workflow.reason().is_none());
        prop_assert_eq!(workflow.search_text(), "");
        prop_assert_eq!(workflow.notes(), "");
        prop_assert_eq!(workflow.scheduled_at(), now());
    }

    /// The confirm button is enabled exactly when a submit would succeed.
    #[test]
    fn submittable_agrees_with_submit(
        pick_patient in any::<bool>(),
        pick_destination in any::<bool>(),
        pick_reason in any::<bool>(),
    ) {
        let mut workflow = TransferWorkflow::new();
        let destination = pick_destination.then(|| DestinationBed {
            bed_id: "WA-102-1".into(),
            bed_number: "102-1".into(),
            ward_name: "General Ward A".into(),
            price_per_day: 3500,
        });
        workflow.open_with(destination, now());
        if pick_patient {
            workflow.select_patient(Patient::new("Priya Sharma".into(), "MRN-1042".into()));
        }
        if pick_reason {
            workflow.set_reason(Some(TransferReason::MedicalDeescalation));
        }

        let submittable = workflow.is_submittable();
        prop_assert_eq!(submittable, workflow.submit(now()).is_ok());
    }
}
