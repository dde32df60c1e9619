//! Demo dataset.
//!
//! A small, deterministic hospital used by the demo board factory, UI
//! previews, and the integration tests. Ids and timestamps are fixed so
//! scenarios are reproducible.

use crate::db::{Database, DbResult};
use crate::models::{
    AcuityLevel, Bed, BedCatalog, BedState, BedType, Floor, Occupant, Patient, Ward,
};

fn bed(id: &str, room: &str, number: &str, bed_type: BedType, price: i64) -> Bed {
    Bed::new(id.into(), room.into(), number.into(), bed_type, price)
}

fn occupant(
    name: &str,
    mrn: &str,
    admitted_at: &str,
    acuity: AcuityLevel,
    diagnosis: &str,
    doctor: &str,
) -> Occupant {
    Occupant {
        name: name.into(),
        mrn: mrn.into(),
        admitted_at: admitted_at.into(),
        acuity: Some(acuity),
        diagnosis: Some(diagnosis.into()),
        attending_doctor: Some(doctor.into()),
    }
}

/// The demo floor → ward → bed tree.
pub fn demo_catalog() -> BedCatalog {
    // Ground floor: general wards A and B
    let mut wa_101 = bed("WA-101-1", "101", "101-1", BedType::Ward, 3500);
    wa_101.amenities = vec!["Oxygen".into()];
    wa_101.state = BedState::Occupied(occupant(
        "Harish Kalyan",
        "MRN-2210",
        "2026-08-20T09:00:00+00:00",
        AcuityLevel::Medium,
        "Community-acquired pneumonia",
        "Dr. Meenakshi Rao",
    ));

    let mut wa_102 = bed("WA-102-1", "102", "102-1", BedType::Ward, 3500);
    wa_102.amenities = vec!["Oxygen".into()];
    wa_102.last_cleaned = Some("2026-08-24T18:30:00+00:00".into());

    let mut wa_103 = bed("WA-103-1", "103", "103-1", BedType::Ward, 3500);
    wa_103.state = BedState::Reserved;

    let mut wb_201 = bed("WB-201-1", "201", "201-1", BedType::Ward, 3000);
    wb_201.state = BedState::Occupied(occupant(
        "Selvi Raman",
        "MRN-1873",
        "2026-08-22T14:00:00+00:00",
        AcuityLevel::Low,
        "Post-operative observation",
        "Dr. Arjun Nair",
    ));

    let mut wb_203 = bed("WB-203-1", "203", "203-1", BedType::Ward, 3000);
    wb_203.last_cleaned = Some("2026-08-25T07:00:00+00:00".into());

    // First floor: critical care
    let mut icu_1 = bed("ICU-301-1", "301", "301-1", BedType::Icu, 9000);
    icu_1.amenities = vec!["Ventilator".into(), "Cardiac Monitor".into()];
    icu_1.state = BedState::Occupied(occupant(
        "Mohammed Faisal",
        "MRN-2301",
        "2026-08-24T22:15:00+00:00",
        AcuityLevel::Critical,
        "Septic shock",
        "Dr. Meenakshi Rao",
    ));

    let mut icu_2 = bed("ICU-301-2", "301", "301-2", BedType::Icu, 9000);
    icu_2.amenities = vec!["Ventilator".into(), "Cardiac Monitor".into()];

    let mut icu_3 = bed("ICU-302-1", "302", "302-1", BedType::Icu, 9000);
    icu_3.state = BedState::Maintenance;
    icu_3.notes = Some("Suction line replacement".into());

    let mut hdu_1 = bed("HDU-303-1", "303", "303-1", BedType::Hdu, 6000);
    hdu_1.amenities = vec!["Cardiac Monitor".into()];

    // Second floor: private and isolation rooms
    let mut pr_401 = bed("PR-401-1", "401", "401-1", BedType::Private, 5500);
    pr_401.amenities = vec!["TV".into(), "Attached Bathroom".into()];

    let mut iso_402 = bed("ISO-402-1", "402", "402-1", BedType::Isolation, 7000);
    iso_402.amenities = vec!["Negative Pressure".into()];
    iso_402.state = BedState::Reserved;

    BedCatalog::new(vec![
        Floor {
            floor_id: "F1".into(),
            name: "Ground Floor".into(),
            level: 1,
            wards: vec![
                Ward {
                    ward_id: "WA".into(),
                    name: "General Ward A".into(),
                    beds: vec![wa_101, wa_102, wa_103],
                },
                Ward {
                    ward_id: "WB".into(),
                    name: "General Ward B".into(),
                    beds: vec![wb_201, wb_203],
                },
            ],
        },
        Floor {
            floor_id: "F2".into(),
            name: "First Floor".into(),
            level: 2,
            wards: vec![
                Ward {
                    ward_id: "HDU".into(),
                    name: "High Dependency".into(),
                    beds: vec![hdu_1],
                },
                Ward {
                    ward_id: "ICU".into(),
                    name: "Intensive Care".into(),
                    beds: vec![icu_1, icu_2, icu_3],
                },
            ],
        },
        Floor {
            floor_id: "F3".into(),
            name: "Second Floor".into(),
            level: 3,
            wards: vec![Ward {
                ward_id: "PRV".into(),
                name: "Private Rooms".into(),
                beds: vec![pr_401, iso_402],
            }],
        },
    ])
}

fn patient(local_id: &str, name: &str, mrn: &str, ward: Option<&str>) -> Patient {
    Patient {
        local_id: local_id.into(),
        mrn: mrn.into(),
        name: name.into(),
        date_of_birth: None,
        current_ward: ward.map(Into::into),
        notes: None,
        created_at: "2026-08-01T00:00:00+00:00".into(),
        updated_at: "2026-08-01T00:00:00+00:00".into(),
    }
}

/// Patients shown in the transfer picker.
pub fn demo_patients() -> Vec<Patient> {
    vec![
        patient("pat-priya", "Priya Sharma", "MRN-1042", None),
        patient(
            "pat-harish",
            "Harish Kalyan",
            "MRN-2210",
            Some("General Ward A"),
        ),
        patient(
            "pat-selvi",
            "Selvi Raman",
            "MRN-1873",
            Some("General Ward B"),
        ),
        patient(
            "pat-faisal",
            "Mohammed Faisal",
            "MRN-2301",
            Some("Intensive Care"),
        ),
        patient("pat-ananya", "Ananya Iyer", "MRN-1560", None),
    ]
}

/// Seed a store with the demo hospital.
pub fn seed_demo(db: &Database) -> DbResult<()> {
    db.save_catalog(&demo_catalog())?;
    for patient in demo_patients() {
        db.insert_patient(&patient)?;
    }
    Ok(())
}
