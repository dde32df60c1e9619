//! Bed catalog models: the floor → ward → bed hierarchy.

use serde::{Deserialize, Serialize};

/// Flat bed status, as shown on the board and stored in the database.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BedStatus {
    Available,
    Occupied,
    Reserved,
    Maintenance,
}

impl BedStatus {
    /// Canonical code used in the database and across the FFI boundary.
    pub fn code(&self) -> &'static str {
        match self {
            BedStatus::Available => "available",
            BedStatus::Occupied => "occupied",
            BedStatus::Reserved => "reserved",
            BedStatus::Maintenance => "maintenance",
        }
    }

    /// Parse a status code. Returns `None` for unknown codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "available" => Some(BedStatus::Available),
            "occupied" => Some(BedStatus::Occupied),
            "reserved" => Some(BedStatus::Reserved),
            "maintenance" => Some(BedStatus::Maintenance),
            _ => None,
        }
    }
}

/// Bed classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BedType {
    Icu,
    Hdu,
    Ward,
    Private,
    Isolation,
}

impl BedType {
    /// Display label for chips and detail panels.
    pub fn label(&self) -> &'static str {
        match self {
            BedType::Icu => "ICU",
            BedType::Hdu => "HDU",
            BedType::Ward => "Ward",
            BedType::Private => "Private",
            BedType::Isolation => "Isolation",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            BedType::Icu => "icu",
            BedType::Hdu => "hdu",
            BedType::Ward => "ward",
            BedType::Private => "private",
            BedType::Isolation => "isolation",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "icu" => Some(BedType::Icu),
            "hdu" => Some(BedType::Hdu),
            "ward" => Some(BedType::Ward),
            "private" => Some(BedType::Private),
            "isolation" => Some(BedType::Isolation),
            _ => None,
        }
    }
}

/// Coarse severity classification for an occupant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AcuityLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl AcuityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            AcuityLevel::Low => "Low",
            AcuityLevel::Medium => "Medium",
            AcuityLevel::High => "High",
            AcuityLevel::Critical => "Critical",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AcuityLevel::Low => "low",
            AcuityLevel::Medium => "medium",
            AcuityLevel::High => "high",
            AcuityLevel::Critical => "critical",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "low" => Some(AcuityLevel::Low),
            "medium" => Some(AcuityLevel::Medium),
            "high" => Some(AcuityLevel::High),
            "critical" => Some(AcuityLevel::Critical),
            _ => None,
        }
    }
}

/// The patient record attached to an occupied bed.
///
/// Created by the admissions backend when a bed transitions to occupied;
/// read-only in this layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Occupant {
    /// Patient display name
    pub name: String,
    /// Medical record number
    pub mrn: String,
    /// Admission timestamp (RFC3339)
    pub admitted_at: String,
    /// Severity classification
    pub acuity: Option<AcuityLevel>,
    /// Working diagnosis
    pub diagnosis: Option<String>,
    /// Attending doctor name
    pub attending_doctor: Option<String>,
}

/// Bed occupancy state.
///
/// `Occupied` carries the occupant record, so "occupied ⇔ occupant present"
/// holds by construction rather than by a runtime check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", content = "occupant", rename_all = "snake_case")]
pub enum BedState {
    Available,
    Occupied(Occupant),
    Reserved,
    Maintenance,
}

impl BedState {
    /// Flat status for filters and display.
    pub fn status(&self) -> BedStatus {
        match self {
            BedState::Available => BedStatus::Available,
            BedState::Occupied(_) => BedStatus::Occupied,
            BedState::Reserved => BedStatus::Reserved,
            BedState::Maintenance => BedStatus::Maintenance,
        }
    }

    /// The occupant, when there is one.
    pub fn occupant(&self) -> Option<&Occupant> {
        match self {
            BedState::Occupied(occupant) => Some(occupant),
            _ => None,
        }
    }
}

/// A schedulable unit of hospital capacity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bed {
    /// Unique bed identifier (e.g., "WA-102-1")
    pub bed_id: String,
    /// Room label within the ward
    pub room: String,
    /// Bed number shown on the board
    pub bed_number: String,
    /// Classification
    pub bed_type: BedType,
    /// Occupancy state (carries the occupant when occupied)
    pub state: BedState,
    /// Tariff in whole rupees per day
    pub price_per_day: i64,
    /// Amenity labels (e.g., "Oxygen", "Ventilator")
    pub amenities: Vec<String>,
    /// Last housekeeping pass (RFC3339)
    pub last_cleaned: Option<String>,
    /// Free-text notes
    pub notes: Option<String>,
}

impl Bed {
    /// Create an available bed with required fields.
    pub fn new(
        bed_id: String,
        room: String,
        bed_number: String,
        bed_type: BedType,
        price_per_day: i64,
    ) -> Self {
        Self {
            bed_id,
            room,
            bed_number,
            bed_type,
            state: BedState::Available,
            price_per_day,
            amenities: Vec::new(),
            last_cleaned: None,
            notes: None,
        }
    }

    pub fn status(&self) -> BedStatus {
        self.state.status()
    }

    pub fn occupant(&self) -> Option<&Occupant> {
        self.state.occupant()
    }

    /// Whether the bed can enter the selection set. Only available beds
    /// are selectable; maintenance beds are disabled outright.
    pub fn is_selectable(&self) -> bool {
        matches!(self.state, BedState::Available)
    }
}

/// A named grouping of beds within a floor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ward {
    pub ward_id: String,
    pub name: String,
    pub beds: Vec<Bed>,
}

impl Ward {
    /// Occupied beds as a percentage of total, 0.0 for an empty ward.
    pub fn occupancy_percent(&self) -> f64 {
        if self.beds.is_empty() {
            return 0.0;
        }
        let occupied = self
            .beds
            .iter()
            .filter(|b| b.status() == BedStatus::Occupied)
            .count();
        occupied as f64 / self.beds.len() as f64 * 100.0
    }
}

/// A floor aggregates wards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Floor {
    pub floor_id: String,
    pub name: String,
    /// Ordinal used for sorting floors on the board
    pub level: i32,
    pub wards: Vec<Ward>,
}

/// A bed resolved to its position in the hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct BedLocation<'a> {
    pub floor: &'a Floor,
    pub ward: &'a Ward,
    pub bed: &'a Bed,
}

/// Immutable snapshot of the full bed hierarchy for a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BedCatalog {
    pub floors: Vec<Floor>,
}

impl BedCatalog {
    pub fn new(floors: Vec<Floor>) -> Self {
        Self { floors }
    }

    /// Iterate over every bed in the catalog.
    pub fn beds(&self) -> impl Iterator<Item = &Bed> {
        self.floors
            .iter()
            .flat_map(|f| f.wards.iter())
            .flat_map(|w| w.beds.iter())
    }

    /// Find a bed by id, with its ward and floor.
    pub fn find_bed(&self, bed_id: &str) -> Option<BedLocation<'_>> {
        for floor in &self.floors {
            for ward in &floor.wards {
                if let Some(bed) = ward.beds.iter().find(|b| b.bed_id == bed_id) {
                    return Some(BedLocation { floor, ward, bed });
                }
            }
        }
        None
    }

    pub fn total_beds(&self) -> usize {
        self.beds().count()
    }

    pub fn occupied_beds(&self) -> usize {
        self.beds()
            .filter(|b| b.status() == BedStatus::Occupied)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupant(name: &str) -> Occupant {
        Occupant {
            name: name.into(),
            mrn: "MRN-001".into(),
            admitted_at: "2026-08-20T09:00:00+00:00".into(),
            acuity: Some(AcuityLevel::Medium),
            diagnosis: None,
            attending_doctor: None,
        }
    }

    fn small_catalog() -> BedCatalog {
        let mut occupied = Bed::new(
            "WA-101-1".into(),
            "101".into(),
            "1".into(),
            BedType::Ward,
            3500,
        );
        occupied.state = BedState::Occupied(occupant("Harish Kalyan"));

        let available = Bed::new(
            "WA-102-1".into(),
            "102".into(),
            "1".into(),
            BedType::Ward,
            3500,
        );

        BedCatalog::new(vec![Floor {
            floor_id: "F1".into(),
            name: "First Floor".into(),
            level: 1,
            wards: vec![Ward {
                ward_id: "WA".into(),
                name: "General Ward A".into(),
                beds: vec![occupied, available],
            }],
        }])
    }

    #[test]
    fn test_occupied_state_carries_occupant() {
        let catalog = small_catalog();
        let location = catalog.find_bed("WA-101-1").unwrap();

        assert_eq!(location.bed.status(), BedStatus::Occupied);
        assert_eq!(location.bed.occupant().unwrap().name, "Harish Kalyan");

        let available = catalog.find_bed("WA-102-1").unwrap();
        assert_eq!(available.bed.status(), BedStatus::Available);
        assert!(available.bed.occupant().is_none());
    }

    #[test]
    fn test_selectable_statuses() {
        let mut bed = Bed::new("B1".into(), "1".into(), "1".into(), BedType::Icu, 7500);
        assert!(bed.is_selectable());

        bed.state = BedState::Maintenance;
        assert!(!bed.is_selectable());

        bed.state = BedState::Reserved;
        assert!(!bed.is_selectable());

        bed.state = BedState::Occupied(occupant("X"));
        assert!(!bed.is_selectable());
    }

    #[test]
    fn test_ward_occupancy_percent() {
        let catalog = small_catalog();
        let ward = &catalog.floors[0].wards[0];
        assert!((ward.occupancy_percent() - 50.0).abs() < f64::EPSILON);

        let empty = Ward {
            ward_id: "WX".into(),
            name: "Empty".into(),
            beds: vec![],
        };
        assert_eq!(empty.occupancy_percent(), 0.0);
    }

    #[test]
    fn test_find_bed_location() {
        let catalog = small_catalog();
        let location = catalog.find_bed("WA-102-1").unwrap();
        assert_eq!(location.ward.name, "General Ward A");
        assert_eq!(location.floor.level, 1);

        assert!(catalog.find_bed("NOPE").is_none());
    }

    #[test]
    fn test_status_codes_round_trip() {
        for status in [
            BedStatus::Available,
            BedStatus::Occupied,
            BedStatus::Reserved,
            BedStatus::Maintenance,
        ] {
            assert_eq!(BedStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(BedStatus::from_code("unknown"), None);
    }
}
