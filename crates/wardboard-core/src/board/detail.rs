//! Occupancy detail panel projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::BedLocation;

/// Read-only view of a single occupied bed for the detail panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OccupancyDetail {
    pub bed_id: String,
    pub ward_name: String,
    pub room: String,
    pub bed_number: String,
    pub type_label: String,
    pub price_per_day: i64,
    pub occupant_name: String,
    pub mrn: String,
    pub acuity_label: Option<String>,
    pub diagnosis: Option<String>,
    pub attending_doctor: Option<String>,
    /// Admission timestamp (RFC3339)
    pub admitted_at: String,
    /// Human-readable stay duration, e.g. "5 days"
    pub time_since_admission: String,
    pub amenities: Vec<String>,
    pub notes: Option<String>,
}

impl OccupancyDetail {
    /// Project a located bed into the detail view.
    ///
    /// Returns `None` unless the bed is occupied. An unparseable admission
    /// timestamp degrades to an empty duration rather than failing the
    /// projection.
    pub fn project(location: &BedLocation<'_>, now: DateTime<Utc>) -> Option<Self> {
        let bed = location.bed;
        let occupant = bed.occupant()?;

        let time_since_admission = DateTime::parse_from_rfc3339(&occupant.admitted_at)
            .map(|admitted| humanize_duration(now, admitted.with_timezone(&Utc)))
            .unwrap_or_default();

        Some(Self {
            bed_id: bed.bed_id.clone(),
            ward_name: location.ward.name.clone(),
            room: bed.room.clone(),
            bed_number: bed.bed_number.clone(),
            type_label: bed.bed_type.label().to_string(),
            price_per_day: bed.price_per_day,
            occupant_name: occupant.name.clone(),
            mrn: occupant.mrn.clone(),
            acuity_label: occupant.acuity.map(|a| a.label().to_string()),
            diagnosis: occupant.diagnosis.clone(),
            attending_doctor: occupant.attending_doctor.clone(),
            admitted_at: occupant.admitted_at.clone(),
            time_since_admission,
            amenities: bed.amenities.clone(),
            notes: bed.notes.clone(),
        })
    }
}

/// Coarse elapsed-time phrase: minutes under an hour, hours under a day,
/// whole days otherwise.
fn humanize_duration(now: DateTime<Utc>, since: DateTime<Utc>) -> String {
    let minutes = (now - since).num_minutes().max(0);
    if minutes < 60 {
        plural(minutes, "minute")
    } else if minutes < 60 * 24 {
        plural(minutes / 60, "hour")
    } else {
        plural(minutes / (60 * 24), "day")
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}
