//! Selection summary for the action bar.

use serde::{Deserialize, Serialize};

use crate::models::BedCatalog;

use super::selection::SelectionSet;

/// Maximum bed chips rendered before collapsing into "+N more".
const MAX_CHIPS: usize = 3;

/// A compact bed reference rendered as a chip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BedChip {
    pub bed_id: String,
    pub bed_number: String,
    pub ward_name: String,
}

/// Inline detail shown when exactly one bed is selected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SingleBedDetail {
    pub type_label: String,
    pub room: String,
    pub price_per_day: i64,
    pub amenities: Vec<String>,
}

/// Aggregate view of the current selection for the action bar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionSummary {
    /// Up to [`MAX_CHIPS`] chips, in selection order
    pub chips: Vec<BedChip>,
    /// Count of selected beds beyond the rendered chips
    pub overflow: usize,
    /// Total selected beds
    pub count: usize,
    /// Sum of price-per-day across the selection
    pub total_price_per_day: i64,
    /// Present only when exactly one bed is selected
    pub single: Option<SingleBedDetail>,
}

impl SelectionSummary {
    /// Build the summary, resolving ids against the catalog snapshot.
    ///
    /// Returns `None` for an empty selection (the bar renders nothing).
    /// Ids that no longer resolve in the snapshot are skipped.
    pub fn from_selection(catalog: &BedCatalog, selection: &SelectionSet) -> Option<Self> {
        let resolved: Vec<_> = selection
            .ids()
            .iter()
            .filter_map(|id| catalog.find_bed(id))
            .collect();

        if resolved.is_empty() {
            return None;
        }

        let chips = resolved
            .iter()
            .take(MAX_CHIPS)
            .map(|loc| BedChip {
                bed_id: loc.bed.bed_id.clone(),
                bed_number: loc.bed.bed_number.clone(),
                ward_name: loc.ward.name.clone(),
            })
            .collect();

        let single = if resolved.len() == 1 {
            let bed = resolved[0].bed;
            Some(SingleBedDetail {
                type_label: bed.bed_type.label().to_string(),
                room: bed.room.clone(),
                price_per_day: bed.price_per_day,
                amenities: bed.amenities.clone(),
            })
        } else {
            None
        };

        Some(Self {
            chips,
            overflow: resolved.len().saturating_sub(MAX_CHIPS),
            count: resolved.len(),
            total_price_per_day: resolved.iter().map(|loc| loc.bed.price_per_day).sum(),
            single,
        })
    }

    /// Display string for the aggregate tariff, e.g. "₹6,500/day".
    pub fn formatted_total(&self) -> String {
        format!("₹{}/day", format_inr(self.total_price_per_day))
    }
}

/// Indian-style digit grouping: last three digits, then pairs.
pub fn format_inr(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::new();
    let n = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        let remaining = n - i;
        if i > 0 && (remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0)) {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
