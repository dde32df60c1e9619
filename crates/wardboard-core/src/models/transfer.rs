//! Transfer request models.

use serde::{Deserialize, Serialize};

/// Closed set of reasons a transfer can be scheduled for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransferReason {
    MedicalEscalation,
    MedicalDeescalation,
    IsolationRequired,
    PatientRequest,
    WardMaintenance,
    Administrative,
}

impl TransferReason {
    /// Display label for the reason picker.
    pub fn label(&self) -> &'static str {
        match self {
            TransferReason::MedicalEscalation => "Medical escalation",
            TransferReason::MedicalDeescalation => "Medical de-escalation",
            TransferReason::IsolationRequired => "Isolation required",
            TransferReason::PatientRequest => "Patient request",
            TransferReason::WardMaintenance => "Ward maintenance",
            TransferReason::Administrative => "Administrative",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            TransferReason::MedicalEscalation => "medical_escalation",
            TransferReason::MedicalDeescalation => "medical_deescalation",
            TransferReason::IsolationRequired => "isolation_required",
            TransferReason::PatientRequest => "patient_request",
            TransferReason::WardMaintenance => "ward_maintenance",
            TransferReason::Administrative => "administrative",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "medical_escalation" => Some(TransferReason::MedicalEscalation),
            "medical_deescalation" => Some(TransferReason::MedicalDeescalation),
            "isolation_required" => Some(TransferReason::IsolationRequired),
            "patient_request" => Some(TransferReason::PatientRequest),
            "ward_maintenance" => Some(TransferReason::WardMaintenance),
            "administrative" => Some(TransferReason::Administrative),
            _ => None,
        }
    }

    /// All reasons, in picker order.
    pub fn all() -> &'static [TransferReason] {
        &[
            TransferReason::MedicalEscalation,
            TransferReason::MedicalDeescalation,
            TransferReason::IsolationRequired,
            TransferReason::PatientRequest,
            TransferReason::WardMaintenance,
            TransferReason::Administrative,
        ]
    }
}

/// Snapshot of the destination bed held while the transfer modal is open.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DestinationBed {
    pub bed_id: String,
    pub bed_number: String,
    pub ward_name: String,
    pub price_per_day: i64,
}

/// The payload produced by a confirmed transfer.
///
/// Ephemeral in this layer: handed to the backend collaborator and
/// discarded; no durable record is written here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferRequest {
    pub patient_id: String,
    pub patient_name: String,
    pub destination_bed_id: String,
    pub destination_bed_number: String,
    pub reason: TransferReason,
    /// Scheduled date/time (RFC3339)
    pub scheduled_at: String,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_codes_round_trip() {
        for reason in TransferReason::all() {
            assert_eq!(TransferReason::from_code(reason.code()), Some(*reason));
        }
        assert_eq!(TransferReason::from_code("vacation"), None);
    }

    #[test]
    fn test_reason_labels_are_distinct() {
        let labels: Vec<&str> = TransferReason::all().iter().map(|r| r.label()).collect();
        let mut deduped = labels.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(labels.len(), deduped.len());
    }
}
