//! Patient transfer workflow.
//!
//! A small linear wizard: search for a patient, confirm the destination bed,
//! pick a reason and time, submit. Validation fails fast in a fixed
//! precedence: patient → destination bed → reason.

mod search;

pub use search::search_patients;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{DestinationBed, Patient, TransferReason, TransferRequest};

/// Workflow validation errors, one per missing required field.
///
/// The display strings are the exact messages surfaced to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("Please select a patient to transfer")]
    PatientRequired,

    #[error("Please select a destination bed")]
    DestinationRequired,

    #[error("Please select a reason for transfer")]
    ReasonRequired,
}

/// Where the wizard is in its patient-picking step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    /// Search box active, no patient chosen yet
    SearchingPatient,
    /// A patient is locked in; reason/time/notes are editable
    PatientSelected,
}

/// The transfer modal's state.
///
/// Not resumable: every open resets every field, and both cancel and a
/// successful submit discard the in-progress request.
#[derive(Debug, Clone)]
pub struct TransferWorkflow {
    open: bool,
    stage: WorkflowStage,
    search_text: String,
    patient: Option<Patient>,
    destination: Option<DestinationBed>,
    reason: Option<TransferReason>,
    scheduled_at: DateTime<Utc>,
    notes: String,
}

impl TransferWorkflow {
    /// A closed workflow.
    pub fn new() -> Self {
        Self {
            open: false,
            stage: WorkflowStage::SearchingPatient,
            search_text: String::new(),
            patient: None,
            destination: None,
            reason: None,
            scheduled_at: Utc::now(),
            notes: String::new(),
        }
    }

    /// Open the modal, optionally pre-seeding the destination bed.
    ///
    /// Always starts from the initial state: searching for a patient, no
    /// reason, schedule defaulting to `now`.
    pub fn open_with(&mut self, destination: Option<DestinationBed>, now: DateTime<Utc>) {
        self.reset(now);
        self.destination = destination;
        self.open = true;
    }

    /// Close the modal, discarding the in-progress request.
    pub fn cancel(&mut self, now: DateTime<Utc>) {
        self.reset(now);
    }

    fn reset(&mut self, now: DateTime<Utc>) {
        self.open = false;
        self.stage = WorkflowStage::SearchingPatient;
        self.search_text.clear();
        self.patient = None;
        self.destination = None;
        self.reason = None;
        self.scheduled_at = now;
        self.notes.clear();
    }

    /// Lock in a patient; clears the search text.
    pub fn select_patient(&mut self, patient: Patient) {
        self.patient = Some(patient);
        self.search_text.clear();
        self.stage = WorkflowStage::PatientSelected;
    }

    /// Drop the chosen patient and return to searching.
    pub fn clear_patient(&mut self) {
        self.patient = None;
        self.stage = WorkflowStage::SearchingPatient;
    }

    pub fn set_search_text(&mut self, text: String) {
        self.search_text = text;
    }

    pub fn set_destination(&mut self, destination: Option<DestinationBed>) {
        self.destination = destination;
    }

    pub fn set_reason(&mut self, reason: Option<TransferReason>) {
        self.reason = reason;
    }

    pub fn set_scheduled_at(&mut self, at: DateTime<Utc>) {
        self.scheduled_at = at;
    }

    pub fn set_notes(&mut self, notes: String) {
        self.notes = notes;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn stage(&self) -> WorkflowStage {
        self.stage
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn patient(&self) -> Option<&Patient> {
        self.patient.as_ref()
    }

    pub fn destination(&self) -> Option<&DestinationBed> {
        self.destination.as_ref()
    }

    pub fn reason(&self) -> Option<TransferReason> {
        self.reason
    }

    pub fn scheduled_at(&self) -> DateTime<Utc> {
        self.scheduled_at
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Whether the confirm button is enabled.
    pub fn is_submittable(&self) -> bool {
        self.patient.is_some() && self.destination.is_some() && self.reason.is_some()
    }

    /// Validate and build the request payload.
    ///
    /// Fails on the first missing field, in the fixed order
    /// patient → destination bed → reason. On success the payload is
    /// returned, every field is reset, and the modal closes.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<TransferRequest, TransferError> {
        let patient = self.patient.as_ref().ok_or(TransferError::PatientRequired)?;
        let destination = self
            .destination
            .as_ref()
            .ok_or(TransferError::DestinationRequired)?;
        let reason = self.reason.ok_or(TransferError::ReasonRequired)?;

        let request = TransferRequest {
            patient_id: patient.local_id.clone(),
            patient_name: patient.name.clone(),
            destination_bed_id: destination.bed_id.clone(),
            destination_bed_number: destination.bed_number.clone(),
            reason,
            scheduled_at: self.scheduled_at.to_rfc3339(),
            notes: if self.notes.trim().is_empty() {
                None
            } else {
                Some(self.notes.clone())
            },
        };

        self.reset(now);
        Ok(request)
    }
}

impl Default for TransferWorkflow {
    fn default() -> Self {
        Self::new()
    }
}
