//! Wardboard Core Library
//!
//! Headless core for a hospital bed-board UI: occupancy map, bed selection,
//! and the patient transfer workflow. The UI shell renders state, this crate
//! owns it.
//!
//! # Architecture
//!
//! ```text
//!                  Store (beds / patients collections)
//!                                │ snapshot
//!                                ▼
//!              ┌──────────── BoardSession ────────────┐
//!              │                                      │
//!       Filter Engine ──▶ visible board        Transfer Workflow
//!              │                                      │
//!       Selection Set ──▶ Summary Bar          patient → bed → reason
//!              │                                      │
//!       Occupancy Detail ◀── occupied click     confirm ▶ toast
//!              └──────────────────┬───────────────────┘
//!                                 ▼
//!                        Notification queue
//! ```
//!
//! # Core Principle
//!
//! The catalog is an immutable snapshot per session. This layer never
//! transitions bed occupancy itself; admissions, assignment, and discharge
//! belong to the backend collaborator.
//!
//! # Modules
//!
//! - [`db`]: SQLite store exposing the named collections
//! - [`models`]: Domain types (Bed, Ward, Floor, Patient, TransferRequest)
//! - [`board`]: Session state (filter, selection, detail, summary)
//! - [`transfer`]: Transfer wizard state machine and patient search
//! - [`notify`]: Fire-and-forget toast queue
//! - [`demo`]: Deterministic demo hospital

pub mod board;
pub mod db;
pub mod demo;
pub mod models;
pub mod notify;
pub mod transfer;

// Re-export commonly used types
pub use board::{
    BedClick, BedFilter, BoardSession, FilteredBoard, OccupancyDetail, SelectionSet,
    SelectionSummary, SessionContext,
};
pub use db::Database;
pub use models::{
    AcuityLevel, Bed, BedCatalog, BedState, BedStatus, BedType, DestinationBed, Floor, Occupant,
    Patient, TransferReason, TransferRequest, Ward,
};
pub use notify::{Notification, NotificationKind, Notifier, QueueNotifier};
pub use transfer::{TransferError, TransferWorkflow, WorkflowStage};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum WardboardError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Validation(String),
}

impl From<db::DbError> for WardboardError {
    fn from(e: db::DbError) -> Self {
        WardboardError::DatabaseError(e.to_string())
    }
}

impl From<serde_json::Error> for WardboardError {
    fn from(e: serde_json::Error) -> Self {
        WardboardError::DatabaseError(e.to_string())
    }
}

impl From<TransferError> for WardboardError {
    fn from(e: TransferError) -> Self {
        WardboardError::Validation(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for WardboardError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        WardboardError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create a store at the given path and start a board session.
#[uniffi::export]
pub fn open_database(path: String) -> Result<Arc<WardboardCore>, WardboardError> {
    let db = Database::open(&path)?;
    WardboardCore::from_database(db)
}

/// Create an in-memory store (for testing).
#[uniffi::export]
pub fn open_database_in_memory() -> Result<Arc<WardboardCore>, WardboardError> {
    let db = Database::open_in_memory()?;
    WardboardCore::from_database(db)
}

/// In-memory store pre-seeded with the demo hospital.
#[uniffi::export]
pub fn open_demo_board() -> Result<Arc<WardboardCore>, WardboardError> {
    let db = Database::open_in_memory()?;
    demo::seed_demo(&db)?;
    WardboardCore::from_database(db)
}

/// The reason picker's option list.
#[uniffi::export]
pub fn transfer_reasons() -> Vec<FfiTransferReason> {
    TransferReason::all()
        .iter()
        .map(|r| FfiTransferReason {
            code: r.code().to_string(),
            label: r.label().to_string(),
        })
        .collect()
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe store + session wrapper for FFI.
#[derive(uniffi::Object)]
pub struct WardboardCore {
    db: Arc<Mutex<Database>>,
    session: Mutex<BoardSession>,
    notifier: QueueNotifier,
}

impl WardboardCore {
    fn from_database(db: Database) -> Result<Arc<Self>, WardboardError> {
        let catalog = db.load_catalog()?;
        let patients = db.list_patients()?;
        let session = BoardSession::new(catalog, patients, SessionContext::default());
        Ok(Arc::new(Self {
            db: Arc::new(Mutex::new(db)),
            session: Mutex::new(session),
            notifier: QueueNotifier::new(),
        }))
    }
}

#[uniffi::export]
impl WardboardCore {
    // =========================================================================
    // Snapshot & Store Operations
    // =========================================================================

    /// Re-fetch the catalog and patient snapshots from the store.
    pub fn refresh_board(&self) -> Result<(), WardboardError> {
        let db = self.db.lock()?;
        let catalog = db.load_catalog()?;
        let patients = db.list_patients()?;
        drop(db);

        let mut session = self.session.lock()?;
        session.refresh(catalog, patients);
        Ok(())
    }

    /// Add or update a floor.
    pub fn upsert_floor(&self, floor_id: String, name: String, level: i32) -> Result<(), WardboardError> {
        let db = self.db.lock()?;
        db.upsert_floor(&floor_id, &name, level)?;
        Ok(())
    }

    /// Add or update a ward.
    pub fn upsert_ward(&self, ward_id: String, floor_id: String, name: String) -> Result<(), WardboardError> {
        let db = self.db.lock()?;
        db.upsert_ward(&ward_id, &floor_id, &name)?;
        Ok(())
    }

    /// Add or update a bed.
    pub fn upsert_bed(&self, ward_id: String, bed: FfiBed) -> Result<(), WardboardError> {
        let bed: Bed = bed.try_into()?;
        let db = self.db.lock()?;
        db.upsert_bed(&ward_id, &bed)?;
        Ok(())
    }

    /// Get a bed by id.
    pub fn get_bed(&self, bed_id: String) -> Result<Option<FfiBed>, WardboardError> {
        let db = self.db.lock()?;
        let bed = db.get_bed(&bed_id)?;
        Ok(bed.map(|b| (&b).into()))
    }

    /// Create a new patient.
    pub fn create_patient(&self, name: String, mrn: String) -> Result<FfiPatient, WardboardError> {
        let db = self.db.lock()?;
        let patient = Patient::new(name, mrn);
        db.insert_patient(&patient)?;
        Ok((&patient).into())
    }

    /// Get a patient by local ID.
    pub fn get_patient(&self, local_id: String) -> Result<Option<FfiPatient>, WardboardError> {
        let db = self.db.lock()?;
        let patient = db.get_patient(&local_id)?;
        Ok(patient.map(|p| (&p).into()))
    }

    /// Search patients in the store by name or MRN.
    pub fn search_patients(&self, query: String, limit: u32) -> Result<Vec<FfiPatient>, WardboardError> {
        let db = self.db.lock()?;
        let patients = db.search_patients(&query, limit as usize)?;
        Ok(patients.iter().map(Into::into).collect())
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    pub fn set_search(&self, text: String) -> Result<(), WardboardError> {
        self.session.lock()?.set_search(text);
        Ok(())
    }

    pub fn set_floor_filter(&self, floor_id: Option<String>) -> Result<(), WardboardError> {
        self.session.lock()?.set_floor_filter(floor_id);
        Ok(())
    }

    pub fn set_ward_filter(&self, ward_id: Option<String>) -> Result<(), WardboardError> {
        self.session.lock()?.set_ward_filter(ward_id);
        Ok(())
    }

    pub fn set_status_filter(&self, status: Option<String>) -> Result<(), WardboardError> {
        let status = status
            .map(|s| {
                BedStatus::from_code(&s)
                    .ok_or_else(|| WardboardError::InvalidInput(format!("unknown status: {s}")))
            })
            .transpose()?;
        self.session.lock()?.set_status_filter(status);
        Ok(())
    }

    pub fn set_bed_type_filter(&self, bed_type: Option<String>) -> Result<(), WardboardError> {
        let bed_type = bed_type
            .map(|t| {
                BedType::from_code(&t)
                    .ok_or_else(|| WardboardError::InvalidInput(format!("unknown bed type: {t}")))
            })
            .transpose()?;
        self.session.lock()?.set_type_filter(bed_type);
        Ok(())
    }

    /// The empty state's "clear search" action.
    pub fn clear_filters(&self) -> Result<(), WardboardError> {
        self.session.lock()?.clear_filters();
        Ok(())
    }

    /// The visible board under the current criteria.
    pub fn visible_board(&self) -> Result<Vec<FfiFloor>, WardboardError> {
        let mut session = self.session.lock()?;
        let board = session.visible();
        Ok(board.floors.iter().map(Into::into).collect())
    }

    // =========================================================================
    // Selection & Detail
    // =========================================================================

    pub fn click_bed(&self, bed_id: String) -> Result<FfiBedClick, WardboardError> {
        let mut session = self.session.lock()?;
        Ok(session.click_bed(&bed_id).into())
    }

    pub fn selected_bed_ids(&self) -> Result<Vec<String>, WardboardError> {
        let session = self.session.lock()?;
        Ok(session.selection().ids().to_vec())
    }

    pub fn clear_selection(&self) -> Result<(), WardboardError> {
        self.session.lock()?.clear_selection();
        Ok(())
    }

    pub fn selection_summary(&self) -> Result<Option<FfiSelectionSummary>, WardboardError> {
        let session = self.session.lock()?;
        Ok(session.selection_summary().map(|s| (&s).into()))
    }

    pub fn occupancy_detail(&self) -> Result<Option<FfiOccupancyDetail>, WardboardError> {
        let session = self.session.lock()?;
        Ok(session.occupancy_detail().map(|d| (&d).into()))
    }

    pub fn close_detail(&self) -> Result<(), WardboardError> {
        self.session.lock()?.close_detail();
        Ok(())
    }

    /// Stubbed discharge path (raises a toast only).
    pub fn request_discharge(&self) -> Result<(), WardboardError> {
        self.session.lock()?.request_discharge(&self.notifier);
        Ok(())
    }

    /// Stubbed assign path (raises a toast only).
    pub fn assign_selected(&self) -> Result<(), WardboardError> {
        self.session.lock()?.assign_selected(&self.notifier);
        Ok(())
    }

    // =========================================================================
    // Transfer Workflow
    // =========================================================================

    /// Open the wizard seeded with the first selected bed, if any.
    pub fn open_transfer(&self) -> Result<(), WardboardError> {
        self.session.lock()?.open_transfer();
        Ok(())
    }

    /// Open the wizard from the occupancy detail panel.
    pub fn open_transfer_from_detail(&self) -> Result<(), WardboardError> {
        self.session.lock()?.request_transfer_from_detail();
        Ok(())
    }

    pub fn cancel_transfer(&self) -> Result<(), WardboardError> {
        self.session.lock()?.cancel_transfer();
        Ok(())
    }

    pub fn set_transfer_search(&self, text: String) -> Result<(), WardboardError> {
        self.session.lock()?.set_transfer_search(text);
        Ok(())
    }

    /// Patients matching the wizard's search text.
    pub fn transfer_patient_matches(&self) -> Result<Vec<FfiPatient>, WardboardError> {
        let session = self.session.lock()?;
        Ok(session
            .transfer_patient_matches()
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Lock in a patient by local id.
    pub fn select_transfer_patient(&self, local_id: String) -> Result<(), WardboardError> {
        let mut session = self.session.lock()?;
        if session.select_transfer_patient(&local_id) {
            Ok(())
        } else {
            Err(WardboardError::NotFound(format!("patient {local_id}")))
        }
    }

    pub fn set_transfer_reason(&self, code: Option<String>) -> Result<(), WardboardError> {
        let reason = code
            .map(|c| {
                TransferReason::from_code(&c)
                    .ok_or_else(|| WardboardError::InvalidInput(format!("unknown reason: {c}")))
            })
            .transpose()?;
        self.session.lock()?.set_transfer_reason(reason);
        Ok(())
    }

    pub fn set_transfer_scheduled_at(&self, at: String) -> Result<(), WardboardError> {
        let parsed: DateTime<Utc> = DateTime::parse_from_rfc3339(&at)
            .map_err(|e| WardboardError::InvalidInput(format!("bad datetime: {e}")))?
            .with_timezone(&Utc);
        self.session.lock()?.set_transfer_scheduled_at(parsed);
        Ok(())
    }

    pub fn set_transfer_notes(&self, notes: String) -> Result<(), WardboardError> {
        self.session.lock()?.set_transfer_notes(notes);
        Ok(())
    }

    /// The wizard's current state for rendering.
    pub fn transfer_state(&self) -> Result<FfiTransferState, WardboardError> {
        let session = self.session.lock()?;
        let workflow = session.workflow();
        Ok(FfiTransferState {
            open: workflow.is_open(),
            stage: match workflow.stage() {
                WorkflowStage::SearchingPatient => "searching_patient".into(),
                WorkflowStage::PatientSelected => "patient_selected".into(),
            },
            search_text: workflow.search_text().to_string(),
            patient: workflow.patient().map(Into::into),
            destination: workflow.destination().map(|d| FfiDestinationBed {
                bed_id: d.bed_id.clone(),
                bed_number: d.bed_number.clone(),
                ward_name: d.ward_name.clone(),
                price_per_day: d.price_per_day,
            }),
            reason_code: workflow.reason().map(|r| r.code().to_string()),
            scheduled_at: workflow.scheduled_at().to_rfc3339(),
            notes: workflow.notes().to_string(),
            submittable: workflow.is_submittable(),
        })
    }

    /// Validate and confirm the transfer.
    pub fn submit_transfer(&self) -> Result<FfiTransferRequest, WardboardError> {
        let mut session = self.session.lock()?;
        let request = session.submit_transfer(&self.notifier)?;
        Ok(FfiTransferRequest {
            patient_id: request.patient_id,
            patient_name: request.patient_name,
            destination_bed_id: request.destination_bed_id,
            destination_bed_number: request.destination_bed_number,
            reason_code: request.reason.code().to_string(),
            scheduled_at: request.scheduled_at,
            notes: request.notes,
        })
    }

    // =========================================================================
    // Notifications & Context
    // =========================================================================

    /// Take all pending toasts, oldest first.
    pub fn drain_notifications(&self) -> Vec<FfiNotification> {
        self.notifier
            .drain()
            .into_iter()
            .map(|n| FfiNotification {
                kind: n.kind.code().to_string(),
                message: n.message,
            })
            .collect()
    }

    /// Flip the sidebar collapse flag, returning the new value.
    pub fn toggle_sidebar(&self) -> Result<bool, WardboardError> {
        let mut session = self.session.lock()?;
        session.context_mut().toggle_sidebar();
        Ok(session.context().sidebar_collapsed)
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe occupant.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiOccupant {
    pub name: String,
    pub mrn: String,
    pub admitted_at: String,
    pub acuity: Option<String>,
    pub diagnosis: Option<String>,
    pub attending_doctor: Option<String>,
}

impl From<&Occupant> for FfiOccupant {
    fn from(occupant: &Occupant) -> Self {
        Self {
            name: occupant.name.clone(),
            mrn: occupant.mrn.clone(),
            admitted_at: occupant.admitted_at.clone(),
            acuity: occupant.acuity.map(|a| a.code().to_string()),
            diagnosis: occupant.diagnosis.clone(),
            attending_doctor: occupant.attending_doctor.clone(),
        }
    }
}

impl TryFrom<FfiOccupant> for Occupant {
    type Error = WardboardError;

    fn try_from(occupant: FfiOccupant) -> Result<Self, Self::Error> {
        let acuity = occupant
            .acuity
            .map(|a| {
                AcuityLevel::from_code(&a)
                    .ok_or_else(|| WardboardError::InvalidInput(format!("unknown acuity: {a}")))
            })
            .transpose()?;
        Ok(Occupant {
            name: occupant.name,
            mrn: occupant.mrn,
            admitted_at: occupant.admitted_at,
            acuity,
            diagnosis: occupant.diagnosis,
            attending_doctor: occupant.attending_doctor,
        })
    }
}

/// FFI-safe bed.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiBed {
    pub bed_id: String,
    pub room: String,
    pub bed_number: String,
    pub bed_type: String,
    pub status: String,
    pub occupant: Option<FfiOccupant>,
    pub price_per_day: i64,
    pub amenities: Vec<String>,
    pub last_cleaned: Option<String>,
    pub notes: Option<String>,
}

impl From<&Bed> for FfiBed {
    fn from(bed: &Bed) -> Self {
        Self {
            bed_id: bed.bed_id.clone(),
            room: bed.room.clone(),
            bed_number: bed.bed_number.clone(),
            bed_type: bed.bed_type.code().to_string(),
            status: bed.status().code().to_string(),
            occupant: bed.occupant().map(Into::into),
            price_per_day: bed.price_per_day,
            amenities: bed.amenities.clone(),
            last_cleaned: bed.last_cleaned.clone(),
            notes: bed.notes.clone(),
        }
    }
}

impl TryFrom<FfiBed> for Bed {
    type Error = WardboardError;

    fn try_from(bed: FfiBed) -> Result<Self, Self::Error> {
        let bed_type = BedType::from_code(&bed.bed_type)
            .ok_or_else(|| WardboardError::InvalidInput(format!("unknown bed type: {}", bed.bed_type)))?;
        let status = BedStatus::from_code(&bed.status)
            .ok_or_else(|| WardboardError::InvalidInput(format!("unknown status: {}", bed.status)))?;

        let state = match (status, bed.occupant) {
            (BedStatus::Occupied, Some(occupant)) => BedState::Occupied(occupant.try_into()?),
            (BedStatus::Occupied, None) => {
                return Err(WardboardError::InvalidInput(
                    "occupied bed requires an occupant".into(),
                ))
            }
            (_, Some(_)) => {
                return Err(WardboardError::InvalidInput(
                    "only occupied beds may carry an occupant".into(),
                ))
            }
            (BedStatus::Available, None) => BedState::Available,
            (BedStatus::Reserved, None) => BedState::Reserved,
            (BedStatus::Maintenance, None) => BedState::Maintenance,
        };

        Ok(Bed {
            bed_id: bed.bed_id,
            room: bed.room,
            bed_number: bed.bed_number,
            bed_type,
            state,
            price_per_day: bed.price_per_day,
            amenities: bed.amenities,
            last_cleaned: bed.last_cleaned,
            notes: bed.notes,
        })
    }
}

/// FFI-safe ward with derived occupancy.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiWard {
    pub ward_id: String,
    pub name: String,
    pub occupancy_percent: f64,
    pub beds: Vec<FfiBed>,
}

impl From<&Ward> for FfiWard {
    fn from(ward: &Ward) -> Self {
        Self {
            ward_id: ward.ward_id.clone(),
            name: ward.name.clone(),
            occupancy_percent: ward.occupancy_percent(),
            beds: ward.beds.iter().map(Into::into).collect(),
        }
    }
}

/// FFI-safe floor.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFloor {
    pub floor_id: String,
    pub name: String,
    pub level: i32,
    pub wards: Vec<FfiWard>,
}

impl From<&Floor> for FfiFloor {
    fn from(floor: &Floor) -> Self {
        Self {
            floor_id: floor.floor_id.clone(),
            name: floor.name.clone(),
            level: floor.level,
            wards: floor.wards.iter().map(Into::into).collect(),
        }
    }
}

/// FFI-safe patient.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatient {
    pub local_id: String,
    pub mrn: String,
    pub name: String,
    pub date_of_birth: Option<String>,
    pub current_ward: Option<String>,
}

impl From<&Patient> for FfiPatient {
    fn from(patient: &Patient) -> Self {
        Self {
            local_id: patient.local_id.clone(),
            mrn: patient.mrn.clone(),
            name: patient.name.clone(),
            date_of_birth: patient.date_of_birth.clone(),
            current_ward: patient.current_ward.clone(),
        }
    }
}

/// FFI-safe click outcome.
#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum FfiBedClick {
    Selected,
    Deselected,
    OpenDetail,
    Ignored,
}

impl From<BedClick> for FfiBedClick {
    fn from(click: BedClick) -> Self {
        match click {
            BedClick::Selected => FfiBedClick::Selected,
            BedClick::Deselected => FfiBedClick::Deselected,
            BedClick::OpenDetail => FfiBedClick::OpenDetail,
            BedClick::Ignored => FfiBedClick::Ignored,
        }
    }
}

/// FFI-safe selection chip.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiBedChip {
    pub bed_id: String,
    pub bed_number: String,
    pub ward_name: String,
}

/// FFI-safe single-bed inline detail.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSingleBedDetail {
    pub type_label: String,
    pub room: String,
    pub price_per_day: i64,
    pub amenities: Vec<String>,
}

/// FFI-safe selection summary.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSelectionSummary {
    pub chips: Vec<FfiBedChip>,
    pub overflow: u32,
    pub count: u32,
    pub total_price_per_day: i64,
    pub formatted_total: String,
    pub single: Option<FfiSingleBedDetail>,
}

impl From<&SelectionSummary> for FfiSelectionSummary {
    fn from(summary: &SelectionSummary) -> Self {
        Self {
            chips: summary
                .chips
                .iter()
                .map(|c| FfiBedChip {
                    bed_id: c.bed_id.clone(),
                    bed_number: c.bed_number.clone(),
                    ward_name: c.ward_name.clone(),
                })
                .collect(),
            overflow: summary.overflow as u32,
            count: summary.count as u32,
            total_price_per_day: summary.total_price_per_day,
            formatted_total: summary.formatted_total(),
            single: summary.single.as_ref().map(|s| FfiSingleBedDetail {
                type_label: s.type_label.clone(),
                room: s.room.clone(),
                price_per_day: s.price_per_day,
                amenities: s.amenities.clone(),
            }),
        }
    }
}

/// FFI-safe occupancy detail.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiOccupancyDetail {
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
    pub admitted_at: String,
    pub time_since_admission: String,
    pub amenities: Vec<String>,
    pub notes: Option<String>,
}

impl From<&OccupancyDetail> for FfiOccupancyDetail {
    fn from(detail: &OccupancyDetail) -> Self {
        Self {
            bed_id: detail.bed_id.clone(),
            ward_name: detail.ward_name.clone(),
            room: detail.room.clone(),
            bed_number: detail.bed_number.clone(),
            type_label: detail.type_label.clone(),
            price_per_day: detail.price_per_day,
            occupant_name: detail.occupant_name.clone(),
            mrn: detail.mrn.clone(),
            acuity_label: detail.acuity_label.clone(),
            diagnosis: detail.diagnosis.clone(),
            attending_doctor: detail.attending_doctor.clone(),
            admitted_at: detail.admitted_at.clone(),
            time_since_admission: detail.time_since_admission.clone(),
            amenities: detail.amenities.clone(),
            notes: detail.notes.clone(),
        }
    }
}

/// FFI-safe transfer reason option.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTransferReason {
    pub code: String,
    pub label: String,
}

/// FFI-safe destination bed.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDestinationBed {
    pub bed_id: String,
    pub bed_number: String,
    pub ward_name: String,
    pub price_per_day: i64,
}

/// FFI-safe wizard state.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTransferState {
    pub open: bool,
    pub stage: String,
    pub search_text: String,
    pub patient: Option<FfiPatient>,
    pub destination: Option<FfiDestinationBed>,
    pub reason_code: Option<String>,
    pub scheduled_at: String,
    pub notes: String,
    pub submittable: bool,
}

/// FFI-safe transfer request payload.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTransferRequest {
    pub patient_id: String,
    pub patient_name: String,
    pub destination_bed_id: String,
    pub destination_bed_number: String,
    pub reason_code: String,
    pub scheduled_at: String,
    pub notes: Option<String>,
}

/// FFI-safe toast.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNotification {
    pub kind: String,
    pub message: String,
}
