//! Bed board session state.
//!
//! One `BoardSession` per UI tab: filter criteria, selection set, open
//! detail panel, and the transfer wizard, all over an immutable catalog
//! snapshot. Every transition is synchronous; the FFI layer serializes
//! access with a mutex.

mod context;
mod detail;
mod filter;
mod selection;
mod summary;

pub use context::{Clock, SessionContext};
pub use detail::OccupancyDetail;
pub use filter::{filter_board, BedFilter, FilterEngine, FilteredBoard};
pub use selection::{classify_click, BedClick, SelectionSet};
pub use summary::{format_inr, BedChip, SelectionSummary, SingleBedDetail};

use chrono::{DateTime, Utc};

use crate::models::{BedCatalog, BedStatus, BedType, DestinationBed, Patient, TransferReason, TransferRequest};
use crate::notify::{NotificationKind, Notifier};
use crate::transfer::{search_patients, TransferError, TransferWorkflow};

/// Result rows shown in the transfer patient picker.
const PATIENT_RESULT_LIMIT: usize = 20;

/// Per-tab state for the bed occupancy board.
pub struct BoardSession {
    catalog: BedCatalog,
    patients: Vec<Patient>,
    filter: BedFilter,
    engine: FilterEngine,
    selection: SelectionSet,
    open_detail: Option<String>,
    workflow: TransferWorkflow,
    context: SessionContext,
}

impl BoardSession {
    pub fn new(catalog: BedCatalog, patients: Vec<Patient>, context: SessionContext) -> Self {
        Self {
            catalog,
            patients,
            filter: BedFilter::default(),
            engine: FilterEngine::new(),
            selection: SelectionSet::new(),
            open_detail: None,
            workflow: TransferWorkflow::new(),
            context,
        }
    }

    /// Replace the catalog and patient snapshots after a backend fetch.
    ///
    /// Selection, open detail, and the filter cache refer to the old
    /// snapshot and are dropped; filter criteria are kept.
    pub fn refresh(&mut self, catalog: BedCatalog, patients: Vec<Patient>) {
        self.catalog = catalog;
        self.patients = patients;
        self.selection.clear();
        self.open_detail = None;
        self.engine.invalidate();
    }

    pub fn catalog(&self) -> &BedCatalog {
        &self.catalog
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut SessionContext {
        &mut self.context
    }

    // -------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------

    pub fn filter(&self) -> &BedFilter {
        &self.filter
    }

    pub fn set_search(&mut self, search: String) {
        self.filter.search = search;
    }

    pub fn set_floor_filter(&mut self, floor_id: Option<String>) {
        self.filter.floor_id = floor_id;
    }

    pub fn set_ward_filter(&mut self, ward_id: Option<String>) {
        self.filter.ward_id = ward_id;
    }

    pub fn set_status_filter(&mut self, status: Option<BedStatus>) {
        self.filter.status = status;
    }

    pub fn set_type_filter(&mut self, bed_type: Option<BedType>) {
        self.filter.bed_type = bed_type;
    }

    /// The empty state's "clear search" action.
    pub fn clear_filters(&mut self) {
        self.filter = BedFilter::default();
    }

    /// The visible board under the current criteria (memoized).
    pub fn visible(&mut self) -> &FilteredBoard {
        self.engine.apply(&self.catalog, &self.filter)
    }

    // -------------------------------------------------------------------
    // Selection & detail
    // -------------------------------------------------------------------

    /// Handle a click on a bed tile.
    ///
    /// Occupied beds open the detail panel and never touch the selection;
    /// reserved/maintenance beds are inert; available beds toggle.
    pub fn click_bed(&mut self, bed_id: &str) -> BedClick {
        let Some(location) = self.catalog.find_bed(bed_id) else {
            return BedClick::Ignored;
        };
        let bed = location.bed.clone();
        let outcome = classify_click(&bed, &mut self.selection);
        if outcome == BedClick::OpenDetail {
            self.open_detail = Some(bed.bed_id);
        }
        outcome
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selection_summary(&self) -> Option<SelectionSummary> {
        SelectionSummary::from_selection(&self.catalog, &self.selection)
    }

    /// The detail panel projection for the currently open occupied bed.
    pub fn occupancy_detail(&self) -> Option<OccupancyDetail> {
        let bed_id = self.open_detail.as_deref()?;
        let location = self.catalog.find_bed(bed_id)?;
        OccupancyDetail::project(&location, self.context.now())
    }

    pub fn close_detail(&mut self) {
        self.open_detail = None;
    }

    /// Stubbed discharge path: real discharge belongs to the ward desk
    /// backend, this layer only raises the toast.
    pub fn request_discharge(&mut self, notifier: &dyn Notifier) {
        if let Some(detail) = self.occupancy_detail() {
            notifier.notify(
                NotificationKind::Info,
                &format!("Discharge requested for {}", detail.occupant_name),
            );
        }
        self.open_detail = None;
    }

    /// Stubbed assign path for the action bar.
    pub fn assign_selected(&mut self, notifier: &dyn Notifier) {
        if self.selection.is_empty() {
            return;
        }
        notifier.notify(
            NotificationKind::Info,
            &format!("Assignment requested for {} bed(s)", self.selection.len()),
        );
    }

    // -------------------------------------------------------------------
    // Transfer workflow
    // -------------------------------------------------------------------

    pub fn workflow(&self) -> &TransferWorkflow {
        &self.workflow
    }

    /// Open the transfer wizard from the action bar.
    ///
    /// Multi-select is summarized in the bar, but transfer is single
    /// destination by contract: the first selected bed seeds the wizard.
    pub fn open_transfer(&mut self) {
        let destination = self
            .selection
            .first()
            .and_then(|id| self.catalog.find_bed(id))
            .map(|loc| DestinationBed {
                bed_id: loc.bed.bed_id.clone(),
                bed_number: loc.bed.bed_number.clone(),
                ward_name: loc.ward.name.clone(),
                price_per_day: loc.bed.price_per_day,
            });
        let now = self.context.now();
        self.workflow.open_with(destination, now);
    }

    /// Open the transfer wizard from the occupancy detail panel.
    ///
    /// No destination yet; the occupant's name pre-seeds the patient search.
    pub fn request_transfer_from_detail(&mut self) {
        let seed = self.occupancy_detail().map(|d| d.occupant_name);
        let now = self.context.now();
        self.workflow.open_with(None, now);
        if let Some(name) = seed {
            self.workflow.set_search_text(name);
        }
        self.open_detail = None;
    }

    pub fn cancel_transfer(&mut self) {
        let now = self.context.now();
        self.workflow.cancel(now);
    }

    pub fn set_transfer_search(&mut self, text: String) {
        self.workflow.set_search_text(text);
    }

    /// Patients matching the wizard's current search text.
    pub fn transfer_patient_matches(&self) -> Vec<&Patient> {
        search_patients(
            &self.patients,
            self.workflow.search_text(),
            PATIENT_RESULT_LIMIT,
        )
    }

    /// Lock in a patient by local id. Returns `false` when the id does not
    /// resolve in the current snapshot.
    pub fn select_transfer_patient(&mut self, local_id: &str) -> bool {
        match self.patients.iter().find(|p| p.local_id == local_id) {
            Some(patient) => {
                let patient = patient.clone();
                self.workflow.select_patient(patient);
                true
            }
            None => false,
        }
    }

    pub fn set_transfer_reason(&mut self, reason: Option<TransferReason>) {
        self.workflow.set_reason(reason);
    }

    pub fn set_transfer_scheduled_at(&mut self, at: DateTime<Utc>) {
        self.workflow.set_scheduled_at(at);
    }

    pub fn set_transfer_notes(&mut self, notes: String) {
        self.workflow.set_notes(notes);
    }

    /// Submit the wizard.
    ///
    /// Success raises the confirmation toast (patient name + destination
    /// bed number) and clears the selection set; validation failures raise
    /// an error toast and leave all wizard state in place.
    pub fn submit_transfer(
        &mut self,
        notifier: &dyn Notifier,
    ) -> Result<TransferRequest, TransferError> {
        let now = self.context.now();
        match self.workflow.submit(now) {
            Ok(request) => {
                notifier.notify(
                    NotificationKind::Success,
                    &format!(
                        "{} scheduled for transfer to bed {}",
                        request.patient_name, request.destination_bed_number
                    ),
                );
                self.selection.clear();
                Ok(request)
            }
            Err(err) => {
                notifier.notify(NotificationKind::Error, &err.to_string());
                Err(err)
            }
        }
    }
}
