use crate::api::{ApiClient, ApiError, AttendanceQuery, AttendanceRecord, CreatePersonRequest};
use leptos::*;
use log::{debug, error};

/// Identifies one dispatched load. Only the most recent ticket may write results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceState {
    pub records: Vec<AttendanceRecord>,
    pub loading: bool,
    pub saving: bool,
    pub last_load_error: Option<ApiError>,
    latest_ticket: u64,
}

impl AttendanceState {
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_ticket = self.latest_ticket.wrapping_add(1);
        self.loading = true;
        LoadTicket(self.latest_ticket)
    }

    /// Applies a load outcome. Returns `false` when a newer load was dispatched
    /// after `ticket`, in which case nothing changes.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<AttendanceRecord>, ApiError>,
    ) -> bool {
        if ticket.0 != self.latest_ticket {
            return false;
        }
        self.loading = false;
        match result {
            Ok(records) => {
                self.records = records;
                self.last_load_error = None;
            }
            Err(err) => self.last_load_error = Some(err),
        }
        true
    }

    pub fn begin_save(&mut self) {
        self.saving = true;
    }

    pub fn finish_save(&mut self) {
        self.saving = false;
    }
}

pub fn use_attendance() -> (ReadSignal<AttendanceState>, WriteSignal<AttendanceState>) {
    match use_context::<(ReadSignal<AttendanceState>, WriteSignal<AttendanceState>)>() {
        Some(ctx) => ctx,
        None => {
            let (read, write) = create_signal(AttendanceState::default());
            provide_context((read, write));
            (read, write)
        }
    }
}

pub async fn load_attendance(
    api: &ApiClient,
    set_state: WriteSignal<AttendanceState>,
    query: AttendanceQuery,
) -> Result<(), ApiError> {
    let Some(ticket) = set_state.try_update(|state| state.begin_load()) else {
        return Ok(());
    };
    let result = api.list_attendance(&query).await;
    match &result {
        Ok(records) => debug!("Loaded {} attendance records for {}", records.len(), query),
        Err(err) => error!("Error fetching attendance for {}: {}", query, err),
    }
    let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
    let applied = set_state
        .try_update(move |state| state.finish_load(ticket, result))
        .unwrap_or(false);
    if !applied {
        debug!("Discarded superseded attendance response for {}", query);
    }
    outcome
}

/// Creates a person. Reloading the list is left to the caller so that it runs
/// against whatever query is current when the write completes.
pub async fn create_person(
    api: &ApiClient,
    set_state: WriteSignal<AttendanceState>,
    request: CreatePersonRequest,
) -> Result<(), ApiError> {
    set_state.update(|state| state.begin_save());
    let result = api.create_person(&request).await;
    set_state.update(|state| state.finish_save());
    match result {
        Ok(()) => {
            debug!("Created {} '{}'", request.kind, request.name);
            Ok(())
        }
        Err(err) => {
            error!("Error adding {} '{}': {}", request.kind, request.name, err);
            Err(err)
        }
    }
}
