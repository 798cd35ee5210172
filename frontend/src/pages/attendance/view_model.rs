use crate::api::{
    ApiClient, ApiError, AttendanceQuery, AttendanceRecord, CreatePersonRequest, PersonKind,
};
use crate::pages::attendance::{
    repository,
    types::{designation_options, project_records, DesignationFilter, FilterState, YearFilter},
    utils::NewPersonFormState,
};
use crate::state::attendance::{use_attendance, AttendanceState};
use crate::utils::{dom, time::DateCursor};
use leptos::{
    ev::{MouseEvent, SubmitEvent},
    *,
};

/// Source of the list resource. Bumping `token` re-issues the same query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttendanceQueryKey {
    pub cursor: DateCursor,
    pub kind: PersonKind,
    pub token: u32,
}

impl AttendanceQueryKey {
    pub fn new(cursor: DateCursor, kind: PersonKind) -> Self {
        Self {
            cursor,
            kind,
            token: 0,
        }
    }

    pub fn with_cursor(self, cursor: DateCursor) -> Self {
        Self { cursor, ..self }
    }

    pub fn with_kind(self, kind: PersonKind) -> Self {
        Self { kind, ..self }
    }

    pub fn refresh(self) -> Self {
        Self {
            token: self.token.wrapping_add(1),
            ..self
        }
    }

    pub fn query(&self) -> AttendanceQuery {
        AttendanceQuery::new(self.cursor.date(), self.kind)
    }
}

#[derive(Clone)]
pub struct AttendanceViewModel {
    pub api: ApiClient,
    pub state: (ReadSignal<AttendanceState>, WriteSignal<AttendanceState>),
    pub query_key: RwSignal<AttendanceQueryKey>,
    pub load_resource: Resource<AttendanceQueryKey, Result<(), ApiError>>,
    pub search_term: RwSignal<String>,
    pub year_filter: RwSignal<YearFilter>,
    pub designation_filter: RwSignal<DesignationFilter>,
    pub visible_rows: Memo<Vec<AttendanceRecord>>,
    pub designation_options: Memo<Vec<String>>,
    pub form_state: NewPersonFormState,
    pub show_add_modal: RwSignal<bool>,
    pub create_action: Action<CreatePersonRequest, Result<(), ApiError>>,
    pub create_error: RwSignal<Option<ApiError>>,
    pub sidebar_open: RwSignal<bool>,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let (state, set_state) = use_attendance();

        let query_key = create_rw_signal(AttendanceQueryKey::new(
            DateCursor::today(),
            PersonKind::Student,
        ));
        let api_for_load = api.clone();
        let load_resource = create_resource(
            move || query_key.get(),
            move |key| {
                let api = api_for_load.clone();
                async move { repository::fetch_attendance(&api, set_state, key.query()).await }
            },
        );

        let search_term = create_rw_signal(String::new());
        let year_filter = create_rw_signal(YearFilter::All);
        let designation_filter = create_rw_signal(DesignationFilter::All);

        let filter = create_memo(move |_| FilterState {
            category: query_key.with(|key| key.kind),
            search_term: search_term.get(),
            year: year_filter.get(),
            designation: designation_filter.get(),
        });
        let visible_rows =
            create_memo(move |_| state.with(|s| filter.with(|f| project_records(&s.records, f))));
        let designation_choices =
            create_memo(move |_| state.with(|s| designation_options(&s.records)));

        let form_state = NewPersonFormState::default();
        let show_add_modal = create_rw_signal(false);
        let create_error = create_rw_signal(None::<ApiError>);

        let api_for_create = api.clone();
        let add_person_action = create_action(move |request: &CreatePersonRequest| {
            let api = api_for_create.clone();
            let request = request.clone();
            async move { repository::add_person(&api, set_state, request).await }
        });

        create_effect(move |_| {
            if let Some(result) = add_person_action.value().get() {
                apply_create_outcome(result, query_key, form_state, show_add_modal, create_error);
            }
        });

        let sidebar_open = create_rw_signal(dom::initial_sidebar_open());
        install_resize_listener(sidebar_open);

        Self {
            api,
            state: (state, set_state),
            query_key,
            load_resource,
            search_term,
            year_filter,
            designation_filter,
            visible_rows,
            designation_options: designation_choices,
            form_state,
            show_add_modal,
            create_action: add_person_action,
            create_error,
            sidebar_open,
        }
    }

    pub fn date_label(&self) -> Signal<String> {
        let query_key = self.query_key;
        Signal::derive(move || query_key.with(|key| key.cursor.format()))
    }

    pub fn category(&self) -> Signal<PersonKind> {
        let query_key = self.query_key;
        Signal::derive(move || query_key.with(|key| key.kind))
    }

    pub fn on_step_date(&self, delta_days: i64) -> impl Fn(MouseEvent) {
        let query_key = self.query_key;
        move |_ev| {
            query_key.update(|key| *key = key.with_cursor(key.cursor.step(delta_days)));
        }
    }

    pub fn on_select_category(&self) -> impl Fn(PersonKind) {
        let query_key = self.query_key;
        move |kind| {
            if query_key.with_untracked(|key| key.kind) != kind {
                query_key.update(|key| *key = key.with_kind(kind));
            }
        }
    }

    pub fn on_refresh(&self) -> impl Fn(MouseEvent) {
        let query_key = self.query_key;
        move |_ev| query_key.update(|key| *key = key.refresh())
    }

    pub fn on_open_add(&self) -> impl Fn(MouseEvent) {
        let show_add_modal = self.show_add_modal;
        let create_error = self.create_error;
        move |_ev| {
            create_error.set(None);
            show_add_modal.set(true);
        }
    }

    pub fn on_cancel_add(&self) -> impl Fn(()) {
        let form_state = self.form_state;
        let show_add_modal = self.show_add_modal;
        let create_error = self.create_error;
        let pending = self.create_action.pending();
        move |_| {
            dismiss_add_modal(
                pending.get_untracked(),
                form_state,
                show_add_modal,
                create_error,
            );
        }
    }

    pub fn on_submit_person(&self) -> impl Fn(SubmitEvent) {
        let vm = self.clone();
        move |ev| {
            ev.prevent_default();
            vm.submit_person();
        }
    }

    /// Validates the draft and dispatches the create. Invalid drafts only set
    /// `create_error`; nothing is sent.
    pub fn submit_person(&self) {
        if self.create_action.pending().get_untracked() {
            return;
        }
        let date = self.query_key.with_untracked(|key| key.cursor.date());
        match self.form_state.to_request(date) {
            Ok(request) => {
                self.create_error.set(None);
                self.create_action.dispatch(request);
            }
            Err(err) => self.create_error.set(Some(err)),
        }
    }

    pub fn on_toggle_sidebar(&self) -> impl Fn(MouseEvent) {
        let sidebar_open = self.sidebar_open;
        move |_ev| sidebar_open.update(|open| *open = !*open)
    }

    pub fn on_close_sidebar(&self) -> impl Fn(MouseEvent) {
        let sidebar_open = self.sidebar_open;
        move |_ev| sidebar_open.set(false)
    }
}

/// Successful creates discard the draft, close the modal and re-issue the
/// query that is current now. Failures keep the draft and the modal so the
/// operator can correct and resubmit.
pub fn apply_create_outcome(
    result: Result<(), ApiError>,
    query_key: RwSignal<AttendanceQueryKey>,
    form_state: NewPersonFormState,
    show_add_modal: RwSignal<bool>,
    create_error: RwSignal<Option<ApiError>>,
) {
    match result {
        Ok(()) => {
            create_error.set(None);
            show_add_modal.set(false);
            form_state.reset();
            query_key.update(|key| *key = key.refresh());
        }
        Err(err) => create_error.set(Some(err)),
    }
}

/// Closes the modal and discards the draft, unless a create is still in
/// flight. Returns whether the modal was closed.
pub fn dismiss_add_modal(
    pending: bool,
    form_state: NewPersonFormState,
    show_add_modal: RwSignal<bool>,
    create_error: RwSignal<Option<ApiError>>,
) -> bool {
    if pending {
        return false;
    }
    show_add_modal.set(false);
    create_error.set(None);
    form_state.reset();
    true
}

#[cfg(target_arch = "wasm32")]
fn install_resize_listener(sidebar_open: RwSignal<bool>) {
    let handle = window_event_listener(ev::resize, move |_| {
        if let Some(width) = dom::viewport_width() {
            sidebar_open.set(dom::sidebar_open_for_width(width));
        }
    });
    on_cleanup(move || handle.remove());
}

#[cfg(not(target_arch = "wasm32"))]
fn install_resize_listener(_sidebar_open: RwSignal<bool>) {}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AttendanceViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    fn jan_31() -> DateCursor {
        DateCursor::new(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap())
    }

    #[test]
    fn query_key_changes_keep_refresh_token() {
        let key = AttendanceQueryKey::new(jan_31(), PersonKind::Student).refresh();
        let moved = key.with_cursor(key.cursor.step(1));
        assert_eq!(moved.token, 1);
        assert_eq!(
            moved.query(),
            AttendanceQuery::new(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(), PersonKind::Student)
        );
        assert_eq!(moved.with_kind(PersonKind::Staff).query().kind, PersonKind::Staff);
    }

    #[test]
    fn refresh_produces_a_distinct_key_for_the_same_query() {
        let key = AttendanceQueryKey::new(jan_31(), PersonKind::Staff);
        let refreshed = key.refresh();
        assert_ne!(key, refreshed);
        assert_eq!(key.query(), refreshed.query());
    }

    #[test]
    fn failed_create_keeps_draft_and_modal() {
        with_runtime(|| {
            let form = NewPersonFormState::default();
            form.name_signal().set("Ann".into());
            let key = create_rw_signal(AttendanceQueryKey::new(jan_31(), PersonKind::Student));
            let show = create_rw_signal(true);
            let error = create_rw_signal(None);

            apply_create_outcome(
                Err(ApiError::request_failed("offline")),
                key,
                form,
                show,
                error,
            );

            assert!(show.get());
            assert_eq!(key.get().token, 0);
            assert_eq!(form.name_signal().get(), "Ann");
            assert_eq!(error.get().map(|e| e.error), Some("offline".to_string()));
        });
    }

    #[test]
    fn successful_create_resets_draft_and_closes_modal() {
        with_runtime(|| {
            let form = NewPersonFormState::default();
            form.name_signal().set("Ann".into());
            let key = create_rw_signal(AttendanceQueryKey::new(jan_31(), PersonKind::Student));
            let show = create_rw_signal(true);
            let error = create_rw_signal(Some(ApiError::unknown("stale")));

            apply_create_outcome(Ok(()), key, form, show, error);

            assert!(!show.get());
            assert!(form.is_pristine());
            assert!(error.get().is_none());
            assert_eq!(key.get().token, 1);
        });
    }

    #[test]
    fn reload_after_create_targets_the_date_shown_when_it_completes() {
        with_runtime(|| {
            let key = create_rw_signal(AttendanceQueryKey::new(jan_31(), PersonKind::Student));
            let form = NewPersonFormState::default();
            let show = create_rw_signal(true);
            let error = create_rw_signal(None);

            // The operator steps forward while the create is in flight.
            key.update(|k| *k = k.with_cursor(k.cursor.step(1)));
            apply_create_outcome(Ok(()), key, form, show, error);

            let reloaded = key.get();
            assert_eq!(reloaded.token, 1);
            assert_eq!(
                reloaded.query(),
                AttendanceQuery::new(
                    NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
                    PersonKind::Student
                )
            );
        });
    }

    #[test]
    fn dismissing_is_refused_while_a_create_is_pending() {
        with_runtime(|| {
            let form = NewPersonFormState::default();
            form.name_signal().set("Ann".into());
            let show = create_rw_signal(true);
            let error = create_rw_signal(None);

            assert!(!dismiss_add_modal(true, form, show, error));
            assert!(show.get());
            assert_eq!(form.name_signal().get(), "Ann");

            assert!(dismiss_add_modal(false, form, show, error));
            assert!(!show.get());
            assert!(form.is_pristine());
        });
    }
}
