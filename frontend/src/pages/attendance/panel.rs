use super::{
    components::{AddPersonModal, AttendanceTable, DateSelector, RecordFilters, SectionTabs},
    layout::AttendanceFrame,
    view_model::use_attendance_view_model,
};
use crate::components::error::InlineErrorMessage;
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    view! { <AttendancePanel /> }
}

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_attendance_view_model();
    let (state, _) = vm.state;

    let loading = Signal::derive(move || state.with(|s| s.loading));
    let create_pending = vm.create_action.pending();
    let saving = Signal::derive(move || create_pending.get() || state.with(|s| s.saving));
    let load_error = Signal::derive(move || state.with(|s| s.last_load_error.clone()));
    let rows = vm.visible_rows;
    let designation_options = vm.designation_options;

    view! {
        <AttendanceFrame
            loading=loading
            sidebar_open=vm.sidebar_open.into()
            on_toggle_sidebar=Callback::new(vm.on_toggle_sidebar())
            on_close_sidebar=Callback::new(vm.on_close_sidebar())
            on_refresh=Callback::new(vm.on_refresh())
            on_add=Callback::new(vm.on_open_add())
        >
            <DateSelector
                label=vm.date_label()
                on_previous=Callback::new(vm.on_step_date(-1))
                on_next=Callback::new(vm.on_step_date(1))
            />
            <SectionTabs
                active=vm.category()
                on_select=Callback::new(vm.on_select_category())
            />
            <InlineErrorMessage error=load_error />
            <RecordFilters
                category=vm.category()
                search_term=vm.search_term
                year_filter=vm.year_filter
                designation_filter=vm.designation_filter
                designation_options=Signal::derive(move || designation_options.get())
            />
            <AttendanceTable
                category=vm.category()
                rows=Signal::derive(move || rows.get())
            />
            <AddPersonModal
                is_open=vm.show_add_modal.into()
                form_state=vm.form_state
                pending=saving
                error=vm.create_error.into()
                on_submit=Callback::new(vm.on_submit_person())
                on_cancel=Callback::new(vm.on_cancel_add())
            />
        </AttendanceFrame>
    }
}
