use crate::api::{ApiError, PersonKind};
use crate::components::{
    common::{Button, ButtonVariant},
    error::InlineErrorMessage,
};
use crate::pages::attendance::utils::NewPersonFormState;
use leptos::{
    ev::{KeyboardEvent, SubmitEvent},
    *,
};

const INPUT_CLASS: &str =
    "w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500";

#[component]
fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm font-medium text-gray-700 mb-1">{label}</span>
            <input
                type=input_type.unwrap_or("text")
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn AddPersonModal(
    is_open: Signal<bool>,
    form_state: NewPersonFormState,
    pending: Signal<bool>,
    error: Signal<Option<ApiError>>,
    on_submit: Callback<SubmitEvent>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let kind = form_state.kind_signal();
    let name = form_state.name_signal();
    let roll_no = form_state.roll_no_signal();
    let academic_year = form_state.academic_year_signal();
    let emp_id = form_state.emp_id_signal();
    let designation = form_state.designation_signal();

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-40 flex items-center justify-center p-4">
                <div class="absolute inset-0 bg-black bg-opacity-50"></div>
                <div
                    class="relative z-50 w-full max-w-md rounded-lg bg-white shadow-xl p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" && !pending.get_untracked() {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h3 class="text-xl font-semibold text-gray-800">"Add New User"</h3>
                    <InlineErrorMessage error=error />
                    <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
                        <label class="block">
                            <span class="block text-sm font-medium text-gray-700 mb-1">"Type"</span>
                            <select
                                class=INPUT_CLASS
                                prop:value=move || kind.get().as_str()
                                on:change=move |ev| {
                                    if let Some(selected) = PersonKind::from_value(&event_target_value(&ev)) {
                                        kind.set(selected);
                                    }
                                }
                            >
                                <option value="student">"Student"</option>
                                <option value="staff">"Staff"</option>
                            </select>
                        </label>
                        <TextField label="Name" value=name />
                        <Show
                            when=move || kind.get() == PersonKind::Student
                            fallback=move || view! {
                                <TextField label="Employee ID" value=emp_id />
                                <TextField label="Designation" value=designation />
                            }
                        >
                            <TextField label="Roll No" value=roll_no />
                            <TextField label="Academic Year" value=academic_year input_type="number" />
                        </Show>
                        <div class="flex justify-end gap-2 pt-2">
                            <button
                                type="button"
                                class=format!("inline-flex items-center text-sm font-medium disabled:opacity-50 {}", ButtonVariant::Ghost.classes())
                                data-testid="cancel-add"
                                disabled=move || pending.get()
                                on:click=move |_| on_cancel.call(())
                            >
                                "Cancel"
                            </button>
                            <Button attr:type="submit" loading=pending>
                                "Add User"
                            </Button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
