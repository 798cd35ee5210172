use crate::api::PersonKind;
use crate::pages::attendance::types::{DesignationFilter, YearFilter, ALL_OPTION};
use leptos::*;

#[component]
pub fn RecordFilters(
    category: Signal<PersonKind>,
    search_term: RwSignal<String>,
    year_filter: RwSignal<YearFilter>,
    designation_filter: RwSignal<DesignationFilter>,
    designation_options: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col md:flex-row gap-3 mb-4">
            <div class="relative flex-1">
                <input
                    type="text"
                    class="w-full pl-4 pr-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500"
                    placeholder="Search by name..."
                    prop:value=move || search_term.get()
                    on:input=move |ev| search_term.set(event_target_value(&ev))
                />
            </div>
            <Show
                when=move || category.get() == PersonKind::Student
                fallback=move || view! {
                    <select
                        class="border border-gray-300 rounded-lg px-3 py-2 text-sm"
                        aria-label="Designation filter"
                        prop:value=move || designation_filter.with(|d| d.as_value())
                        on:change=move |ev| {
                            designation_filter.set(DesignationFilter::from_value(&event_target_value(&ev)))
                        }
                    >
                        <For
                            each=move || designation_options.get()
                            key=|option| option.clone()
                            children=move |option| {
                                let label = if option == ALL_OPTION {
                                    "All Designations".to_string()
                                } else {
                                    option.clone()
                                };
                                view! { <option value=option>{label}</option> }
                            }
                        />
                    </select>
                }
            >
                <select
                    class="border border-gray-300 rounded-lg px-3 py-2 text-sm"
                    aria-label="Academic year filter"
                    prop:value=move || year_filter.with(|y| y.as_value())
                    on:change=move |ev| {
                        // Unparseable values leave the current filter in place.
                        if let Some(year) = YearFilter::from_value(&event_target_value(&ev)) {
                            year_filter.set(year);
                        }
                    }
                >
                    {YearFilter::CHOICES
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>
            </Show>
        </div>
    }
}
