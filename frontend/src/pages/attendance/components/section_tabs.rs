use crate::api::PersonKind;
use leptos::*;

const SECTIONS: [PersonKind; 2] = [PersonKind::Student, PersonKind::Staff];

fn tab_classes(active: bool) -> &'static str {
    if active {
        "px-6 py-2 rounded-lg font-medium bg-gradient-to-r from-blue-600 to-indigo-600 text-white shadow"
    } else {
        "px-6 py-2 rounded-lg font-medium bg-white text-gray-700 hover:bg-blue-50"
    }
}

#[component]
pub fn SectionTabs(active: Signal<PersonKind>, on_select: Callback<PersonKind>) -> impl IntoView {
    view! {
        <div class="flex gap-3 mb-6" role="tablist">
            {SECTIONS
                .into_iter()
                .map(move |kind| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            aria-selected=move || (active.get() == kind).to_string()
                            class=move || tab_classes(active.get() == kind)
                            on:click=move |_| on_select.call(kind)
                        >
                            {kind.section_label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
