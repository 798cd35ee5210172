use leptos::{ev::MouseEvent, *};

#[component]
pub fn DateSelector(
    label: Signal<String>,
    on_previous: Callback<MouseEvent>,
    on_next: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between bg-white rounded-lg shadow p-3 mb-6">
            <button
                type="button"
                class="p-2 rounded-full hover:bg-blue-50 text-blue-700"
                aria-label="Previous day"
                on:click=move |ev| on_previous.call(ev)
            >
                <svg class="h-5 w-5" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7" />
                </svg>
            </button>
            <div class="flex items-center gap-2 text-gray-800">
                <span class="text-sm text-gray-500">"Date"</span>
                <span class="text-lg font-semibold" data-testid="current-date">{move || label.get()}</span>
            </div>
            <button
                type="button"
                class="p-2 rounded-full hover:bg-blue-50 text-blue-700"
                aria-label="Next day"
                on:click=move |ev| on_next.call(ev)
            >
                <svg class="h-5 w-5" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7" />
                </svg>
            </button>
        </div>
    }
}
