use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    if let Some(errors) = e
                        .details
                        .as_ref()
                        .and_then(|details| details.get("errors"))
                        .and_then(|v| v.as_array())
                    {
                        return view! {
                            <ul class="list-disc list-inside text-sm">
                                {errors.iter().map(|err| {
                                    view! { <li>{err.as_str().unwrap_or_default().to_string()}</li> }
                                }).collect_view()}
                            </ul>
                        }.into_view();
                    }
                    if !e.is_validation() && e.code != "UNKNOWN" && !e.code.is_empty() {
                        view! { <div class="text-xs opacity-75">{"Code: "}{e.code.clone()}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}
