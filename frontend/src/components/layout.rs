use leptos::{ev::MouseEvent, *};

#[component]
pub fn Sidebar(open: Signal<bool>, on_close: Callback<MouseEvent>) -> impl IntoView {
    view! {
        <aside
            class=move || {
                format!(
                    "{} fixed md:relative z-30 bg-gradient-to-b from-blue-800 to-indigo-900 text-white w-64 h-full shadow-lg transition-transform duration-300 ease-in-out flex flex-col",
                    if open.get() { "translate-x-0" } else { "-translate-x-full" },
                )
            }
            aria-hidden=move || (!open.get()).to_string()
        >
            <div class="p-6 bg-gradient-to-r from-blue-700 to-blue-900 flex justify-between items-center">
                <div>
                    <h1 class="text-2xl font-bold flex items-center">
                        <span class="h-6 w-6 mr-2 bg-white text-blue-800 p-1 rounded-md"></span>
                        "ECE Dept"
                    </h1>
                    <p class="text-blue-200 text-sm mt-1 ml-9">"Attendance"</p>
                </div>
                <button
                    type="button"
                    class="md:hidden text-white"
                    on:click=move |ev| on_close.call(ev)
                >
                    <span class="sr-only">"Close sidebar"</span>
                    <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                    </svg>
                </button>
            </div>
            <div class="flex-1"></div>
        </aside>
    }
}

#[component]
pub fn Header(
    #[prop(into)] title: String,
    on_toggle_sidebar: Callback<MouseEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <header class="bg-white shadow-md z-10">
            <div class="px-4 sm:px-6 py-4 flex justify-between items-center max-w-7xl mx-auto">
                <div class="flex items-center gap-3">
                    <button
                        type="button"
                        class="md:hidden"
                        on:click=move |ev| on_toggle_sidebar.call(ev)
                    >
                        <span class="sr-only">"Toggle sidebar"</span>
                        <svg class="h-6 w-6 text-gray-600" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                        </svg>
                    </button>
                    <h2 class="text-lg font-medium bg-gradient-to-r from-blue-700 to-indigo-600 text-transparent bg-clip-text">
                        {title}
                    </h2>
                </div>
                <div class="flex items-center gap-3">{children()}</div>
            </div>
        </header>
    }
}

/// Full-screen blocker shown while `visible` is true.
#[component]
pub fn LoadingOverlay(visible: Signal<bool>, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="fixed inset-0 bg-white z-50 flex items-center justify-center" role="status">
                <div class="flex flex-col items-center">
                    <div class="w-16 h-16 border-4 border-t-blue-600 border-b-blue-300 border-l-blue-500 border-r-blue-400 rounded-full animate-spin mb-4"></div>
                    <h2 class="text-xl font-medium text-blue-800">{message.clone()}</h2>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_renders_title_and_actions() {
        let html = render_to_string(move || {
            view! {
                <Header title="Attendance Management" on_toggle_sidebar=Callback::new(|_| ())>
                    <button>"refresh-action"</button>
                </Header>
            }
        });
        assert!(html.contains("Attendance Management"));
        assert!(html.contains("refresh-action"));
    }

    #[test]
    fn sidebar_slides_out_when_closed() {
        let html = render_to_string(move || {
            let open = create_rw_signal(false);
            view! { <Sidebar open=open.into() on_close=Callback::new(|_| ()) /> }
        });
        assert!(html.contains("ECE Dept"));
        assert!(html.contains("-translate-x-full"));
    }

    #[test]
    fn overlay_renders_only_while_visible() {
        let shown = render_to_string(move || {
            let visible = create_rw_signal(true);
            view! { <LoadingOverlay visible=visible.into() message="Loading Attendance System..." /> }
        });
        assert!(shown.contains("Loading Attendance System..."));

        let hidden = render_to_string(move || {
            let visible = create_rw_signal(false);
            view! { <LoadingOverlay visible=visible.into() message="Loading Attendance System..." /> }
        });
        assert!(!hidden.contains("Loading Attendance System..."));
    }
}
