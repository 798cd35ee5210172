use leptos::*;
use leptos_meta::*;
use leptos_router::*;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

use api::ApiClient;
use pages::attendance::AttendancePage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());

    view! {
        <Title text="Attendance" />
        <Router>
            <Routes>
                <Route path="/" view=AttendancePage />
                <Route path="/attendance" view=AttendancePage />
            </Routes>
        </Router>
    }
}

/// Installs the panic hook and logger, resolves runtime config, then mounts
/// the app.
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("Logger init failed: {err}").into());
    }
    log::info!("Starting attendance frontend");

    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        mount_to_body(App);
    });
}
