/// Viewports at least this wide show the sidebar pinned open.
pub const SIDEBAR_BREAKPOINT_PX: f64 = 768.0;

pub fn sidebar_open_for_width(width: f64) -> bool {
    width >= SIDEBAR_BREAKPOINT_PX
}

#[cfg(target_arch = "wasm32")]
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_width() -> Option<f64> {
    None
}

/// Initial sidebar state; without a browser window the sidebar starts open.
pub fn initial_sidebar_open() -> bool {
    viewport_width().map(sidebar_open_for_width).unwrap_or(true)
}
