use crate::components::{
    common::{Button, ButtonVariant},
    layout::{Header, LoadingOverlay, Sidebar},
};
use leptos::{ev::MouseEvent, *};

#[component]
pub fn AttendanceFrame(
    loading: Signal<bool>,
    sidebar_open: Signal<bool>,
    on_toggle_sidebar: Callback<MouseEvent>,
    on_close_sidebar: Callback<MouseEvent>,
    on_refresh: Callback<MouseEvent>,
    on_add: Callback<MouseEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <LoadingOverlay visible=loading message="Loading Attendance System..." />
        <div class="flex h-screen bg-gradient-to-br from-blue-50 to-indigo-50">
            <Sidebar open=sidebar_open on_close=on_close_sidebar />
            <div class="flex-1 flex flex-col overflow-hidden">
                <Header title="Attendance Management" on_toggle_sidebar=on_toggle_sidebar>
                    <Button
                        variant=ButtonVariant::Round
                        attr:aria-label="Refresh"
                        on:click=move |ev| on_refresh.call(ev)
                    >
                        <svg class="h-5 w-5" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15" />
                        </svg>
                    </Button>
                    <Button
                        variant=ButtonVariant::Round
                        attr:aria-label="Add user"
                        on:click=move |ev| on_add.call(ev)
                    >
                        <svg class="h-5 w-5" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 4v16m8-8H4" />
                        </svg>
                    </Button>
                </Header>
                <main class="flex-1 overflow-y-auto p-4 sm:p-6">
                    <div class="max-w-7xl mx-auto">{children()}</div>
                </main>
            </div>
        </div>
    }
}
