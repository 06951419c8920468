use leptos::*;
use leptos_router::*;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use api::ApiClient;
use components::{
    alerts::provide_notices,
    toast::{provide_toasts, ToastHost, ToastOptions},
};
use pages::{attendance::AttendancePage, dashboard::DashboardPage, leave::LeavePage};

#[component]
pub fn App() -> impl IntoView {
    leptos_meta::provide_meta_context();
    provide_context(ApiClient::new());
    provide_toasts(ToastOptions::default());
    provide_notices();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/attendance" view=AttendancePage/>
                <Route path="/leave" view=LeavePage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}

#[cfg(target_arch = "wasm32")]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting LeaveDesk admin frontend (wasm)");

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__LEAVEDESK_ENV is present (env.js), it takes precedence.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    mount_to_body(|| view! { <App/> });
}
