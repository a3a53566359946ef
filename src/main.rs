mod api;
mod components;
mod format;
mod models;
mod session;
mod state;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::chat::ChatArea;
use components::header::Header;
use components::sidebar::Sidebar;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    let state = AppState::provide();

    // One-shot liveness probe; loads documents once connected
    state.check_backend();

    view! {
        <div class="app-container">
            <Header />
            <div class="content-row">
                <Sidebar />
                <ChatArea />
            </div>
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
