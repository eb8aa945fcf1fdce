//! Gulf Design Studio - Leptos single-page site
//!
//! A landing page with a clickable showroom; selecting a project swaps the
//! page for that project's detail view until the visitor goes back.

pub mod catalog;
pub mod components;
pub mod config;
pub mod contact;
pub mod error;
pub mod motion;
pub mod pages;
pub mod state;
pub mod types;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta};

pub use error::SiteError;
use pages::{main_view::MainView, project_detail::ProjectDetailView};
use state::AppState;
use types::ActiveView;

/// Root container: owns site state and renders exactly one view
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Initialize global state
    let app_state = AppState::new();
    provide_context(app_state);
    let active_view = app_state.active_view();

    view! {
        <Meta
            name="description"
            content="Gulf Design Studio: bespoke kitchens, luxury dressings and furniture from our Heliopolis showroom."
        />
        <div class="bg-black text-white min-h-screen font-sans selection:bg-gulf-gold selection:text-black">
            {move || match active_view.get() {
                ActiveView::Main => view! { <MainView /> }.into_any(),
                ActiveView::ProjectDetail(project) => {
                    view! { <ProjectDetailView project=project /> }.into_any()
                }
            }}
        </div>
    }
}
