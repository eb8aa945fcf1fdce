//! Showroom grid

use leptos::prelude::*;

use crate::catalog::{ShowroomEntry, SHOWROOM};
use crate::components::reveal::Reveal;
use crate::motion::Motion;
use crate::state::AppState;
use crate::types::ProjectSummary;

/// Delay between consecutive cards
const STAGGER_MS: u32 = 200;

/// Clickable grid of the fixed showroom projects
#[component]
pub fn ShowroomGrid() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <section id="showroom" class="py-24 px-6 bg-black">
            <div class="max-w-7xl mx-auto">
                <div class="mb-16 text-center">
                    <h3 class="font-serif text-4xl text-white mb-2">"Curated Collections"</h3>
                    <div class="w-24 h-1 bg-gulf-gold mx-auto"></div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SHOWROOM
                        .iter()
                        .zip(0u32..)
                        .map(|(entry, index)| view! {
                            <ShowroomCard
                                entry=*entry
                                index=index
                                on_select=move |project| state.select_project(project)
                            />
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// One card; clicking selects this card's own project
#[component]
fn ShowroomCard(
    entry: ShowroomEntry,
    index: u32,
    on_select: impl Fn(ProjectSummary) + 'static,
) -> impl IntoView {
    view! {
        <div on:click=move |_| on_select(entry.to_summary())>
            <Reveal
                motion=Motion::fade_in_up().stagger(index, STAGGER_MS)
                class="group relative h-[400px] overflow-hidden cursor-pointer"
            >
                <img
                    src=entry.image
                    alt=entry.title
                    class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-black/40 group-hover:bg-black/20 transition-colors"></div>

                <div class="absolute bottom-0 left-0 p-8 w-full">
                    <p class="text-gulf-gold text-xs font-bold uppercase tracking-widest mb-2 translate-y-4 opacity-0 group-hover:translate-y-0 group-hover:opacity-100 transition-all duration-500">
                        {entry.category}
                    </p>
                    <h4 class="font-serif text-3xl text-white translate-y-4 group-hover:translate-y-0 transition-transform duration-500 delay-75">
                        {entry.title}
                    </h4>
                </div>
            </Reveal>
        </div>
    }
}
