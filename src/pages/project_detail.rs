//! Project detail page

use leptos::prelude::*;
use leptos_meta::Title;

use crate::catalog::{gallery_for, PROJECT_DESCRIPTION, PROJECT_SPECS, STUDIO_NAME, WORDMARK};
use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::Animated;
use crate::motion::{Frame, Motion};
use crate::state::AppState;
use crate::types::ProjectSummary;

const GALLERY_IMAGE_CLASS: &str =
    "w-full h-full object-cover transition-transform duration-700 group-hover:scale-105";

/// Full-page view of the selected project
#[component]
pub fn ProjectDetailView(project: ProjectSummary) -> impl IntoView {
    let state = expect_context::<AppState>();

    // No tracked reads, so this runs once on mount
    Effect::new(move |_| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    let [hero_image, detail_tall, detail_top, detail_bottom] = gallery_for(&project);
    let label_motion = Motion::new(Frame::offset(0, 20), 500);

    view! {
        <Title text=format!("{} | {}", project.title, STUDIO_NAME) />
        <div class="bg-black min-h-screen text-white relative z-[60]" style=Motion::fade_in().style()>
            // Sticky back header
            <div class="fixed top-0 left-0 w-full z-50 p-6 flex justify-between items-center bg-gradient-to-b from-black/90 to-transparent">
                <button
                    on:click=move |_| state.clear_project()
                    class="group flex items-center gap-3 text-sm uppercase tracking-widest text-gulf-gold hover:text-white transition-colors"
                >
                    <Icon icon=IconKind::ArrowLeft class="group-hover:-translate-x-2 transition-transform" />
                    "Back to Collection"
                </button>
                <div class="hidden md:block font-serif text-xl tracking-widest uppercase">{WORDMARK}</div>
            </div>

            // Hero
            <div class="h-[70vh] md:h-[80vh] relative w-full overflow-hidden">
                <img src=hero_image alt=project.title.clone() class="w-full h-full object-cover" />
                <div class="absolute inset-0 bg-black/60"></div>
                <div class="absolute bottom-0 left-0 p-8 md:p-16">
                    <p
                        class="text-gulf-gold uppercase tracking-widest text-sm font-bold mb-4"
                        style=label_motion.style()
                    >
                        {project.category.clone()}
                    </p>
                    <h1
                        class="font-serif text-5xl md:text-7xl lg:text-8xl text-white mb-6"
                        style=label_motion.delay(100).style()
                    >
                        {project.title.clone()}
                    </h1>

                    <div class="flex flex-wrap gap-8 md:gap-16 text-sm text-gray-400 border-t border-white/20 pt-8 max-w-2xl">
                        {PROJECT_SPECS
                            .iter()
                            .map(|spec| view! {
                                <div>
                                    <span class="block text-white uppercase tracking-wider text-xs mb-1">
                                        {spec.label}
                                    </span>
                                    {spec.value}
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            // Description
            <section class="py-16 md:py-24 px-6 max-w-4xl mx-auto text-center">
                <h3 class="font-serif text-2xl md:text-4xl leading-relaxed mb-8">
                    "\"A masterpiece of dark tones and warm textures. "
                    "This design was created to be the "
                    <span class="text-gulf-gold italic">"silent anchor"</span>
                    " of the home.\""
                </h3>
                <p class="text-gray-400 leading-loose font-light text-sm md:text-base">
                    {PROJECT_DESCRIPTION}
                </p>
            </section>

            // Gallery
            <section class="px-4 md:px-6 pb-24 max-w-7xl mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4 md:gap-8">
                    <div class="row-span-2 h-[500px] md:h-[800px] rounded-sm overflow-hidden relative group">
                        <img src=detail_tall alt="Project detail" class=GALLERY_IMAGE_CLASS />
                    </div>
                    <div class="h-[300px] md:h-[384px] rounded-sm overflow-hidden relative group">
                        <img src=detail_top alt="Project detail" class=GALLERY_IMAGE_CLASS />
                    </div>
                    <div class="h-[300px] md:h-[384px] rounded-sm overflow-hidden relative group">
                        <img src=detail_bottom alt="Project detail" class=GALLERY_IMAGE_CLASS />
                    </div>
                </div>
            </section>

            // Call to action
            <Animated motion=Motion::fade_in_up() class="bg-zinc-900 py-24 text-center border-t border-white/10">
                <h2 class="font-serif text-3xl md:text-5xl mb-8 text-white">"Inspired by this look?"</h2>
                <button
                    on:click=move |_| state.clear_project()
                    class="bg-[#D4AF37] text-black px-10 py-4 uppercase tracking-[0.2em] text-xs md:text-sm font-bold hover:bg-white transition-colors duration-300"
                >
                    "View Other Collections"
                </button>
            </Animated>
        </div>
    }
}
