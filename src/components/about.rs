//! About section

use leptos::prelude::*;

use crate::catalog::{ABOUT_HIGHLIGHTS, ABOUT_IMAGE, STUDIO_NAME};
use crate::components::reveal::Reveal;
use crate::motion::Motion;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-24 bg-zinc-900 text-white overflow-hidden">
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-16 items-center">
                    <Reveal motion=Motion::slide_in(-50) class="relative">
                        <div class="h-[600px] w-full bg-gray-800 rounded-sm overflow-hidden relative z-10">
                            <img
                                src=ABOUT_IMAGE
                                alt="Craftsmanship"
                                class="w-full h-full object-cover grayscale hover:grayscale-0 transition-all duration-700"
                            />
                        </div>
                        // Gold offset frame
                        <div class="absolute -bottom-6 -right-6 w-full h-full border border-[#D4AF37]/30 -z-0"></div>
                    </Reveal>

                    <Reveal motion=Motion::slide_in(50).delay(200)>
                        <h4 class="text-gulf-gold tracking-widest uppercase text-sm font-bold mb-4">
                            "Our Philosophy"
                        </h4>
                        <h2 class="font-serif text-4xl md:text-5xl mb-8 leading-tight">
                            "Designing for the "
                            <br />
                            <span class="italic text-gray-400">"Extraordinary."</span>
                        </h2>
                        <p class="text-gray-400 leading-relaxed mb-6 font-light text-lg">
                            "At " {STUDIO_NAME} ", we believe that a home is more than just a place to live. "
                            "It is a reflection of your identity. Specializing in bespoke kitchens and luxury "
                            "dressings, we merge functionality with high-end aesthetics."
                        </p>

                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 mb-10">
                            {ABOUT_HIGHLIGHTS
                                .iter()
                                .map(|item| view! {
                                    <div class="flex items-center gap-3">
                                        <div class="w-2 h-2 bg-gulf-gold rounded-full"></div>
                                        <span class="uppercase tracking-wider text-xs">{*item}</span>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
