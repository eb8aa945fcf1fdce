//! Map embed and footer

use chrono::Datelike;
use leptos::prelude::*;

use crate::catalog::{copyright_line, STUDIO_NAME};
use crate::components::icons::{Icon, IconKind};
use crate::state::AppState;

#[component]
pub fn MapSection() -> impl IntoView {
    let state = expect_context::<AppState>();
    let embed_url = state.config.with_value(|c| c.map_embed_url());

    view! {
        <section class="h-[500px] w-full relative grayscale invert">
            <iframe
                width="100%"
                height="100%"
                title=format!("{} Location", STUDIO_NAME)
                src=embed_url
                class="w-full h-full border-0 filter brightness-[0.8] contrast-[1.2] opacity-80 hover:opacity-100 transition-opacity duration-500"
            ></iframe>
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 pointer-events-none invert">
                <div class="bg-black/90 backdrop-blur-md border border-gulf-gold/50 p-6 text-center shadow-2xl rounded-sm">
                    <div class="w-12 h-12 bg-gulf-gold rounded-full flex items-center justify-center mx-auto mb-4 text-black">
                        <Icon icon=IconKind::MapPin />
                    </div>
                    <h3 class="font-serif text-2xl text-white mb-1">"Heliopolis"</h3>
                    <p class="text-gulf-gold text-xs uppercase tracking-widest">"Main Showroom"</p>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="bg-zinc-950 py-12 border-t border-white/10 text-center">
            <p class="font-serif text-2xl text-white mb-4">{STUDIO_NAME}</p>
            <p class="text-gray-500 text-sm">{copyright_line(year)}</p>
        </footer>
    }
}
