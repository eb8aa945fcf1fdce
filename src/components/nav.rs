//! Floating navigation bar

use leptos::prelude::*;

use crate::catalog::{NAV_LINKS, WORDMARK};
use crate::components::icons::{Icon, IconKind};
use crate::motion::{Ease, Motion};
use crate::state::AppState;

#[component]
pub fn NavBar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let menu_open = state.menu_open();
    let toggle_icon = move || if menu_open.get() { IconKind::Close } else { IconKind::Menu };

    view! {
        <nav
            class="fixed top-4 left-0 right-0 z-50 px-4 md:px-8"
            style=Motion::slide_down().ease(Ease::EaseOut).style()
        >
            <div class="max-w-5xl mx-auto">
                // Floating pill
                <div class="bg-black/80 backdrop-blur-xl border border-white/10 rounded-full px-6 py-3 flex justify-between items-center shadow-[0_10px_30px_rgba(0,0,0,0.5)]">
                    // Logo
                    <div class="flex items-center gap-3">
                        <div class="w-10 h-10 bg-gradient-to-br from-[#D4AF37] to-[#8a7122] rounded-full flex items-center justify-center shadow-lg">
                            <span class="font-serif text-black font-bold text-xl">"G"</span>
                        </div>
                        <span class="font-serif text-lg tracking-[0.2em] text-white uppercase hidden sm:block">
                            {WORDMARK}
                        </span>
                    </div>

                    // Desktop links
                    <div class="hidden md:flex items-center gap-8 bg-white/5 rounded-full px-8 py-2 border border-white/5">
                        {NAV_LINKS
                            .iter()
                            .map(|(label, href)| view! {
                                <a
                                    href=*href
                                    class="text-xs uppercase tracking-[0.15em] text-gray-300 hover:text-[#D4AF37] transition-colors duration-300 relative group"
                                >
                                    {*label}
                                    <span class="absolute -bottom-1 left-0 w-0 h-[1px] bg-[#D4AF37] transition-all duration-300 group-hover:w-full"></span>
                                </a>
                            })
                            .collect_view()}
                    </div>

                    <div class="flex items-center gap-4">
                        <a
                            href="#contact"
                            class="hidden md:block bg-[#D4AF37] hover:bg-white text-black text-[10px] font-bold uppercase tracking-widest px-5 py-2.5 rounded-full transition-colors duration-300"
                        >
                            "Book Visit"
                        </a>

                        <button
                            class="md:hidden text-white p-2 hover:text-[#D4AF37] transition-colors"
                            aria-label="Toggle menu"
                            on:click=move |_| state.toggle_menu()
                        >
                            {move || view! { <Icon icon=toggle_icon() size=20 /> }}
                        </button>
                    </div>
                </div>

                // Mobile dropdown
                <Show when=move || menu_open.get()>
                    <div
                        class="absolute top-full left-0 right-0 mt-4 px-4 md:hidden"
                        style=Motion::pop_down().style()
                    >
                        <div class="bg-[#111] border border-white/10 rounded-2xl p-6 shadow-2xl backdrop-blur-xl">
                            <div class="flex flex-col gap-6 text-center">
                                {NAV_LINKS
                                    .iter()
                                    .map(|(label, href)| view! {
                                        <a
                                            href=*href
                                            on:click=move |_| state.close_menu()
                                            class="text-gray-300 hover:text-[#D4AF37] uppercase tracking-widest text-sm"
                                        >
                                            {*label}
                                        </a>
                                    })
                                    .collect_view()}
                                <div class="w-full h-[1px] bg-white/10 my-2"></div>
                                <a
                                    href="#contact"
                                    on:click=move |_| state.close_menu()
                                    class="text-[#D4AF37] font-bold uppercase tracking-widest text-sm"
                                >
                                    "Book a Visit"
                                </a>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
