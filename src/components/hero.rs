//! Full-screen hero banner

use leptos::prelude::*;

use crate::catalog::HERO_IMAGE;
use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::Animated;
use crate::motion::{Frame, Motion};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative h-screen flex items-center justify-center overflow-hidden bg-black">
            <div class="absolute inset-0 z-0">
                <img src=HERO_IMAGE alt="Luxury Kitchen" class="w-full h-full object-cover" />
                <div class="absolute inset-0 bg-black/70"></div>
                <div class="absolute inset-0 bg-gradient-to-t from-black via-transparent to-black/60"></div>
            </div>

            <div class="relative z-10 text-center px-4 max-w-5xl mx-auto">
                <h2
                    class="text-gulf-gold tracking-[0.4em] uppercase text-xs md:text-sm mb-6 font-bold drop-shadow-md"
                    style=Motion::new(Frame::offset(0, 20), 500).delay(200).style()
                >
                    "Kitchens & Dressings"
                </h2>

                <h1
                    class="font-serif text-5xl md:text-7xl lg:text-8xl leading-tight mb-8 text-white drop-shadow-2xl"
                    style=Motion::zoom_in().style()
                >
                    "Making Space, "
                    <br />
                    <span class="italic text-gulf-gold font-light">"Livable."</span>
                </h1>

                <Animated motion=Motion::fade_in().delay(800)>
                    <a
                        href="#showroom"
                        class="group inline-flex items-center gap-3 border border-white/30 bg-white/5 backdrop-blur-sm text-white px-10 py-4 uppercase tracking-[0.2em] text-sm hover:bg-gulf-gold hover:border-gulf-gold hover:text-black transition-all duration-300"
                    >
                        "Enter Showroom"
                        <Icon
                            icon=IconKind::ArrowRight
                            size=16
                            class="group-hover:translate-x-1 transition-transform"
                        />
                    </a>
                </Animated>
            </div>
        </section>
    }
}
