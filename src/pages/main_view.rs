//! Landing page

use leptos::prelude::*;
use leptos_meta::Title;

use crate::catalog::STUDIO_NAME;
use crate::components::{About, ContactSection, Footer, Hero, MapSection, NavBar, ShowroomGrid};

/// The main site, shown whenever no project is selected
#[component]
pub fn MainView() -> impl IntoView {
    view! {
        <Title text=format!("{} | Kitchens & Dressings", STUDIO_NAME) />
        <NavBar />
        <Hero />
        <ShowroomGrid />
        <About />
        <ContactSection />
        <MapSection />
        <Footer />
    }
}
