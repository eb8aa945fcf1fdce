//! Scroll-triggered entrance animation

use leptos::prelude::*;
use leptos_use::use_element_visibility;

use crate::motion::Motion;

/// Holds its children at the motion's starting frame until they first scroll
/// into view, then plays the animation once.
#[component]
pub fn Reveal(
    motion: Motion,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let el = NodeRef::<leptos::html::Div>::new();
    let visible = use_element_visibility(el);
    let revealed = RwSignal::new(false);

    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            revealed.set(true);
        }
    });

    let style = move || {
        if revealed.get() {
            motion.style()
        } else {
            motion.hidden_style()
        }
    };

    view! {
        <div node_ref=el class=class style=style>
            {children()}
        </div>
    }
}

/// Plays the animation as soon as the element mounts
#[component]
pub fn Animated(
    motion: Motion,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=class style=motion.style()>
            {children()}
        </div>
    }
}
