//! Reusable UI components

pub mod about;
pub mod contact_form;
pub mod hero;
pub mod icons;
pub mod map;
pub mod nav;
pub mod reveal;
pub mod showroom;

pub use about::About;
pub use contact_form::{ContactForm, ContactSection};
pub use hero::Hero;
pub use icons::{Icon, IconKind};
pub use map::{Footer, MapSection};
pub use nav::NavBar;
pub use reveal::{Animated, Reveal};
pub use showroom::ShowroomGrid;
