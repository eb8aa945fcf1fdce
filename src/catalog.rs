//! Fixed site content: showroom projects, copy and image URLs

use crate::types::{ProjectSummary, SpecItem};

pub const STUDIO_NAME: &str = "Gulf Design Studio";
pub const WORDMARK: &str = "Gulf Design";

/// Section anchors shown in the navigation, in display order
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("Showroom", "#showroom"),
    ("About", "#about"),
    ("Contact", "#contact"),
];

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=2070&auto=format&fit=crop";
pub const ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1616486338812-3dadae4b4ace?q=80&w=1932&auto=format&fit=crop";

pub const ABOUT_HIGHLIGHTS: [&str; 4] = [
    "Custom Fabrication",
    "Premium Materials",
    "Lighting Design",
    "Space Optimization",
];

pub const SHOWROOM_ADDRESS: &str = "Heliopolis, Cairo, Egypt";
pub const PHONE_DISPLAY: &str = "+20 123 456 789";
pub const PHONE_HOURS: &str = "Mon-Sat, 10am - 9pm";

/// A showroom card's literal data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowroomEntry {
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
}

impl ShowroomEntry {
    pub fn to_summary(&self) -> ProjectSummary {
        ProjectSummary::new(self.title, self.category, self.image)
    }
}

/// The showroom grid, in display order
pub static SHOWROOM: [ShowroomEntry; 3] = [
    ShowroomEntry {
        title: "Modern Noir",
        category: "Kitchens",
        image: "https://images.unsplash.com/photo-1556911220-e15b29be8c8f?q=80&w=2070&auto=format&fit=crop",
    },
    ShowroomEntry {
        title: "Walk-in Luxury",
        category: "Dressings",
        image: "https://images.unsplash.com/photo-1558603668-6570496b66f8?q=80&w=2000&auto=format&fit=crop",
    },
    ShowroomEntry {
        title: "Living Spaces",
        category: "Furniture",
        image: "https://images.unsplash.com/photo-1618221195710-dd6b41faaea6?q=80&w=2000&auto=format&fit=crop",
    },
];

/// Detail shots reused by every project
pub const GALLERY_DETAIL_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?q=80&w=2053&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?q=80&w=2070&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1600489000022-c2086d79f9d4?q=80&w=1935&auto=format&fit=crop&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
];

pub const PROJECT_SPECS: [SpecItem; 3] = [
    SpecItem { label: "Finish", value: "Matte Black Oak" },
    SpecItem { label: "Countertop", value: "Calacatta Gold" },
    SpecItem { label: "Location", value: "New Cairo" },
];

pub const PROJECT_DESCRIPTION: &str = "We utilized a proprietary matte finish that resists fingerprints while absorbing light to create a moody, intimate atmosphere. The gold hardware acts as jewelry, punctuating the dark cabinetry with deliberate luxury.";

/// Hero image followed by the fixed detail shots
pub fn gallery_for(project: &ProjectSummary) -> [String; 4] {
    let [a, b, c] = GALLERY_DETAIL_IMAGES;
    [project.image.clone(), a.to_string(), b.to_string(), c.to_string()]
}

pub fn copyright_line(year: i32) -> String {
    format!("\u{a9} {} All Rights Reserved.", year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showroom_order_is_fixed() {
        let titles: Vec<_> = SHOWROOM.iter().map(|e| e.title).collect();
        assert_eq!(titles, ["Modern Noir", "Walk-in Luxury", "Living Spaces"]);
    }

    #[test]
    fn test_gallery_starts_with_project_image() {
        let project = ProjectSummary::new("Modern Noir", "Kitchens", "https://img/x.jpg");
        let gallery = gallery_for(&project);

        assert_eq!(gallery[0], "https://img/x.jpg");
        assert_eq!(&gallery[1..], GALLERY_DETAIL_IMAGES.map(String::from).as_slice());
    }

    #[test]
    fn test_gallery_detail_shots_are_shared() {
        let noir = SHOWROOM[0].to_summary();
        let living = SHOWROOM[2].to_summary();
        assert_eq!(gallery_for(&noir)[1..], gallery_for(&living)[1..]);
        assert_ne!(gallery_for(&noir)[0], gallery_for(&living)[0]);
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2026), "© 2026 All Rights Reserved.");
    }
}
