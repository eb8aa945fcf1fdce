use gulf_site::catalog::{gallery_for, SHOWROOM};
use gulf_site::state::SiteState;
use gulf_site::types::{ActiveView, ProjectSummary};
use rstest::rstest;

// ============= Helpers =============

fn detail(state: &SiteState) -> ProjectSummary {
    match state.active_view() {
        ActiveView::ProjectDetail(project) => project,
        ActiveView::Main => panic!("expected the project detail view"),
    }
}

// ============= Showroom Cards =============

#[rstest]
#[case(0, "Modern Noir", "Kitchens")]
#[case(1, "Walk-in Luxury", "Dressings")]
#[case(2, "Living Spaces", "Furniture")]
fn test_card_selects_its_own_project(
    #[case] index: usize,
    #[case] title: &str,
    #[case] category: &str,
) {
    let entry = SHOWROOM[index];
    let mut state = SiteState::new();
    state.select_project(entry.to_summary());

    let project = detail(&state);
    assert_eq!(project.title, title);
    assert_eq!(project.category, category);
    assert_eq!(project.image, entry.image);

    for (other_index, other) in SHOWROOM.iter().enumerate() {
        if other_index != index {
            assert_ne!(project, other.to_summary());
        }
    }
}

#[test]
fn test_showroom_has_three_distinct_projects() {
    assert_eq!(SHOWROOM.len(), 3);
    for (i, a) in SHOWROOM.iter().enumerate() {
        for b in SHOWROOM.iter().skip(i + 1) {
            assert_ne!(a.title, b.title);
            assert_ne!(a.image, b.image);
        }
    }
}

// ============= View Selection =============

#[test]
fn test_fresh_load_shows_main_view() {
    let state = SiteState::new();
    assert_eq!(state.active_view(), ActiveView::Main);
    assert!(state.selected_project.is_none());
    assert!(!state.menu_open);
}

#[test]
fn test_living_spaces_round_trip() {
    let mut state = SiteState::new();

    let living = SHOWROOM
        .iter()
        .find(|e| e.title == "Living Spaces")
        .expect("Living Spaces card")
        .to_summary();
    state.select_project(living);

    let project = detail(&state);
    assert_eq!(project.title, "Living Spaces");
    assert_eq!(project.category, "Furniture");

    // "Back to Collection"
    state.clear_project();
    assert_eq!(state.active_view(), ActiveView::Main);
    assert!(state.selected_project.is_none());
}

#[test]
fn test_arbitrary_project_is_displayed_verbatim() {
    let custom = ProjectSummary::new("Modern Noir", "Kitchens", "https://cdn.example.com/x.jpg");
    let mut state = SiteState::new();
    state.select_project(custom.clone());

    let project = detail(&state);
    assert_eq!(project, custom);
    assert_eq!(gallery_for(&project)[0], "https://cdn.example.com/x.jpg");
}

#[test]
fn test_repeated_round_trips_restore_initial_state() {
    let mut state = SiteState::new();
    for entry in SHOWROOM.iter() {
        state.select_project(entry.to_summary());
        state.clear_project();
        assert_eq!(state, SiteState::new());
    }
}

#[test]
fn test_back_is_noop_on_main_view() {
    let mut state = SiteState::new();
    state.clear_project();
    state.clear_project();
    assert_eq!(state, SiteState::new());
}

// ============= Mobile Menu =============

#[rstest]
#[case(false)]
#[case(true)]
fn test_toggle_menu_is_an_involution(#[case] start_open: bool) {
    let mut state = SiteState::new();
    if start_open {
        state.toggle_menu();
    }
    let before = state.menu_open;

    state.toggle_menu();
    assert_ne!(state.menu_open, before);
    state.toggle_menu();
    assert_eq!(state.menu_open, before);
}

#[test]
fn test_menu_link_closes_menu() {
    let mut state = SiteState::new();
    state.toggle_menu();
    state.close_menu();
    assert!(!state.menu_open);

    state.close_menu();
    assert!(!state.menu_open);
}
