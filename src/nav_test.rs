use super::*;

fn links(hrefs: &[&str]) -> SectionHighlighter {
    SectionHighlighter::new(hrefs.iter().map(|h| Some((*h).to_owned())).collect())
}

// --- is_scrolled ---

#[test]
fn scrolled_only_past_offset() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
    assert!(is_scrolled(50.5));
    assert!(is_scrolled(900.0));
}

// --- MenuState ---

#[test]
fn menu_starts_closed() {
    assert!(!MenuState::default().open);
}

#[test]
fn toggle_flips_menu() {
    let mut menu = MenuState::default();
    assert!(menu.toggle());
    assert!(!menu.toggle());
    assert!(menu.toggle());
}

#[test]
fn link_click_closes_regardless_of_state() {
    let mut menu = MenuState { open: true };
    menu.close();
    assert!(!menu.open);
    menu.close();
    assert!(!menu.open);
}

// --- SectionHighlighter ---

#[test]
fn nothing_active_initially() {
    let hl = links(&["#home", "#about"]);
    assert_eq!(hl.active(), None);
    assert_eq!(hl.len(), 2);
}

#[test]
fn entering_section_marks_matching_link() {
    let mut hl = links(&["#home", "#about", "#contact"]);
    assert_eq!(hl.enter(Some("about")), Some(1));
    assert!(hl.is_active(1));
    assert!(!hl.is_active(0));
    assert!(!hl.is_active(2));
}

#[test]
fn most_recent_section_wins() {
    let mut hl = links(&["#home", "#about", "#contact"]);
    hl.enter(Some("home"));
    hl.enter(Some("contact"));
    assert_eq!(hl.active(), Some(2));
    assert_eq!((0..hl.len()).filter(|i| hl.is_active(*i)).count(), 1);
}

#[test]
fn unmatched_section_clears_highlight() {
    let mut hl = links(&["#home", "#about"]);
    hl.enter(Some("home"));
    assert_eq!(hl.enter(Some("footer")), None);
    assert!(!hl.is_active(0));
}

#[test]
fn section_without_id_clears_highlight() {
    let mut hl = links(&["#home"]);
    hl.enter(Some("home"));
    assert_eq!(hl.enter(None), None);
}

#[test]
fn duplicate_hrefs_mark_only_first() {
    let mut hl = links(&["#about", "#about"]);
    assert_eq!(hl.enter(Some("about")), Some(0));
    assert!(!hl.is_active(1));
}

#[test]
fn links_without_fragment_never_match() {
    let mut hl = SectionHighlighter::new(vec![None, Some("about".to_owned()), Some("/blog#about".to_owned())]);
    assert_eq!(hl.enter(Some("about")), None);
}

#[test]
fn empty_link_list() {
    let mut hl = SectionHighlighter::new(Vec::new());
    assert!(hl.is_empty());
    assert_eq!(hl.enter(Some("home")), None);
}
