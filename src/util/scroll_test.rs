use super::*;

fn sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds { id: "about".to_owned(), top: 600.0, height: 500.0 },
        SectionBounds { id: "projects".to_owned(), top: 1100.0, height: 800.0 },
        SectionBounds { id: "contact".to_owned(), top: 1900.0, height: 400.0 },
    ]
}

// =============================================================
// Anchors
// =============================================================

#[test]
fn anchor_target_extracts_fragment_id() {
    assert_eq!(anchor_target("#projects"), Some(Anchor::Element("projects")));
}

#[test]
fn anchor_target_maps_top_to_document_origin() {
    assert_eq!(anchor_target("#top"), Some(Anchor::Top));
    assert_eq!(anchor_target("#topics"), Some(Anchor::Element("topics")));
}

#[test]
fn anchor_target_skips_bare_hash_and_external_links() {
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target(""), None);
    assert_eq!(anchor_target("https://github.com/"), None);
}

#[test]
fn anchor_scroll_top_clears_header() {
    assert_eq!(anchor_scroll_top(400.0, 1000.0, 64.0), 1316.0);
}

// =============================================================
// Parallax
// =============================================================

#[test]
fn parallax_at_top_is_identity() {
    let p = parallax(0.0, 800.0);
    assert_eq!(p, Some(Parallax { translate_y: 0.0, opacity: 1.0 }));
}

#[test]
fn parallax_scales_with_scroll() {
    let Some(p) = parallax(400.0, 800.0) else {
        panic!("expected parallax inside hero");
    };
    assert!((p.translate_y - 120.0).abs() < f64::EPSILON);
    assert!((p.opacity - 0.75).abs() < f64::EPSILON);
    assert_eq!(p.transform(), "translateY(120px)");
}

#[test]
fn parallax_stops_past_viewport() {
    assert_eq!(parallax(800.0, 800.0), None);
    assert_eq!(parallax(1200.0, 800.0), None);
    assert_eq!(parallax(10.0, 0.0), None);
}

// =============================================================
// Highlight
// =============================================================

#[test]
fn highlight_clears_near_top() {
    assert_eq!(highlight(50.0, &sections()), Highlight::Clear);
}

#[test]
fn highlight_activates_section_with_lead() {
    let sections = sections();
    // about spans (450, 950] once the lead is applied.
    assert_eq!(highlight(460.0, &sections), Highlight::Section("about"));
    assert_eq!(highlight(950.0, &sections), Highlight::Section("about"));
    assert_eq!(highlight(951.0, &sections), Highlight::Section("projects"));
}

#[test]
fn highlight_keeps_previous_between_sections() {
    assert_eq!(highlight(200.0, &sections()), Highlight::Keep);
    assert_eq!(highlight(5000.0, &sections()), Highlight::Keep);
}

#[test]
fn highlight_prefers_later_overlapping_section() {
    let overlapping = vec![
        SectionBounds { id: "a".to_owned(), top: 500.0, height: 1000.0 },
        SectionBounds { id: "b".to_owned(), top: 700.0, height: 300.0 },
    ];
    assert_eq!(highlight(600.0, &overlapping), Highlight::Section("b"));
}

// =============================================================
// Scroll-to-top
// =============================================================

#[test]
fn scroll_top_button_appears_past_threshold() {
    assert!(!show_scroll_top(0.0));
    assert!(!show_scroll_top(300.0));
    assert!(show_scroll_top(301.0));
}

// =============================================================
// Nav background
// =============================================================

#[test]
fn nav_scrolled_past_threshold() {
    assert!(!nav_scrolled(0.0));
    assert!(!nav_scrolled(50.0));
    assert!(nav_scrolled(51.0));
}

// =============================================================
// Card tilt
// =============================================================

#[test]
fn tilt_is_flat_at_card_center() {
    let t = tilt(100.0, 50.0, 200.0, 100.0);
    assert_eq!((t.rotate_x, t.rotate_y), (0.0, 0.0));
    assert_eq!(t.scale, TILT_HOVER_SCALE);
}

#[test]
fn tilt_leans_away_from_top_left_corner() {
    let t = tilt(0.0, 0.0, 200.0, 100.0);
    assert_eq!(t, Tilt { rotate_x: -2.5, rotate_y: 5.0, scale: 1.02 });
    assert_eq!(t.transform(), "perspective(1000px) rotateX(-2.5deg) rotateY(5deg) scale(1.02)");
}

#[test]
fn tilt_rest_resets_rotation_and_scale() {
    assert_eq!(Tilt::REST.transform(), "perspective(1000px) rotateX(0deg) rotateY(0deg) scale(1)");
}
