use super::*;

#[test]
fn nav_menu_default_closed() {
    let menu = NavMenu::default();
    assert!(!menu.open);
    assert_eq!(menu.aria_expanded(), "false");
    assert_eq!(menu.body_overflow(), "");
}

#[test]
fn toggle_opens_and_locks_scroll() {
    let mut menu = NavMenu::default();
    menu.toggle();
    assert!(menu.open);
    assert_eq!(menu.aria_expanded(), "true");
    assert_eq!(menu.body_overflow(), "hidden");
    menu.toggle();
    assert!(!menu.open);
}

#[test]
fn escape_closes_only_an_open_menu() {
    let mut menu = NavMenu { open: true };
    assert!(menu.handle_key("Escape"));
    assert!(!menu.open);
    assert!(!menu.handle_key("Escape"));
}

#[test]
fn other_keys_leave_menu_open() {
    let mut menu = NavMenu { open: true };
    assert!(!menu.handle_key("Enter"));
    assert!(menu.open);
}
