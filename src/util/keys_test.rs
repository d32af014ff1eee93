use super::*;

#[test]
fn enter_and_space_activate() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
}

#[test]
fn other_keys_do_not_activate() {
    for key in ["Escape", "Tab", "Spacebar", "enter", ""] {
        assert!(!is_activation_key(key), "{key:?}");
    }
}
