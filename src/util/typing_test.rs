use super::*;

#[test]
fn typed_prefix_grows_one_character_at_a_time() {
    assert_eq!(typed_prefix("Engineer", 0), "");
    assert_eq!(typed_prefix("Engineer", 3), "Eng");
    assert_eq!(typed_prefix("Engineer", 8), "Engineer");
}

#[test]
fn typed_prefix_clamps_past_the_end() {
    assert_eq!(typed_prefix("Engineer", 99), "Engineer");
    assert_eq!(typed_prefix("", 1), "");
}

#[test]
fn typed_prefix_counts_characters_not_bytes() {
    assert_eq!(typed_prefix("Café dev", 4), "Café");
    assert_eq!(typed_prefix("Café dev", 3), "Caf");
}
