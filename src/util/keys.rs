//! Keyboard activation for focusable cards.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// Enter or Space activates a focused card as if it were clicked.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
