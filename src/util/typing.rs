//! Typewriter reveal for the hero subtitle.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

pub const TYPING_START_DELAY_MS: u32 = 1000;
pub const TYPING_CHAR_MS: u32 = 50;

/// The first `chars` characters of `text`, never splitting a code point.
pub fn typed_prefix(text: &str, chars: usize) -> &str {
    text.char_indices().nth(chars).map_or(text, |(end, _)| &text[..end])
}

#[cfg(feature = "csr")]
mod dom {
    use gloo_timers::callback::Timeout;
    use leptos::prelude::*;

    use super::*;

    fn type_from(typed: RwSignal<usize>, shown: usize, total: usize, delay: u32) {
        if shown >= total {
            return;
        }
        Timeout::new(delay, move || {
            // Stops once the hero is unmounted.
            if typed.try_update(|n| *n = shown + 1).is_some() {
                type_from(typed, shown + 1, total, TYPING_CHAR_MS);
            }
        })
        .forget();
    }

    /// Reset `typed` to zero and count it up to `total`, one character every
    /// [`TYPING_CHAR_MS`] after an initial [`TYPING_START_DELAY_MS`].
    pub fn type_out(typed: RwSignal<usize>, total: usize) {
        typed.set(0);
        type_from(typed, 0, total, TYPING_START_DELAY_MS);
    }
}

#[cfg(feature = "csr")]
pub use dom::type_out;
