use termfolio::ui::typing::{
    revealed, revealed_chars, TYPING_INTERVAL_MS, TYPING_START_DELAY_MS,
};

#[test]
fn nothing_is_typed_before_the_initial_delay() {
    assert_eq!(revealed_chars(20, 0), 0);
    assert_eq!(revealed_chars(20, TYPING_START_DELAY_MS - 1), 0);
}

#[test]
fn one_character_per_interval_after_the_delay() {
    assert_eq!(revealed_chars(20, TYPING_START_DELAY_MS), 1);
    assert_eq!(
        revealed_chars(20, TYPING_START_DELAY_MS + TYPING_INTERVAL_MS - 1),
        1
    );
    assert_eq!(
        revealed_chars(20, TYPING_START_DELAY_MS + 5 * TYPING_INTERVAL_MS),
        6
    );
}

#[test]
fn reveal_caps_at_the_text_length() {
    assert_eq!(
        revealed_chars(4, TYPING_START_DELAY_MS + 1000 * TYPING_INTERVAL_MS),
        4
    );
}

#[test]
fn revealed_returns_a_prefix() {
    let text = "hello world";
    assert_eq!(revealed(text, 0), "");
    assert_eq!(
        revealed(text, TYPING_START_DELAY_MS + 2 * TYPING_INTERVAL_MS),
        "hel"
    );
    assert_eq!(revealed(text, u64::MAX / 2), text);
}

#[test]
fn reveal_respects_char_boundaries() {
    let text = "héllo";
    let partial = revealed(text, TYPING_START_DELAY_MS + TYPING_INTERVAL_MS);
    assert_eq!(partial, "hé");
}
