//! Width and cursor-column guarantees of the display composer.

use core_config::ReadOptions;
use core_render::compose::suggestion_for;
use core_render::{Viewport, compose};
use core_text::LineBuffer;
use proptest::prelude::*;

fn opts_with_candidates() -> ReadOptions {
    ReadOptions::default().with_autocomplete(["alpha", "beta", "gamma-ray", "zz"])
}

proptest! {
    #[test]
    fn fitting_text_is_returned_whole(
        text in "[a-z \n]{0,30}",
        cursor_seed in 0usize..64,
        width in 0usize..80,
    ) {
        let buf = LineBuffer::from(text.as_str());
        let cursor = cursor_seed % (buf.len() + 1);
        let opts = opts_with_candidates();
        let info = compose(&buf, cursor, &opts, Viewport::new(width, None));
        let sug = if width > 6 {
            suggestion_for(&buf, cursor, &opts).map_or(0, |s| s.chars().count())
        } else {
            0
        };
        if buf.len() + sug <= width {
            let before = info.before_cursor.chars().count();
            let after = info.after_cursor.chars().count();
            prop_assert_eq!(before + after, buf.len());
            prop_assert_eq!(info.cursor_column, before);
        }
    }

    #[test]
    fn narrow_widths_never_suggest_or_overflow(
        text in "[a-z ]{0,30}",
        cursor_seed in 0usize..64,
        width in 0usize..=6,
    ) {
        let buf = LineBuffer::from(text.as_str());
        let cursor = cursor_seed % (buf.len() + 1);
        let info = compose(&buf, cursor, &opts_with_candidates(), Viewport::new(width, None));
        prop_assert!(!info.has_suggestion);
        prop_assert!(info.suggestion.is_empty());
        prop_assert!(info.width() <= width);
    }

    #[test]
    fn output_never_exceeds_available_width(
        text in "[a-z.,; ]{0,120}",
        cursor_seed in 0usize..256,
        width in 0usize..60,
        window in proptest::option::of(1usize..40),
    ) {
        let buf = LineBuffer::from(text.as_str());
        let cursor = cursor_seed % (buf.len() + 1);
        let info = compose(&buf, cursor, &opts_with_candidates(), Viewport::new(width, window));
        prop_assert!(info.width() <= width);
        prop_assert_eq!(info.cursor_column, info.before_cursor.chars().count());
    }
}

#[test]
fn window_scenario_from_end_of_buffer() {
    let buf = LineBuffer::from("abcdefghij");
    let info = compose(&buf, 10, &ReadOptions::default(), Viewport::new(80, Some(5)));
    assert_eq!(info.before_cursor, "fghij");
    assert_eq!(info.cursor_column, 5);
}
