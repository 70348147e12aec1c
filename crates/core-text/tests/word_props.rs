use core_text::LineBuffer;
use core_text::word::{find_word_end, find_word_start, is_boundary};
use proptest::prelude::*;

proptest! {
    #[test]
    fn word_start_never_moves_right(s in "[a-z ,.;]{0,24}", pos in 0usize..30) {
        let buf = LineBuffer::from(s.as_str());
        let start = find_word_start(&buf, pos);
        prop_assert!(start <= pos.min(buf.len()));
    }

    #[test]
    fn word_end_never_moves_left(s in "[a-z ,.;]{0,24}", pos in 0usize..30) {
        let buf = LineBuffer::from(s.as_str());
        let end = find_word_end(&buf, pos);
        prop_assert!(end >= pos.min(buf.len()));
        prop_assert!(end <= buf.len());
    }

    #[test]
    fn word_start_lands_on_word_start(s in "[a-z ,.;]{1,24}", pos in 1usize..30) {
        let buf = LineBuffer::from(s.as_str());
        let start = find_word_start(&buf, pos);
        if start > 0 {
            let prev = buf.char_at(start - 1).unwrap();
            prop_assert!(is_boundary(prev));
        }
    }
}
