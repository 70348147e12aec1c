//! Stateless key -> `Action` mapping.

use crate::{Action, EditKind, MotionKind};
use core_events::{KeyCode, KeyEvent};

/// Translate one decoded key. `None` means the key is ignored and nothing
/// needs redrawing.
pub fn translate_key(key: &KeyEvent) -> Option<Action> {
    let ctrl = key.is_ctrl();
    let action = match key.code {
        KeyCode::Enter => Action::Accept,
        KeyCode::Esc => Action::Cancel,
        KeyCode::Tab => Action::Complete,
        KeyCode::Up => Action::HistoryPrev,
        KeyCode::Down => Action::HistoryNext,
        KeyCode::Home => Action::Motion(MotionKind::LineStart),
        KeyCode::End => Action::Motion(MotionKind::LineEnd),
        KeyCode::Left if ctrl => Action::Motion(MotionKind::WordLeft),
        KeyCode::Right if ctrl => Action::Motion(MotionKind::WordRight),
        KeyCode::Left => Action::Motion(MotionKind::Left),
        KeyCode::Right => Action::Motion(MotionKind::Right),
        KeyCode::Backspace if ctrl => Action::Edit(EditKind::DeleteWordBackward),
        KeyCode::Backspace => Action::Edit(EditKind::Backspace),
        KeyCode::Delete => Action::Edit(EditKind::DeleteUnder),
        KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'w' => Action::Edit(EditKind::DeleteWordBackward),
            'z' | 'u' => Action::Undo,
            'y' => Action::Redo,
            _ => return None,
        },
        KeyCode::Char(c) if !c.is_control() => Action::Edit(EditKind::InsertChar(c)),
        KeyCode::Char(_) | KeyCode::Other => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_events::KeyModifiers;

    fn plain(code: KeyCode) -> Option<Action> {
        translate_key(&KeyEvent::plain(code))
    }

    fn ctrl(code: KeyCode) -> Option<Action> {
        translate_key(&KeyEvent::ctrl(code))
    }

    #[test]
    fn printable_chars_insert() {
        assert_eq!(
            plain(KeyCode::Char('a')),
            Some(Action::Edit(EditKind::InsertChar('a')))
        );
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(
            translate_key(&shifted),
            Some(Action::Edit(EditKind::InsertChar('A')))
        );
        assert_eq!(plain(KeyCode::Char('\u{7}')), None);
    }

    #[test]
    fn ctrl_bindings() {
        assert_eq!(ctrl(KeyCode::Char('z')), Some(Action::Undo));
        assert_eq!(ctrl(KeyCode::Char('U')), Some(Action::Undo));
        assert_eq!(ctrl(KeyCode::Char('y')), Some(Action::Redo));
        assert_eq!(
            ctrl(KeyCode::Char('w')),
            Some(Action::Edit(EditKind::DeleteWordBackward))
        );
        assert_eq!(
            ctrl(KeyCode::Backspace),
            Some(Action::Edit(EditKind::DeleteWordBackward))
        );
        assert_eq!(ctrl(KeyCode::Left), Some(Action::Motion(MotionKind::WordLeft)));
        assert_eq!(ctrl(KeyCode::Right), Some(Action::Motion(MotionKind::WordRight)));
        assert_eq!(ctrl(KeyCode::Char('q')), None);
    }

    #[test]
    fn named_keys() {
        assert_eq!(plain(KeyCode::Enter), Some(Action::Accept));
        assert_eq!(plain(KeyCode::Esc), Some(Action::Cancel));
        assert_eq!(plain(KeyCode::Tab), Some(Action::Complete));
        assert_eq!(plain(KeyCode::Up), Some(Action::HistoryPrev));
        assert_eq!(plain(KeyCode::Down), Some(Action::HistoryNext));
        assert_eq!(plain(KeyCode::Home), Some(Action::Motion(MotionKind::LineStart)));
        assert_eq!(plain(KeyCode::End), Some(Action::Motion(MotionKind::LineEnd)));
        assert_eq!(plain(KeyCode::Delete), Some(Action::Edit(EditKind::DeleteUnder)));
        assert_eq!(plain(KeyCode::Other), None);
    }
}
