//! Blocking crossterm input decoding.
//!
//! Translates crossterm's decoded events into `core_events::KeyEvent`. Key
//! releases are dropped (only press/repeat matter for editing) and keys with
//! no line-editing meaning become `KeyCode::Other`.

use anyhow::Result;
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{
    self, Event as CEvent, KeyCode as CKey, KeyEvent as CKeyEvent, KeyEventKind,
    KeyModifiers as CMods,
};

/// Block until the next key press. Resize notifications and other events are
/// skipped; the reader polls the terminal size itself before each read.
pub fn read_key() -> Result<KeyEvent> {
    loop {
        if let Some(k) = translate_event(event::read()?) {
            log_key(&k);
            return Ok(k);
        }
    }
}

fn translate_event(ev: CEvent) -> Option<KeyEvent> {
    match ev {
        CEvent::Key(k) => translate_key(&k),
        _ => None,
    }
}

pub fn translate_key(k: &CKeyEvent) -> Option<KeyEvent> {
    if k.kind == KeyEventKind::Release {
        return None;
    }
    let code = match k.code {
        CKey::Char(c) => KeyCode::Char(c),
        CKey::Enter => KeyCode::Enter,
        CKey::Esc => KeyCode::Esc,
        CKey::Backspace => KeyCode::Backspace,
        CKey::Delete => KeyCode::Delete,
        CKey::Tab => KeyCode::Tab,
        CKey::Up => KeyCode::Up,
        CKey::Down => KeyCode::Down,
        CKey::Left => KeyCode::Left,
        CKey::Right => KeyCode::Right,
        CKey::Home => KeyCode::Home,
        CKey::End => KeyCode::End,
        _ => KeyCode::Other,
    };
    Some(KeyEvent::new(code, map_mods(k.modifiers)))
}

pub(crate) fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}

/// Character payloads are never logged: the key may be part of masked input.
#[inline]
pub(crate) fn log_key(k: &KeyEvent) {
    let kind = match k.code {
        KeyCode::Char(_) => "char",
        KeyCode::Enter => "enter",
        KeyCode::Esc => "esc",
        KeyCode::Backspace => "backspace",
        KeyCode::Delete => "delete",
        KeyCode::Tab => "tab",
        KeyCode::Up => "up",
        KeyCode::Down => "down",
        KeyCode::Left => "left",
        KeyCode::Right => "right",
        KeyCode::Home => "home",
        KeyCode::End => "end",
        KeyCode::Other => "other",
    };
    tracing::trace!(target: "input.key", kind, mods = k.mods.bits(), "key");
}
