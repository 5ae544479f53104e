use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode;

/// Apply a key event to a single-line edit buffer with a byte-offset
/// cursor. Returns true when the event was consumed.
pub(super) fn edit_buffer_key(buf: &mut String, cursor: &mut usize, key: KeyEvent) -> bool {
    match (key.modifiers, key.code) {
        // Kill to start of line (also what macOS Cmd+Backspace sends)
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            buf.drain(..*cursor);
            *cursor = 0;
            true
        }
        // Type character
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            buf.insert(*cursor, c);
            *cursor += c.len_utf8();
            true
        }
        // Backspace: one grapheme
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(buf, *cursor) {
                buf.drain(prev..*cursor);
                *cursor = prev;
            }
            true
        }
        // Word backspace (Alt or Ctrl)
        (m, KeyCode::Backspace)
            if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::CONTROL) =>
        {
            let new_pos = unicode::word_boundary_left(buf, *cursor);
            buf.drain(new_pos..*cursor);
            *cursor = new_pos;
            true
        }
        // Word movement (Alt+arrow; Alt+B/F in readline-style terminals)
        (m, KeyCode::Left) if m.contains(KeyModifiers::ALT) => {
            *cursor = unicode::word_boundary_left(buf, *cursor);
            true
        }
        (m, KeyCode::Right) if m.contains(KeyModifiers::ALT) => {
            *cursor = unicode::word_boundary_right(buf, *cursor);
            true
        }
        (m, KeyCode::Char('b')) if m.contains(KeyModifiers::ALT) => {
            *cursor = unicode::word_boundary_left(buf, *cursor);
            true
        }
        (m, KeyCode::Char('f')) if m.contains(KeyModifiers::ALT) => {
            *cursor = unicode::word_boundary_right(buf, *cursor);
            true
        }
        // Cursor movement: single grapheme
        (KeyModifiers::NONE, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(buf, *cursor) {
                *cursor = prev;
            }
            true
        }
        (KeyModifiers::NONE, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(buf, *cursor) {
                *cursor = next;
            }
            true
        }
        (_, KeyCode::Home) => {
            *cursor = 0;
            true
        }
        (_, KeyCode::End) => {
            *cursor = buf.len();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn modified(code: KeyCode, m: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, m)
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut buf = "bymilk".to_string();
        let mut cursor = 2;
        edit_buffer_key(&mut buf, &mut cursor, key(KeyCode::Char(' ')));
        assert_eq!(buf, "by milk");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn backspace_removes_a_whole_grapheme() {
        let mut buf = "cafe\u{0301}".to_string(); // café
        let mut cursor = buf.len();
        edit_buffer_key(&mut buf, &mut cursor, key(KeyCode::Backspace));
        assert_eq!(buf, "caf");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn word_backspace_eats_the_previous_word() {
        let mut buf = "buy some milk".to_string();
        let mut cursor = buf.len();
        edit_buffer_key(
            &mut buf,
            &mut cursor,
            modified(KeyCode::Backspace, KeyModifiers::ALT),
        );
        assert_eq!(buf, "buy some ");
    }

    #[test]
    fn ctrl_u_kills_to_start() {
        let mut buf = "buy milk".to_string();
        let mut cursor = 4;
        edit_buffer_key(
            &mut buf,
            &mut cursor,
            modified(KeyCode::Char('u'), KeyModifiers::CONTROL),
        );
        assert_eq!(buf, "milk");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn arrows_and_home_end_move_the_cursor() {
        let mut buf = "milk".to_string();
        let mut cursor = 4;
        edit_buffer_key(&mut buf, &mut cursor, key(KeyCode::Left));
        assert_eq!(cursor, 3);
        edit_buffer_key(&mut buf, &mut cursor, key(KeyCode::Right));
        assert_eq!(cursor, 4);
        edit_buffer_key(&mut buf, &mut cursor, key(KeyCode::Home));
        assert_eq!(cursor, 0);
        edit_buffer_key(&mut buf, &mut cursor, key(KeyCode::End));
        assert_eq!(cursor, 4);
    }

    #[test]
    fn unhandled_keys_are_not_consumed() {
        let mut buf = "milk".to_string();
        let mut cursor = 0;
        assert!(!edit_buffer_key(&mut buf, &mut cursor, key(KeyCode::Esc)));
        assert!(!edit_buffer_key(&mut buf, &mut cursor, key(KeyCode::Tab)));
        assert_eq!(buf, "milk");
    }
}
