//! Keyboard and mouse translation.

use crate::games::tictactoe::Coord;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the keyboard cursor.
    MoveCursor(KeyCode),
    /// Play the cell under the keyboard cursor.
    PlayCursor,
    /// Play a specific cell.
    Play(Coord),
    /// Left click at a terminal position.
    Click {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },
    /// Start a new game (only honored once the current one is over).
    Reset,
    /// Leave the application.
    Quit,
}

/// Maps a key press to an action.
pub fn key_action(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key.code))
        }
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .and_then(|d| Coord::from_index(d as usize - 1))
            .map(Action::Play),
        _ => None,
    }
}

/// Maps a mouse event to an action. Only left-button presses count.
pub fn mouse_action(mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    match key {
        KeyCode::Up => Coord::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down => Coord::new((cursor.row + 1).min(2), cursor.col),
        KeyCode::Left => Coord::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right => Coord::new(cursor.row, (cursor.col + 1).min(2)),
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_map_row_major() {
        assert_eq!(key_action(press(KeyCode::Char('1'))), Some(Action::Play(Coord::new(0, 0))));
        assert_eq!(key_action(press(KeyCode::Char('6'))), Some(Action::Play(Coord::new(1, 2))));
        assert_eq!(key_action(press(KeyCode::Char('9'))), Some(Action::Play(Coord::new(2, 2))));
        assert_eq!(key_action(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(key_action(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(key_action(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(key_action(press(KeyCode::Char('r'))), Some(Action::Reset));
        assert_eq!(key_action(press(KeyCode::Enter)), Some(Action::PlayCursor));
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(key_action(key), None);
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        let corner = Coord::new(0, 0);
        assert_eq!(move_cursor(corner, KeyCode::Up), corner);
        assert_eq!(move_cursor(corner, KeyCode::Left), corner);
        assert_eq!(move_cursor(corner, KeyCode::Right), Coord::new(0, 1));
        assert_eq!(move_cursor(Coord::new(2, 2), KeyCode::Down), Coord::new(2, 2));
        assert_eq!(move_cursor(Coord::new(1, 1), KeyCode::Down), Coord::new(2, 1));
    }

    #[test]
    fn test_only_left_press_clicks() {
        let mut mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(mouse_action(mouse), Some(Action::Click { column: 4, row: 7 }));
        mouse.kind = MouseEventKind::Down(MouseButton::Right);
        assert_eq!(mouse_action(mouse), None);
        mouse.kind = MouseEventKind::Moved;
        assert_eq!(mouse_action(mouse), None);
    }
}
