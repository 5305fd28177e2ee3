use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use termlife_core::Direction;

/// Everything the event loop reacts to, merged into one queue.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Scheduling pulse: redraw and, while auto-running, advance a generation.
    Pulse,
    /// Keyboard, mouse or resize event from the terminal.
    Input(Event),
    /// Interrupt or termination signal.
    Signal(&'static str),
    /// Unrecoverable terminal backend failure.
    Fatal(String),
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Step,
    ToggleAutoRun,
    Move(Direction),
    /// Stamp the pattern bound to this shortcut.
    Stamp(char),
    ToggleCell,
    ClearGrid,
    ToggleHelp,
}

/// Maps a key press to a command. Pattern shortcuts are resolved against
/// `is_pattern_key` so the library decides which letters stamp.
pub fn command_for(key: KeyEvent, is_pattern_key: impl Fn(char) -> bool) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('z') => Some(Command::Quit),
            _ => None,
        };
    }

    let command = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Command::Quit,
        KeyCode::Char(' ') | KeyCode::Char('s') => Command::Step,
        KeyCode::Enter | KeyCode::Char('r') => Command::ToggleAutoRun,
        KeyCode::Left | KeyCode::Char('h') => Command::Move(Direction::Left),
        KeyCode::Down | KeyCode::Char('j') => Command::Move(Direction::Down),
        KeyCode::Up | KeyCode::Char('k') => Command::Move(Direction::Up),
        KeyCode::Right | KeyCode::Char('l') => Command::Move(Direction::Right),
        KeyCode::Char('x') => Command::ToggleCell,
        KeyCode::Char('c') => Command::ClearGrid,
        KeyCode::Char('?') => Command::ToggleHelp,
        KeyCode::Char(c) if is_pattern_key(c) => Command::Stamp(c),
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn patterns(c: char) -> bool {
        matches!(c, 'a' | 'g' | 'G' | 'L')
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(command_for(press(KeyCode::Char('q')), patterns), Some(Command::Quit));
        assert_eq!(command_for(press(KeyCode::Esc), patterns), Some(Command::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for(ctrl_c, patterns), Some(Command::Quit));
        let ctrl_z = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL);
        assert_eq!(command_for(ctrl_z, patterns), Some(Command::Quit));
    }

    #[test]
    fn test_plain_c_clears() {
        assert_eq!(
            command_for(press(KeyCode::Char('c')), patterns),
            Some(Command::ClearGrid)
        );
    }

    #[test]
    fn test_vi_keys_match_arrows() {
        for (vi, arrow) in [
            ('h', KeyCode::Left),
            ('j', KeyCode::Down),
            ('k', KeyCode::Up),
            ('l', KeyCode::Right),
        ] {
            assert_eq!(
                command_for(press(KeyCode::Char(vi)), patterns),
                command_for(press(arrow), patterns)
            );
        }
    }

    #[test]
    fn test_lowercase_l_moves_uppercase_stamps() {
        assert_eq!(
            command_for(press(KeyCode::Char('l')), patterns),
            Some(Command::Move(Direction::Right))
        );
        assert_eq!(
            command_for(press(KeyCode::Char('L')), patterns),
            Some(Command::Stamp('L'))
        );
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(command_for(press(KeyCode::Char('z')), patterns), None);
        assert_eq!(command_for(press(KeyCode::Tab), patterns), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let mut key = press(KeyCode::Char('s'));
        key.kind = KeyEventKind::Release;
        assert_eq!(command_for(key, patterns), None);
    }
}
