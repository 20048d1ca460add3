use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::screen::WidgetKind;

/// Keys handled by the app before the active widget sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalCommand {
    Quit,
    Switch(WidgetKind),
}

pub fn map_global_key(key: KeyEvent) -> Option<GlobalCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(GlobalCommand::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::F(n) => WidgetKind::from_function_key(n).map(GlobalCommand::Switch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use crate::screen::WidgetKind;

    use super::{GlobalCommand, map_global_key};

    #[test]
    fn ctrl_c_and_ctrl_q_quit() {
        for ch in ['c', 'q'] {
            let key = KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL);
            assert_eq!(map_global_key(key), Some(GlobalCommand::Quit));
        }
        let plain = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(map_global_key(plain), None);
    }

    #[test]
    fn function_keys_switch_widgets() {
        let key = KeyEvent::new(KeyCode::F(3), KeyModifiers::NONE);
        assert_eq!(
            map_global_key(key),
            Some(GlobalCommand::Switch(WidgetKind::ColorFlipper))
        );
        let key = KeyEvent::new(KeyCode::F(9), KeyModifiers::NONE);
        assert_eq!(map_global_key(key), None);
    }

    #[test]
    fn releases_are_left_to_the_widget() {
        let key = KeyEvent {
            code: KeyCode::F(1),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_global_key(key), None);
    }
}
