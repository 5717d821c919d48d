use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::catalog::CatalogIntent;

/// Route a key event into app intents.
///
/// Quit chords work in every mode. The search box, language toggle, and
/// selection keys only make sense in content mode, but routing them
/// unconditionally is harmless: the reducer recomputes an empty filter
/// against an empty payload.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if matches!(key.code, KeyCode::Esc) || is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'l') || matches!(key.code, KeyCode::Tab) {
        app.dispatch(CatalogIntent::ToggleLanguage);
        return;
    }

    if is_ctrl_char(key, 'u') {
        app.dispatch(CatalogIntent::ClearQuery);
        return;
    }

    match key.code {
        KeyCode::Up => app.dispatch(CatalogIntent::MoveSelection(-1)),
        KeyCode::Down => app.dispatch(CatalogIntent::MoveSelection(1)),
        KeyCode::Backspace => app.dispatch(CatalogIntent::PopChar),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch(CatalogIntent::PushChar(ch));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}
