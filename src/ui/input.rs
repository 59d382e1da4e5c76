//! Key, mouse and paste events mapped to form edits and loop actions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use super::form::Field;
use super::screen::Screen;

/// What the event loop should do with an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Quit,
    Summarize,
    CloseModal,
    /// Click while the modal is shown; the controller resolves the target
    ModalClick { column: u16, row: u16 },
}

pub(crate) fn handle_event(event: &Event, screen: &mut Screen) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key, screen),
        Event::Paste(text) => {
            if screen.alert_message().is_none() && !screen.modal.visibility.is_shown() {
                screen.form.paste(text);
            }
            Action::None
        }
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            handle_click(mouse.column, mouse.row, screen)
        }
        _ => Action::None,
    }
}

fn handle_key_event(key: KeyEvent, screen: &mut Screen) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        return Action::Quit;
    }

    // A pending alert swallows everything until acknowledged.
    if screen.alert_message().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            screen.acknowledge_alert();
        }
        return Action::None;
    }

    if screen.modal.visibility.is_shown() {
        return match key.code {
            KeyCode::Esc => Action::CloseModal,
            KeyCode::Down | KeyCode::Char('j') => {
                screen.scroll_modal_down();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                screen.scroll_modal_up();
                Action::None
            }
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('s') if ctrl => Action::Summarize,
        // Article text is multi-line; Enter only submits from the URL field.
        KeyCode::Enter if screen.form.focus == Field::ArticleText => {
            screen.form.push('\n');
            Action::None
        }
        KeyCode::Enter => Action::Summarize,
        KeyCode::Tab => {
            screen.form.focus_next();
            Action::None
        }
        KeyCode::BackTab => {
            screen.form.focus_prev();
            Action::None
        }
        KeyCode::Backspace => {
            screen.form.backspace();
            Action::None
        }
        KeyCode::Char(c) if !ctrl => {
            screen.form.push(c);
            Action::None
        }
        _ => Action::None,
    }
}

fn handle_click(column: u16, row: u16, screen: &mut Screen) -> Action {
    if screen.alert_message().is_some() {
        return Action::None;
    }
    if screen.modal.visibility.is_shown() {
        return Action::ModalClick { column, row };
    }

    let hit = |area: Rect| area.contains(Position::new(column, row));
    let layout = screen.layout;
    if hit(layout.trigger) {
        Action::Summarize
    } else if hit(layout.article_text) {
        screen.form.focus(Field::ArticleText);
        Action::None
    } else if hit(layout.article_url) {
        screen.form.focus(Field::ArticleUrl);
        Action::None
    } else {
        Action::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Surface, Visibility};
    use crossterm::event::MouseEvent;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn shown() -> Screen {
        let mut screen = Screen::default();
        screen.set_modal_text("s");
        screen.set_modal_visibility(Visibility::Shown);
        screen
    }

    #[test]
    fn enter_in_article_text_inserts_a_newline() {
        let mut screen = Screen::default();
        for code in [KeyCode::Char('H'), KeyCode::Enter, KeyCode::Char('i')] {
            assert_eq!(handle_event(&key(code), &mut screen), Action::None);
        }
        assert_eq!(screen.form.article_text, "H\ni");
    }

    #[test]
    fn enter_in_url_field_summarizes() {
        let mut screen = Screen::default();
        handle_event(&key(KeyCode::Tab), &mut screen);
        handle_event(&key(KeyCode::Char('u')), &mut screen);
        assert_eq!(handle_event(&key(KeyCode::Enter), &mut screen), Action::Summarize);
        assert_eq!(screen.form.article_url, "u");
        assert!(screen.form.article_text.is_empty());
    }

    #[test]
    fn ctrl_s_summarizes_and_ctrl_q_quits() {
        let mut screen = Screen::default();
        assert_eq!(handle_event(&ctrl('s'), &mut screen), Action::Summarize);
        assert_eq!(handle_event(&ctrl('q'), &mut screen), Action::Quit);
        assert!(screen.form.article_text.is_empty());
    }

    #[test]
    fn tab_moves_focus_to_url() {
        let mut screen = Screen::default();
        handle_event(&key(KeyCode::Tab), &mut screen);
        handle_event(&Event::Paste("https://example.com".into()), &mut screen);
        assert_eq!(screen.form.focus, Field::ArticleUrl);
        assert_eq!(screen.form.article_url, "https://example.com");
    }

    #[test]
    fn escape_closes_a_shown_modal_and_blocks_typing() {
        let mut screen = shown();
        assert_eq!(handle_event(&key(KeyCode::Char('x')), &mut screen), Action::None);
        assert!(screen.form.article_text.is_empty());
        assert_eq!(handle_event(&key(KeyCode::Esc), &mut screen), Action::CloseModal);
    }

    #[test]
    fn clicks_over_a_shown_modal_go_to_the_controller() {
        let mut screen = shown();
        assert_eq!(
            handle_event(&click(3, 4), &mut screen),
            Action::ModalClick { column: 3, row: 4 }
        );
    }

    #[test]
    fn alert_swallows_input_until_acknowledged() {
        let mut screen = Screen::default();
        screen.alert("Error: Invalid URL");

        assert_eq!(handle_event(&key(KeyCode::Char('a')), &mut screen), Action::None);
        assert_eq!(handle_event(&key(KeyCode::Enter), &mut screen), Action::None);
        assert!(screen.form.article_text.is_empty());
        assert!(screen.alert_message().is_none());

        assert_eq!(handle_event(&ctrl('s'), &mut screen), Action::Summarize);
    }

    #[test]
    fn clicking_trigger_summarizes() {
        let mut screen = Screen::default();
        screen.layout.trigger = Rect::new(30, 20, 17, 3);
        screen.layout.article_url = Rect::new(0, 17, 80, 3);

        assert_eq!(handle_event(&click(35, 21), &mut screen), Action::Summarize);
        assert_eq!(handle_event(&click(5, 18), &mut screen), Action::None);
        assert_eq!(screen.form.focus, Field::ArticleUrl);
    }
}
