//! Drawing the form, the summary modal and the alert popup.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use super::form::Field;
use super::screen::{FormLayout, Screen};
use crate::modal::ModalBounds;

const CLOSE_LABEL: &str = "[x]";

/// Draw the form, then the modal and any alert on top of it.
///
/// Returns where the modal was drawn, if it is shown.
pub(crate) fn draw_ui(frame: &mut ratatui::Frame, screen: &mut Screen) -> Option<ModalBounds> {
    draw_form(frame, screen);

    let bounds = screen
        .modal
        .visibility
        .is_shown()
        .then(|| draw_modal(frame, screen));

    if let Some(message) = screen.alert_message() {
        draw_alert(frame, message);
    }

    bounds
}

fn draw_form(frame: &mut ratatui::Frame, screen: &mut Screen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let form = &screen.form;
    let focused = |field: Field| {
        if form.focus == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        }
    };

    let text = Paragraph::new(Text::raw(form.article_text.as_str()))
        .block(
            Block::bordered()
                .title(" Article text ")
                .border_style(focused(Field::ArticleText)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(text, chunks[0]);

    let url_block = Block::bordered()
        .title(" Article URL ")
        .border_style(focused(Field::ArticleUrl));
    let url_inner = url_block.inner(chunks[1]);
    frame.render_widget(
        Paragraph::new(form.article_url.as_str()).block(url_block),
        chunks[1],
    );

    let trigger = centered(chunks[2], 17, 3);
    frame.render_widget(
        Paragraph::new("Summarize")
            .alignment(Alignment::Center)
            .block(Block::bordered())
            .style(Style::default().add_modifier(Modifier::BOLD)),
        trigger,
    );

    frame.render_widget(
        Paragraph::new("Tab: switch field  Ctrl-S: summarize  Esc: close  Ctrl-Q: quit")
            .style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );

    if form.focus == Field::ArticleUrl && !screen.modal.visibility.is_shown() {
        let len = form.article_url.chars().count() as u16;
        let x = url_inner.x + len.min(url_inner.width.saturating_sub(1));
        frame.set_cursor_position((x, url_inner.y));
    }

    screen.layout = FormLayout {
        article_text: chunks[0],
        article_url: chunks[1],
        trigger,
    };
}

fn draw_modal(frame: &mut ratatui::Frame, screen: &Screen) -> ModalBounds {
    let backdrop = frame.area();
    frame.buffer_mut().set_style(
        backdrop,
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
    );

    let content = centered(
        backdrop,
        backdrop.width.saturating_mul(3) / 5,
        backdrop.height / 2,
    );
    frame.render_widget(Clear, content);
    frame.render_widget(
        Paragraph::new(Text::raw(screen.modal.text.as_str()))
            .block(Block::bordered().title(" Summary "))
            .wrap(Wrap { trim: false })
            .scroll((screen.modal.scroll, 0)),
        content,
    );

    let label_width = CLOSE_LABEL.len() as u16;
    let close = Rect::new(
        content.right().saturating_sub(label_width + 1),
        content.y,
        label_width.min(content.width),
        1,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(CLOSE_LABEL, Style::default().fg(Color::Red))),
        close,
    );

    ModalBounds {
        backdrop,
        content,
        close,
    }
}

fn draw_alert(frame: &mut ratatui::Frame, message: &str) {
    let area = frame.area();
    let width = (message.chars().count() as u16).saturating_add(4).max(24);
    let popup = centered(area, width, 5);

    let body = Text::from(vec![
        Line::raw(message.to_string()),
        Line::styled("Enter to dismiss", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .title(" Alert ")
                    .border_style(Style::default().fg(Color::Red)),
            ),
        popup,
    );
}

/// A `width` x `height` rect centered in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Surface, Visibility};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(screen: &mut Screen) -> (Option<ModalBounds>, String) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut bounds = None;
        terminal
            .draw(|frame| bounds = draw_ui(frame, screen))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let content = buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        (bounds, content)
    }

    #[test]
    fn hidden_modal_reports_no_bounds() {
        let mut screen = Screen::default();
        let (bounds, content) = render(&mut screen);
        assert!(bounds.is_none());
        assert!(content.contains("Summarize"));
        assert!(screen.layout.trigger.width > 0);
    }

    #[test]
    fn shown_modal_sits_inside_backdrop_with_close_on_border() {
        let mut screen = Screen::default();
        screen.set_modal_text("A short summary.");
        screen.set_modal_visibility(Visibility::Shown);

        let (bounds, content) = render(&mut screen);
        let bounds = bounds.unwrap();
        assert_eq!(bounds.backdrop, Rect::new(0, 0, 80, 24));
        assert!(bounds.content.width < bounds.backdrop.width);
        assert_eq!(bounds.close.y, bounds.content.y);
        assert!(bounds.close.right() <= bounds.content.right());
        assert!(content.contains("A short summary."));
        assert!(content.contains(CLOSE_LABEL));
    }

    #[test]
    fn alert_is_drawn_over_everything() {
        let mut screen = Screen::default();
        screen.alert("Error: Invalid URL");
        let (_, content) = render(&mut screen);
        assert!(content.contains("Error: Invalid URL"));
    }

    #[test]
    fn centered_clips_to_area() {
        let rect = centered(Rect::new(0, 0, 10, 4), 20, 8);
        assert_eq!(rect, Rect::new(0, 0, 10, 4));
    }
}
