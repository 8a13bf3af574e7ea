use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::style;
use crate::app::{App, HomeFocus};

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(10),   // Content
        Constraint::Length(3), // Footer
    ])
    .split(area);

    // Title
    let title = Paragraph::new(vec![
        Line::from(vec![Span::styled(
            "╔═══════════════════════════════════════════════════╗",
            style::title_style(),
        )]),
        Line::from(vec![
            Span::styled("║         ", style::title_style()),
            Span::styled(
                "CAPTION EDITOR",
                Style::default()
                    .fg(style::ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  •  ", style::muted_style()),
            Span::styled("Video Captions", style::subtitle_style()),
            Span::styled("            ║", style::title_style()),
        ]),
        Line::from(vec![Span::styled(
            "╚═══════════════════════════════════════════════════╝",
            style::title_style(),
        )]),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let content_chunks =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

    draw_inputs(frame, app, content_chunks[0]);
    draw_examples(frame, app, content_chunks[1]);

    // Footer
    let footer = Paragraph::new(vec![
        Line::from(vec![Span::styled(
            "─".repeat(area.width as usize),
            style::muted_style(),
        )]),
        Line::from(vec![
            Span::styled("  Tab ", style::key_style()),
            Span::styled("switch field  •  ", style::muted_style()),
            Span::styled("↑/↓ ", style::key_style()),
            Span::styled("example  •  ", style::muted_style()),
            Span::styled("Enter", style::key_style()),
            Span::styled(" load  •  ", style::muted_style()),
            Span::styled("Esc", style::key_style()),
            Span::styled(" quit", style::muted_style()),
        ]),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[2]);
}

fn draw_inputs(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Length(1), // Spacer
        Constraint::Length(3), // URL
        Constraint::Length(3), // Duration
        Constraint::Length(2), // Error
        Constraint::Min(0),
    ])
    .split(area);

    frame.render_widget(
        input_box(
            " Video URL ",
            &app.url_input,
            "Paste video URL...",
            app.home_focus == HomeFocus::Url,
        ),
        rows[1],
    );
    frame.render_widget(
        input_box(
            " Duration (HH:MM:SS, optional) ",
            &app.duration_input,
            "unknown",
            app.home_focus == HomeFocus::Duration,
        ),
        rows[2],
    );

    if let Some(error) = &app.home_error {
        let error = Paragraph::new(Line::from(vec![
            Span::styled("  ⚠ ", style::error_style()),
            Span::styled(error.as_str(), style::error_style()),
        ]));
        frame.render_widget(error, rows[3]);
    }
}

fn input_box<'a>(
    title: &'a str,
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
) -> Paragraph<'a> {
    let mut spans = if value.is_empty() && !focused {
        vec![Span::styled(placeholder, style::muted_style())]
    } else {
        vec![Span::styled(value, style::normal_style())]
    };
    if focused {
        spans.push(Span::styled("█", style::key_style())); // Cursor
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(title)
            .title_style(if focused {
                style::key_style()
            } else {
                style::title_style()
            })
            .borders(Borders::ALL)
            .border_style(if focused {
                style::key_style()
            } else {
                style::border_style()
            }),
    )
}

fn draw_examples(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .config
        .examples
        .iter()
        .enumerate()
        .map(|(i, example)| {
            let line = format!(
                "  {}  {}",
                example.name,
                example.duration.as_deref().unwrap_or("")
            );
            let style = if app.selected_example == Some(i) {
                style::highlight_style()
            } else {
                style::normal_style()
            };
            ListItem::new(Line::from(Span::styled(line, style)))
        })
        .collect();

    let block = Block::default()
        .title(" Or try an example ")
        .title_style(style::title_style())
        .borders(Borders::ALL)
        .border_style(style::border_style());

    if items.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  No examples configured",
            style::muted_style(),
        )))
        .block(block);
        frame.render_widget(empty, area);
    } else {
        frame.render_widget(List::new(items).block(block), area);
    }
}
