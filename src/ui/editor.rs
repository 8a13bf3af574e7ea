use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{
        Block, Borders, Gauge, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Wrap,
    },
    Frame,
};

use super::style;
use crate::app::{App, FormFocus};
use crate::caption::time::{format_position, format_time, TimeField, TimeInput};
use crate::session::EditMode;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(2), // Title
        Constraint::Min(12),   // Content
        Constraint::Length(4), // Help
    ])
    .split(area);

    // Title
    let title = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("┌─", style::border_style()),
            Span::styled(" CAPTION EDITOR ", style::title_style()),
            Span::styled(
                "─".repeat((area.width as usize).saturating_sub(21)),
                style::border_style(),
            ),
            Span::styled("┐", style::border_style()),
        ]),
        Line::from(vec![
            Span::styled("│ ", style::border_style()),
            Span::styled(
                format!("{} captions", app.session.captions().len()),
                style::normal_style(),
            ),
            Span::styled(" │ ", style::muted_style()),
            Span::styled(
                app.session.video_url().unwrap_or_default().to_string(),
                style::muted_style(),
            ),
        ]),
    ]);
    frame.render_widget(title, chunks[0]);

    let content_chunks = Layout::horizontal([
        Constraint::Percentage(60), // Player and form
        Constraint::Percentage(40), // Caption list
    ])
    .split(chunks[1]);

    let left = Layout::vertical([
        Constraint::Min(5),    // Picture with overlay
        Constraint::Length(3), // Transport controls
        Constraint::Length(9), // Caption form
    ])
    .split(content_chunks[0]);

    draw_player(frame, app, left[0]);
    draw_controls(frame, app, left[1]);
    draw_form(frame, app, left[2]);
    draw_caption_list(frame, app, content_chunks[1]);

    draw_help(frame, app, chunks[2]);
}

fn draw_player(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Player ")
        .title_style(style::title_style())
        .borders(Borders::ALL)
        .border_style(style::border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.session.video_url().is_none() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "Enter your video URL to play",
            style::muted_style(),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(placeholder, vertical_center(inner, 1));
        return;
    }

    // Caption overlay sits near the bottom of the picture
    if let Some(caption) = app.session.active_caption() {
        let rows = Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).split(inner);
        let overlay = Paragraph::new(Line::from(Span::styled(
            format!(" {} ", caption),
            style::overlay_style(),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(overlay, rows[1]);
    }
}

fn draw_controls(frame: &mut Frame, app: &App, area: Rect) {
    let playback = app.session.playback();

    let cols = Layout::horizontal([
        Constraint::Length(14), // Buttons
        Constraint::Min(10),    // Progress
        Constraint::Length(19), // Clock
    ])
    .split(area);

    let buttons = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(" ◀◀ ", style::key_style()),
            Span::styled(
                if playback.is_playing { " ❚❚ " } else { " ▶ " },
                style::key_style().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▶▶ ", style::key_style()),
        ]),
    ]);
    frame.render_widget(buttons, cols[0]);

    let percent = app.session.progress_percent().round() as u16;
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style::border_style()),
        )
        .gauge_style(style::progress_style())
        .percent(percent.min(100))
        .label(format!("{}%", percent.min(100)));
    frame.render_widget(gauge, cols[1]);

    let clock = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format_position(playback.current_time), style::normal_style()),
            Span::styled("/", style::muted_style()),
            match playback.duration {
                Some(duration) => Span::styled(format_position(duration), style::normal_style()),
                None => Span::styled("--:--:--", style::warning_style()),
            },
        ]),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(clock, cols[2]);
}

fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let editing = matches!(app.session.mode(), EditMode::Editing { .. });
    let block = Block::default()
        .title(if editing { " Edit Caption " } else { " New Caption " })
        .title_style(if editing {
            style::success_style().add_modifier(Modifier::BOLD)
        } else {
            style::title_style()
        })
        .borders(Borders::ALL)
        .border_style(if editing {
            style::success_style()
        } else {
            style::border_style()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = app.session.form();

    let mut text_line = vec![Span::styled("Text:  ", style::muted_style())];
    if form.text.is_empty() && app.focus != FormFocus::Text {
        text_line.push(Span::styled("Type your caption here...", style::muted_style()));
    } else {
        text_line.push(Span::styled(form.text.as_str(), style::normal_style()));
    }
    if app.focus == FormFocus::Text {
        text_line.push(Span::styled("█", style::key_style())); // Cursor
    }

    let button_style = if app.session.video_url().is_none() {
        style::muted_style()
    } else {
        style::key_style()
    };

    let mut lines = vec![
        Line::from(text_line),
        Line::from(""),
        time_line("Start: ", &form.start, app.focus, FormFocus::Start),
        time_line("End:   ", &form.end, app.focus, FormFocus::End),
        Line::from(""),
        Line::from(vec![Span::styled(
            if editing { "[ Save Changes ]" } else { "[ Add Caption ]" },
            button_style,
        )]),
    ];

    if let Some(error) = app.session.error() {
        lines.push(Line::from(vec![
            Span::styled("⚠ ", style::error_style()),
            Span::styled(error.to_string(), style::error_style()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn time_line<'a>(
    label: &'a str,
    input: &TimeInput,
    focus: FormFocus,
    which: fn(TimeField) -> FormFocus,
) -> Line<'a> {
    let mut spans = vec![Span::styled(label, style::muted_style())];
    for (i, field) in [TimeField::Hours, TimeField::Minutes, TimeField::Seconds]
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            spans.push(Span::styled(":", style::muted_style()));
        }
        let field_style = if focus == which(field) {
            style::focus_style()
        } else {
            style::normal_style()
        };
        spans.push(Span::styled(input.component(field), field_style));
    }
    spans.push(Span::styled("  hh:mm:ss", style::muted_style()));
    Line::from(spans)
}

fn draw_caption_list(frame: &mut Frame, app: &App, area: Rect) {
    let captions = app.session.captions();
    let list_focused = app.focus == FormFocus::List;
    let editing_id = match app.session.mode() {
        EditMode::Editing { id } => Some(id),
        EditMode::Idle => None,
    };
    let active_id = app.session.active_id();

    let items: Vec<ListItem> = captions
        .iter()
        .enumerate()
        .map(|(i, caption)| {
            let is_selected = list_focused && i == app.selected_index;
            let marker = if editing_id == Some(caption.id) {
                "✎"
            } else if active_id == Some(caption.id) {
                "▶"
            } else {
                " "
            };

            // Truncate text if too long
            let max_text_len = (area.width as usize).saturating_sub(30);
            let text_preview: String = caption.text.chars().take(max_text_len).collect();
            let text_preview = if caption.text.chars().count() > max_text_len {
                format!("{}...", text_preview)
            } else {
                text_preview
            };

            let content = format!(
                "{} {:3} │ {} - {} │ {}",
                marker,
                i + 1,
                format_time(caption.start),
                format_time(caption.end),
                text_preview.replace('\n', " ")
            );

            let style = if is_selected {
                style::highlight_style()
            } else if editing_id == Some(caption.id) {
                style::success_style()
            } else {
                style::normal_style()
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let block = Block::default()
        .title(" Captions ")
        .title_style(style::title_style())
        .borders(Borders::ALL)
        .border_style(if list_focused {
            style::key_style()
        } else {
            style::border_style()
        });

    if items.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No captions yet.", style::muted_style())),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(style::highlight_style());

    // Create a stateful list to enable scrolling
    let mut list_state = ratatui::widgets::ListState::default();
    list_state.select(Some(app.selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);

    let mut scrollbar_state = ScrollbarState::new(captions.len()).position(app.selected_index);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("▲"))
        .end_symbol(Some("▼"));
    frame.render_stateful_widget(
        scrollbar,
        area.inner(ratatui::layout::Margin {
            horizontal: 0,
            vertical: 1,
        }),
        &mut scrollbar_state,
    );
}

fn draw_help(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(vec![Span::styled(
        "─".repeat(area.width as usize),
        style::muted_style(),
    )])];

    let focus_help = match app.focus {
        FormFocus::Text => vec![
            Span::styled("  Type ", style::key_style()),
            Span::styled("caption text  ", style::muted_style()),
            Span::styled("Enter ", style::key_style()),
            Span::styled("submit  ", style::muted_style()),
        ],
        FormFocus::Start(_) | FormFocus::End(_) => vec![
            Span::styled("  0-9 ", style::key_style()),
            Span::styled("set time  ", style::muted_style()),
            Span::styled("Backspace ", style::key_style()),
            Span::styled("erase  ", style::muted_style()),
            Span::styled("Enter ", style::key_style()),
            Span::styled("submit  ", style::muted_style()),
        ],
        FormFocus::List => vec![
            Span::styled("  ↑/k ↓/j ", style::key_style()),
            Span::styled("navigate  ", style::muted_style()),
            Span::styled("e/Enter ", style::key_style()),
            Span::styled("edit  ", style::muted_style()),
            Span::styled("d ", style::key_style()),
            Span::styled("delete  ", style::muted_style()),
            Span::styled("Space ← → ", style::key_style()),
            Span::styled("play/seek  ", style::muted_style()),
            Span::styled("q ", style::key_style()),
            Span::styled("quit", style::muted_style()),
        ],
    };
    lines.push(Line::from(focus_help));

    lines.push(Line::from(vec![
        Span::styled("  Tab ", style::key_style()),
        Span::styled("next field  ", style::muted_style()),
        Span::styled("^P ", style::key_style()),
        Span::styled("play/pause  ", style::muted_style()),
        Span::styled("^B/^F ", style::key_style()),
        Span::styled("-/+10s  ", style::muted_style()),
        Span::styled("Esc ", style::key_style()),
        Span::styled(
            if matches!(app.session.mode(), EditMode::Editing { .. }) {
                "cancel edit  "
            } else {
                "back  "
            },
            style::muted_style(),
        ),
        Span::styled("^Q ", style::key_style()),
        Span::styled("quit", style::muted_style()),
    ]));

    if !app.status_message.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("  ✓ ", style::success_style()),
            Span::styled(app.status_message.as_str(), style::success_style()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// A `height`-row strip in the vertical middle of `area`
fn vertical_center(area: Rect, height: u16) -> Rect {
    let rows = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .split(area);
    rows[1]
}
