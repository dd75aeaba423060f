//! UI rendering for the studio.

use crate::app::{App, AppMode, FormField, StatusKind};
use chrono::Datelike;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Row, Table, Wrap},
};
use strum::IntoEnumIterator;

/// History columns shown in the table; the rest stay in the store.
const HISTORY_COLUMNS: [(&str, Constraint); 6] = [
    ("Timestamp", Constraint::Length(19)),
    ("Model", Constraint::Length(16)),
    ("Type", Constraint::Length(19)),
    ("Topic", Constraint::Length(20)),
    ("Variant", Constraint::Length(7)),
    ("Output", Constraint::Min(20)),
];

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(4), // Status bar and footer
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    match app.mode {
        AppMode::Locked => draw_locked_view(f, app, chunks[1]),
        AppMode::Form | AppMode::Results => draw_studio_view(f, app, chunks[1]),
    }

    draw_status_bar(f, app, chunks[2]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        app.branding.title(),
        Style::default()
            .fg(app.branding.accent)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(logo) = &app.branding.logo_path {
        spans.push(Span::styled(
            format!("  [logo: {}]", logo.display()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode {
        AppMode::Locked => "Type passcode | Enter: Unlock | Esc: Quit",
        AppMode::Form if app.results.is_some() => {
            "Tab/↑↓: Field | ←→: Change | Enter: Generate | Ctrl+V: Variants | Ctrl+R: Reload history | Esc: Quit"
        }
        AppMode::Form => {
            "Tab/↑↓: Field | ←→: Change | Enter: Generate | Ctrl+R: Reload history | Esc: Quit"
        }
        AppMode::Results => "↑↓: Select | Enter/E: Export | R: Reload history | Esc: Back | Q: Quit",
    };

    let color = match app.status_kind {
        StatusKind::Info => Color::Gray,
        StatusKind::Success => Color::Green,
        StatusKind::Warning => Color::Yellow,
        StatusKind::Error => Color::Red,
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(app.status_message.clone(), Style::default().fg(color)),
            Span::raw(" | "),
            Span::styled(help_text, Style::default().fg(Color::Gray)),
        ]),
        Line::from(Span::styled(
            app.branding.footer(chrono::Local::now().year()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let status = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

fn draw_locked_view(f: &mut Frame, app: &App, area: Rect) {
    let popup = centered(area, 50, 5);
    let masked = "•".repeat(app.passcode_input.chars().count());
    let prompt = Paragraph::new(masked)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.branding.accent))
                .title("Enter passcode"),
        )
        .alignment(Alignment::Center);
    f.render_widget(Clear, popup);
    f.render_widget(prompt, popup);
}

fn draw_studio_view(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(columns[1]);

    draw_form(f, app, columns[0]);
    draw_variants(f, app, right[0]);
    draw_history(f, app, right[1]);
}

fn field_value(app: &App, field: FormField) -> String {
    let form = &app.form;
    match field {
        FormField::Model => form.model_id.clone(),
        FormField::Temperature => format!("{:.1}", form.temperature),
        FormField::Variants => form.variant_count.to_string(),
        FormField::Topic => form.topic.clone(),
        FormField::ContentType => form.content_type.to_string(),
        FormField::Tone => form.tone.to_string(),
        FormField::Length => form.target_length.to_string(),
        FormField::Template => form.template.to_string(),
        FormField::Extra => form.extra_instructions.clone(),
    }
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let focused_form = app.mode == AppMode::Form;
    let mut lines = Vec::new();

    for field in FormField::iter() {
        let focused = focused_form && field == app.focus;
        let label_style = if focused {
            Style::default()
                .fg(app.branding.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let value = field_value(app, field);
        let value = match (field.is_text(), focused) {
            (true, true) => format!("{}▏", value),
            (false, true) => format!("◀ {} ▶", value),
            _ => value,
        };

        lines.push(Line::from(Span::styled(field.label(), label_style)));
        lines.push(Line::from(format!("  {}", value)));
        if field == FormField::Variants {
            lines.push(Line::from(""));
        }
    }

    let hint = app.form.template.hint();
    if !hint.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        )));
    }

    let title = if app.busy { "Generate (working…)" } else { "Generate" };
    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    f.render_widget(form, area);
}

fn draw_variants(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Variants");

    let Some(results) = &app.results else {
        let empty = Paragraph::new("No variants yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    };

    let content_type = *results.request.content_type();
    let items: Vec<ListItem> = results
        .variants
        .iter()
        .enumerate()
        .map(|(i, variant)| {
            let selected = app.mode == AppMode::Results && i == app.selected_variant;
            let heading_style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(app.branding.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };

            let mut lines = vec![Line::from(Span::styled(
                format!(
                    "Variant {}  → {}",
                    variant.index,
                    variant.export_file_name(content_type)
                ),
                heading_style,
            ))];
            lines.extend(variant.text.lines().map(|l| Line::from(l.to_string())));
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn draw_history(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Recent activity");

    if let Some(err) = &app.history_error {
        let warning = Paragraph::new(format!("Could not load history: {}", err))
            .style(Style::default().fg(Color::Yellow))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(warning, area);
        return;
    }

    if app.history.is_empty() {
        let empty = Paragraph::new("No history yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(HISTORY_COLUMNS.iter().map(|(name, _)| *name)).style(
        Style::default()
            .fg(app.branding.accent)
            .add_modifier(Modifier::BOLD),
    );

    // Newest first
    let rows: Vec<Row> = app
        .history
        .iter()
        .rev()
        .map(|record| {
            Row::new(
                HISTORY_COLUMNS
                    .iter()
                    .map(|(name, _)| record.get(name).unwrap_or_default().replace('\n', " ")),
            )
        })
        .collect();

    let table = Table::new(rows, HISTORY_COLUMNS.iter().map(|(_, width)| *width))
        .header(header)
        .block(block);
    f.render_widget(table, area);
}

/// A rectangle of `width` percent and `height` rows centred in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width) / 2),
            Constraint::Percentage(width),
            Constraint::Percentage((100 - width) / 2),
        ])
        .split(vertical[1])[1]
}
