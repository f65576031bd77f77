//! UI rendering for the TUI.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::{App, Mode};
use super::widgets::tree::row_line;
use crate::cos::Resolve;

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Tree view
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_tree_area(app, frame, chunks[1]);
    render_footer(app, frame, chunks[2]);

    if app.mode == Mode::Help {
        render_help_overlay(frame);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let header_text = format!(
        " {}  │  {} objects",
        app.source.display(),
        app.document.object_count()
    );

    let block = Block::default()
        .title(" COS Explorer ")
        .borders(Borders::ALL)
        .border_style(border_style(app, Color::Cyan));

    let paragraph = Paragraph::new(header_text).block(block);

    frame.render_widget(paragraph, area);
}

fn render_tree_area(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(app, Color::Gray));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let visible_height = inner_area.height as usize;
    let scroll_offset = calculate_scroll_offset(app.selected, visible_height, app.rows.len());

    for (i, row) in app
        .rows
        .iter()
        .skip(scroll_offset)
        .take(visible_height)
        .enumerate()
    {
        let mut line = row_line(row, app.show_icons, app.palette);

        if scroll_offset + i == app.selected {
            line = line.style(Style::default().add_modifier(Modifier::REVERSED));
        }

        let row_area = Rect::new(inner_area.x, inner_area.y + i as u16, inner_area.width, 1);
        frame.render_widget(Paragraph::new(line), row_area);
    }
}

fn border_style(app: &App, color: Color) -> Style {
    app.palette.fg(color)
}

fn calculate_scroll_offset(selected: usize, visible_height: usize, total: usize) -> usize {
    if total <= visible_height {
        return 0;
    }

    let padding = 3.min(visible_height / 4);

    if selected < padding {
        0
    } else if selected >= total - padding {
        total.saturating_sub(visible_height)
    } else {
        selected
            .saturating_sub(padding)
            .min(total.saturating_sub(visible_height))
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match app.mode {
        Mode::Normal => "[↑↓] Navigate  [←→] Expand  [i] Icons  [?] Help  [q] Quit",
        Mode::Help => "[Esc] Close",
    };

    // Status message first, then the selected row's reference, then hints
    let reference = app
        .selected_row()
        .and_then(|row| row.reference)
        .map(|r| format!("Stored as {}", r));
    let text = app
        .status_message
        .clone()
        .or(reference)
        .unwrap_or_else(|| hints.to_string());

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let width = 50.min(area.width.saturating_sub(4));
    let height = 14.min(area.height.saturating_sub(2));
    let help_area = Rect {
        x: (area.width.saturating_sub(width)) / 2,
        y: (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, help_area);

    let lines = vec![
        Line::from(" Navigation"),
        Line::from("   ↑/k ↓/j      Move selection"),
        Line::from("   g / G        First / last row"),
        Line::from("   PgUp PgDn    Move by page"),
        Line::from(""),
        Line::from(" Tree"),
        Line::from("   →/l Enter    Expand"),
        Line::from("   ←/h          Collapse / parent"),
        Line::from("   Space        Toggle"),
        Line::from("   i            Toggle icons"),
        Line::from(""),
        Line::from("   q Esc        Quit"),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    frame.render_widget(Paragraph::new(lines).block(block), help_area);
}
