mod grid;
mod help;
mod helpers;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, AppView};
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  flowgrid  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "color grid",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(summary(app), Style::default().fg(Theme::accent())),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(rounded_block());
    frame.render_widget(header, layout[0]);

    let title = match app.view {
        AppView::Grid => " Grid ",
        AppView::Help => " Help ",
    };
    let body_block = rounded_block().title(title);
    let body_area = body_block.inner(layout[1]);
    frame.render_widget(body_block, layout[1]);
    match app.view {
        AppView::Grid => grid::render_grid(frame, body_area, app),
        AppView::Help => {
            let help = Paragraph::new(help::build_help_text())
                .style(Style::default().fg(Theme::text()))
                .alignment(Alignment::Left);
            frame.render_widget(help, body_area);
        }
    }

    let footer = Paragraph::new(Text::from(footer_lines(app)))
        .alignment(Alignment::Left)
        .block(rounded_block());
    frame.render_widget(footer, layout[2]);
}

fn rounded_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::secondary()))
}

fn summary(app: &App) -> String {
    let count = app.colors.len();
    let label = if count == 1 { "cell" } else { "cells" };
    format!(
        "{count} {label}, {} columns, {} heights",
        app.columns(),
        app.pattern
    )
}

fn footer_lines(app: &App) -> Vec<Line<'_>> {
    let status = match &app.status {
        Some(status) => Span::styled(status.as_str(), Style::default().fg(Theme::text())),
        None => Span::styled("Ready.", Style::default().fg(Theme::dim())),
    };
    let keys = match app.view {
        AppView::Grid => "a: Add  Enter: Remove matching  x: Remove one  p: Heights  ?: Help  q: Quit",
        AppView::Help => "esc/?: Back  q: Quit",
    };
    vec![
        Line::from(status),
        Line::from(Span::styled(keys, Style::default().fg(Theme::dim()))),
    ]
}
