use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{clamp_name, frame_rows, frame_to_rect, label_color, swatch_color};
use super::theme::Theme;
use crate::app::App;

/// Draws the swatch grid into `area`, scrolled so the selection is visible.
pub fn render_grid(frame: &mut Frame, area: Rect, app: &App) {
    if app.colors.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No colors yet. Press 'a' to add some.",
            Style::default().fg(Theme::dim()),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let frames = app
        .layout
        .frames(app.colors.len(), f64::from(area.width), app.policy());
    let scroll = scroll_offset(&frames, app.selected_index, area.height);

    for (index, (cell, swatch)) in frames.iter().zip(app.colors.iter()).enumerate() {
        let Some(rect) = frame_to_rect(cell, area, scroll) else {
            continue;
        };
        let selected = index == app.selected_index;
        let inserted = app.is_highlighted(index);
        let fill = Style::default().bg(swatch_color(*swatch));

        let mut block = Block::default().style(fill);
        if selected && rect.width >= 2 && rect.height >= 2 {
            block = block
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(
                    Style::default()
                        .fg(Theme::selection())
                        .add_modifier(Modifier::BOLD),
                );
        }
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        if inner.width == 0 || inner.height == 0 {
            continue;
        }
        let mut label = clamp_name(swatch.name(), usize::from(inner.width));
        if selected && (rect.width < 2 || rect.height < 2) {
            label = clamp_name(&format!("> {}", swatch.name()), usize::from(inner.width));
        }
        let mut spans = vec![Span::styled(
            label,
            Style::default()
                .fg(label_color(*swatch))
                .add_modifier(if selected { Modifier::BOLD } else { Modifier::empty() }),
        )];
        if inserted && inner.width as usize > swatch.name().len() + 2 {
            spans.push(Span::styled(
                " +",
                Style::default()
                    .fg(Theme::inserted())
                    .add_modifier(Modifier::BOLD),
            ));
        }
        let label = Paragraph::new(Line::from(spans))
            .style(fill)
            .alignment(Alignment::Center);
        let label_area = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
        frame.render_widget(label, label_area);
    }
}

/// Rows to scroll so the selected cell's bottom edge fits in `height`.
fn scroll_offset(frames: &[flowgrid::CellFrame], selected: usize, height: u16) -> i64 {
    let Some(cell) = frames.get(selected) else {
        return 0;
    };
    let (top, bottom) = frame_rows(cell);
    let overflow = bottom - i64::from(height);
    overflow.max(0).min(top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowgrid::CellFrame;

    fn cell(y: f64) -> CellFrame {
        CellFrame {
            x: 0.0,
            y,
            width: 10.0,
            height: 10.0,
        }
    }

    #[test]
    fn no_scroll_when_selection_fits() {
        let frames = [cell(0.0), cell(20.0)];
        assert_eq!(scroll_offset(&frames, 1, 20), 0);
    }

    #[test]
    fn scrolls_until_selection_bottom_is_visible() {
        let frames = [cell(0.0), cell(20.0), cell(40.0)];
        // Third cell spans rows 20..25.
        assert_eq!(scroll_offset(&frames, 2, 10), 15);
    }

    #[test]
    fn never_scrolls_past_selection_top() {
        let frames = [cell(0.0), cell(40.0)];
        assert_eq!(scroll_offset(&frames, 1, 2), 20);
    }
}
