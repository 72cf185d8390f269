use flowgrid::{CellFrame, Swatch};
use ratatui::{layout::Rect, style::Color};

/// Terminal cells are roughly twice as tall as they are wide.
pub const ROW_SCALE: f64 = 0.5;

pub fn swatch_color(swatch: Swatch) -> Color {
    let (r, g, b) = swatch.rgb();
    Color::Rgb(r, g, b)
}

/// Black or white, whichever reads better on `swatch`.
pub fn label_color(swatch: Swatch) -> Color {
    let (r, g, b) = swatch.rgb();
    let luma = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    if luma > 140.0 { Color::Black } else { Color::White }
}

/// Top and bottom row of a frame, in terminal rows.
pub fn frame_rows(frame: &CellFrame) -> (i64, i64) {
    let top = (frame.y * ROW_SCALE).round() as i64;
    let bottom = (frame.bottom() * ROW_SCALE).round() as i64;
    (top, bottom.max(top + 1))
}

/// Maps a layout frame onto `area`, scrolled up by `scroll` rows.
/// Returns `None` when nothing of the frame is visible.
pub fn frame_to_rect(frame: &CellFrame, area: Rect, scroll: i64) -> Option<Rect> {
    let left = frame.x.round() as i64;
    let right = (frame.right().round() as i64).max(left + 1);
    let (top, bottom) = frame_rows(frame);
    let (top, bottom) = (top - scroll, bottom - scroll);

    let width = i64::from(area.width);
    let height = i64::from(area.height);
    let left = left.clamp(0, width);
    let right = right.clamp(0, width);
    let top = top.clamp(0, height);
    let bottom = bottom.clamp(0, height);
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        area.x + left as u16,
        area.y + top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

pub fn clamp_name(value: &str, width: usize) -> String {
    let value_len = value.chars().count();
    if value_len <= width {
        return value.to_string();
    }
    let trimmed = value
        .chars()
        .take(width.saturating_sub(2))
        .collect::<String>();
    format!("{trimmed}..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_maps_into_area() {
        let frame = CellFrame {
            x: 2.0,
            y: 2.0,
            width: 10.0,
            height: 6.0,
        };
        let area = Rect::new(1, 1, 40, 20);
        assert_eq!(frame_to_rect(&frame, area, 0), Some(Rect::new(3, 2, 10, 3)));
    }

    #[test]
    fn frame_is_clipped_by_scroll() {
        let frame = CellFrame {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 6.0,
        };
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(frame_to_rect(&frame, area, 2), Some(Rect::new(0, 0, 10, 1)));
        assert_eq!(frame_to_rect(&frame, area, 3), None);
    }

    #[test]
    fn tiny_frames_still_get_one_cell() {
        let frame = CellFrame {
            x: 0.0,
            y: 0.0,
            width: 0.2,
            height: 0.1,
        };
        let area = Rect::new(0, 0, 4, 4);
        assert_eq!(frame_to_rect(&frame, area, 0), Some(Rect::new(0, 0, 1, 1)));
    }

    #[test]
    fn label_contrasts_with_fill() {
        assert_eq!(label_color(Swatch::Yellow), Color::Black);
        assert_eq!(label_color(Swatch::Blue), Color::White);
    }

    #[test]
    fn clamp_name_truncates_long_names() {
        assert_eq!(clamp_name("purple", 10), "purple");
        assert_eq!(clamp_name("purple", 4), "pu..");
    }
}
