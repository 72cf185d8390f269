use ratatui::style::Color;

/// Chrome colors. Cell fills come from the swatches themselves.
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Magenta
    }

    /// Border color
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Border of the selected cell
    pub fn selection() -> Color {
        Color::White
    }

    /// Marker on freshly inserted cells
    pub fn inserted() -> Color {
        Color::LightGreen
    }

    /// Dimmed/inactive text
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Normal text
    pub fn text() -> Color {
        Color::White
    }

    /// Accent for numbers/counts
    pub fn accent() -> Color {
        Color::LightBlue
    }
}
