//! Color palette and shared styles

pub mod palette {
    use ratatui::style::Color;

    pub const ACCENT: Color = Color::Cyan;
    pub const TEXT: Color = Color::Gray;
    pub const DIM: Color = Color::DarkGray;
    pub const ERROR: Color = Color::Red;
    pub const OK: Color = Color::Green;
    pub const BUSY: Color = Color::Yellow;
    pub const SELECTION_BG: Color = Color::Rgb(45, 50, 60);
}

pub mod styles {
    use ratatui::style::{Modifier, Style};
    use ratatui::widgets::{Block, BorderType, Borders};

    use super::palette;

    /// Standard bordered container
    pub fn panel(title: &str, focused: bool) -> Block<'_> {
        let border = if focused {
            Style::default().fg(palette::ACCENT)
        } else {
            Style::default().fg(palette::DIM)
        };
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(title.to_string())
    }

    pub fn dim() -> Style {
        Style::default().fg(palette::DIM)
    }

    pub fn accent() -> Style {
        Style::default().fg(palette::ACCENT)
    }

    pub fn error() -> Style {
        Style::default().fg(palette::ERROR)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(palette::SELECTION_BG)
            .add_modifier(Modifier::BOLD)
    }
}
