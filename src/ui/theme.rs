use ratatui::style::{Color, Modifier, Style};

pub(crate) const HEADER_BG: Color = Color::Rgb(30, 30, 46);
pub(crate) const ACCENT: Color = Color::Rgb(112, 41, 99);
pub(crate) const ACCENT_FG: Color = Color::Rgb(245, 224, 240);
pub(crate) const GREEN: Color = Color::Rgb(166, 227, 161);
pub(crate) const RED: Color = Color::Rgb(243, 139, 168);
pub(crate) const YELLOW: Color = Color::Rgb(249, 226, 175);
pub(crate) const CARD_BG: Color = Color::Rgb(34, 34, 34);
pub(crate) const ROW_ALT_BG: Color = Color::Rgb(26, 26, 26);
pub(crate) const TEXT: Color = Color::Rgb(255, 255, 255);
pub(crate) const TEXT_DIM: Color = Color::Rgb(102, 102, 102);
pub(crate) const OVERLAY: Color = Color::Rgb(51, 51, 51);

/// Category palette for the spending bars (the classic ten-color chart set).
pub(crate) const CATEGORY_COLORS: [Color; 10] = [
    Color::Rgb(0x1F, 0x77, 0xB4),
    Color::Rgb(0xFF, 0x7F, 0x0E),
    Color::Rgb(0x2C, 0xA0, 0x2C),
    Color::Rgb(0xD6, 0x27, 0x28),
    Color::Rgb(0x94, 0x67, 0xBD),
    Color::Rgb(0x8C, 0x56, 0x4B),
    Color::Rgb(0xE3, 0x77, 0xC2),
    Color::Rgb(0x7F, 0x7F, 0x7F),
    Color::Rgb(0xBC, 0xBD, 0x22),
    Color::Rgb(0x17, 0xBE, 0xCF),
];

pub(crate) fn category_color(index: usize) -> Color {
    CATEGORY_COLORS[index % CATEGORY_COLORS.len()]
}

pub(crate) fn title_style() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default()
        .fg(ACCENT_FG)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn amount_style(is_income: bool) -> Style {
    if is_income {
        Style::default().fg(GREEN)
    } else {
        Style::default().fg(RED)
    }
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(ROW_ALT_BG)
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(OVERLAY)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(HEADER_BG)
}
