use crossterm::style::Color;

// Teletext palette
pub fn header_fg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn column_header_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn seed_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn dimmed_fg() -> Color {
    Color::AnsiValue(244)
} // Grey
pub fn notice_fg() -> Color {
    Color::AnsiValue(201)
} // Bright magenta

/// Extracts the 256-colour index of an ANSI colour, using `fallback` for
/// named colours.
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}
