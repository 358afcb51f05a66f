//! Text and color helpers shared by the rendering layer.

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// The site palette is specified in RGB; terminal output goes through the
/// 256-color palette so accents survive on non-truecolor terminals.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Truncates a string to fit within a maximum display width, adding an
/// ellipsis if needed.
///
/// Notices have a fixed maximum width; anything longer is cut on a
/// character boundary using Unicode width calculations, so CJK and other
/// wide characters count correctly.
///
/// # Example
///
/// ```rust
/// use frontdesk::util::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Welcome!", 10), "Welcome!");
/// assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    // Reserve 1 column for the ellipsis
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
