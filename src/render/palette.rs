//! The built-in site palette.

use console::Style;

use crate::util::rgb_to_ansi256;

use super::styles::{AdaptiveStyles, StyleSet};

// Notice accents, from the site's toast colors.
const INFO_RGB: (u8, u8, u8) = (0x3b, 0x82, 0xf6);
const SUCCESS_RGB: (u8, u8, u8) = (0x22, 0xc5, 0x5e);
const WARNING_RGB: (u8, u8, u8) = (0xf5, 0x9e, 0x0b);
const ERROR_RGB: (u8, u8, u8) = (0xef, 0x44, 0x44);

fn accents(set: StyleSet) -> StyleSet {
    set.add("notice-info", Style::new().color256(rgb_to_ansi256(INFO_RGB)))
        .add(
            "notice-success",
            Style::new().color256(rgb_to_ansi256(SUCCESS_RGB)),
        )
        .add(
            "notice-warning",
            Style::new().color256(rgb_to_ansi256(WARNING_RGB)),
        )
        .add(
            "notice-error",
            Style::new().color256(rgb_to_ansi256(ERROR_RGB)),
        )
}

/// Styles used by the terminal front end, per appearance.
pub fn site_styles() -> AdaptiveStyles {
    let light = accents(StyleSet::new())
        .add("heading", Style::new().bold())
        .add("error-text", Style::new().red())
        .add("link", Style::new().blue().underlined())
        .add("muted", Style::new().dim());

    let dark = accents(StyleSet::new())
        .add("heading", Style::new().bold())
        .add("error-text", Style::new().red())
        .add("link", Style::new().cyan().underlined())
        .add("muted", Style::new().dim());

    AdaptiveStyles::new(light, dark)
}
