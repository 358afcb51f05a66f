//! Terminal rendering of notices, errors, and chat payloads.
//!
//! This module provides:
//!
//! - [`OutputMode`]: styled/plain output selection
//! - [`StyleSet`] and [`AdaptiveStyles`]: named styles per appearance
//! - [`Renderer`]: pre-compiled minijinja environment with a `style` filter
//! - [`SiteRenderer`]: the renderer loaded with the site's templates

mod catalog;
mod output;
mod palette;
mod renderer;
mod styles;

pub use catalog::{SiteRenderer, MAX_NOTICE_WIDTH};
pub use output::OutputMode;
pub use palette::site_styles;
pub use renderer::Renderer;
pub use styles::{AdaptiveStyles, StyleSet};
