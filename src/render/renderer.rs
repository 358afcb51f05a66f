//! Pre-compiled template renderer.

use minijinja::{Environment, Error, Value};
use serde::Serialize;

use super::output::OutputMode;
use super::styles::StyleSet;

/// A renderer with pre-registered templates and a `style` filter.
///
/// Templates are compiled once and reused. The `style` filter applies a
/// named style from the set the renderer was built over:
///
/// ```rust
/// use console::Style;
/// use frontdesk::render::{OutputMode, Renderer, StyleSet};
///
/// let styles = StyleSet::new().add("accent", Style::new().cyan());
/// let mut renderer = Renderer::new(styles, OutputMode::Text);
/// renderer
///     .add_template("greeting", r#"{{ name | style("accent") }}!"#)
///     .unwrap();
///
/// #[derive(serde::Serialize)]
/// struct Data { name: String }
///
/// let out = renderer.render("greeting", &Data { name: "Asha".into() }).unwrap();
/// assert_eq!(out, "Asha!");
/// ```
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer over a style set.
    pub fn new(styles: StyleSet, mode: OutputMode) -> Self {
        let mut env = Environment::new();
        register_filters(&mut env, styles, mode);
        Self { env }
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if the
    /// syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template with the given data.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }
}

fn register_filters(env: &mut Environment<'static>, styles: StyleSet, mode: OutputMode) {
    let use_color = mode.should_use_color();

    env.add_filter("style", move |value: Value, name: String| -> String {
        styles.apply(&name, &value.to_string(), use_color)
    });

    // Appends a newline, for explicit line-break control in templates.
    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });
}
