//! The site's message and notice templates.

use minijinja::{context, Error};
use url::Url;

use crate::contact::{FormError, Inquiry};
use crate::notify::Notice;
use crate::util::truncate_to_width;
use crate::{CENTER_NAME, SPECIAL_OFFER};

use super::output::OutputMode;
use super::renderer::Renderer;
use super::styles::StyleSet;

/// Maximum display width of a rendered notice line.
pub const MAX_NOTICE_WIDTH: usize = 72;

const NOTICE: &str = r#"[{{ kind | style(style) }}] {{ message }}"#;

const FORM_ERRORS: &str = "{{ 'Please fix the following errors:' | style('heading') }}\n{% for error in errors %}- {{ error | style('error-text') }}\n{% endfor %}";

const LINK: &str = r#"{{ url | style("link") }}"#;

// Outbound chat payloads. These render to plain text regardless of output
// mode; the link layer URL-encodes them.
const ENROLL_MESSAGE: &str = "Hello! I'm interested in joining {{ center }}.\n\nName: {{ name }}\nPhone: {{ phone }}\nCourse: {{ course }}\nMessage: {% if message %}{{ message }}{% else %}No additional message{% endif %}\n\nPlease provide me with more information about the course and admission process.";

const COURSE_MESSAGE: &str = "Hello! I am interested in the {{ course }} course. Please provide me with more information about the course duration, fees, and next batch timings.";

const JOIN_MESSAGE: &str = "Hello! I want to join a course at {{ center }}. Please provide me with more information about available batches and admission process.";

const OFFER_MESSAGE: &str = "Hello! I am interested in the special offer \"{{ offer }}\". Please provide me with more details about this offer and how I can enroll.";

const CONTACT_MESSAGE: &str = "Hello! I saw your contact number on the website and I am interested in joining {{ center }}. Please provide me with more information.";

const TEMPLATES: &[(&str, &str)] = &[
    ("notice", NOTICE),
    ("form-errors", FORM_ERRORS),
    ("link", LINK),
    ("enroll-message", ENROLL_MESSAGE),
    ("course-message", COURSE_MESSAGE),
    ("join-message", JOIN_MESSAGE),
    ("offer-message", OFFER_MESSAGE),
    ("contact-message", CONTACT_MESSAGE),
];

/// Renderer pre-loaded with the site's templates.
pub struct SiteRenderer {
    inner: Renderer,
}

impl SiteRenderer {
    pub fn new(styles: StyleSet, mode: OutputMode) -> Result<Self, Error> {
        let mut inner = Renderer::new(styles, mode);
        for &(name, source) in TEMPLATES {
            inner.add_template(name, source)?;
        }
        Ok(Self { inner })
    }

    /// One-line rendering of a notice, kind badge styled, message truncated
    /// to the notice width.
    pub fn notice(&self, notice: &Notice) -> Result<String, Error> {
        self.inner.render(
            "notice",
            &context! {
                kind => notice.kind.as_str(),
                style => notice.kind.style_name(),
                message => truncate_to_width(&notice.message, MAX_NOTICE_WIDTH),
            },
        )
    }

    /// The inline error block shown above the form.
    pub fn form_errors(&self, errors: &[FormError]) -> Result<String, Error> {
        let messages: Vec<String> = errors.iter().map(|error| error.to_string()).collect();
        self.inner.render("form-errors", &context! { errors => messages })
    }

    /// A styled link line.
    pub fn link_line(&self, url: &Url) -> Result<String, Error> {
        self.inner.render("link", &context! { url => url.as_str() })
    }

    /// Chat payload for a validated enrollment inquiry.
    pub fn enrollment_message(&self, inquiry: &Inquiry) -> Result<String, Error> {
        self.inner.render(
            "enroll-message",
            &context! {
                center => CENTER_NAME,
                name => &inquiry.name,
                phone => &inquiry.phone,
                course => &inquiry.course,
                message => &inquiry.message,
            },
        )
    }

    /// Chat payload for a course clicked on the listing.
    pub fn course_message(&self, course: &str) -> Result<String, Error> {
        self.inner
            .render("course-message", &context! { course => course })
    }

    /// Chat payload for the join-now affordance.
    pub fn join_message(&self) -> Result<String, Error> {
        self.inner
            .render("join-message", &context! { center => CENTER_NAME })
    }

    /// Chat payload for the special-offer card.
    pub fn offer_message(&self) -> Result<String, Error> {
        self.inner
            .render("offer-message", &context! { offer => SPECIAL_OFFER })
    }

    /// Chat payload for a clicked phone number.
    pub fn contact_message(&self) -> Result<String, Error> {
        self.inner
            .render("contact-message", &context! { center => CENTER_NAME })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::InquiryForm;
    use crate::render::palette::site_styles;
    use crate::theme::ColorMode;

    fn plain_renderer() -> SiteRenderer {
        let styles = site_styles().resolve(ColorMode::Dark).clone();
        SiteRenderer::new(styles, OutputMode::Text).unwrap()
    }

    #[test]
    fn test_notice_line_carries_kind_and_message() {
        let renderer = plain_renderer();
        let out = renderer
            .notice(&Notice::success("Switched to Light theme"))
            .unwrap();
        assert_eq!(out, "[success] Switched to Light theme");
    }

    #[test]
    fn test_notice_message_is_truncated() {
        let renderer = plain_renderer();
        let long = "x".repeat(MAX_NOTICE_WIDTH + 20);
        let out = renderer.notice(&Notice::info(long)).unwrap();
        assert!(out.ends_with('…'));
    }

    #[test]
    fn test_form_errors_lists_every_message() {
        let renderer = plain_renderer();
        let errors = InquiryForm::default().validate().unwrap_err();
        let out = renderer.form_errors(&errors).unwrap();
        assert!(out.starts_with("Please fix the following errors:"));
        assert!(out.contains("- Please enter a valid name (at least 2 characters)"));
        assert!(out.contains("- Phone number is required"));
        assert!(out.contains("- Please select a course you are interested in"));
    }

    #[test]
    fn test_enrollment_message_includes_fields() {
        let renderer = plain_renderer();
        let inquiry = Inquiry {
            name: "Asha Verma".to_string(),
            phone: "9876543210".to_string(),
            course: "Tally Prime".to_string(),
            message: "Evening batches?".to_string(),
        };
        let out = renderer.enrollment_message(&inquiry).unwrap();
        assert!(out.contains("Name: Asha Verma"));
        assert!(out.contains("Phone: 9876543210"));
        assert!(out.contains("Course: Tally Prime"));
        assert!(out.contains("Message: Evening batches?"));
        assert!(out.contains(CENTER_NAME));
    }

    #[test]
    fn test_empty_message_gets_placeholder() {
        let renderer = plain_renderer();
        let inquiry = Inquiry {
            name: "Asha Verma".to_string(),
            phone: "9876543210".to_string(),
            course: "Tally Prime".to_string(),
            message: String::new(),
        };
        let out = renderer.enrollment_message(&inquiry).unwrap();
        assert!(out.contains("Message: No additional message"));
    }

    #[test]
    fn test_course_message_names_course() {
        let renderer = plain_renderer();
        let out = renderer.course_message("DCA").unwrap();
        assert!(out.contains("interested in the DCA course"));
    }

    #[test]
    fn test_offer_message_names_offer() {
        let renderer = plain_renderer();
        let out = renderer.offer_message().unwrap();
        assert!(out.contains(SPECIAL_OFFER));
    }
}
