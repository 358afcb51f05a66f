//! Inquiry form validation.

use super::phone;

/// Raw form input, as submitted.
#[derive(Debug, Clone, Default)]
pub struct InquiryForm {
    pub name: String,
    pub phone: String,
    pub course: String,
    pub message: String,
}

/// A validation failure tied to one form field.
///
/// The `Display` text is the user-facing message shown inline and in the
/// error notice; [`field`](FormError::field) names the input to mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a valid name (at least 2 characters)")]
    NameTooShort,
    #[error("Phone number is required")]
    PhoneMissing,
    #[error("Please enter a valid 10-digit phone number")]
    PhoneInvalid,
    #[error("Please select a course you are interested in")]
    CourseMissing,
}

impl FormError {
    /// The form field this error marks.
    pub fn field(self) -> &'static str {
        match self {
            FormError::NameTooShort => "name",
            FormError::PhoneMissing | FormError::PhoneInvalid => "phone",
            FormError::CourseMissing => "course",
        }
    }
}

/// A validated inquiry, phone normalized, ready for link building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub phone: String,
    pub course: String,
    pub message: String,
}

impl InquiryForm {
    /// Validates every field, collecting all failures.
    ///
    /// Validation never short-circuits: the caller gets the full error list
    /// so each offending field can be marked at once.
    pub fn validate(&self) -> Result<Inquiry, Vec<FormError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.chars().count() < 2 {
            errors.push(FormError::NameTooShort);
        }

        let raw_phone = self.phone.trim();
        let normalized = phone::normalize(raw_phone);
        if raw_phone.is_empty() {
            errors.push(FormError::PhoneMissing);
        } else if !phone::is_valid(&normalized) {
            errors.push(FormError::PhoneInvalid);
        }

        let course = self.course.trim();
        if course.is_empty() {
            errors.push(FormError::CourseMissing);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Inquiry {
            name: name.to_string(),
            phone: normalized,
            course: course.to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> InquiryForm {
        InquiryForm {
            name: "Asha Verma".to_string(),
            phone: "987-654-3210".to_string(),
            course: "Tally Prime".to_string(),
            message: "Evening batches?".to_string(),
        }
    }

    #[test]
    fn test_valid_form_normalizes_phone() {
        let inquiry = valid_form().validate().unwrap();
        assert_eq!(inquiry.phone, "9876543210");
        assert_eq!(inquiry.name, "Asha Verma");
    }

    #[test]
    fn test_empty_name_fails_with_name_error() {
        let form = InquiryForm {
            name: "".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors, vec![FormError::NameTooShort]);
        assert_eq!(errors[0].field(), "name");
    }

    #[test]
    fn test_one_char_name_fails() {
        let form = InquiryForm {
            name: " A ".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap_err(), vec![FormError::NameTooShort]);
    }

    #[test]
    fn test_short_phone_fails_with_format_error() {
        let form = InquiryForm {
            phone: "12345".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors, vec![FormError::PhoneInvalid]);
        assert_eq!(errors[0].field(), "phone");
    }

    #[test]
    fn test_missing_phone_reported_as_required() {
        let form = InquiryForm {
            phone: "  ".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap_err(), vec![FormError::PhoneMissing]);
    }

    #[test]
    fn test_missing_course_fails() {
        let form = InquiryForm {
            course: "".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap_err(), vec![FormError::CourseMissing]);
    }

    #[test]
    fn test_all_failures_collected() {
        let form = InquiryForm::default();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FormError::NameTooShort,
                FormError::PhoneMissing,
                FormError::CourseMissing,
            ]
        );
    }

    #[test]
    fn test_empty_message_is_allowed() {
        let form = InquiryForm {
            message: "".to_string(),
            ..valid_form()
        };
        let inquiry = form.validate().unwrap();
        assert_eq!(inquiry.message, "");
    }
}
