//! Contact form validation and inquiry links.
//!
//! Submissions are validated into an [`Inquiry`], then forwarded as a
//! prefilled WhatsApp chat: the message body is rendered by the
//! [`render`](crate::render) module and URL-encoded into a `wa.me` link
//! here.

pub mod phone;

mod form;
mod link;

pub use form::{FormError, Inquiry, InquiryForm};
pub use link::{clicked_number_link, contact_link, whatsapp_link, CONTACT_NUMBER, COUNTRY_CODE};
