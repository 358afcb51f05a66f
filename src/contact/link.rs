//! Outbound WhatsApp deep links.

use url::Url;

use super::phone;

/// The center's WhatsApp contact number, country code included.
pub const CONTACT_NUMBER: &str = "916307769679";

/// Country code prefixed to bare numbers taken from page links.
pub const COUNTRY_CODE: &str = "91";

/// Builds a `wa.me` deep link with `text` as the prefilled message.
///
/// The message travels as the single `text` query parameter, URL-encoded
/// by the query serializer.
pub fn whatsapp_link(number: &str, text: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&format!("https://wa.me/{number}"))?;
    url.query_pairs_mut().append_pair("text", text);
    Ok(url)
}

/// Link to the center's own contact number.
pub fn contact_link(text: &str) -> Result<Url, url::ParseError> {
    whatsapp_link(CONTACT_NUMBER, text)
}

/// Link for a phone number clicked on the page.
///
/// The displayed text is stripped to digits and prefixed with the country
/// code, matching how the site turns `tel:` affordances into chats.
pub fn clicked_number_link(displayed: &str, text: &str) -> Result<Url, url::ParseError> {
    let digits = phone::digits_only(displayed);
    whatsapp_link(&format!("{COUNTRY_CODE}{digits}"), text)
}
