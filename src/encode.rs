//! HTML escaping for untrusted commit text.

/// Escapes HTML special characters.
///
/// `&` is replaced first so entities produced by later replacements are not
/// escaped again. The result can be inserted into element content or a quoted
/// attribute without being interpreted as markup.
pub fn encode(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Trims surrounding whitespace from a commit body and escapes it.
///
/// A missing body renders the same as an empty one.
pub fn trim_and_encode(body: Option<&str>) -> String {
    encode(body.unwrap_or_default().trim())
}
