/// Escape text for safe inclusion in HTML element content or attributes.
///
/// `&` is replaced first so entities produced by the later replacements are
/// not escaped twice.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
