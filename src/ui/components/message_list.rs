use std::borrow::Borrow;

use crate::common::Message;
use crate::ui::escape::escape_html;

pub const EMPTY_PLACEHOLDER: &str = "<p><i>(No messages yet)</i></p>";

/// Render `messages` (stored oldest first) newest first.
pub fn render<M: Borrow<Message>>(out: &mut String, messages: &[M]) {
    if messages.is_empty() {
        out.push_str(EMPTY_PLACEHOLDER);
        out.push('\n');
        return;
    }

    for message in messages.iter().rev() {
        let message: &Message = message.borrow();
        out.push_str(&format!(
            "<p><b>{}</b>: {}</p>\n",
            escape_html(message.nickname()),
            escape_html(message.content())
        ));
    }
}
