use std::borrow::Borrow;

use crate::common::Message;

use super::components::{message_list, post_form};

const PAGE_HEAD: &str = "<!DOCTYPE html>
<html>
<head><meta charset=\"UTF-8\"><title>Mini Board</title></head>
<body>
<h2>Mini Message Board</h2>
";

/// Full HTML document for `GET /board`.
pub fn render_board<M: Borrow<Message>>(messages: &[M]) -> String {
    let mut out = String::from(PAGE_HEAD);
    post_form::render(&mut out);
    out.push_str("<h3>Messages</h3>\n");
    message_list::render(&mut out, messages);
    out.push_str("</body></html>\n");
    out
}
