pub const NICKNAME_MAX_LEN: usize = 20;
pub const CONTENT_MAX_LEN: usize = 140;

pub fn render(out: &mut String) {
    out.push_str("<form method=\"post\" action=\"board\">\n");
    out.push_str(&format!(
        "    Nickname: <input name=\"nickname\" maxlength=\"{NICKNAME_MAX_LEN}\" required>\n"
    ));
    out.push_str(&format!(
        "    <br>Message: <input name=\"content\" maxlength=\"{CONTENT_MAX_LEN}\" required style=\"width:320px\">\n"
    ));
    out.push_str("    <br><button type=\"submit\">Post</button>\n");
    out.push_str("</form><hr>\n");
}
