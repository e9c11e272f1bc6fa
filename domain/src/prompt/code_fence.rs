//! Markdown code-fence removal for generated code.

const FENCE: &str = "```";

/// Characters allowed in a fence info string such as `python` or `c++`
fn is_info_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '#' | '-' | '_' | '.')
}

/// Drop an opening marker and its info string from the start of `line`.
///
/// A word directly after the marker is only taken as the info string when
/// whitespace or the end of the line follows it, so `` ```print(1) `` keeps
/// its code.
fn strip_opening(line: &str) -> Option<String> {
    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];
    let after = body.strip_prefix(FENCE)?;

    let tag_len = after
        .find(|c: char| !is_info_char(c))
        .unwrap_or(after.len());
    let (tag, tail) = after.split_at(tag_len);
    let rest = if tail.is_empty() || tail.starts_with(['\n', '\r']) {
        tail
    } else if tail.starts_with([' ', '\t']) {
        if tag.is_empty() { tail } else { &tail[1..] }
    } else {
        after
    };
    Some(format!("{}{}", indent, rest))
}

/// Remove Markdown fence markers from a model response.
///
/// The response is trimmed, each opening marker loses its info string, and
/// every remaining backtick triple is removed. Lines left blank only because
/// a marker was removed are dropped with their newline; everything else on
/// a fence line is kept.
pub fn strip_code_fences(response: &str) -> String {
    let trimmed = response.trim();
    let mut code = String::with_capacity(trimmed.len());
    for line in trimmed.split_inclusive('\n') {
        let opened = strip_opening(line);
        let had_marker = opened.is_some() || line.contains(FENCE);
        let cleaned = opened.as_deref().unwrap_or(line).replace(FENCE, "");
        if had_marker && cleaned.trim().is_empty() {
            continue;
        }
        code.push_str(&cleaned);
    }
    code
}
