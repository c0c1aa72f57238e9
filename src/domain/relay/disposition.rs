//! `Content-Disposition` values for relayed downloads.
//!
//! The filename ends up inside a quoted-string, so it has to survive header
//! validation: control characters are dropped, `"` and `\` are escaped, and
//! anything outside printable ASCII is replaced in the quoted form and carried
//! in an RFC 5987 `filename*` parameter instead.

/// Build `attachment; filename="<name>"` for `filename`, falling back to
/// `fallback` when the name is absent or nothing printable is left.
pub fn attachment_disposition(filename: Option<&str>, fallback: &str) -> String {
    let cleaned: String = filename
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_control())
        .collect();

    let name: String = if cleaned.trim().is_empty() {
        fallback.chars().filter(|c| !c.is_control()).collect()
    } else {
        cleaned
    };

    let mut value = format!("attachment; filename=\"{}\"", quote_ascii(&name));
    if !name.is_ascii() {
        value.push_str("; filename*=UTF-8''");
        value.push_str(&urlencoding::encode(&name));
    }
    value
}

fn quote_ascii(name: &str) -> String {
    let mut quoted = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            c if c.is_ascii() => quoted.push(c),
            _ => quoted.push('_'),
        }
    }
    quoted
}
