//! Go identifiers and literals for names taken from the catalog.

/// Go keywords that cannot be used as identifiers.
const GO_KEYWORDS: &[&str] = &[
    "break",
    "default",
    "func",
    "interface",
    "select",
    "case",
    "defer",
    "go",
    "map",
    "struct",
    "chan",
    "else",
    "goto",
    "package",
    "switch",
    "const",
    "fallthrough",
    "if",
    "range",
    "type",
    "continue",
    "for",
    "import",
    "return",
    "var",
];

/// Names the emitted code introduces itself: the runtime package alias,
/// the scope parameter, the error local and the operation local.
const GENERATED_IDENTS: &[&str] = &["tf", "scope", "err", "op"];

/// Returns `name` as an identifier usable in the generated source.
///
/// Names that collide with a keyword or with a generated identifier get a
/// trailing underscore. Two distinct names can still end up identical
/// (`type_` as given versus `type` sanitized); that case is not handled.
pub fn identifier(name: &str) -> String {
    if GENERATED_IDENTS.contains(&name) || GO_KEYWORDS.contains(&name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}

/// `snake_case` to `CamelCase`. Empty words contribute nothing.
pub fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    for word in snake.split('_') {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Double-quoted Go string literal for `s`.
pub fn go_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
