/// Continues `text` as a `//` comment: every embedded line break is
/// followed by the comment prefix. The caller writes the leading `// `.
///
/// Lines are kept as given; an empty line becomes a bare `//`.
pub fn make_comment(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            out.push_str(if line.is_empty() { "//" } else { "// " });
        }
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_is_unchanged() {
        assert_eq!(make_comment("Adds two tensors."), "Adds two tensors.");
    }

    #[test]
    fn embedded_breaks_are_preserved() {
        assert_eq!(
            make_comment("First line.\n  indented\n\nafter blank"),
            "First line.\n//   indented\n//\n// after blank"
        );
    }

    #[test]
    fn trailing_break_produces_empty_continuation() {
        assert_eq!(make_comment("x\n"), "x\n//");
    }
}
