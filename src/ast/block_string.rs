//! Block string handling shared between the lexer and the printers.
//!
//! Block strings (`"""..."""`) carry their source indentation, which is stripped according to
//! common-indent rules when lexing, and re-added when printing descriptions.

/// Strips the common indentation and blank first and last lines from a raw block string.
///
/// The common indent is the minimum count of leading spaces across all lines, ignoring lines
/// that consist of spaces only. Every line sheds that indent, so some line in the output always
/// starts at column zero. This function is pure and idempotent: applying it to its own output is
/// a no-op.
pub fn dedent_block_string_value(raw: &str) -> String {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();

    let mut common_indent: Option<usize> = None;
    for line in lines.iter() {
        let indent = leading_spaces(line);
        if indent < line.len() && common_indent.map_or(true, |common| indent < common) {
            common_indent = Some(indent);
        }
    }
    let common_indent = common_indent.unwrap_or(0);

    let mut dedented: Vec<&str> = lines
        .iter()
        .map(|line| &line[common_indent.min(leading_spaces(line))..])
        .collect();

    while dedented.first().map_or(false, |line| is_blank(line)) {
        dedented.remove(0);
    }
    while dedented.last().map_or(false, |line| is_blank(line)) {
        dedented.pop();
    }

    dedented.join("\n")
}

/// Prints a value as a `"""` block at the given indentation depth, one source line per line.
pub(crate) fn print_block_string(value: &str, indent: &str) -> String {
    let mut out = String::with_capacity(value.len() + 8);
    out.push_str("\"\"\"");
    for line in value.split('\n') {
        out.push('\n');
        out.push_str(indent);
        out.push_str(&line.replace("\"\"\"", "\\\"\"\""));
    }
    out.push('\n');
    out.push_str(indent);
    out.push_str("\"\"\"");
    out
}

/// Re-wraps lines of text at a target width, breaking only at word boundaries.
///
/// Words longer than the width are kept intact on their own line.
pub(crate) fn wrap_words(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let mut column = 0;
        for word in line.split(' ').filter(|word| !word.is_empty()) {
            if column > 0 && column + 1 + word.len() > width {
                out.push('\n');
                column = 0;
            } else if column > 0 {
                out.push(' ');
                column += 1;
            }
            out.push_str(word);
            column += word.len();
        }
    }
    out
}

#[inline]
fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

#[inline]
fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn dedents_common_indentation() {
        let raw = "\n    Hello,\n      World!\n\n    Yours,\n      GraphQL.\n  ";
        assert_eq!(
            dedent_block_string_value(raw),
            "Hello,\n  World!\n\nYours,\n  GraphQL."
        );
    }

    #[test]
    fn first_line_participates_in_the_common_indent() {
        assert_eq!(dedent_block_string_value("  abc\n    def"), "abc\n  def");
        assert_eq!(dedent_block_string_value("abc\n    def"), "abc\n    def");
    }

    #[test]
    fn drops_blank_boundary_lines() {
        assert_eq!(dedent_block_string_value("\n\nabc\n\n   \n"), "abc");
    }

    #[test]
    fn normalizes_line_endings() {
        assert_eq!(dedent_block_string_value("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            "\n    Hello,\n      World!\n\n    Yours,\n      GraphQL.\n  ",
            "  abc\n    def",
            "single line",
            "",
            "\n\n  a\n   b\n",
        ];
        for input in inputs {
            let once = dedent_block_string_value(input);
            assert_eq!(dedent_block_string_value(&once), once);
        }
    }

    #[test]
    fn stays_stable_after_blank_leading_lines_are_dropped() {
        // Dropping the blank lines promotes "a" to the first line; since "a" already sat at the
        // common indent, reapplying the dedent leaves the relative indent of "b" alone.
        let once = dedent_block_string_value("\n\n  a\n   b\n");
        assert_eq!(once, "a\n b");
        assert_eq!(dedent_block_string_value(&once), once);
    }

    #[test]
    fn prints_block() {
        assert_eq!(
            print_block_string("Hello,\nWorld!", "  "),
            indoc! {r#"
                """
                  Hello,
                  World!
                  """"#}
        );
    }

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(wrap_words("aa bb cc dd", 5), "aa bb\ncc dd");
        assert_eq!(wrap_words("abcdefgh ij", 4), "abcdefgh\nij");
        assert_eq!(wrap_words("one\ntwo", 80), "one\ntwo");
    }
}
