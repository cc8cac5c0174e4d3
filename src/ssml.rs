//! Plaintext-to-SSML encoding.
//!
//! The transformation is pure and total: any input string yields a
//! well-formed SSML document. Markup-reserved characters are escaped to
//! their entity form, a pause directive is inserted after every line break,
//! and the result is wrapped in a single `<speak>` root element.

/// Pause inserted after each line break, in seconds.
pub const DEFAULT_PAUSE_SECS: u32 = 2;

/// Escape markup-reserved characters to their entity form.
///
/// Runs in a single pass over the source characters. Replacements apply to
/// the input text only, never to the output of an earlier replacement, so
/// a `<` escaped to `&lt;` does not have its ampersand escaped in turn.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Encode plaintext as an SSML document with the default inter-line pause.
pub fn encode(raw: &str) -> String {
    encode_with_pause(raw, DEFAULT_PAUSE_SECS)
}

/// Encode plaintext as an SSML document.
///
/// Reserved characters are escaped, a `<break>` directive of `pause_secs`
/// seconds is inserted immediately after every line break of the source
/// (the line break itself is preserved), and the whole sequence is wrapped
/// in one `<speak>` root element.
pub fn encode_with_pause(raw: &str, pause_secs: u32) -> String {
    let brk = format!("\n<break time=\"{pause_secs}s\"/>");
    let body = escape(raw).replace('\n', &brk);
    format!("<speak>{body}</speak>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_wrapped() {
        assert_eq!(encode("Hello"), "<speak>Hello</speak>");
    }

    #[test]
    fn ampersand_is_escaped() {
        assert_eq!(encode("A & B"), "<speak>A &amp; B</speak>");
    }

    #[test]
    fn line_break_gets_pause() {
        assert_eq!(
            encode("Line1\nLine2"),
            "<speak>Line1\n<break time=\"2s\"/>Line2</speak>"
        );
    }

    #[test]
    fn angle_brackets_do_not_survive() {
        assert_eq!(encode("<tag>"), "<speak>&lt;tag&gt;</speak>");
    }

    #[test]
    fn empty_input_yields_empty_document() {
        assert_eq!(encode(""), "<speak></speak>");
    }

    #[test]
    fn all_reserved_characters() {
        assert_eq!(
            escape(r#"&<>"'"#),
            "&amp;&lt;&gt;&quot;&#39;"
        );
    }

    #[test]
    fn existing_entity_is_escaped_literally() {
        // Escaping operates on source characters, not output substrings.
        assert_eq!(escape("&amp;"), "&amp;amp;");
    }

    #[test]
    fn clean_text_is_untouched() {
        assert_eq!(escape("no reserved characters here"), "no reserved characters here");
    }

    #[test]
    fn trailing_newline_still_gets_one_pause() {
        assert_eq!(
            encode("done\n"),
            "<speak>done\n<break time=\"2s\"/></speak>"
        );
    }

    #[test]
    fn custom_pause_duration() {
        assert_eq!(
            encode_with_pause("a\nb", 5),
            "<speak>a\n<break time=\"5s\"/>b</speak>"
        );
    }

    #[test]
    fn carriage_return_is_ordinary_text() {
        assert_eq!(encode("a\r\nb"), "<speak>a\r\n<break time=\"2s\"/>b</speak>");
    }
}
