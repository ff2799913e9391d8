//! Plain text to RTF conversion for installer license pages.

const RTF_HEADER: &str = r"{\rtf1\ansi\deff0{\fonttbl{\f0 Arial;}}\f0\fs20 ";
const RTF_FOOTER: &str = "}";

/// Converts plain text into a minimal RTF document.
///
/// Backslashes are escaped before braces so the escapes added for braces are
/// not escaped again. Carriage returns are dropped and line feeds become
/// `\par`. Characters outside ASCII are written as `\uN?` escapes.
pub fn text_to_rtf(text: &str) -> String {
    let escaped = text
        .replace('\\', r"\\")
        .replace('{', r"\{")
        .replace('}', r"\}")
        .replace('\r', "")
        .replace('\n', r"\par ");

    let mut body = String::with_capacity(escaped.len());
    for c in escaped.chars() {
        if c.is_ascii() {
            body.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                // RTF takes signed 16-bit code units
                body.push_str(&format!(r"\u{}?", *unit as i16));
            }
        }
    }

    format!("{}{}{}", RTF_HEADER, body, RTF_FOOTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_a_valid_document() {
        assert_eq!(text_to_rtf(""), format!("{}{}", RTF_HEADER, RTF_FOOTER));
    }

    #[test]
    fn special_characters_are_escaped_once() {
        let rtf = text_to_rtf("a\\b {c}\r\nnext");
        assert_eq!(
            rtf,
            format!(r"{}a\\b \{{c\}}\par next{}", RTF_HEADER, RTF_FOOTER)
        );
    }

    #[test]
    fn conversion_is_repeatable() {
        let text = "MIT License\n\nCopyright (c) {year} \\ Acme\n";
        assert_eq!(text_to_rtf(text), text_to_rtf(text));
    }

    #[test]
    fn braces_stay_balanced() {
        let rtf = text_to_rtf("}}}{ unbalanced {");
        let body = &rtf[RTF_HEADER.len()..rtf.len() - RTF_FOOTER.len()];
        let unescaped_open = body.matches('{').count() - body.matches(r"\{").count();
        let unescaped_close = body.matches('}').count() - body.matches(r"\}").count();
        assert_eq!(unescaped_open, 0);
        assert_eq!(unescaped_close, 0);
    }

    #[test]
    fn non_ascii_uses_unicode_escapes() {
        assert!(text_to_rtf("©").contains(r"\u169?"));
        assert!(text_to_rtf("😀").contains(r"\u-10179?\u-8704?"));
    }
}
