/// Escapes the five HTML-significant characters: `&`, `<`, `>`, `"`, `'`.
///
/// Applied independently to every untrusted field before embedding, and to
/// sitemap `<loc>` values (the same set is XML-safe).
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            escape_html(r#"<b>"war" & 'peace'</b>"#),
            "&lt;b&gt;&quot;war&quot; &amp; &#x27;peace&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_html("Промова Президента"), "Промова Президента");
    }

    #[test]
    fn escaping_is_not_idempotent_but_output_has_no_raw_markup() {
        let once = escape_html("<a&b>");
        let twice = escape_html(&once);
        assert_ne!(once, twice);
        assert!(!once.contains('<') && !once.contains('>'));
        assert_eq!(once, "&lt;a&amp;b&gt;");
    }
}
