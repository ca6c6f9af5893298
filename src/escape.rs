/// Escape text for an HTML element context.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for a double-quoted HTML attribute context.
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        let input = "<script>a && b</script>";
        let output = escape_text(input);

        assert_eq!(output, "&lt;script&gt;a &amp;&amp; b&lt;/script&gt;");
        assert!(!output.contains('<'));
        assert!(!output.contains('>'));
    }

    #[test]
    fn test_escape_attribute() {
        let input = r#"x" onclick="alert(1)"#;
        let output = escape_attribute(input);

        assert!(output.contains("&quot;"));
        assert!(!output.contains('"'));
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_text("hello world"), "hello world");
        assert_eq!(escape_attribute("color: red"), "color: red");
    }
}
