//! Filtering of `style` attribute declaration lists.
//!
//! Style properties are individually allow-listed rather than the style
//! string being screened as a whole: CSS carries constructs (`behavior`,
//! `expression()`, `url(javascript:...)`) that a deny-list cannot reliably
//! catch. Only fixed cosmetic properties survive, none of which accept a
//! URI-valued argument.

use crate::policy;

/// Filter a `style` attribute value down to allow-listed declarations.
///
/// Splits on `;`, keeps declarations whose property name (the part before
/// the first `:`, trimmed and lowercased) is allow-listed, and re-emits the
/// survivors normalized as `name: value` joined with `"; "`. Declarations
/// without a `:` are not valid property/value pairs and are dropped. An
/// all-filtered input yields the empty string, which the attribute filter
/// treats as "remove the attribute".
pub fn filter_style(declarations: &str) -> String {
    let mut kept: Vec<String> = Vec::new();
    for declaration in declarations.split(';') {
        let declaration = declaration.trim();
        if declaration.is_empty() {
            continue;
        }
        let Some((name, value)) = declaration.split_once(':') else {
            continue;
        };
        let name = name.trim().to_ascii_lowercase();
        if policy::is_allowed_style_property(&name) {
            kept.push(format!("{}: {}", name, value.trim()));
        }
    }
    kept.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_allowed_properties() {
        assert_eq!(filter_style("color:red"), "color: red");
        assert_eq!(
            filter_style("color: red; font-weight: bold"),
            "color: red; font-weight: bold"
        );
    }

    #[test]
    fn test_drops_disallowed_properties() {
        assert_eq!(
            filter_style("color:red;position:fixed;behavior:url(x.htc)"),
            "color: red"
        );
        assert_eq!(filter_style("position:absolute"), "");
    }

    #[test]
    fn test_property_name_case_insensitive() {
        assert_eq!(filter_style("COLOR: red"), "color: red");
        assert_eq!(filter_style("Text-Align : center"), "text-align: center");
    }

    #[test]
    fn test_malformed_declarations_dropped() {
        assert_eq!(filter_style("color"), "");
        assert_eq!(filter_style(";;;"), "");
        assert_eq!(filter_style("  "), "");
        assert_eq!(filter_style("color red; font-size: 12px"), "font-size: 12px");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = filter_style("color:red;  font-size:12px ;position:fixed");
        assert_eq!(filter_style(&once), once);
    }
}
