use crate::models::FontFamily;
use crate::utils::constant_name;
use super::fill;

const ACCESSOR_TEMPLATE: &str = r#"import SwiftUI

public struct {{TYPE}} {
    public let name: String

    private init(named name: String) {
        self.name = name
        do {
            try registerFont(named: name)
        } catch {
            let reason = error.localizedDescription
            fatalError("Failed to register font: \(reason)")
        }
    }

{{CONSTANTS}}
}
"#;

/// Render the `<Family>Font` type with one constant per font, in family order.
///
/// Registration failure inside the generated initializer is fatal for the
/// consuming app: bundled fonts are a build-time guarantee of the package.
pub fn render_accessor(family: &FontFamily) -> String {
    let type_name = family.package_name();
    let constants: String = family
        .fonts()
        .iter()
        .map(|font| {
            format!(
                "    public static let {} = {}(named: \"{}\")\n",
                constant_name(&font.style),
                type_name,
                font.data_set_id
            )
        })
        .collect();

    fill(ACCESSOR_TEMPLATE, &[("TYPE", &type_name), ("CONSTANTS", &constants)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::test_support::family;

    #[test]
    fn constants_follow_weight_order() {
        let source = render_accessor(&family("Roboto", &["Bold", "Regular", "BoldItalic"]));
        let regular = source.find("public static let regular = RobotoFont(named: \"Roboto-Regular\")").unwrap();
        let bold = source.find("public static let bold = RobotoFont(named: \"Roboto-Bold\")").unwrap();
        let bold_italic = source.find("public static let bolditalic = ").unwrap();
        assert!(regular < bold);
        assert!(bold < bold_italic);
    }

    #[test]
    fn declares_type_and_fatal_registration() {
        let source = render_accessor(&family("Inter", &["Medium"]));
        assert!(source.contains("public struct InterFont {"));
        assert!(source.contains("private init(named name: String)"));
        assert!(source.contains("fatalError(\"Failed to register font: \\(reason)\")"));
        assert!(source.ends_with("InterFont(named: \"Inter-Medium\")\n\n}\n"));
    }
}
