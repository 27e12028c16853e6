use crate::models::FontFamily;
use super::fill;

// SwiftUI fonts resolve by name lazily; the font is registered when the
// `<Family>Font` constant is first touched, so no fallback is needed here.
const FONT_EXTENSION_TEMPLATE: &str = r#"import SwiftUI

extension Font {

    public struct {{FAMILY}} {

        /// Returns a fixed-size font of the specified style.
        public static func fixed(_ style: {{TYPE}}, size: CGFloat) -> Font {
            return Font.custom(style.name, fixedSize: size)
        }

        /// Returns a relative-size font of the specified style.
        public static func relative(_ style: {{TYPE}}, size: CGFloat, relativeTo textStyle: Font.TextStyle) -> Font {
            return Font.custom(style.name, size: size, relativeTo: textStyle)
        }
    }
}
"#;

const UIFONT_EXTENSION_TEMPLATE: &str = r#"#if canImport(UIKit)
import UIKit

extension UIFont {

    public struct {{FAMILY}} {

        /// Returns a fixed-size font of the specified style.
        static func fixed(_ style: {{TYPE}}, size: CGFloat) -> UIFont {
            guard let customFont = UIFont(name: style.name, size: size) else {
                // Fall back to system font.
                return UIFont.systemFont(ofSize: size)
            }
            return customFont
        }

        /// Returns a relative-size font of the specified style.
        static func relative(_ style: {{TYPE}}, size: CGFloat, relativeTo textStyle: UIFont.TextStyle) -> UIFont {
            let customFont = UIFont(name: style.name, size: size)
            if let font = customFont {
                // Scale the custom font according to the text style.
                return UIFontMetrics(forTextStyle: textStyle).scaledFont(for: font)
            } else {
                // Fall back to system font.
                return UIFont.preferredFont(forTextStyle: textStyle)
            }
        }
    }
}
#endif
"#;

/// Render `Font+<Family>`: SwiftUI factories without a fallback path
pub fn render_font_extension(family: &FontFamily) -> String {
    render(FONT_EXTENSION_TEMPLATE, family)
}

/// Render `UIFont+<Family>`: UIKit factories falling back to the system font
pub fn render_uifont_extension(family: &FontFamily) -> String {
    render(UIFONT_EXTENSION_TEMPLATE, family)
}

fn render(template: &str, family: &FontFamily) -> String {
    fill(template, &[("FAMILY", family.name()), ("TYPE", &family.package_name())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::test_support::family;

    #[test]
    fn swiftui_extension_has_no_fallback() {
        let source = render_font_extension(&family("Roboto", &["Regular"]));
        assert!(source.contains("public struct Roboto {"));
        assert!(source.contains("static func fixed(_ style: RobotoFont, size: CGFloat) -> Font"));
        assert!(source.contains("relativeTo textStyle: Font.TextStyle) -> Font"));
        assert!(!source.contains("systemFont"));
    }

    #[test]
    fn uikit_extension_falls_back_to_system_font() {
        let source = render_uifont_extension(&family("Roboto", &["Regular"]));
        assert!(source.starts_with("#if canImport(UIKit)"));
        assert!(source.contains("static func fixed(_ style: RobotoFont, size: CGFloat) -> UIFont"));
        assert!(source.contains("return UIFont.systemFont(ofSize: size)"));
        assert!(source.contains("return UIFont.preferredFont(forTextStyle: textStyle)"));
        assert!(!source.contains("{{"));
    }
}
