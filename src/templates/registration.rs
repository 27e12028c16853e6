pub const REGISTRATION_FILE_NAME: &str = "FontRegistration.swift";

/// Loads `Fonts/<name>` from the package's asset catalog and registers it
/// with Core Text.
const REGISTRATION_SOURCE: &str = r#"#if canImport(UIKit)
import UIKit
#elseif canImport(AppKit)
import AppKit
#endif
import CoreGraphics
import CoreText

public enum FontError: Swift.Error {
   case failedToRegisterFont
}

func registerFont(named name: String) throws {
   guard let asset = NSDataAsset(name: "Fonts/\(name)", bundle: Bundle.module),
      let provider = CGDataProvider(data: asset.data as NSData),
      let font = CGFont(provider),
      CTFontManagerRegisterGraphicsFont(font, nil) else {
    throw FontError.failedToRegisterFont
   }
}
"#;

/// Render the registration helper; identical for every family
pub fn render_registration() -> String {
    REGISTRATION_SOURCE.to_string()
}
