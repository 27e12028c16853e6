/// Configuration for a package generation run
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// Version constants written into every package manifest
    pub manifest: ManifestSettings,
}

/// Tools version and platform floors declared by generated manifests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSettings {
    /// `swift-tools-version` header value
    pub tools_version: String,
    /// Minimum iOS version, as a `SupportedPlatform` case name
    pub ios_version: String,
    /// Minimum macOS version, as a `SupportedPlatform` case name
    pub macos_version: String,
}

impl Default for ManifestSettings {
    fn default() -> Self {
        Self {
            tools_version: "5.8".to_string(),
            ios_version: "v14".to_string(),
            macos_version: "v12".to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with default manifest settings
    pub fn new(debug_mode: bool) -> Self {
        Self {
            debug_mode,
            manifest: ManifestSettings::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(false)
    }
}
