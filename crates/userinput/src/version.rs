/// Names of the operations this build provides.
pub const FEATURES: &[&str] = &[
    "read_line",
    "read_character",
    "read_multiline",
    "read_integer",
    "read_double",
    "read_yes_no",
    "version",
];

/// Release and feature descriptor of the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    /// The crate version.
    pub release: &'static str,
    /// See [`FEATURES`].
    pub features: &'static [&'static str],
}

impl VersionInfo {
    /// Whether an operation of that name is available.
    #[must_use]
    pub fn supports(&self, feature: &str) -> bool {
        self.features.contains(&feature)
    }
}

/// Describes this build.
#[must_use]
pub const fn version() -> VersionInfo {
    VersionInfo {
        release: env!("CARGO_PKG_VERSION"),
        features: FEATURES,
    }
}
