//! Total order over dotted release version strings
//!
//! Catalog versions are `major.minor` or `major.minor.patch`, where the
//! patch may be the literal token `z` marking a z-stream line. Two-part
//! versions compare as if the patch were `0`. Anything else is invalid
//! and sorts after every well-formed version.

/// Patch component of a version key.
///
/// `ZStream` sorts after every numbered patch, so a `.z` release is the
/// newest entry within its `major.minor` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Patch {
    Number(u64),
    ZStream,
}

/// Comparable form of a version string.
///
/// `Invalid` keys are equal to each other and greater than every valid
/// key, so malformed versions collect at the end of a sorted list
/// instead of aborting the sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VersionKey {
    Valid {
        major: u64,
        minor: u64,
        patch: Patch,
    },
    Invalid,
}

impl VersionKey {
    /// Parse a version string into its comparable form.
    ///
    /// Examples:
    /// - "4.9" -> Valid(4, 9, 0)
    /// - "4.9.7" -> Valid(4, 9, 7)
    /// - "4.9.z" -> Valid(4, 9, z)
    /// - "4", "4.9.7.1", "nightly" -> Invalid
    pub fn parse(version: &str) -> Self {
        let parts: Vec<&str> = version.split('.').collect();
        let (major, minor, patch) = match parts.as_slice() {
            [major, minor] => (*major, *minor, "0"),
            [major, minor, patch] => (*major, *minor, *patch),
            _ => return Self::Invalid,
        };

        let (Ok(major), Ok(minor)) = (major.parse::<u64>(), minor.parse::<u64>()) else {
            return Self::Invalid;
        };

        let patch = match patch {
            "z" => Patch::ZStream,
            numeric => match numeric.parse::<u64>() {
                Ok(n) => Patch::Number(n),
                Err(_) => return Self::Invalid,
            },
        };

        Self::Valid {
            major,
            minor,
            patch,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}
