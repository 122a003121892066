//! Release model for catalog entries

use crate::release::ordering::VersionKey;

// Phase labels as the catalog displays them. Compared verbatim, no
// normalization.
pub const PHASE_UNSUPPORTED: &str = "Unsupported";
pub const PHASE_MAINTENANCE: &str = "Maintenance";
pub const PHASE_PLANNING: &str = "Planning / Development / Testing";
pub const PHASE_CI_CD: &str = "CI / CD";

/// Suffix marking a z-stream (maintenance point-release) version.
const Z_STREAM_SUFFIX: &str = ".z";

/// One product release as reported by the catalog.
///
/// The identifier has the form `<shortname>-<version>`, e.g.
/// `openshift-4.11`. Only the first `-` separates the two halves; an
/// identifier without one degrades to empty shortname and version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    identifier: String,
    phase: String,
}

impl Release {
    pub fn new(identifier: impl Into<String>, phase: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            phase: phase.into(),
        }
    }

    /// Version half of the identifier (after the first `-`), or `""`.
    pub fn version(&self) -> &str {
        self.identifier.split_once('-').map_or("", |(_, v)| v)
    }

    /// Product family half of the identifier (before the first `-`), or `""`.
    pub fn shortname(&self) -> &str {
        self.identifier.split_once('-').map_or("", |(s, _)| s)
    }

    /// Raw phase label as reported by the catalog.
    pub fn phase(&self) -> &str {
        &self.phase
    }

    pub fn is_unsupported(&self) -> bool {
        self.phase == PHASE_UNSUPPORTED
    }

    pub fn is_maintained(&self) -> bool {
        self.phase == PHASE_MAINTENANCE
    }

    /// Whether the release is in an active pre-GA development phase.
    pub fn is_developed(&self) -> bool {
        self.phase == PHASE_PLANNING || self.phase == PHASE_CI_CD
    }

    /// Whether the version denotes a z-stream line (ends with `.z`).
    pub fn is_z_stream(&self) -> bool {
        self.version().ends_with(Z_STREAM_SUFFIX)
    }
}

/// Ordered list of releases, in catalog response order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Releases(Vec<Release>);

impl Releases {
    pub fn new(releases: Vec<Release>) -> Self {
        Self(releases)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Release> {
        self.0.iter()
    }

    /// Version of the latest release in an active development phase.
    ///
    /// Sorts a private copy ascending by version key (the list itself is
    /// left untouched) and scans from the top, skipping z-stream
    /// releases unless `include_z_stream` is set and anything not in a
    /// developed phase. Note that the phase filter also drops
    /// `Unsupported` and `Maintenance` releases, so a product line with
    /// nothing in development reports no latest version. A release whose
    /// version does not parse is never reported.
    ///
    /// Returns `None` when the list is empty or nothing qualifies.
    pub fn latest_version(&self, include_z_stream: bool) -> Option<String> {
        let mut sorted: Vec<(VersionKey, &Release)> = self
            .0
            .iter()
            .map(|release| (VersionKey::parse(release.version()), release))
            .collect();
        sorted.sort_by_key(|(key, _)| *key);

        sorted
            .into_iter()
            .rev()
            .filter(|(key, _)| key.is_valid())
            .find(|(_, release)| {
                (include_z_stream || !release.is_z_stream()) && release.is_developed()
            })
            .map(|(_, release)| release.version().to_string())
    }
}

impl FromIterator<Release> for Releases {
    fn from_iter<I: IntoIterator<Item = Release>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Releases {
    type Item = Release;
    type IntoIter = std::vec::IntoIter<Release>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Releases {
    type Item = &'a Release;
    type IntoIter = std::slice::Iter<'a, Release>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
