use std::cmp::Ordering;

use semver::Version;
use tracing::debug;

/// Zero-padded segments rewritten by [`clean_tag`], applied in this order.
const ZERO_PADDED_SEGMENTS: [(&str, &str); 9] = [
    (".01", ".1"),
    (".02", ".2"),
    (".03", ".3"),
    (".04", ".4"),
    (".05", ".5"),
    (".06", ".6"),
    (".07", ".7"),
    (".08", ".8"),
    (".09", ".9"),
];

/// Tidy up a tag name so it can be parsed as a semantic version.
///
/// Every `v` and `V` is removed (anywhere in the string, not only as a prefix),
/// then the literal segments `.01` through `.09` are replaced by `.1` through `.9`.
/// This is a literal substring rewrite: `.00` and `.10` are left alone, while
/// `.010` becomes `.10` and prerelease segments like `rc.01` are rewritten too.
///
/// Examples:
/// - "v1.02.0" -> "1.2.0"
/// - "V2.00.09" -> "2.00.9"
/// - "release-1.0.0" -> "release-1.0.0"
pub fn clean_tag(tag: &str) -> String {
    ZERO_PADDED_SEGMENTS.iter().fold(
        tag.replace(['v', 'V'], ""),
        |cleaned, &(padded, unpadded)| cleaned.replace(padded, unpadded),
    )
}

/// Clean a tag name and parse it as a semantic version.
pub fn parse_tag(tag: &str) -> Result<Version, semver::Error> {
    Version::parse(&clean_tag(tag))
}

/// The zero version, returned when no tag yields a valid version.
pub fn zero_version() -> Version {
    Version::new(0, 0, 0)
}

/// Find the highest semantic version among the given tag names.
///
/// Tags that do not parse after cleaning are skipped. Versions are ordered by
/// semver precedence, so build metadata never makes one version greater than
/// another and the first of two equal-precedence tags wins.
///
/// Returns `0.0.0` when no tag parses.
pub fn latest_version<I, S>(tags: I) -> Version
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|tag| {
            let tag = tag.as_ref();
            parse_tag(tag)
                .inspect_err(|e| debug!("Skipping tag '{}': {}", tag, e))
                .ok()
        })
        .fold(zero_version(), |best, version| {
            if version.cmp_precedence(&best) == Ordering::Greater {
                version
            } else {
                best
            }
        })
}
