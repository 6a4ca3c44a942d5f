//! crates/logging/src/segments.rs
//! Splitting and joining of path segments independent of the host separator.

/// Separator used when rendering paths on this host.
pub const SEPARATOR: &str = std::path::MAIN_SEPARATOR_STR;

/// Splits `path` on both `/` and `\`.
///
/// Empty segments are dropped, except a leading one which marks an absolute
/// path. An empty input yields no segments.
pub(crate) fn split(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }

    path.split(['/', '\\'])
        .enumerate()
        .filter(|(index, segment)| *index == 0 || !segment.is_empty())
        .map(|(_, segment)| segment.to_owned())
        .collect()
}

/// Joins `segments` with `separator`.
///
/// A lone absolute marker renders as the bare separator so the filesystem
/// root survives a split/join round trip.
pub(crate) fn join<S>(segments: &[S], separator: &str) -> String
where
    S: AsRef<str>,
{
    match segments {
        [only] if only.as_ref().is_empty() => separator.to_owned(),
        _ => {
            let mut joined = String::new();
            for (index, segment) in segments.iter().enumerate() {
                if index > 0 {
                    joined.push_str(separator);
                }
                joined.push_str(segment.as_ref());
            }
            joined
        }
    }
}
