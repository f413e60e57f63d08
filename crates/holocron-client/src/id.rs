//! Local identifiers for hypermedia URLs
//!
//! Every entity served by the API is addressed by an absolute URL such as
//! `https://swapi.dev/api/people/1/`. The last non-empty path segment is the
//! entity's local identifier, used both as a cache key and as a route parameter.

/// Resolve the local identifier of a hypermedia URL.
///
/// Splits on `/`, discards empty segments and returns the last one:
///
/// ```
/// use holocron_client::resolve_id;
///
/// assert_eq!(resolve_id("https://swapi.dev/api/people/1/"), "1");
/// assert_eq!(resolve_id("https://swapi.dev/api/planets/23"), "23");
/// ```
///
/// URLs produced by the API always carry a path. A string made only of
/// slashes has no identifier; debug builds assert on it and release builds
/// return the empty string.
pub fn resolve_id(url: &str) -> &str {
    let id = url.rsplit('/').find(|segment| !segment.is_empty());
    debug_assert!(id.is_some(), "hypermedia URL without path segments: {url:?}");
    id.unwrap_or_default()
}

/// Strip everything but ASCII digits from a route-supplied identifier.
///
/// Route parameters are free-form user input; this is the only filter
/// applied before an identifier is placed in a request path.
pub fn sanitize_id(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}
