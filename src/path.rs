//! `simplePath` helpers.
//!
//! The Web Modeler service reports file and folder locations as a
//! slash-separated `simplePath`. A literal `/` inside a name is written as
//! `\/` so that it is not mistaken for a separator. These helpers build and
//! take apart such paths; ids used in request URLs are never passed through
//! them.

/// Escape the slashes in a single file or folder name.
pub fn escape_segment(name: &str) -> String {
    name.replace('/', "\\/")
}

/// Join names into a `simplePath`, escaping each one.
pub fn join<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .map(|s| escape_segment(s.as_ref()))
        .collect::<Vec<_>>()
        .join("/")
}

/// Split a `simplePath` into unescaped names.
///
/// Only `\/` is treated as an escape; any other backslash is kept as is.
pub fn split(simple_path: &str) -> Vec<String> {
    if simple_path.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = simple_path.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'/') => {
                chars.next();
                current.push('/');
            }
            '/' => segments.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    segments.push(current);
    segments
}
