/// Prefix marking a path segment as a named parameter.
pub const PARAM_MARKER: char = ':';

/// Parameter names captured by a chain of path segments, in encounter order.
///
/// A segment that starts with the marker is treated as a run of parameter
/// sub-segments and every `/`-separated piece of it is captured. In any other
/// segment the leading literal piece is skipped and only marked pieces are
/// captured. Names repeated across segments are kept.
pub fn extract_params<'a, I>(segments: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut params = Vec::new();
    for segment in segments {
        if segment.starts_with(PARAM_MARKER) {
            params.extend(segment.split('/').map(|piece| strip_marker(piece).to_string()));
        } else {
            params.extend(
                segment
                    .split('/')
                    .skip(1)
                    .filter_map(|piece| piece.strip_prefix(PARAM_MARKER))
                    .map(str::to_string),
            );
        }
    }
    params
}

fn strip_marker(piece: &str) -> &str {
    piece.strip_prefix(PARAM_MARKER).unwrap_or(piece)
}
