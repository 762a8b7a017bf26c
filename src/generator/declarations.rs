//! TypeScript declaration rendering for a single route.

/// Name of the generated path-builder function.
pub const PATH_BUILDER: &str = "$path";
/// Name of the generated params-extractor function.
pub const PARAMS_EXTRACTOR: &str = "$params";

const PARAM_VALUE: &str = "string | number";
const QUERY_PARAMS: &str = "Record<string, string | number>";
const RAW_PARAMS: &str = "{ readonly [key: string]: string | undefined }";

/// `$path` overload for `path`.
///
/// The `params` argument is only declared when the route captures parameters.
pub fn path_builder_declaration(path: &str, params: &[String]) -> String {
    let route = js_string_literal(path);
    if params.is_empty() {
        format!(
            "export declare function {PATH_BUILDER}(route: {route}, query?: {QUERY_PARAMS}): string;"
        )
    } else {
        format!(
            "export declare function {PATH_BUILDER}(route: {route}, params: {}, query?: {QUERY_PARAMS}): string;",
            record_type(params, PARAM_VALUE)
        )
    }
}

/// `$params` overload for a route that captures `params`.
pub fn params_extractor_declaration(path: &str, params: &[String]) -> String {
    format!(
        "export declare function {PARAMS_EXTRACTOR}(route: {}, params: {RAW_PARAMS}): {};",
        js_string_literal(path),
        record_type(params, "string")
    )
}

/// Object type with one required field per distinct name.
fn record_type(names: &[String], ty: &str) -> String {
    let mut seen = Vec::with_capacity(names.len());
    for name in names {
        if !seen.contains(&name.as_str()) {
            seen.push(name.as_str());
        }
    }
    let fields: Vec<String> = seen
        .into_iter()
        .map(|name| format!("{}: {ty}", property_key(name)))
        .collect();
    format!("{{ {} }}", fields.join("; "))
}

fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        js_string_literal(name)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Double-quoted string literal valid in both JavaScript and TypeScript.
pub fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
