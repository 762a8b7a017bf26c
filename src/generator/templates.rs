use askama::Template;

/// Runtime module: the parameter lists of every parameterized route.
#[derive(Template)]
#[template(path = "runtime.js.txt", escape = "none")]
pub struct RuntimeModuleTemplate {
    /// JSON object literal, path → parameter names
    pub routes_json: String,
}

/// Type module: path-builder overloads, a blank line, params-extractor overloads.
#[derive(Template)]
#[template(path = "routes.d.ts.txt", escape = "none")]
pub struct TypeModuleTemplate {
    /// One rendered declaration per line
    pub path_builders: Vec<String>,
    /// One rendered declaration per line
    pub params_extractors: Vec<String>,
}

/// Render a template, guaranteeing a single trailing newline.
pub(crate) fn render_file<T: Template>(template: &T) -> askama::Result<String> {
    let mut rendered = template.render()?;
    let trimmed = rendered.trim_end_matches('\n').len();
    rendered.truncate(trimmed);
    rendered.push('\n');
    Ok(rendered)
}
