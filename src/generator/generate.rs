use super::declarations::{params_extractor_declaration, path_builder_declaration};
use super::templates::{render_file, RuntimeModuleTemplate, TypeModuleTemplate};
use crate::resolver::RoutesTable;
use anyhow::Context;
use indexmap::IndexMap;

/// Path of the synthetic root route every project has.
pub const ROOT_PATH: &str = "/";

/// The two rendered modules of a generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModules {
    /// JavaScript module exporting `routes`
    pub runtime_module: String,
    /// TypeScript declarations for `$path` and `$params`
    pub type_module: String,
}

/// Render both modules for `table`.
///
/// Pure: nothing is written. Either both texts are produced or an error is.
pub fn generate(table: &RoutesTable) -> anyhow::Result<GeneratedModules> {
    Ok(GeneratedModules {
        runtime_module: render_runtime_module(table)?,
        type_module: render_type_module(table)?,
    })
}

/// Runtime table of every route with at least one parameter.
pub fn render_runtime_module(table: &RoutesTable) -> anyhow::Result<String> {
    let routes: IndexMap<&str, &[String]> = table
        .parameterized()
        .map(|(path, params)| (path.as_str(), params.as_slice()))
        .collect();
    let routes_json =
        serde_json::to_string_pretty(&routes).context("Failed to serialize runtime routes")?;
    render_file(&RuntimeModuleTemplate { routes_json })
        .context("Failed to render runtime module")
}

/// `$path` overloads for the root and every route, then `$params` overloads
/// for parameterized routes.
pub fn render_type_module(table: &RoutesTable) -> anyhow::Result<String> {
    let path_builders = std::iter::once(path_builder_declaration(ROOT_PATH, &[]))
        .chain(
            table
                .iter()
                .map(|(path, params)| path_builder_declaration(path, params)),
        )
        .collect();
    let params_extractors = table
        .parameterized()
        .map(|(path, params)| params_extractor_declaration(path, params))
        .collect();
    render_file(&TypeModuleTemplate {
        path_builders,
        params_extractors,
    })
    .context("Failed to render type module")
}
