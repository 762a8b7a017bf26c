//! # Generator Module
//!
//! Renders the artifacts application code imports from a resolved
//! [`RoutesTable`](crate::resolver::RoutesTable):
//!
//! - **`index.js`** - `export const routes`, the parameter names of every route
//!   that captures at least one parameter
//! - **`index.d.ts`** - one `$path` overload per route (plus the root `/`) and one
//!   `$params` overload per parameterized route
//! - **`package.json`** - names the output as a package with `index.js` as entry
//!
//! ```text
//! RoutesTable → generate() → GeneratedModules → write_artifacts() → node_modules/.routegen/
//! ```
//!
//! Rendering is pure and happens fully in memory; [`write_artifacts`] is the only
//! step that touches the filesystem. Templates live in `templates/`:
//!
//! - `runtime.js.txt` - runtime module
//! - `routes.d.ts.txt` - declaration module

mod declarations;
mod generate;
mod project;
mod templates;

pub use declarations::{
    js_string_literal, params_extractor_declaration, path_builder_declaration, PARAMS_EXTRACTOR,
    PATH_BUILDER,
};
pub use generate::{generate, render_runtime_module, render_type_module, GeneratedModules, ROOT_PATH};
pub use project::{
    locate_output_dir, render_package_descriptor, write_artifacts, LocateError, DEPENDENCY_DIR,
    PACKAGE_FILE, RUNTIME_FILE, TYPES_FILE,
};
pub use templates::{RuntimeModuleTemplate, TypeModuleTemplate};
