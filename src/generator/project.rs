use super::generate::GeneratedModules;
use anyhow::Context;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Directory whose presence marks where generated packages belong.
pub const DEPENDENCY_DIR: &str = "node_modules";
/// Runtime module file name
pub const RUNTIME_FILE: &str = "index.js";
/// Type declaration file name
pub const TYPES_FILE: &str = "index.d.ts";
/// Package descriptor file name
pub const PACKAGE_FILE: &str = "package.json";

/// No output directory could be found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    /// Neither `start` nor any of its ancestors contains a dependency directory
    NoDependencyDir {
        /// Directory the search started from
        start: PathBuf,
    },
}

impl fmt::Display for LocateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocateError::NoDependencyDir { start } => write!(
                f,
                "no '{}' directory found in {} or any parent directory",
                DEPENDENCY_DIR,
                start.display()
            ),
        }
    }
}

impl std::error::Error for LocateError {}

/// Nearest `node_modules/<module_name>` at or above `start`.
pub fn locate_output_dir(start: &Path, module_name: &str) -> Result<PathBuf, LocateError> {
    start
        .ancestors()
        .map(|dir| dir.join(DEPENDENCY_DIR))
        .find(|deps| deps.is_dir())
        .map(|deps| deps.join(module_name))
        .ok_or_else(|| LocateError::NoDependencyDir {
            start: start.to_path_buf(),
        })
}

#[derive(Serialize)]
struct PackageDescriptor<'a> {
    name: &'a str,
    private: bool,
    main: &'a str,
    types: &'a str,
}

/// `package.json` contents naming the runtime module as entry point.
pub fn render_package_descriptor(module_name: &str) -> anyhow::Result<String> {
    let descriptor = PackageDescriptor {
        name: module_name,
        private: true,
        main: RUNTIME_FILE,
        types: TYPES_FILE,
    };
    let mut json = serde_json::to_string_pretty(&descriptor)?;
    json.push('\n');
    Ok(json)
}

/// Write the runtime module, type module and package descriptor into `dir`.
///
/// Every text is rendered before the first file is touched.
pub fn write_artifacts(
    dir: &Path,
    modules: &GeneratedModules,
    module_name: &str,
) -> anyhow::Result<()> {
    let package = render_package_descriptor(module_name)?;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    for (file, contents) in [
        (RUNTIME_FILE, modules.runtime_module.as_str()),
        (TYPES_FILE, modules.type_module.as_str()),
        (PACKAGE_FILE, package.as_str()),
    ] {
        let path = dir.join(file);
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote artifact");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_nearest_dependency_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("apps/web");
        fs::create_dir_all(nested.join("src")).unwrap();
        fs::create_dir_all(dir.path().join(DEPENDENCY_DIR)).unwrap();

        let found = locate_output_dir(&nested.join("src"), ".routegen").unwrap();
        assert_eq!(found, dir.path().join(DEPENDENCY_DIR).join(".routegen"));

        fs::create_dir_all(nested.join(DEPENDENCY_DIR)).unwrap();
        let found = locate_output_dir(&nested, ".routegen").unwrap();
        assert_eq!(found, nested.join(DEPENDENCY_DIR).join(".routegen"));
    }

    #[test]
    fn test_locate_ignores_plain_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEPENDENCY_DIR), "").unwrap();
        let result = locate_output_dir(dir.path(), ".routegen");
        // A parent of the temp dir could legitimately contain node_modules.
        if let Ok(found) = result {
            assert_ne!(found, dir.path().join(DEPENDENCY_DIR).join(".routegen"));
        }
    }

    #[test]
    fn test_package_descriptor() {
        let json = render_package_descriptor(".routegen").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], ".routegen");
        assert_eq!(value["main"], RUNTIME_FILE);
        assert_eq!(value["types"], TYPES_FILE);
    }

    #[test]
    fn test_write_artifacts_creates_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("node_modules/.routegen");
        let modules = GeneratedModules {
            runtime_module: "export const routes = {};\n".into(),
            type_module: "// types\n".into(),
        };
        write_artifacts(&out, &modules, ".routegen").unwrap();
        assert_eq!(
            fs::read_to_string(out.join(RUNTIME_FILE)).unwrap(),
            modules.runtime_module
        );
        assert_eq!(
            fs::read_to_string(out.join(TYPES_FILE)).unwrap(),
            modules.type_module
        );
        assert!(out.join(PACKAGE_FILE).is_file());
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, "").unwrap();
        let modules = GeneratedModules {
            runtime_module: String::new(),
            type_module: String::new(),
        };
        let err = write_artifacts(&blocker.join("out"), &modules, "x").unwrap_err();
        assert!(err.to_string().contains("Failed to create output directory"));
    }
}
