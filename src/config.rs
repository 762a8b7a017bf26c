//! # Configuration
//!
//! Project settings are read from `routegen.toml` at the project root, then
//! overridden by environment variables. Every key is optional.
//!
//! ```toml
//! # "conventions" (route modules under <app_dir>/routes) or "manifest"
//! source = "conventions"
//! app_dir = "app"
//! manifest = "routes.json"
//! # Skip the node_modules lookup and write here instead
//! output_dir = "generated/routes"
//! module_name = ".routegen"
//! # "overwrite" (default) or "error"
//! collisions = "error"
//! ```
//!
//! ## Environment Variables
//!
//! | variable              | key          |
//! |-----------------------|--------------|
//! | `ROUTEGEN_SOURCE`     | `source`     |
//! | `ROUTEGEN_MANIFEST`   | `manifest`   |
//! | `ROUTEGEN_APP_DIR`    | `app_dir`    |
//! | `ROUTEGEN_OUTPUT_DIR` | `output_dir` |

use crate::generator::locate_output_dir;
use crate::resolver::CollisionPolicy;
use crate::tree::{ConventionSource, ManifestSource, RouteSource};
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Configuration file name, looked up in the project root.
pub const CONFIG_FILE: &str = "routegen.toml";

/// Where the route tree comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Route modules discovered on disk
    #[default]
    Conventions,
    /// A JSON or YAML manifest file
    Manifest,
}

impl FromStr for SourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "conventions" => Ok(SourceKind::Conventions),
            "manifest" => Ok(SourceKind::Manifest),
            other => anyhow::bail!("unknown route source '{other}'"),
        }
    }
}

/// Project settings for a generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub source: SourceKind,
    /// Manifest path, relative to the project root
    pub manifest: PathBuf,
    /// Application directory holding `routes/`, relative to the project root
    pub app_dir: PathBuf,
    /// Explicit artifact directory; located under `node_modules` when unset
    pub output_dir: Option<PathBuf>,
    /// Package name of the generated output
    pub module_name: String,
    pub collisions: CollisionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: SourceKind::Conventions,
            manifest: PathBuf::from("routes.json"),
            app_dir: PathBuf::from("app"),
            output_dir: None,
            module_name: ".routegen".to_string(),
            collisions: CollisionPolicy::Overwrite,
        }
    }
}

impl Config {
    /// Load `routegen.toml` from `root` (defaults when absent) and apply the
    /// process environment.
    pub fn load(root: &Path) -> anyhow::Result<Self> {
        let path = root.join(CONFIG_FILE);
        let config = if path.is_file() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            Self::from_toml_str(&contents)
                .with_context(|| format!("Failed to parse config: {}", path.display()))?
        } else {
            Self::default()
        };
        config.with_env(|key| std::env::var(key).ok())
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply overrides from `lookup`, which maps variable names to values.
    pub fn with_env<F>(mut self, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source) = lookup("ROUTEGEN_SOURCE") {
            self.source = source.parse()?;
        }
        if let Some(manifest) = lookup("ROUTEGEN_MANIFEST") {
            self.manifest = PathBuf::from(manifest);
        }
        if let Some(app_dir) = lookup("ROUTEGEN_APP_DIR") {
            self.app_dir = PathBuf::from(app_dir);
        }
        if let Some(output_dir) = lookup("ROUTEGEN_OUTPUT_DIR") {
            self.output_dir = Some(PathBuf::from(output_dir));
        }
        Ok(self)
    }

    pub fn route_source(&self) -> Box<dyn RouteSource> {
        match self.source {
            SourceKind::Conventions => Box::new(ConventionSource::new(&self.app_dir)),
            SourceKind::Manifest => Box::new(ManifestSource::new(&self.manifest)),
        }
    }

    /// Artifact directory for the project at `root`.
    pub fn resolve_output_dir(&self, root: &Path) -> anyhow::Result<PathBuf> {
        match &self.output_dir {
            Some(dir) if dir.is_absolute() => Ok(dir.clone()),
            Some(dir) => Ok(root.join(dir)),
            None => Ok(locate_output_dir(root, &self.module_name)?),
        }
    }

    /// Paths whose changes should trigger a new pass.
    pub fn watch_paths(&self, root: &Path) -> Vec<PathBuf> {
        let mut paths = self.route_source().watch_paths(root);
        paths.push(root.join(CONFIG_FILE));
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.source, SourceKind::Conventions);
        assert_eq!(config.collisions, CollisionPolicy::Overwrite);
    }

    #[test]
    fn test_parse_all_keys() {
        let config = Config::from_toml_str(
            r#"
source = "manifest"
manifest = "config/routes.yaml"
app_dir = "web"
output_dir = "gen"
module_name = "my-routes"
collisions = "error"
"#,
        )
        .unwrap();
        assert_eq!(config.source, SourceKind::Manifest);
        assert_eq!(config.manifest, PathBuf::from("config/routes.yaml"));
        assert_eq!(config.app_dir, PathBuf::from("web"));
        assert_eq!(config.output_dir, Some(PathBuf::from("gen")));
        assert_eq!(config.module_name, "my-routes");
        assert_eq!(config.collisions, CollisionPolicy::Error);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_toml_str("sauce = \"manifest\"").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("ROUTEGEN_SOURCE", "Manifest"),
            ("ROUTEGEN_MANIFEST", "r.yaml"),
            ("ROUTEGEN_OUTPUT_DIR", "/tmp/out"),
        ]
        .into_iter()
        .collect();
        let config = Config::default()
            .with_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.source, SourceKind::Manifest);
        assert_eq!(config.manifest, PathBuf::from("r.yaml"));
        assert_eq!(config.app_dir, PathBuf::from("app"));
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/out")));
    }

    #[test]
    fn test_bad_env_source_is_error() {
        let result = Config::default().with_env(|key| {
            (key == "ROUTEGEN_SOURCE").then(|| "filesystem".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_output_dir_is_root_relative() {
        let config = Config {
            output_dir: Some(PathBuf::from("gen/routes")),
            ..Config::default()
        };
        let root = Path::new("/project");
        assert_eq!(
            config.resolve_output_dir(root).unwrap(),
            PathBuf::from("/project/gen/routes")
        );
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "module_name = \"x\"\n").unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.module_name, "x");
    }

    #[test]
    fn test_watch_paths_include_config_file() {
        let root = Path::new("/project");
        let paths = Config::default().watch_paths(root);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/project/app/routes"),
                PathBuf::from("/project/routegen.toml")
            ]
        );
    }
}
