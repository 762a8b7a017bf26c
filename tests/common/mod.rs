#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway project directory with a `node_modules` folder.
pub struct TempProject {
    dir: TempDir,
}

impl TempProject {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("node_modules")).unwrap();
        TempProject { dir }
    }

    /// A project without `node_modules`.
    pub fn bare() -> Self {
        TempProject {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> PathBuf {
        // Canonical so paths compare equal to the ones notify reports.
        self.dir.path().canonicalize().unwrap()
    }

    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn route(&self, rel: &str) -> PathBuf {
        self.write(
            &format!("app/routes/{rel}"),
            "export default function Route() { return null; }\n",
        )
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join("node_modules").join(".routegen")
    }

    pub fn artifact(&self, file: &str) -> String {
        fs::read_to_string(self.output_dir().join(file)).unwrap()
    }

    /// The artifact's contents, or `None` if it has not been written yet.
    pub fn try_artifact(&self, file: &str) -> Option<String> {
        fs::read_to_string(self.output_dir().join(file)).ok()
    }

    pub fn has_artifacts(&self) -> bool {
        self.output_dir().join("index.js").exists()
    }
}

/// Whether any ancestor of `path` already has a `node_modules` directory,
/// which would let output lookups succeed outside the test project.
pub fn ancestor_has_node_modules(path: &Path) -> bool {
    path.ancestors().any(|dir| dir.join("node_modules").is_dir())
}

pub const USERS_MANIFEST: &str = r#"{
  "routes": {
    "root": {},
    "routes/users": { "parentId": "root", "path": "users" },
    "routes/users/$id": { "parentId": "routes/users", "path": ":id" },
    "routes/about": { "parentId": "root", "path": "about" }
  }
}
"#;
