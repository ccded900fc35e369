use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use super::PlanFormat;
use crate::constants::plans::{EXTENSIONS, SKIPPED_DIRS};
use crate::error::ScheduleError;
use crate::progress::ProgressReporter;

/// Finds plan files below a set of paths
///
/// Directories are walked recursively; files are taken as given. The result
/// is sorted and free of duplicates.
pub struct PlanDiscovery {
    include: Vec<Pattern>,
    warnings: Vec<String>,
}

impl PlanDiscovery {
    /// Create a discovery restricted to paths matching any of `include`
    /// (no patterns means every plan file)
    pub fn new(include: &[String]) -> Result<Self, ScheduleError> {
        let include = include
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|e| ScheduleError::ConfigurationError {
                    message: format!("Invalid include pattern '{pattern}': {e}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            include,
            warnings: Vec::new(),
        })
    }

    pub fn discover_all(
        &mut self,
        paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Vec<PathBuf> {
        let mut found = BTreeSet::new();

        for path in paths {
            if !path.exists() {
                self.warnings
                    .push(format!("Path '{}' does not exist", path.display()));
                continue;
            }

            if path.is_file() {
                if PlanFormat::from_path(path).is_some() {
                    found.insert(path.clone());
                } else {
                    self.warnings.push(format!(
                        "Path '{}' is not a plan file (expected {})",
                        path.display(),
                        EXTENSIONS
                            .iter()
                            .map(|extension| format!(".{extension}"))
                            .collect::<Vec<_>>()
                            .join(" or ")
                    ));
                }
                continue;
            }

            for entry in WalkDir::new(path)
                .into_iter()
                .filter_entry(|e| {
                    e.depth() == 0
                        || !e.file_type().is_dir()
                        || !SKIPPED_DIRS.iter().any(|skipped| e.file_name() == *skipped)
                })
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
            {
                let candidate = entry.path();
                if PlanFormat::from_path(candidate).is_none() || !self.is_included(path, candidate) {
                    continue;
                }
                if let Some(p) = progress {
                    p.found_plan(candidate);
                }
                found.insert(entry.into_path());
            }
        }

        found.into_iter().collect()
    }

    /// Patterns match either the path below the searched root or the full path
    fn is_included(&self, root: &Path, path: &Path) -> bool {
        if self.include.is_empty() {
            return true;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.include
            .iter()
            .any(|pattern| pattern.matches_path(relative) || pattern.matches_path(path))
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn touch(root: &Path, relative: &str) -> PathBuf {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "num_courses = 1\n").unwrap();
        path
    }

    #[test]
    fn test_discovers_plan_files_recursively() {
        let dir = TempDir::new().unwrap();
        let a = touch(dir.path(), "a.toml");
        let b = touch(dir.path(), "nested/deeper/b.json");
        touch(dir.path(), "notes.txt");

        let mut discovery = PlanDiscovery::new(&[]).unwrap();
        let found = discovery.discover_all(&[dir.path().to_path_buf()], None);

        assert_eq!(found, vec![a, b]);
        assert!(discovery.warnings().is_empty());
    }

    #[test]
    fn test_skips_build_and_vcs_directories() {
        let dir = TempDir::new().unwrap();
        let kept = touch(dir.path(), "plans/kept.toml");
        touch(dir.path(), "target/debug/skipped.toml");
        touch(dir.path(), ".git/skipped.json");
        touch(dir.path(), "node_modules/pkg/skipped.json");

        let mut discovery = PlanDiscovery::new(&[]).unwrap();
        let found = discovery.discover_all(&[dir.path().to_path_buf()], None);

        assert_eq!(found, vec![kept]);
    }

    #[test]
    fn test_include_patterns_filter() {
        let dir = TempDir::new().unwrap();
        let wanted = touch(dir.path(), "cycles/mutual.toml");
        touch(dir.path(), "acyclic/chain.toml");

        let mut discovery = PlanDiscovery::new(&["*/cycles/*.toml".to_string()]).unwrap();
        let found = discovery.discover_all(&[dir.path().to_path_buf()], None);

        assert_eq!(found, vec![wanted]);
    }

    #[test]
    fn test_include_patterns_relative_to_searched_root() {
        let dir = TempDir::new().unwrap();
        let wanted = touch(dir.path(), "cycles/mutual.toml");
        touch(dir.path(), "acyclic/chain.toml");
        touch(dir.path(), "nested/cycles/deep.toml");

        let mut discovery = PlanDiscovery::new(&["cycles/*.toml".to_string()]).unwrap();
        let found = discovery.discover_all(&[dir.path().to_path_buf()], None);

        assert_eq!(found, vec![wanted]);
    }

    #[test]
    fn test_explicit_files_and_duplicates() {
        let dir = TempDir::new().unwrap();
        let plan = touch(dir.path(), "one.toml");

        let mut discovery = PlanDiscovery::new(&[]).unwrap();
        let found = discovery.discover_all(&[plan.clone(), dir.path().to_path_buf()], None);

        assert_eq!(found, vec![plan]);
    }

    #[test]
    fn test_missing_paths_become_warnings() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let text = touch(dir.path(), "readme.md");

        let mut discovery = PlanDiscovery::new(&[]).unwrap();
        let found = discovery.discover_all(&[missing, text], None);

        assert!(found.is_empty());
        assert_eq!(discovery.warnings().len(), 2);
        assert!(discovery.warnings()[0].contains("does not exist"));
    }

    #[test]
    fn test_invalid_pattern_is_a_configuration_error() {
        let err = PlanDiscovery::new(&["[".to_string()]).err().unwrap();
        assert!(matches!(err, ScheduleError::ConfigurationError { .. }));
    }
}
