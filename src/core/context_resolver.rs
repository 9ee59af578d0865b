use crate::{
    constants::{CONFIG_FILENAME, DOCKER_MARKERS, NODE_MARKERS, PYTHON_MARKERS},
    models::{ProjectContext, ProjectType},
};
use std::path::{Path, PathBuf};

/// Finds the nearest project configuration, searching `start` and then each ancestor.
/// Returns `None` when no `shemul.json` exists up to the filesystem root.
pub fn discover(start: &Path) -> Option<ProjectContext> {
    let config_path = find_upward(start, CONFIG_FILENAME)?;
    let root = config_path.parent()?.to_path_buf();
    let project_type = detect_project_type(&root);

    log::debug!(
        "Project config found at '{}' (type: {})",
        config_path.display(),
        project_type
    );

    Some(ProjectContext {
        root,
        config_path,
        project_type,
    })
}

/// Returns the first `<dir>/<filename>` that exists, walking from `start` up to the root.
pub fn find_upward(start: &Path, filename: &str) -> Option<PathBuf> {
    // Canonicalize so that relative starts like "." still have ancestors to walk.
    let start = dunce::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());

    start.ancestors().find_map(|dir| {
        let candidate = dir.join(filename);
        log::trace!("Probing {}", candidate.display());
        candidate.is_file().then_some(candidate)
    })
}

/// Classifies a project root by its marker files.
/// No markers gives `Unknown`, one family gives that type, several give `Mixed`.
pub fn detect_project_type(root: &Path) -> ProjectType {
    let has_any = |markers: &[&str]| markers.iter().any(|m| root.join(m).exists());

    let detected: Vec<ProjectType> = [
        (DOCKER_MARKERS, ProjectType::Docker),
        (NODE_MARKERS, ProjectType::Node),
        (PYTHON_MARKERS, ProjectType::Python),
    ]
    .into_iter()
    .filter(|(markers, _)| has_any(markers))
    .map(|(_, kind)| kind)
    .collect();

    match detected.as_slice() {
        [] => ProjectType::Unknown,
        [single] => *single,
        _ => ProjectType::Mixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discover_walks_up_to_nearest_config() {
        let temp = tempfile::tempdir().unwrap();
        let root = dunce::canonicalize(temp.path()).unwrap();
        fs::write(root.join(CONFIG_FILENAME), "{}").unwrap();
        let nested = root.join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();

        let context = discover(&nested).unwrap();

        assert_eq!(context.root, root);
        assert_eq!(context.config_path, root.join(CONFIG_FILENAME));
        assert_eq!(context.project_type, ProjectType::Unknown);
    }

    #[test]
    fn test_discover_prefers_the_closest_config() {
        let temp = tempfile::tempdir().unwrap();
        let outer = dunce::canonicalize(temp.path()).unwrap();
        let inner = outer.join("inner");
        fs::create_dir_all(&inner).unwrap();
        fs::write(outer.join(CONFIG_FILENAME), "{}").unwrap();
        fs::write(inner.join(CONFIG_FILENAME), "{}").unwrap();

        let context = discover(&inner).unwrap();
        assert_eq!(context.root, inner);
    }

    #[test]
    fn test_find_upward_ignores_directories_with_the_same_name() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join(CONFIG_FILENAME)).unwrap();
        let found = find_upward(temp.path(), CONFIG_FILENAME);
        // Any match must come from above the temp dir, never the directory itself.
        assert!(found.is_none_or(|p| !p.starts_with(temp.path())));
    }

    #[test]
    fn test_detect_project_type() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        assert_eq!(detect_project_type(root), ProjectType::Unknown);

        fs::write(root.join("compose.yml"), "").unwrap();
        assert_eq!(detect_project_type(root), ProjectType::Docker);

        fs::write(root.join("docker-compose.yml"), "").unwrap();
        assert_eq!(detect_project_type(root), ProjectType::Docker);

        fs::write(root.join("requirements.txt"), "").unwrap();
        assert_eq!(detect_project_type(root), ProjectType::Mixed);
    }

    #[test]
    fn test_detect_single_node_and_python() {
        let node = tempfile::tempdir().unwrap();
        fs::write(node.path().join("package.json"), "{}").unwrap();
        assert_eq!(detect_project_type(node.path()), ProjectType::Node);

        let python = tempfile::tempdir().unwrap();
        fs::write(python.path().join("pyproject.toml"), "").unwrap();
        assert_eq!(detect_project_type(python.path()), ProjectType::Python);
    }
}
