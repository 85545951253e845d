//! Locating `realty.toml`.

use std::path::{Path, PathBuf};

/// Find the config file for the current directory.
///
/// An absolute `name` is used as is. A relative one is looked up in the
/// working directory and then in each of its ancestors, so `realty build`
/// works from anywhere inside a site.
pub fn find_config_file(name: &Path) -> Option<PathBuf> {
    if name.is_absolute() {
        return name.is_file().then(|| name.to_path_buf());
    }
    let cwd = std::env::current_dir().ok()?;
    find_upward(&cwd, name)
}

/// Nearest `dir/name` from `start` up to the filesystem root.
fn find_upward(start: &Path, name: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_upward_from_nested_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("assets/images");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("realty.toml"), "").unwrap();

        assert_eq!(
            find_upward(&nested, Path::new("realty.toml")),
            Some(dir.path().join("realty.toml"))
        );
    }

    #[test]
    fn test_nearest_config_wins() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("realty.toml"), "").unwrap();
        fs::write(nested.join("realty.toml"), "").unwrap();

        assert_eq!(
            find_upward(&nested, Path::new("realty.toml")),
            Some(nested.join("realty.toml"))
        );
    }

    #[test]
    fn test_directory_is_not_a_config() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("realty.toml")).unwrap();
        assert_eq!(find_upward(dir.path(), Path::new("realty.toml")), None);
    }

    #[test]
    fn test_absolute_path() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("custom.toml");
        assert_eq!(find_config_file(&config), None);
        fs::write(&config, "").unwrap();
        assert_eq!(find_config_file(&config), Some(config));
    }
}
