//! Path resolution for the taskdesk data directory.
//!
//! Provides XDG-compliant path resolution for the default database
//! location. The `--db` flag on the CLI overrides all of this.

use std::env;
use std::path::PathBuf;

/// Get the XDG-compliant data directory for taskdesk.
///
/// # Returns
/// `$XDG_DATA_HOME/taskdesk`, falling back to `~/.local/share/taskdesk`.
///
/// # Panics
/// Panics if neither XDG_DATA_HOME nor HOME is set.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".local/share")
        });

    data_home.join("taskdesk")
}

/// Get the default database file path (`data_dir/tasks.db`).
pub fn get_db_path() -> PathBuf {
    get_data_dir().join("tasks.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_ends_with_taskdesk() {
        // Just verify the suffix (env vars are unreliable in parallel tests)
        let path = get_data_dir();
        assert!(path.ends_with("taskdesk"));
    }

    #[test]
    fn test_db_path_is_inside_data_dir() {
        let path = get_db_path();
        assert!(path.starts_with(get_data_dir()));
        assert_eq!(path.file_name().unwrap(), "tasks.db");
    }
}
