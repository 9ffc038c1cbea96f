use std::{env, io, path::PathBuf};

use anyhow::Result;

const DATA_DIR_NAME: &str = "urgeshield";

/// Resolves the per-user directory where the tracker document, the credential
/// file and logs live. Created on demand.
pub fn create_application_default_path() -> Result<PathBuf> {
    let mut path = platform_data_root();
    path.push(DATA_DIR_NAME);

    match std::fs::create_dir_all(&path) {
        Ok(_) => Ok(path),
        Err(v) if v.kind() == io::ErrorKind::AlreadyExists => Ok(path),
        Err(v) => Err(v.into()),
    }
}

fn platform_data_root() -> PathBuf {
    #[cfg(windows)]
    {
        PathBuf::from(env::var("APPDATA").expect("APPDATA should be present on Windows"))
    }
    #[cfg(target_os = "macos")]
    {
        let home = env::var("HOME").expect("HOME should be present on macOS");
        let mut path = PathBuf::from(home);
        path.push("Library/Application Support");
        path
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        env::var("XDG_STATE_HOME")
            .map(PathBuf::from)
            .or_else(|_| {
                env::var("HOME").map(|home| {
                    let mut path = PathBuf::from(home);
                    path.push(".local/state");
                    path
                })
            })
            .expect("Couldn't find neither XDG_STATE_HOME nor HOME")
    }
}
