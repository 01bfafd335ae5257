// sharemarks platform paths for Linux
// Data: ~/.local/share/sharemarks

use std::env;
use std::path::PathBuf;

/// Returns the data directory for sharemarks on Linux.
/// Uses `$XDG_DATA_HOME/sharemarks` if set, otherwise `~/.local/share/sharemarks`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("sharemarks")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("sharemarks")
    }
}
