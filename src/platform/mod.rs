// sharemarks platform abstraction
// Provides platform-specific data paths for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the directory where the bookmark database lives.
///
/// `SHAREMARKS_DATA_DIR` overrides everything when set. Otherwise:
/// - **Linux**: `~/.local/share/sharemarks` (or `$XDG_DATA_HOME/sharemarks`)
/// - **macOS**: `~/Library/Application Support/Sharemarks`
/// - **Windows**: `%APPDATA%/Sharemarks`
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("SHAREMARKS_DATA_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}
