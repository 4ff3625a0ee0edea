use fs2::FileExt;
use std::fs::File;
use std::path::PathBuf;

const LOCK_FILE: &str = "ipwatch.lock";

fn lock_path() -> PathBuf {
    let mut lock_path = dirs::data_local_dir().unwrap_or(std::env::temp_dir());
    lock_path.push(LOCK_FILE);
    lock_path
}

/// Holds the single-instance lock for as long as the returned file lives.
pub fn acquire_app_lock() -> Result<File, String> {
    acquire_lock_at(lock_path())
}

fn acquire_lock_at(path: PathBuf) -> Result<File, String> {
    let file = File::create(&path).map_err(|e| format!("Failed to create lock file: {e}"))?;

    // Exclusive lock; fails if another instance holds it
    file.try_lock_exclusive()
        .map_err(|_| "Another status window is already running".to_string())?;

    Ok(file)
}
