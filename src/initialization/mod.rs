//! Application initialization.
//!
//! Logger setup and loading of `.env` files. All functions return typed errors
//! or are infallible.

mod logger;

// Re-export public API
pub use logger::init_logger_with;

/// Loads environment variables from a `.env` file, if present.
///
/// Tries the current directory first, then the directory of the executable.
/// Missing files are not an error.
pub fn load_dotenv() {
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }
}
