use std::path::Path;

/// Load environment variables from .env files
///
/// Precedence (later overrides earlier):
/// 1. .env (base defaults)
/// 2. .env.local (local overrides, not committed)
/// 3. Actual system environment variables (highest priority)
///
/// Returns the files that were found and loaded.
pub fn load_dotenv(project_root: &Path) -> Vec<std::path::PathBuf> {
    let mut loaded = Vec::new();

    // dotenvy never overwrites existing vars, so the most specific file goes first
    for name in [".env.local", ".env"] {
        let path = project_root.join(name);
        if dotenvy::from_path(&path).is_ok() {
            tracing::debug!(path = %path.display(), "loaded env file");
            loaded.push(path);
        }
    }

    loaded
}

/// Get an environment variable with a default value
///
/// Unset or unparsable values fall back to the default.
///
/// # Example
/// ```
/// use wireup::config::env;
///
/// let prefix = env("WIREUP_CONTRACT_PREFIX", "I".to_string());
/// ```
pub fn env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env_optional(key).unwrap_or(default)
}

/// Get an optional environment variable
///
/// # Example
/// ```
/// use wireup::config::env_optional;
///
/// let policy: Option<String> = env_optional("WIREUP_DUPLICATION");
/// ```
pub fn env_optional<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
