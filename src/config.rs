use std::path::PathBuf;

/// Default library file used when neither a flag nor `RESUME_LIBRARY` names one.
pub const DEFAULT_LIBRARY: &str = "resumes.jsonl";

const LOG_TARGETS: [&str; 2] = ["resumekit", "resume"];

/// Settings resolved from the environment (and a `.env` file when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub library_path: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            library_path: lookup("RESUME_LIBRARY")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LIBRARY)),
            rust_log: lookup("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "info".to_string()),
        }
    }

    /// Tracing filter directive. A bare level applies to this crate's targets;
    /// anything with `=` or `,` is passed through as a full directive.
    pub fn log_filter(&self) -> String {
        let level = self.rust_log.trim();
        if level.contains(['=', ',']) {
            return level.to_string();
        }
        LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let cfg = Config::from_lookup(|_| None);
        assert_eq!(cfg.library_path, PathBuf::from("resumes.jsonl"));
        assert_eq!(cfg.rust_log, "info");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("RESUME_LIBRARY", "/tmp/lib.jsonl"), ("RUST_LOG", "debug")]);
        let cfg = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.library_path, PathBuf::from("/tmp/lib.jsonl"));
        assert_eq!(cfg.rust_log, "debug");
    }

    #[test]
    fn test_blank_library_falls_back() {
        let cfg = Config::from_lookup(|k| (k == "RESUME_LIBRARY").then(|| "  ".to_string()));
        assert_eq!(cfg.library_path, PathBuf::from(DEFAULT_LIBRARY));
    }

    #[test]
    fn test_log_filter_scopes_bare_level() {
        let cfg = Config::from_lookup(|k| (k == "RUST_LOG").then(|| "debug".to_string()));
        assert_eq!(cfg.log_filter(), "resumekit=debug,resume=debug");
    }

    #[test]
    fn test_log_filter_passes_directives_through() {
        let cfg = Config::from_lookup(|k| (k == "RUST_LOG").then(|| "warn,resumekit=trace".to_string()));
        assert_eq!(cfg.log_filter(), "warn,resumekit=trace");
    }
}
