// src/config/helpers.rs
// Helper functions for reading configuration values from an env-style lookup

use std::str::FromStr;
use tracing::warn;

/// Source of configuration values, usually `std::env::var`
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Lookup backed by the process environment
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Read a value, filtering out empty or whitespace-only strings
pub fn read_key(lookup: Lookup<'_>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn env_or(lookup: Lookup<'_>, key: &str, default: &str) -> String {
    read_key(lookup, key).unwrap_or_else(|| default.to_string())
}

/// Parse a value, falling back to `default` when unset or unparseable
pub fn env_parsed<T>(lookup: Lookup<'_>, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match read_key(lookup, key) {
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(e) => {
                warn!(key, value = %raw, error = %e, "Unparseable config value, using default");
                default
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_read_key_filters_blank() {
        let lookup = lookup_from(&[("A", "  "), ("B", " value ")]);
        assert_eq!(read_key(&lookup, "A"), None);
        assert_eq!(read_key(&lookup, "B"), Some("value".to_string()));
        assert_eq!(read_key(&lookup, "C"), None);
    }

    /// Writer that appends formatted log output to a shared buffer
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_env_parsed_warns_on_unparseable_value() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let lookup = lookup_from(&[("NG_PORT", "abc")]);
        let port = tracing::subscriber::with_default(subscriber, || {
            env_parsed(&lookup, "NG_PORT", 5000u16)
        });

        assert_eq!(port, 5000);
        let output = logs.text();
        assert!(output.contains("Unparseable config value, using default"));
        assert!(output.contains("NG_PORT"));
        assert!(output.contains("abc"));
    }

    #[test]
    fn test_env_parsed_falls_back() {
        let lookup = lookup_from(&[("PORT", "not-a-number"), ("GOOD", "8080")]);
        assert_eq!(env_parsed(&lookup, "PORT", 5000u16), 5000);
        assert_eq!(env_parsed(&lookup, "GOOD", 5000u16), 8080);
        assert_eq!(env_parsed(&lookup, "MISSING", 1.5f32), 1.5);
    }
}
