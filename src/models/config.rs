use anyhow::{bail, Result};
use std::str::FromStr;

/// Text encoding requested from the trivia API via the `encode` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseEncoding {
    /// RFC 3986 percent-encoding
    Url3986,
    /// HTML entities (the API's default)
    Html,
}

impl ResponseEncoding {
    /// Value of the `encode` query parameter, if any
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            Self::Url3986 => Some("url3986"),
            Self::Html => None,
        }
    }

}

impl FromStr for ResponseEncoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "url3986" => Ok(Self::Url3986),
            "html" | "default" => Ok(Self::Html),
            _ => Err(format!("Unknown response encoding: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub question_count: u32,
    pub encoding: ResponseEncoding,
    pub http_timeout_secs: u64,
    pub user_agent: String,
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "https://opentdb.com/api.php".to_string(),
            question_count: 10,
            encoding: ResponseEncoding::Url3986,
            http_timeout_secs: 10,
            user_agent: "trivia-quiz (https://github.com/example)".to_string(),
            log_file: "trivia-quiz.log".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Log file path from the environment
    ///
    /// Resolved on its own so logging can start before the rest of the
    /// config is validated.
    pub fn log_file_from_env() -> String {
        Self::log_file_from_lookup(|key| std::env::var(key).ok())
    }

    fn log_file_from_lookup<F>(lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("TRIVIA_LOG_FILE").unwrap_or(Self::default().log_file)
    }

    /// Build the config from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        // OpenTDB rejects requests for more than 50 questions
        const MAX_QUESTION_COUNT: u32 = 50;

        let api_url = lookup("TRIVIA_API_URL").unwrap_or(defaults.api_url);

        let requested_count = lookup("TRIVIA_QUESTION_COUNT")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(defaults.question_count);

        let question_count = if requested_count > MAX_QUESTION_COUNT {
            tracing::warn!(
                "TRIVIA_QUESTION_COUNT is set to {}, which exceeds the API maximum of {}. Capping at {}.",
                requested_count,
                MAX_QUESTION_COUNT,
                MAX_QUESTION_COUNT
            );
            MAX_QUESTION_COUNT
        } else {
            requested_count.max(1)
        };

        let encoding = match lookup("TRIVIA_ENCODING") {
            Some(raw) => match raw.parse::<ResponseEncoding>() {
                Ok(encoding) => encoding,
                Err(_) => bail!("TRIVIA_ENCODING must be 'url3986' or 'html' (got '{}')", raw),
            },
            None => defaults.encoding,
        };

        let http_timeout_secs = lookup("TRIVIA_HTTP_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(defaults.http_timeout_secs);

        let user_agent = lookup("TRIVIA_USER_AGENT").unwrap_or(defaults.user_agent);
        let log_file = Self::log_file_from_lookup(&lookup);

        Ok(Self {
            api_url,
            question_count,
            encoding,
            http_timeout_secs,
            user_agent,
            log_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_encoding_params() {
        assert_eq!(ResponseEncoding::Url3986.as_param(), Some("url3986"));
        assert_eq!(ResponseEncoding::Html.as_param(), None);
        assert_eq!("html".parse::<ResponseEncoding>(), Ok(ResponseEncoding::Html));
        assert_eq!("url3986".parse::<ResponseEncoding>(), Ok(ResponseEncoding::Url3986));
        assert!("base64".parse::<ResponseEncoding>().is_err());
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.question_count, 10);
        assert_eq!(cfg.encoding, ResponseEncoding::Url3986);
        assert!(cfg.api_url.starts_with("https://opentdb.com"));
    }

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        let defaults = AppConfig::default();
        assert_eq!(cfg.api_url, defaults.api_url);
        assert_eq!(cfg.question_count, defaults.question_count);
        assert_eq!(cfg.encoding, defaults.encoding);
        assert_eq!(cfg.http_timeout_secs, defaults.http_timeout_secs);
        assert_eq!(cfg.log_file, defaults.log_file);
    }

    #[test]
    fn test_question_count_is_clamped() {
        for (raw, expected) in [("0", 1), ("1", 1), ("25", 25), ("50", 50), ("51", 50), ("99", 50)] {
            let cfg = AppConfig::from_lookup(lookup_from(&[("TRIVIA_QUESTION_COUNT", raw)])).unwrap();
            assert_eq!(cfg.question_count, expected, "TRIVIA_QUESTION_COUNT={}", raw);
        }
    }

    #[test]
    fn test_unparseable_numbers_fall_back_to_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("TRIVIA_QUESTION_COUNT", "lots"),
            ("TRIVIA_HTTP_TIMEOUT_SECS", "-3"),
        ]))
        .unwrap();
        assert_eq!(cfg.question_count, 10);
        assert_eq!(cfg.http_timeout_secs, 10);
    }

    #[test]
    fn test_invalid_encoding_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("TRIVIA_ENCODING", "base64")])).unwrap_err();
        assert!(err.to_string().contains("base64"));

        let cfg = AppConfig::from_lookup(lookup_from(&[("TRIVIA_ENCODING", "html")])).unwrap();
        assert_eq!(cfg.encoding, ResponseEncoding::Html);
    }

    #[test]
    fn test_overrides_are_read() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("TRIVIA_API_URL", "http://localhost:8080/api.php"),
            ("TRIVIA_HTTP_TIMEOUT_SECS", "3"),
            ("TRIVIA_USER_AGENT", "quiz-test"),
            ("TRIVIA_LOG_FILE", "/tmp/quiz.log"),
        ]))
        .unwrap();
        assert_eq!(cfg.api_url, "http://localhost:8080/api.php");
        assert_eq!(cfg.http_timeout_secs, 3);
        assert_eq!(cfg.user_agent, "quiz-test");
        assert_eq!(cfg.log_file, "/tmp/quiz.log");
    }

    #[test]
    fn test_log_file_resolves_even_when_config_is_invalid() {
        let lookup = lookup_from(&[
            ("TRIVIA_LOG_FILE", "/tmp/quiz.log"),
            ("TRIVIA_ENCODING", "base64"),
        ]);
        assert_eq!(AppConfig::log_file_from_lookup(&lookup), "/tmp/quiz.log");
        assert!(AppConfig::from_lookup(&lookup).is_err());
        assert_eq!(AppConfig::log_file_from_lookup(lookup_from(&[])), "trivia-quiz.log");
    }

    /// Collects formatted log output for assertions
    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_capping_question_count_logs_warning() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let cfg = tracing::subscriber::with_default(subscriber, || {
            AppConfig::from_lookup(lookup_from(&[("TRIVIA_QUESTION_COUNT", "99")]))
        })
        .unwrap();

        assert_eq!(cfg.question_count, 50);
        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"), "log was: {}", output);
        assert!(output.contains("Capping at 50"), "log was: {}", output);
    }
}
