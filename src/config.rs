use crate::feedback::store::SqliteStore;
use crate::feedback::FeedbackError;
use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Feedback server settings, from flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "feedback-server", version, about = "Feedback collection service for the EM lab")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "FEEDBACK_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// SQLite database file to persist feedback in; memory only when omitted
    #[arg(long, env = "FEEDBACK_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Origin allowed to call the API from a browser; any origin when omitted
    #[arg(long, env = "FEEDBACK_ALLOW_ORIGIN")]
    pub allow_origin: Option<String>,
}

impl ServerConfig {
    pub async fn open_store(&self) -> Result<SqliteStore, FeedbackError> {
        match &self.data_file {
            Some(path) => SqliteStore::open(path).await,
            None => SqliteStore::in_memory().await,
        }
    }

    /// Parsed CORS origin. `Ok(None)` means any origin.
    pub fn allow_origin_header(&self) -> Result<Option<HeaderValue>, InvalidHeaderValue> {
        self.allow_origin
            .as_deref()
            .map(HeaderValue::from_str)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_defaults() {
        let config = ServerConfig::try_parse_from(["feedback-server"]).unwrap();
        assert_eq!(config.bind, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert!(config.data_file.is_none());
        assert_eq!(config.allow_origin_header().unwrap(), None);
        let store = config.open_store().await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[test]
    fn test_flags() {
        let config = ServerConfig::try_parse_from([
            "feedback-server",
            "--bind",
            "0.0.0.0:9000",
            "--allow-origin",
            "https://lab.example.org",
        ])
        .unwrap();
        assert_eq!(config.bind.port(), 9000);
        assert_eq!(
            config.allow_origin_header().unwrap().unwrap(),
            "https://lab.example.org"
        );
    }

    #[test]
    fn test_bad_bind_address_is_rejected() {
        assert!(ServerConfig::try_parse_from(["feedback-server", "--bind", "nowhere"]).is_err());
    }

    #[test]
    fn test_bad_origin_is_rejected() {
        let config =
            ServerConfig::try_parse_from(["feedback-server", "--allow-origin", "bad\norigin"])
                .unwrap();
        assert!(config.allow_origin_header().is_err());
    }
}
