//! JSON log lines: one JSON object per line (ndjson) for audit of each comparison.

use crate::config::{LogConfig, MetricConfig};
use crate::error::Result;
use crate::metric::DistanceScore;
use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize)]
pub struct ScoreLogEvent<'a> {
    pub ts: String,
    pub level: &'a str,
    pub message: &'a str,
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> ScoreLogEvent<'a> {
    /// Record the outcome of one `distance` call
    pub fn from_result(length: usize, result: &Result<DistanceScore>) -> Self {
        let ts = Utc::now().to_rfc3339();
        match result {
            Ok(score) => Self {
                ts,
                level: "info",
                message: "distance computed",
                length,
                score: Some(score.value()),
                error: None,
            },
            Err(e) => Self {
                ts,
                level: "warn",
                message: "distance rejected",
                length,
                score: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Installs tracing subscribers for hosts embedding the engine
pub struct StructuredLogger;

impl StructuredLogger {
    /// Install global subscriber from the `log` section of a loaded config
    pub fn from_config(config: &MetricConfig) -> bool {
        Self::init(&config.log)
    }

    /// Install global subscriber: JSON lines (or plain text) to stdout, level from RUST_LOG
    /// or `config.level`. Returns false if a global subscriber was already set.
    pub fn init(config: &LogConfig) -> bool {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
        let installed = if config.json {
            let fmt = tracing_subscriber::fmt::layer()
                .json()
                .with_span_events(FmtSpan::NONE)
                .with_writer(io::stdout);
            tracing_subscriber::registry().with(filter).with(fmt).try_init()
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(io::stdout))
                .try_init()
        };
        installed.is_ok()
    }

    /// Emit a single structured log line without going through tracing
    pub fn emit_json(event: &impl Serialize, w: &mut impl Write) -> io::Result<()> {
        let line = serde_json::to_string(event).map_err(io::Error::other)?;
        writeln!(w, "{}", line)
    }
}
