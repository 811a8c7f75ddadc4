//! `tracing` layer writing [`LogEntry`] lines.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::time::Instant;

use serde::Deserialize;
use thiserror::Error;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::logging::{LogEntry, LogFormat, LogLevel};
use crate::session::SessionId;

/// Logging settings, usually read from the `[log]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, serde::Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Level used when `RUST_LOG` is not set.
    pub level: LogLevel,
    pub format: LogFormat,
}

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("failed to install log subscriber: {0}")]
    Init(String),
}

/// Layer turning every event into one structured line.
pub struct StructuredLayer<W> {
    session_id: SessionId,
    format: LogFormat,
    make_writer: W,
    start_time: Instant,
}

impl<W> StructuredLayer<W>
where
    W: for<'a> MakeWriter<'a> + 'static,
{
    pub fn new(session_id: SessionId, format: LogFormat, make_writer: W) -> Self {
        Self {
            session_id,
            format,
            make_writer,
            start_time: Instant::now(),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }
}

impl<S, W> Layer<S> for StructuredLayer<W>
where
    S: Subscriber,
    W: for<'a> MakeWriter<'a> + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldCollector::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let entry = LogEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            level: LogLevel::from(metadata.level()),
            message: visitor.message.unwrap_or_default(),
            session_id: self.session_id.to_string(),
            target: metadata.target().to_string(),
            fields: visitor.fields,
            elapsed_us: Some(self.start_time.elapsed().as_micros() as u64),
        };

        let mut writer = self.make_writer.make_writer();
        // Nowhere left to report a failed log write.
        let _ = writeln!(writer, "{}", entry.render(self.format));
    }
}

#[derive(Default)]
struct FieldCollector {
    message: Option<String>,
    fields: BTreeMap<String, serde_json::Value>,
}

impl FieldCollector {
    fn insert(&mut self, field: &Field, value: serde_json::Value) {
        if field.name() == "message" {
            self.message = Some(match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            });
        } else {
            self.fields.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, serde_json::json!(format!("{:?}", value)));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, serde_json::json!(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, serde_json::json!(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, serde_json::json!(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, serde_json::json!(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, serde_json::json!(value));
    }
}

/// Install the structured layer on stderr as the global subscriber.
///
/// `RUST_LOG` wins over `config.level` when set.
pub fn init(config: LogConfig) -> Result<SessionId, ObservabilityError> {
    let session_id = SessionId::generate();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_directive()));
    let layer = StructuredLayer::new(session_id.clone(), config.format, std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| ObservabilityError::Init(e.to_string()))?;

    Ok(session_id)
}
