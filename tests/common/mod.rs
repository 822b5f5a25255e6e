//! Stub providers and log capture shared by integration tests.

use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use appcore::config::ConfigProvider;
use appcore::observability::{Logger, LoggingProvider};
use thiserror::Error;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("stub lookup failed for '{0}'")]
pub struct StubError(pub String);

/// Config provider that answers every key with the same result and
/// remembers which keys were asked for.
pub struct StubConfig {
    answer: Result<String, StubError>,
    pub keys: RefCell<Vec<String>>,
}

impl StubConfig {
    pub fn returning(value: &str) -> Self {
        Self {
            answer: Ok(value.to_string()),
            keys: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(error: StubError) -> Self {
        Self {
            answer: Err(error),
            keys: RefCell::new(Vec::new()),
        }
    }
}

impl ConfigProvider for StubConfig {
    type Value = String;
    type Error = StubError;

    fn get_value(&self, key: &str) -> Result<String, StubError> {
        self.keys.borrow_mut().push(key.to_string());
        self.answer.clone()
    }
}

pub type Records = Rc<RefCell<Vec<(Level, String)>>>;

/// Logging provider that remembers requested names and emitted messages.
#[derive(Default)]
pub struct RecordingLogs {
    pub names: RefCell<Vec<String>>,
    pub records: Records,
}

pub struct RecordingLogger {
    records: Records,
}

impl Logger for RecordingLogger {
    fn log(&self, level: Level, message: &str) {
        self.records.borrow_mut().push((level, message.to_string()));
    }
}

impl LoggingProvider for RecordingLogs {
    type Logger = RecordingLogger;

    fn get_logger(&self, name: &str) -> RecordingLogger {
        self.names.borrow_mut().push(name.to_string());
        RecordingLogger {
            records: Rc::clone(&self.records),
        }
    }
}

/// Captured tracing event: level, `logger` field, message.
pub type CapturedEvent = (Level, String, String);

/// Layer that stores every event it sees.
#[derive(Clone, Default)]
pub struct CaptureLayer(pub Arc<Mutex<Vec<CapturedEvent>>>);

impl CaptureLayer {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.0.lock().unwrap().clone()
    }
}

#[derive(Default)]
struct Fields {
    logger: String,
    message: String,
}

impl Visit for Fields {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "logger" {
            self.logger = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::default();
        event.record(&mut fields);
        self.0
            .lock()
            .unwrap()
            .push((*event.metadata().level(), fields.logger, fields.message));
    }
}
