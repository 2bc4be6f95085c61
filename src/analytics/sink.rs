use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, PoisonError,
};

use super::events::AnalyticsEvent;

/// Destination for analytics events. Tracking is fire-and-forget: a sink
/// never reports failure back to the caller.
pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: AnalyticsEvent);
}

impl<S: AnalyticsSink + ?Sized> AnalyticsSink for Arc<S> {
    fn track(&self, event: AnalyticsEvent) {
        (**self).track(event)
    }
}

/// Writes each event as one structured log line on the `analytics` target.
pub struct LogSink {
    measurement_id: Option<String>,
}

impl LogSink {
    pub fn new(measurement_id: Option<String>) -> Self {
        Self { measurement_id }
    }
}

impl AnalyticsSink for LogSink {
    fn track(&self, event: AnalyticsEvent) {
        let params = serde_json::Value::Object(event.params());
        log::info!(
            target: "analytics",
            "{} {} {}",
            self.measurement_id.as_deref().unwrap_or("-"),
            event.name(),
            params
        );
    }
}

/// Drops every event until consent has been granted.
pub struct ConsentGate<S> {
    inner: S,
    consent: AtomicBool,
}

impl<S: AnalyticsSink> ConsentGate<S> {
    pub fn new(inner: S, granted: bool) -> Self {
        Self {
            inner,
            consent: AtomicBool::new(granted),
        }
    }

    pub fn grant(&self) {
        self.consent.store(true, Ordering::Release);
    }

    pub fn revoke(&self) {
        self.consent.store(false, Ordering::Release);
    }

    pub fn is_granted(&self) -> bool {
        self.consent.load(Ordering::Acquire)
    }
}

impl<S: AnalyticsSink> AnalyticsSink for ConsentGate<S> {
    fn track(&self, event: AnalyticsEvent) {
        if !self.is_granted() {
            log::trace!("> Dropped {} without consent", event.name());
            return;
        }
        self.inner.track(event);
    }
}

/// Keeps events in memory, in arrival order.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn take(&self) -> Vec<AnalyticsEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl AnalyticsSink for MemorySink {
    fn track(&self, event: AnalyticsEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
