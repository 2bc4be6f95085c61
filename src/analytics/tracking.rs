use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError, Weak},
};

use crate::constants::{SCROLL_DEPTH_THRESHOLDS, VISIBILITY_THRESHOLD};

use super::{events::AnalyticsEvent, sink::AnalyticsSink};

/// Scroll-depth milestones for one page view. Each threshold fires once.
#[derive(Debug, Clone)]
pub struct ScrollDepthTracker {
    thresholds: Vec<u8>,
    reached: usize,
}

impl Default for ScrollDepthTracker {
    fn default() -> Self {
        Self::new(SCROLL_DEPTH_THRESHOLDS)
    }
}

impl ScrollDepthTracker {
    pub fn new(thresholds: &[u8]) -> Self {
        let mut thresholds = thresholds.to_vec();
        thresholds.sort_unstable();
        thresholds.dedup();

        Self {
            thresholds,
            reached: 0,
        }
    }

    /// Milestones newly crossed at `percent`, in ascending order.
    pub fn observe(&mut self, percent: f64) -> Vec<u8> {
        let mut crossed = vec![];
        while let Some(threshold) = self.thresholds.get(self.reached) {
            if percent < f64::from(*threshold) {
                break;
            }
            crossed.push(*threshold);
            self.reached += 1;
        }
        crossed
    }

    pub fn observe_into(&mut self, percent: f64, sink: &dyn AnalyticsSink) {
        for percent in self.observe(percent) {
            sink.track(AnalyticsEvent::ScrollDepth { percent });
        }
    }
}

type Callback = Arc<dyn Fn(&str) + Send + Sync>;

struct Subscriber {
    section: String,
    threshold: f64,
    visible: bool,
    callback: Callback,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscribers: HashMap<u64, Subscriber>,
}

/// Section visibility reports fan out to explicit subscriptions. A callback
/// fires each time its section goes from hidden to at least `threshold`
/// visible.
#[derive(Clone, Default)]
pub struct VisibilityTracker {
    registry: Arc<Mutex<Registry>>,
}

/// Live while held; dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .subscribers
                .remove(&self.id);
        }
    }
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, section: &str, threshold: f64, callback: F) -> Subscription
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        registry.next_id += 1;
        let id = registry.next_id;
        registry.subscribers.insert(
            id,
            Subscriber {
                section: section.to_string(),
                threshold,
                visible: false,
                callback: Arc::new(callback),
            },
        );

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Subscribes every section to a `section_viewed` event on `sink`.
    pub fn track_sections(
        &self,
        sections: &[&str],
        sink: Arc<dyn AnalyticsSink>,
    ) -> Vec<Subscription> {
        sections
            .iter()
            .map(|section| {
                let sink = sink.clone();
                self.subscribe(section, VISIBILITY_THRESHOLD, move |name| {
                    sink.track(AnalyticsEvent::SectionViewed {
                        section_name: name.to_string(),
                    })
                })
            })
            .collect()
    }

    /// Reports the visible fraction of `section`. Returns how many callbacks
    /// fired.
    pub fn report(&self, section: &str, ratio: f64) -> usize {
        let fired: Vec<Callback> = {
            let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry
                .subscribers
                .values_mut()
                .filter(|s| s.section == section)
                .filter_map(|s| {
                    let visible = ratio >= s.threshold;
                    let rising = visible && !s.visible;
                    s.visible = visible;
                    rising.then(|| s.callback.clone())
                })
                .collect()
        };

        for callback in fired.iter() {
            (callback.as_ref())(section);
        }
        fired.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .subscribers
            .len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn scroll_thresholds_fire_once_in_order() {
        let mut tracker = ScrollDepthTracker::default();
        assert_eq!(tracker.observe(10.), Vec::<u8>::new());
        assert_eq!(tracker.observe(80.), vec![25, 50, 75]);
        assert_eq!(tracker.observe(60.), Vec::<u8>::new());
        assert_eq!(tracker.observe(100.), vec![90, 100]);
        assert_eq!(tracker.observe(100.), Vec::<u8>::new());
    }

    #[test]
    fn scroll_depth_reaches_sink() {
        let sink = MemorySink::new();
        let mut tracker = ScrollDepthTracker::new(&[50, 25]);
        tracker.observe_into(30., &sink);
        assert_eq!(sink.events(), vec![AnalyticsEvent::ScrollDepth { percent: 25 }]);
    }

    #[test]
    fn fires_on_rising_edge_only() {
        let tracker = VisibilityTracker::new();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let _subscription = tracker.subscribe("about", 0.1, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(tracker.report("about", 0.05), 0);
        assert_eq!(tracker.report("about", 0.5), 1);
        assert_eq!(tracker.report("about", 0.9), 0);
        assert_eq!(tracker.report("faq", 1.0), 0);
        tracker.report("about", 0.0);
        tracker.report("about", 0.2);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let tracker = VisibilityTracker::new();
        let subscription = tracker.subscribe("hero", 0.1, |_| {});
        assert_eq!(tracker.subscriber_count(), 1);

        drop(subscription);
        assert_eq!(tracker.subscriber_count(), 0);
        assert_eq!(tracker.report("hero", 1.0), 0);
    }

    #[test]
    fn sections_report_to_sink() {
        let tracker = VisibilityTracker::new();
        let sink = Arc::new(MemorySink::new());
        let subscriptions = tracker.track_sections(&["hero", "faq"], sink.clone());

        tracker.report("faq", 0.3);
        assert_eq!(
            sink.events(),
            vec![AnalyticsEvent::SectionViewed {
                section_name: String::from("faq")
            }]
        );

        drop(subscriptions);
        tracker.report("hero", 1.0);
        assert_eq!(sink.events().len(), 1);
    }
}
