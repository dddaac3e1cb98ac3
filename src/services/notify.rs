use std::time::{Duration, Instant};

/// Where transient user-facing messages end up (a toast element, a status
/// line, a test recorder).
pub trait NotificationSurface {
    fn show(&mut self, message: &str);
    fn hide(&mut self);
}

/// Owns the pending hide deadline for the surface. At most one notification
/// is visible; a new one replaces the message and the deadline (latest
/// wins).
pub struct Notifier {
    surface: Box<dyn NotificationSurface>,
    duration: Duration,
    hide_at: Option<Instant>,
}

impl Notifier {
    pub fn new(surface: Box<dyn NotificationSurface>, duration: Duration) -> Self {
        Self {
            surface,
            duration,
            hide_at: None,
        }
    }

    pub fn notify(&mut self, message: &str) {
        self.notify_at(message, Instant::now());
    }

    pub fn notify_at(&mut self, message: &str, now: Instant) {
        self.surface.show(message);
        self.hide_at = Some(now + self.duration);
    }

    /// Hides the surface once the pending deadline has passed. Call from the
    /// embedding event loop.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        if let Some(hide_at) = self.hide_at {
            if now >= hide_at {
                self.surface.hide();
                self.hide_at = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecordingSurface {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl NotificationSurface for RecordingSurface {
        fn show(&mut self, message: &str) {
            self.events.lock().unwrap().push(format!("show {message}"));
        }

        fn hide(&mut self) {
            self.events.lock().unwrap().push("hide".to_string());
        }
    }

    fn notifier() -> (Notifier, Arc<Mutex<Vec<String>>>) {
        let events = Arc::new(Mutex::new(vec![]));
        let surface = RecordingSurface {
            events: Arc::clone(&events),
        };
        (
            Notifier::new(Box::new(surface), Duration::from_millis(4500)),
            events,
        )
    }

    #[test]
    fn test_notify_shows_message() {
        let (mut notifier, events) = notifier();
        notifier.notify_at("enregistré", Instant::now());
        assert_eq!(*events.lock().unwrap(), vec!["show enregistré"]);
    }

    #[test]
    fn test_tick_before_deadline_keeps_message() {
        let (mut notifier, events) = notifier();
        let t0 = Instant::now();
        notifier.notify_at("un", t0);
        notifier.tick_at(t0 + Duration::from_millis(4000));
        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_tick_after_deadline_hides_once() {
        let (mut notifier, events) = notifier();
        let t0 = Instant::now();
        notifier.notify_at("un", t0);
        notifier.tick_at(t0 + Duration::from_millis(5000));
        notifier.tick_at(t0 + Duration::from_millis(6000));
        assert_eq!(*events.lock().unwrap(), vec!["show un", "hide"]);
    }

    #[test]
    fn test_new_notification_replaces_pending_deadline() {
        let (mut notifier, events) = notifier();
        let t0 = Instant::now();
        notifier.notify_at("un", t0);
        // second message lands just before the first would hide
        notifier.notify_at("deux", t0 + Duration::from_millis(4000));

        // first deadline has passed, but it was replaced
        notifier.tick_at(t0 + Duration::from_millis(5000));
        assert_eq!(*events.lock().unwrap(), vec!["show un", "show deux"]);

        notifier.tick_at(t0 + Duration::from_millis(9000));
        assert_eq!(
            *events.lock().unwrap(),
            vec!["show un", "show deux", "hide"]
        );
    }
}
