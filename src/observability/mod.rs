//! Observability for the dish service
//!
//! Structured JSON logging of typed events.
//!
//! ```ignore
//! use dish_api::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::DishCreated, &[("id", "4")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log an event with fields, at FATAL for fatal events and INFO otherwise
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // Verifies no panic
        log_event(Event::ServerStarting);
        log_event_with_fields(Event::ConfigLoaded, &[("port", "9500")]);
    }
}
