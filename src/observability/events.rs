//! Observable events
//!
//! Every log line the service emits is named by one of these.

use std::fmt;

/// Observable events in the dish service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Server boot begins
    ServerStarting,
    /// Listener bound, ready to serve
    ServerListening,
    /// Graceful shutdown complete
    ServerShutdown,
    /// Server failed to start or crashed
    ServerFailed,

    // Configuration
    /// Configuration resolved
    ConfigLoaded,

    // Dish operations
    /// Dish created
    DishCreated,
    /// Dish fully replaced
    DishReplaced,
    /// Dish partially updated
    DishUpdated,
    /// Dish deleted
    DishDeleted,
    /// A dish operation was refused
    DishRejected,

    // Transport
    /// Request handled
    HttpRequest,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ServerStarting => "SERVER_STARTING",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ServerShutdown => "SERVER_SHUTDOWN",
            Event::ServerFailed => "SERVER_FAILED",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DishCreated => "DISH_CREATED",
            Event::DishReplaced => "DISH_REPLACED",
            Event::DishUpdated => "DISH_UPDATED",
            Event::DishDeleted => "DISH_DELETED",
            Event::DishRejected => "DISH_REJECTED",
            Event::HttpRequest => "HTTP_REQUEST",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ServerFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
