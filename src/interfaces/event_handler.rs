// ============================================================================
// Event Handler Interface
// Defines the contract for handling picker session events
// ============================================================================

use crate::domain::{PickerParams, SessionId};
use crate::engine::CarryOutcome;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by a picker session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PickerEvent {
    /// Session created and wheels seeded with the default
    SessionOpened {
        session_id: SessionId,
        min_value: Decimal,
        max_value: Decimal,
        default_value: Decimal,
        timestamp: DateTime<Utc>,
    },

    /// A wheel changed and propagation completed
    SlotChanged {
        session_id: SessionId,
        position: usize,
        old_value: u8,
        new_value: u8,
        timestamp: DateTime<Utc>,
    },

    /// A 9 -> low wrap pushed a carry into earlier wheels
    CarryPropagated {
        session_id: SessionId,
        from_position: usize,
        outcome: CarryOutcome,
        timestamp: DateTime<Utc>,
    },

    /// Wheels put back on the default
    Reset {
        session_id: SessionId,
        timestamp: DateTime<Utc>,
    },

    /// Confirm action with the picked value
    Confirmed {
        session_id: SessionId,
        value: f32,
        params: Option<PickerParams>,
        timestamp: DateTime<Utc>,
    },

    /// Neutral action with the current value; the session stays open
    Neutral {
        session_id: SessionId,
        value: f32,
        params: Option<PickerParams>,
        timestamp: DateTime<Utc>,
    },

    /// Cancel action
    Cancelled {
        session_id: SessionId,
        params: Option<PickerParams>,
        timestamp: DateTime<Utc>,
    },

    /// Session closed, whatever the action
    Dismissed {
        session_id: SessionId,
        params: Option<PickerParams>,
        timestamp: DateTime<Utc>,
    },
}

impl PickerEvent {
    /// Host payload of an action event
    pub fn params(&self) -> Option<&PickerParams> {
        match self {
            PickerEvent::Confirmed { params, .. }
            | PickerEvent::Neutral { params, .. }
            | PickerEvent::Cancelled { params, .. }
            | PickerEvent::Dismissed { params, .. } => params.as_ref(),
            _ => None,
        }
    }

    pub fn session_id(&self) -> SessionId {
        match self {
            PickerEvent::SessionOpened { session_id, .. }
            | PickerEvent::SlotChanged { session_id, .. }
            | PickerEvent::CarryPropagated { session_id, .. }
            | PickerEvent::Reset { session_id, .. }
            | PickerEvent::Confirmed { session_id, .. }
            | PickerEvent::Neutral { session_id, .. }
            | PickerEvent::Cancelled { session_id, .. }
            | PickerEvent::Dismissed { session_id, .. } => *session_id,
        }
    }
}

/// Event handler trait for processing picker events
/// Implementations can forward results to the host, log, record, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a picker event
    fn on_event(&self, event: PickerEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<PickerEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: PickerEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: PickerEvent) {
        tracing::debug!("Picker event: {:?}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(PickerEvent::Reset {
            session_id: SessionId::new(),
            timestamp: Utc::now(),
        });
        // Should not panic
    }

    #[test]
    fn test_event_session_id() {
        let session_id = SessionId::new();
        let event = PickerEvent::Confirmed {
            session_id,
            value: 9.5,
            params: None,
            timestamp: Utc::now(),
        };
        assert_eq!(event.session_id(), session_id);
        assert_eq!(event.params(), None);
    }
}
