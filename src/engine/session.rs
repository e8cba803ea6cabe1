// ============================================================================
// Picker Session
// One interactive picking session: owns the wheels, reports to the host
// ============================================================================

use super::assembler::{self, render_digits};
use super::factory::create_from_config;
use super::propagation::{self, CarryOutcome, Direction, PropagationReport};
use crate::domain::{
    DigitVector, PickerConfig, PickerParams, PickerResult, PickerSnapshot, SessionId, SlotView,
};
use crate::interfaces::{sync_wheels, DigitWheel, EventHandler, PickerEvent};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;

/// A picker session with pluggable event handling.
///
/// Every operation runs synchronously to completion; the session is never
/// shared, so it takes `&mut self` for anything that moves a wheel.
pub struct PickerSession {
    /// Identity carried by every emitted event
    id: SessionId,

    /// Validated construction parameters
    config: PickerConfig,

    /// The wheels
    vector: DigitVector,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl PickerSession {
    /// Validate `config`, lay out and seed the wheels, and announce the session.
    pub fn open(config: PickerConfig, event_handler: Arc<dyn EventHandler>) -> PickerResult<Self> {
        let vector = create_from_config(&config)?;
        let session = Self {
            id: SessionId::new(),
            config,
            vector,
            event_handler,
        };

        tracing::debug!(
            session_id = %session.id,
            wheels = session.vector.len(),
            decimal_point = session.vector.decimal_point_index(),
            "picker session opened"
        );
        session.event_handler.on_event(PickerEvent::SessionOpened {
            session_id: session.id,
            min_value: session.vector.min_value(),
            max_value: session.vector.max_value(),
            default_value: session.config.effective_default(),
            timestamp: Utc::now(),
        });

        Ok(session)
    }

    // ========================================================================
    // Wheel interaction
    // ========================================================================

    /// The host's wheel at `position` now shows `new_value`.
    pub fn on_slot_changed(&mut self, position: usize, new_value: u8) -> Option<PropagationReport> {
        let report = propagation::on_slot_changed(&mut self.vector, position, new_value)?;
        self.emit_change(&report);
        Some(report)
    }

    /// Spin the wheel at `position` one step in `direction`.
    pub fn step(&mut self, position: usize, direction: Direction) -> Option<PropagationReport> {
        let report = propagation::step(&mut self.vector, position, direction)?;
        self.emit_change(&report);
        Some(report)
    }

    /// Put every wheel back on the default value.
    pub fn reset(&mut self) {
        assembler::reset(&mut self.vector);
        tracing::debug!(session_id = %self.id, "picker session reset");
        self.event_handler.on_event(PickerEvent::Reset {
            session_id: self.id,
            timestamp: Utc::now(),
        });
    }

    /// Push the current state into the host's wheels.
    pub fn sync<W: DigitWheel>(&self, wheels: &mut [W]) -> usize {
        sync_wheels(&self.vector, wheels)
    }

    // ========================================================================
    // Values
    // ========================================================================

    pub fn combined_value(&self) -> f32 {
        assembler::combined_value(&self.vector)
    }

    pub fn combined_decimal(&self) -> Decimal {
        assembler::assemble_decimal(&self.vector)
    }

    /// Get picker snapshot
    pub fn snapshot(&self) -> PickerSnapshot {
        PickerSnapshot::new(
            self.vector.iter().map(SlotView::from).collect(),
            self.combined_decimal(),
            render_digits(&self.vector),
        )
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Confirm: close the session and hand back the picked value.
    ///
    /// The dismissal is reported first, then the confirmed value.
    pub fn confirm(self) -> f32 {
        let value = self.combined_value();
        self.event_handler.on_events(vec![
            PickerEvent::Dismissed {
                session_id: self.id,
                params: self.config.params.clone(),
                timestamp: Utc::now(),
            },
            PickerEvent::Confirmed {
                session_id: self.id,
                value,
                params: self.config.params.clone(),
                timestamp: Utc::now(),
            },
        ]);
        tracing::debug!(session_id = %self.id, value, "picker session confirmed");
        value
    }

    /// Neutral: report the current value and keep the session open.
    pub fn neutral(&mut self) -> f32 {
        let value = self.combined_value();
        self.event_handler.on_event(PickerEvent::Neutral {
            session_id: self.id,
            value,
            params: self.config.params.clone(),
            timestamp: Utc::now(),
        });
        value
    }

    /// Cancel: close the session without a value.
    pub fn cancel(self) {
        self.event_handler.on_events(vec![
            PickerEvent::Cancelled {
                session_id: self.id,
                params: self.config.params.clone(),
                timestamp: Utc::now(),
            },
            PickerEvent::Dismissed {
                session_id: self.id,
                params: self.config.params.clone(),
                timestamp: Utc::now(),
            },
        ]);
        tracing::debug!(session_id = %self.id, "picker session cancelled");
    }

    /// Close the session without an action (e.g. the host window went away).
    pub fn dismiss(self) {
        self.event_handler.on_event(PickerEvent::Dismissed {
            session_id: self.id,
            params: self.config.params.clone(),
            timestamp: Utc::now(),
        });
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn title(&self) -> Option<&str> {
        self.config.title.as_deref()
    }

    pub fn params(&self) -> Option<&PickerParams> {
        self.config.params.as_ref()
    }

    pub fn vector(&self) -> &DigitVector {
        &self.vector
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn emit_change(&self, report: &PropagationReport) {
        let mut events = vec![PickerEvent::SlotChanged {
            session_id: self.id,
            position: report.change.position,
            old_value: report.change.old_value,
            new_value: report.change.new_value,
            timestamp: Utc::now(),
        }];

        if report.carry != CarryOutcome::None {
            events.push(PickerEvent::CarryPropagated {
                session_id: self.id,
                from_position: report.change.position,
                outcome: report.carry,
                timestamp: Utc::now(),
            });
        }

        self.event_handler.on_events(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingHandler {
        events: Mutex<Vec<PickerEvent>>,
    }

    impl RecordingHandler {
        fn kinds(&self) -> Vec<&'static str> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .map(|event| match event {
                    PickerEvent::SessionOpened { .. } => "opened",
                    PickerEvent::SlotChanged { .. } => "changed",
                    PickerEvent::CarryPropagated { .. } => "carry",
                    PickerEvent::Reset { .. } => "reset",
                    PickerEvent::Confirmed { .. } => "confirmed",
                    PickerEvent::Neutral { .. } => "neutral",
                    PickerEvent::Cancelled { .. } => "cancelled",
                    PickerEvent::Dismissed { .. } => "dismissed",
                })
                .collect()
        }
    }

    impl EventHandler for RecordingHandler {
        fn on_event(&self, event: PickerEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn session(config: PickerConfig) -> (PickerSession, Arc<RecordingHandler>) {
        let handler = Arc::new(RecordingHandler::default());
        let session = PickerSession::open(config, handler.clone()).unwrap();
        (session, handler)
    }

    #[test]
    fn test_open_rejects_invalid_range() {
        let config = PickerConfig::new(Decimal::from(10), Decimal::from(5));
        assert!(PickerSession::open(config, Arc::new(NoOpEventHandler)).is_err());
    }

    #[test]
    fn test_confirm_flow() {
        let config = PickerConfig::new(Decimal::ZERO, Decimal::from(999))
            .with_default(Decimal::from(129))
            .with_title("Amount");
        let (mut session, handler) = session(config);
        assert_eq!(session.title(), Some("Amount"));

        session.step(2, Direction::Up).unwrap();
        assert_eq!(session.combined_value(), 130.0);

        let value = session.confirm();
        assert_eq!(value, 130.0);
        assert_eq!(
            handler.kinds(),
            vec!["opened", "changed", "carry", "dismissed", "confirmed"]
        );
    }

    #[test]
    fn test_neutral_then_reset() {
        let config =
            PickerConfig::new(Decimal::ZERO, Decimal::from(25)).with_default(Decimal::from(10));
        let (mut session, handler) = session(config);

        session.on_slot_changed(1, 4).unwrap();
        assert_eq!(session.neutral(), 14.0);

        session.reset();
        assert_eq!(session.combined_decimal(), Decimal::from(10));

        session.cancel();
        assert_eq!(
            handler.kinds(),
            vec!["opened", "changed", "neutral", "reset", "cancelled", "dismissed"]
        );
    }

    #[test]
    fn test_action_events_carry_params() {
        let config = PickerConfig::percentage().with_param("field", "discount");
        let (mut session, handler) = session(config);
        assert_eq!(session.params().map(|p| p.len()), Some(1));

        session.neutral();
        session.confirm();

        let events = handler.events.lock().unwrap();
        let actions: Vec<_> = events
            .iter()
            .filter(|event| !matches!(event, PickerEvent::SessionOpened { .. }))
            .collect();
        assert_eq!(actions.len(), 3);
        for event in actions {
            let field = event.params().and_then(|p| p.get("field"));
            assert_eq!(field.map(String::as_str), Some("discount"));
        }
    }

    #[test]
    fn test_snapshot() {
        let config = PickerConfig::from_f32(0.0, 9.5, Some(9.0)).unwrap();
        let (session, _) = session(config);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.display, "9.0");
        assert_eq!(snapshot.value, Decimal::from(9));
        assert_eq!(snapshot.slots[1].live_max, 5);
        assert_eq!(snapshot.pinned_positions().count(), 0);
    }

    #[test]
    fn test_out_of_range_position_emits_nothing() {
        let (mut session, handler) = session(PickerConfig::percentage());
        assert!(session.on_slot_changed(3, 1).is_none());
        assert_eq!(handler.kinds(), vec!["opened"]);
    }

    #[test]
    fn test_events_share_session_id() {
        let (mut session, handler) = session(PickerConfig::digits(2));
        let id = session.id();
        session.step(0, Direction::Up).unwrap();
        session.dismiss();

        let events = handler.events.lock().unwrap();
        assert!(events.iter().all(|event| event.session_id() == id));
    }
}
