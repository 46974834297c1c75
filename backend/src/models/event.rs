//! Event logging for session auditing.
//!
//! Every significant state change in a simulation session is appended to an
//! event log: data loads (including each fallback to a built-in default),
//! budget decisions, policy applications and rejections, resets. The log
//! lets a caller answer "why is this button disabled" and "is this session
//! running on degraded data" without the engine ever raising for expected
//! conditions.

use crate::models::inputs::RegionId;
use crate::models::metric::Metric;
use serde::Serialize;

/// Which externally loaded field fell back to its built-in default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FallbackField {
    /// Cost series missing, or missing the reference year: floor stays 0.
    BudgetFloor,

    /// One metric's baseline record was absent.
    Baseline(Metric),

    /// The whole growth-rate vector was absent.
    GrowthRates,

    /// The eligibility matrix was absent.
    EligibilityMatrix,
}

/// Session event capturing a state change or a rejected request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Event {
    /// Region data load completed and replaced the session inputs.
    DataLoaded {
        region: RegionId,
        budget_floor: i64,
        fallback_count: usize,
    },

    /// One input field fell back to its documented default during a load.
    FallbackApplied { field: FallbackField },

    /// Budget ceiling accepted.
    BudgetSet {
        ceiling: i64,
        floor: i64,
        headroom: i64,
    },

    /// Budget ceiling rejected (below floor, or floor not loaded).
    BudgetRejected { proposed: i64, floor: i64 },

    /// Projection target year changed.
    YearSelected { year: u16 },

    /// Policy applied: budget debited, growth rates boosted, ledger appended.
    PolicyApplied {
        policy_id: String,
        metric: Metric,
        tier: usize,
        cost: i64,
        remaining_after: i64,
    },

    /// Policy application rejected with no state change.
    PolicyRejected {
        metric: Metric,
        tier: usize,
        reason: String,
    },

    /// Secondary selections supplied to a single-metric policy were ignored.
    ExtraSelectionsIgnored {
        metric: Metric,
        tier: usize,
        ignored: Vec<Metric>,
    },

    /// Session state reset to initial values.
    StateReset,
}

impl Event {
    /// Short name of the event variant.
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::DataLoaded { .. } => "DataLoaded",
            Event::FallbackApplied { .. } => "FallbackApplied",
            Event::BudgetSet { .. } => "BudgetSet",
            Event::BudgetRejected { .. } => "BudgetRejected",
            Event::YearSelected { .. } => "YearSelected",
            Event::PolicyApplied { .. } => "PolicyApplied",
            Event::PolicyRejected { .. } => "PolicyRejected",
            Event::ExtraSelectionsIgnored { .. } => "ExtraSelectionsIgnored",
            Event::StateReset => "StateReset",
        }
    }

    /// Primary metric if the event concerns one.
    pub fn metric(&self) -> Option<Metric> {
        match self {
            Event::PolicyApplied { metric, .. } => Some(*metric),
            Event::PolicyRejected { metric, .. } => Some(*metric),
            Event::ExtraSelectionsIgnored { metric, .. } => Some(*metric),
            Event::FallbackApplied {
                field: FallbackField::Baseline(metric),
            } => Some(*metric),
            _ => None,
        }
    }
}

/// Append-only event log with query helpers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event.
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Number of events logged.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in append order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events of one variant.
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Events concerning one metric.
    pub fn events_for_metric(&self, metric: Metric) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.metric() == Some(metric))
            .collect()
    }

    /// How many default fallbacks have been applied. Non-zero means the
    /// session is running on at least partially degraded data.
    pub fn fallback_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::FallbackApplied { .. }))
            .count()
    }

    /// Clear all events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type() {
        let event = Event::BudgetSet {
            ceiling: 6000,
            floor: 5000,
            headroom: 1000,
        };
        assert_eq!(event.event_type(), "BudgetSet");
    }

    #[test]
    fn test_event_metric() {
        let event = Event::PolicyRejected {
            metric: Metric::Beds,
            tier: 3,
            reason: "budget has not been set".to_string(),
        };
        assert_eq!(event.metric(), Some(Metric::Beds));

        assert_eq!(Event::StateReset.metric(), None);
    }

    #[test]
    fn test_log_query_by_type() {
        let mut log = EventLog::new();
        log.log(Event::YearSelected { year: 2026 });
        log.log(Event::YearSelected { year: 2028 });
        log.log(Event::StateReset);

        assert_eq!(log.len(), 3);
        assert_eq!(log.events_of_type("YearSelected").len(), 2);
        assert_eq!(log.events_of_type("StateReset").len(), 1);
        assert_eq!(log.events_of_type("BudgetSet").len(), 0);
    }

    #[test]
    fn test_log_query_by_metric() {
        let mut log = EventLog::new();
        log.log(Event::PolicyApplied {
            policy_id: "M1P0".to_string(),
            metric: Metric::Beds,
            tier: 0,
            cost: 1500,
            remaining_after: 500,
        });
        log.log(Event::FallbackApplied {
            field: FallbackField::Baseline(Metric::Beds),
        });
        log.log(Event::FallbackApplied {
            field: FallbackField::GrowthRates,
        });

        assert_eq!(log.events_for_metric(Metric::Beds).len(), 2);
        assert_eq!(log.events_for_metric(Metric::Visits).len(), 0);
    }

    #[test]
    fn test_fallback_count() {
        let mut log = EventLog::new();
        assert_eq!(log.fallback_count(), 0);

        log.log(Event::FallbackApplied {
            field: FallbackField::BudgetFloor,
        });
        log.log(Event::FallbackApplied {
            field: FallbackField::EligibilityMatrix,
        });
        log.log(Event::StateReset);

        assert_eq!(log.fallback_count(), 2);
    }

    #[test]
    fn test_clear() {
        let mut log = EventLog::new();
        log.log(Event::StateReset);
        log.clear();
        assert!(log.is_empty());
    }
}
