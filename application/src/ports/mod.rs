//! Ports (interfaces) implemented by the outer layers
//!
//! The quiz service and countdown timer ports are implemented by
//! infrastructure adapters; the binding and view-state sinks are
//! implemented by whatever presentation layer observes the orchestrator.

pub mod binding;
pub mod countdown_timer;
pub mod quiz_service;
pub mod view_state;
