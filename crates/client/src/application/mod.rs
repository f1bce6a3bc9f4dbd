//! Application layer - form state machines driven by UI events

pub mod forms;
