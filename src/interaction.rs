/// Pointer/touch state machine driving transform and mask edits.
pub mod controller;
/// Host-agnostic input events in screen coordinates.
pub mod event;
