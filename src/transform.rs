/// Slider view of the foreground transform.
pub mod controls;
/// Foreground placement over the background and the mappings it induces.
pub mod placement;
/// Screen space vs logical space.
pub mod viewport;
