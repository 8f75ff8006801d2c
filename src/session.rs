/// Editor configuration: preview limits, keying and interaction tunables.
pub mod config;
/// The owned editing session every component operates on.
pub mod editor;
