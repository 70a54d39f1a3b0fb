//! Logging facilities for rowview.
//!
//! rowview uses the `tracing` crate for instrumentation. To see logs, install
//! a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! The constants in [`targets`] can be used with `tracing` filter directives
//! to narrow output to one subsystem, e.g. `RUST_LOG=rowview::sort=debug`.

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "rowview_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "rowview_core::signal";
    /// Model crate target.
    pub const MODEL: &str = "rowview::model";
    /// Sorting target.
    pub const SORT: &str = "rowview::sort";
    /// View-state persistence target.
    pub const PERSIST: &str = "rowview::persist";
}
