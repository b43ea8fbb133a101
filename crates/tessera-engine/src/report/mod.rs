//! Fatal error presentation.
//!
//! The renderer never shows errors itself. The caller builds an
//! [`ErrorReporter`], wraps it in a [`Failure`] handle and passes that handle
//! down; every terminal error goes through [`Failure::fail`] exactly once.

mod failure;
mod reporter;

pub use failure::Failure;
pub use reporter::{default_reporter, ConsoleReporter, DialogReporter, ErrorReporter};
