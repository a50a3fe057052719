//! Interactive session layer for the banked-curve lab.
//!
//! A [`Session`] ties the three state families together: the persisted
//! configuration, the solve derived from it after every edit, and the
//! ephemeral practice state. All operations are synchronous and
//! single-threaded; randomness for question generation is injected per call.

pub mod edit;
pub mod session;
pub mod summary;

pub use edit::ConfigEdit;
pub use session::Session;
