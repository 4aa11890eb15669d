//! # remotefs-local
//!
//! Read-only local-file stream wrapper.
//!
//! The second member of the wrapper variant set: the same capability
//! contract as `remotefs-http`, backed by `std::fs` instead of a network
//! transport. Local files genuinely support random access, so seeks here
//! are real seeks, and stat records carry filesystem timestamps.
//!
//! Useful on its own for scheme-addressed local storage
//! (`assets://logo.png` resolved under a configured root) and in tests as
//! a wrapper with no network dependency.

mod body;
mod wrapper;

pub use body::LocalBody;
pub use wrapper::LocalStreamWrapper;
