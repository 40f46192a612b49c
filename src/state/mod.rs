//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only cross-page state; pages keep their own form and
//! list state in local signals.

pub mod session;
