//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod admin_chat_history;
pub mod admin_users;
pub mod home;
pub mod info;
pub mod templates;
pub mod user_login;
pub mod user_register;
