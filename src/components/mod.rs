//! Reusable UI components shared by pages.

pub mod admin_gate;
pub mod app_header;
pub mod cover_image;
