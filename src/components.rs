//! Reusable HTML components for the commit log page.

pub mod commit;
pub mod layout;
