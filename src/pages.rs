//! Page generation modules.

pub mod commits;
