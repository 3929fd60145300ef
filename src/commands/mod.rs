//! Command implementations for boardprops CLI

pub mod completions;
pub mod resolve;
pub mod version;
