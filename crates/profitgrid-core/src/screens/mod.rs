//! Screen state: the top-level view switch and the analyzer screens it hosts.

mod analyzer;
mod dashboard;

pub use analyzer::{Analyzer, Market};
pub use dashboard::{Dashboard, View, REGISTRATION_SUCCESS};
