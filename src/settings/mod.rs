//! Configuration loading and resolution.
//!
//! `load` merges config files, environment variables and CLI flags into a
//! [`ResolvedConfig`] holding the options the app runs with.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
