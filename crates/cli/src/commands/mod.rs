//! Command implementations

mod validate;

pub use validate::run_validate;
