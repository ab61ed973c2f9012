//! Command implementations

pub mod check;
pub mod share;
pub mod simple;

pub use check::run_check;
pub use share::share_text;
pub use simple::run_simple;
