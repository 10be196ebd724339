//! Domain types shared across the workspace.

mod date;

pub use date::Date;
