//! Terminal presentation of finished runs.

pub mod terminal;
