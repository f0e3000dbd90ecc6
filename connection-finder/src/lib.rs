//! Train connection finder.
//!
//! Searches the public journey planner form for connections between two
//! stations, paging forward in time until enough connections are found,
//! and lays them out as a plain-text table.

pub mod domain;
pub mod fetch;
pub mod hafas;
pub mod parser;
pub mod query;
pub mod table;
