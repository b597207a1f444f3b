// Crate root library declaration and module exports.
pub mod calendar;
pub mod cli;
pub mod client;
pub mod comparator;
pub mod config;
pub mod error;
pub mod model;
pub mod panels;
pub mod paths;
pub mod report;
pub mod summary;
pub mod workdays;
