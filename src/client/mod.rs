// File: src/client/mod.rs
pub mod core;

pub use crate::client::core::{MapsClient, RouteProvider};
