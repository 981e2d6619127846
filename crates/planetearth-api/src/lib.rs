//! HTTP gateway for the PlanetEarth game-world API

pub mod classify;
pub mod client;
pub mod config;
pub mod error;

#[cfg(any(test, feature = "test-support"))]
pub mod mock;

pub use classify::{classify, Envelope};
pub use client::{ApiClient, PlanetEarthApi};
pub use config::ApiConfig;
pub use error::{Error, Result};
