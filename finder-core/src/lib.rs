//! Core library for the `weather-finder` client.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The abstraction over the external weather provider
//! - Shared domain models (city query, weather snapshot)
//! - The input → result navigation flow
//!
//! It is used by `finder-cli`, but can also be reused by other frontends.

pub mod config;
pub mod flow;
pub mod model;
pub mod provider;

pub use config::Config;
pub use flow::{FetchOutcome, ResultState, Route, Session, activate_result};
pub use model::{CityQuery, InputError, WeatherSnapshot};
pub use provider::{WeatherProvider, provider_from_config};
