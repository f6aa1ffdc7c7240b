//! Twin Cache - An in-memory cache server
//!
//! Offers a keyed map store and an insertion-ordered queue store behind
//! services that fingerprint keys and provide bounded, sortable listings.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use error::{CacheError, Result};
