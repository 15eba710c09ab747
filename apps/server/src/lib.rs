//! Pulse - registry and feedback CRUD services.
//!
//! Three independent HTTP services share this crate: the feedback server
//! (products, feedback and rating-based sentiment summaries), the employee
//! server and the roster server. Each binary builds its own router from
//! [`api`] over a shared [`state::AppState`].

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod shutdown;
pub mod state;

pub use error::{Error, Result};
