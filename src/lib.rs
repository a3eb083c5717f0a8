//! linktrack - URL shortener with click analytics
//!
//! Two HTTP services sharing one database schema, plus a terminal dashboard.
//!
//! # Architecture
//! - `storage`: sea-orm storage for clicks and links
//! - `services`: analytics and link business logic
//! - `api`: HTTP handlers and middleware
//! - `client`: HTTP clients used by the dashboard
//! - `interfaces`: CLI commands (dashboard, shorten, config)
//! - `config`: Configuration management
//! - `runtime`: Startup, shutdown and execution modes
//! - `system`: Logging

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
