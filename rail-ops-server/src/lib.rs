//! Railway operations API server.
//!
//! Serves read-only JSON views (train list, train detail and tracking,
//! stations, dashboard summary) over a dataset loaded once at startup.

pub mod config;
pub mod dataset;
pub mod domain;
pub mod web;
