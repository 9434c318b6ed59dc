//! Smart Alec - a terminal client for an AI comment-moderation service
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod observability;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
