//! Launch records dashboard.
//!
//! Loads a launch-outcome table once at startup and derives two chart views
//! from it: a success-ratio pie per site and a payload-vs-outcome scatter.
//! The views are served over HTTP ([`web`]) and shown in a native viewer
//! ([`app`]).

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
pub mod view;
pub mod web;
