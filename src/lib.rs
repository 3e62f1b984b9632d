//! SwingPro web client.
//!
//! Uploads a golf swing video to the analysis backend, then presents the
//! similarity report against the chosen touring professional. Everything
//! under [`presenter`], [`form`] and [`catalog`] is plain Rust and runs on the
//! host; the browser-facing pieces live in [`api`], [`app`] and the views.

pub mod api;
pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod pages;
pub mod presenter;
