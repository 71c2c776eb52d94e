//! Interactive terminal RSS reader for the Adnkronos news feeds.
//!
//! The pipeline is fetch → status check → streaming XML decode →
//! per-item sanitize → render, driven by a menu loop over a fixed
//! category table. Exposed as a library so integration tests can drive
//! the pipeline directly.

pub mod categories;
pub mod config;
pub mod feed;
pub mod sanitize;
pub mod ui;
