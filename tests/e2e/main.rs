//! End-to-end scenario over the full router

#[path = "../common/mod.rs"]
mod common;
