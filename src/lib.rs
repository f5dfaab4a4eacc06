//! questlog - Goal & Mission Tracker Library
//!
//! This library provides the core functionality for the questlog CLI tool:
//! one free-text goal, a set of named missions, and weighted progress
//! scoring toward a fixed completion target.
//!
//! # Core Concepts
//!
//! - **Goal**: a single free-text target, one active at a time
//! - **Missions**: named tasks, normal (1 point) or hardcore (5 points),
//!   each completable exactly once
//! - **Progress**: completed-mission points over a fixed target of 50,
//!   capped at 100%
//! - **Store**: one flat JSON document, rewritten whole on every change,
//!   self-healing on corrupt or missing files
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `.questlog.toml`
//! - `error`: Error types and result aliases
//! - `goal`: Document model and the goal engine
//! - `session`: Per-session presentation flags (never persisted)
//! - `storage`: Whole-document JSON persistence with atomic writes
//! - `output`: Shared human/JSON output formatting

pub mod cli;
pub mod config;
pub mod error;
pub mod goal;
pub mod output;
pub mod session;
pub mod storage;

pub use error::{Error, Result};
