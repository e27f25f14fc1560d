//! Core library for the `apiperf` CLI.
//!
//! This crate provides the internal building blocks used by the binary: CLI
//! argument types, request sampling and dispatch, and latency statistics.
//! The primary user-facing interface is the `apiperf` command-line
//! application; library APIs may evolve as the CLI grows.
pub mod args;
pub mod error;
pub mod http;
pub mod metrics;
pub mod shutdown;
