//! Test module for underlay-core
//!
//! This module contains tests for:
//! - Menu tree construction from configuration records
//! - Configuration loading, fallbacks and merge semantics
//! - Detached command launching

mod launcher_tests;
mod menu_tests;
