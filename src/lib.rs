//! # ogmeta
//!
//! Host-integration harness for the Open Graph plugin. It stands in for
//! the forum host: a [`fixture::FixtureHost`] serves the host ports from
//! a JSON document, and [`harness::Harness`] loads the plugin through the
//! plugin manager and fires the hooks a real page render would fire.

pub mod commands;
pub mod fixture;
pub mod harness;
pub mod logging;
pub mod output;
