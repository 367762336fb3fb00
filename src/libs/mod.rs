//! Core library modules for device queries, release lookup, and installs.

pub mod adb;
pub mod error;
pub mod messages;
pub mod release;
pub mod updater;
