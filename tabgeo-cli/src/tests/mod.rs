//! Shared test harness modules for the tabgeo CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod extract_steps;
mod extract_unit;
mod helpers;
