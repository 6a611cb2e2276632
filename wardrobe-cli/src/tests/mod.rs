//! Shared test harness modules for the wardrobe CLI.

use super::*;

mod helpers;
mod payload_unit;
