//! Shared test harness modules for the Valhalla CLI.

use super::*;

mod helpers;
