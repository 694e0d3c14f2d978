//! CLI library components for exportscout.

pub mod logging;
