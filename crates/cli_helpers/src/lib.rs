//! Helper functions for the `passforge` command line executables.

pub mod messages;
