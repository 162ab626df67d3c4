//! CLI subcommand implementations for the artlink binary.

pub mod doctor;
pub mod harvest_cmd;
pub mod link_cmd;
