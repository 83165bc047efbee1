//! Toolchain detection and external process invocation

pub mod check;
pub mod runner;

pub use check::{check_node, check_npm, check_toolchain, RuntimeInfo, Toolchain, MIN_NODE_MAJOR};
pub use runner::{CommandRunner, Invocation, ProcessRunner, RecordingRunner};
