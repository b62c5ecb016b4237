//! CLI argument definitions for the cricviz binary

pub mod args;

pub use args::{Commands, Cricviz, StudentCmd};
