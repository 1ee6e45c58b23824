//! Command-line entry points and the step workflows they drive

pub mod orchestration;
