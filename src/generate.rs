//! Generation requests, session state and the workflows that store their output.

pub(crate) mod generator;
pub(crate) mod session;
pub(crate) mod workflow;
