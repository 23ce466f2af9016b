//! Call backend module

pub mod client;
pub mod traits;

pub use client::BackendClient;
pub use traits::{CallAccepted, CallRequest, CallService};

#[cfg(test)]
pub use traits::MockCallService;
