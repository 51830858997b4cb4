//! Adapters that talk to the network.

pub mod http;
pub mod openai;
