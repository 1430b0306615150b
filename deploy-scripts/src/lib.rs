//! Scripts for deploying the Sigma contracts to the supported test networks.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod artifacts;
pub mod cli;
pub mod commands;
pub mod compiler;
pub mod constants;
pub mod errors;
pub mod networks;
pub mod presets;
pub mod request;
pub mod utils;
