//! Cache document output
//!
//! - `config` - destination and formatting options
//! - `json` - JSON encoding and writing

mod config;
mod json;

pub use config::OutputConfig;
pub use json::{to_json, write_json};
