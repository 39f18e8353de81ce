//! EC2 request, result and structure types.
//!
//! All fields are optional: an unset field is neither marshalled nor
//! expected in responses. Lists are `Vec<T>`, constrained strings are
//! enums that keep unknown values, timestamps are `DateTime<Utc>`.

pub mod capacity;
pub mod common;
pub mod flow_logs;
pub mod images;
pub mod instance_types;
pub mod instances;
pub mod launch_templates;
pub mod network;
pub mod reserved;
pub mod spot;
pub mod volumes;
pub mod vpn;

pub use capacity::*;
pub use common::*;
pub use flow_logs::*;
pub use images::*;
pub use instance_types::*;
pub use instances::*;
pub use launch_templates::*;
pub use network::*;
pub use reserved::*;
pub use spot::*;
pub use volumes::*;
pub use vpn::*;
