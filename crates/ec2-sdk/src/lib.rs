//! Amazon EC2 Query API model and wire protocol.
//!
//! Typed request and result shapes for a set of EC2 actions (API version
//! 2016-11-15), a marshaller from requests to Query API form parameters
//! and an unmarshaller from EC2 XML responses to results.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  Ec2Client<T: Transport>  (client.rs)            │
//! │  ├── send / send_all                             │
//! │  └── describe_instances · run_instances · …      │
//! ├──────────────────────────────────────────────────┤
//! │  Operation · Paginated  (operation.rs)           │
//! │  └── Request → Action name + Result type         │
//! ├──────────────────────────────────────────────────┤
//! │  model/  (ec2_shape! · ec2_enum!  in shape.rs)   │
//! │  instances · images · network · volumes · spot … │
//! ├──────────────────────────────────────────────────┤
//! │  protocol/                                       │
//! │  ├── query      QueryParams · QueryValue         │
//! │  ├── xml        XmlNode · XmlValue · XmlWriter   │
//! │  └── timestamp                                   │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire format
//!
//! | Direction | Encoding | Example |
//! |-----------|----------|---------|
//! | Request   | form-encoded query | `Filter.1.Name=instance-type&Filter.1.Value.1=t2.micro` |
//! | Response  | XML, lists as `<fooSet><item>` | `<reservationSet><item>…</item></reservationSet>` |
//!
//! The crate ships no HTTP stack: plug one in through [`Transport`].

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod operation;
pub mod protocol;
pub mod shape;

pub use client::{Ec2Client, HttpRequest, HttpResponse, Transport};
pub use config::{Ec2Config, Region, API_VERSION};
pub use error::{Ec2Error, Ec2Result, ServiceError};
pub use operation::{Operation, Paginated};
