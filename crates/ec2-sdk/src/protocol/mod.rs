//! Wire formats: query-string requests, XML responses, timestamps.

pub mod query;
pub mod timestamp;
pub mod xml;

pub use query::{QueryParams, QueryRequest, QueryValue};
pub use xml::{XmlNode, XmlStruct, XmlValue, XmlWriter};
