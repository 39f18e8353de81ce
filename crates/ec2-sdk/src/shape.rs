//! Declarative macros that stamp out the EC2 model.
//!
//! Every structure in the model is declared with [`ec2_shape!`] and every
//! constrained string with [`ec2_enum!`]. A field declaration names the Rust
//! field, its fluent setter, its type and its two wire names:
//!
//! ```ignore
//! ec2_shape! {
//!     pub struct Filter {
//!         name / with_name: String => ("Name", "name"),
//!         values / with_values: Vec<String> => ("Value", "valueSet"),
//!     }
//! }
//! ```
//!
//! The first wire name is the query member (`Filter.1.Value.2`), the second
//! the XML element (`<valueSet><item>..</item></valueSet>`).

use chrono::{DateTime, Utc};
use std::hash::{Hash, Hasher};

/// Hashing for field values. Floats hash by bit pattern with `-0.0`
/// folded onto `0.0` and every NaN onto one value, so values that compare
/// equal hash equal.
pub trait FieldHash {
    fn field_hash<H: Hasher>(&self, state: &mut H);
}

macro_rules! hash_field_hash {
    ($($ty:ty),*) => {
        $(
            impl FieldHash for $ty {
                fn field_hash<H: Hasher>(&self, state: &mut H) {
                    Hash::hash(self, state)
                }
            }
        )*
    };
}

hash_field_hash!(String, bool, i32, i64, DateTime<Utc>);

impl FieldHash for f32 {
    fn field_hash<H: Hasher>(&self, state: &mut H) {
        let bits = if *self == 0.0 {
            0
        } else if self.is_nan() {
            f32::NAN.to_bits()
        } else {
            self.to_bits()
        };
        state.write_u32(bits);
    }
}

impl FieldHash for f64 {
    fn field_hash<H: Hasher>(&self, state: &mut H) {
        let bits = if *self == 0.0 {
            0
        } else if self.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.to_bits()
        };
        state.write_u64(bits);
    }
}

impl<T: FieldHash> FieldHash for Option<T> {
    fn field_hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Some(value) => {
                state.write_u8(1);
                value.field_hash(state);
            }
            None => state.write_u8(0),
        }
    }
}

impl<T: FieldHash> FieldHash for Vec<T> {
    fn field_hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self {
            item.field_hash(state);
        }
    }
}

/// Declare a model structure.
macro_rules! ec2_shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident / $setter:ident : $ty:ty => ($query:literal, $xml:literal)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )+
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $setter(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )+
        }

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $( $crate::shape::FieldHash::field_hash(&self.$field, state); )+
            }
        }

        impl $crate::shape::FieldHash for $name {
            fn field_hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(self, state)
            }
        }

        impl $crate::protocol::query::QueryValue for $name {
            fn write_query(&self, name: &str, params: &mut $crate::protocol::query::QueryParams) {
                $(
                    if let Some(ref value) = self.$field {
                        $crate::protocol::query::QueryValue::write_query(
                            value,
                            &$crate::protocol::query::member(name, $query),
                            params,
                        );
                    }
                )+
            }

            fn read_query(
                name: &str,
                params: &$crate::protocol::query::QueryParams,
            ) -> $crate::error::Ec2Result<Option<Self>> {
                if !params.contains_prefix(name) {
                    return Ok(None);
                }
                Ok(Some(Self {
                    $(
                        $field: <$ty as $crate::protocol::query::QueryValue>::read_query(
                            &$crate::protocol::query::member(name, $query),
                            params,
                        )?,
                    )+
                }))
            }

            fn empty_element() -> Option<Self> {
                Some(Self::default())
            }
        }

        impl $crate::protocol::xml::XmlValue for $name {
            fn read_xml(node: &$crate::protocol::xml::XmlNode) -> $crate::error::Ec2Result<Self> {
                Ok(Self {
                    $( $field: $crate::protocol::xml::read_member::<$ty>(node, $xml)?, )+
                })
            }

            fn write_xml(
                &self,
                name: &str,
                writer: &mut $crate::protocol::xml::XmlWriter,
            ) -> $crate::error::Ec2Result<()> {
                writer.start(name)?;
                $crate::protocol::xml::XmlStruct::write_members(self, writer)?;
                writer.end(name)
            }
        }

        impl $crate::protocol::xml::XmlStruct for $name {
            fn write_members(
                &self,
                writer: &mut $crate::protocol::xml::XmlWriter,
            ) -> $crate::error::Ec2Result<()> {
                $(
                    if let Some(ref value) = self.$field {
                        $crate::protocol::xml::XmlValue::write_xml(value, $xml, writer)?;
                    }
                )+
                Ok(())
            }
        }
    };
}

/// Declare a constrained string. Values outside the known set are kept in
/// `Unknown` so newer service values survive a round trip.
macro_rules! ec2_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$variant_meta])* $variant, )+
            /// A value this crate does not know about.
            Unknown(String),
        }

        impl $name {
            /// The wire value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            /// Every known wire value.
            pub fn values() -> &'static [&'static str] {
                &[$( $wire ),+]
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $wire => Self::$variant, )+
                    other => Self::Unknown(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(value))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <String as serde::Deserialize>::deserialize(deserializer).map(Self::from)
            }
        }

        impl $crate::shape::FieldHash for $name {
            fn field_hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(self, state)
            }
        }

        impl $crate::protocol::query::QueryValue for $name {
            fn write_query(&self, name: &str, params: &mut $crate::protocol::query::QueryParams) {
                params.insert(name, self.as_str());
            }

            fn read_query(
                name: &str,
                params: &$crate::protocol::query::QueryParams,
            ) -> $crate::error::Ec2Result<Option<Self>> {
                Ok(params.get(name).map(Self::from))
            }
        }

        impl $crate::protocol::xml::XmlValue for $name {
            fn read_xml(node: &$crate::protocol::xml::XmlNode) -> $crate::error::Ec2Result<Self> {
                Ok(Self::from(node.text.trim()))
            }

            fn write_xml(
                &self,
                name: &str,
                writer: &mut $crate::protocol::xml::XmlWriter,
            ) -> $crate::error::Ec2Result<()> {
                writer.element(name, self.as_str())
            }
        }
    };
}

pub(crate) use ec2_enum;
pub(crate) use ec2_shape;
