// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! `"processor.name"` addresses for ports and properties.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::ProcessorId;
use crate::core::error::{NetworkError, Result};

fn split_address(address: &str) -> Result<(&str, &str)> {
    match address.split_once('.') {
        Some((processor, name)) if !processor.is_empty() && !name.is_empty() => {
            Ok((processor, name))
        }
        _ => Err(NetworkError::InvalidAddress(address.to_string())),
    }
}

macro_rules! address_type {
    ($(#[$meta:meta])* $name:ident, $field:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            pub processor: ProcessorId,
            pub $field: String,
        }

        impl $name {
            pub fn new(processor: impl Into<ProcessorId>, $field: impl Into<String>) -> Self {
                Self {
                    processor: processor.into(),
                    $field: $field.into(),
                }
            }

            /// Parse a `"processor.name"` address.
            pub fn parse(address: &str) -> Result<Self> {
                let (processor, name) = split_address(address)?;
                Ok(Self::new(processor, name))
            }

            /// Convert to address format `"processor.name"`.
            pub fn to_address(&self) -> String {
                format!("{}.{}", self.processor, self.$field)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}.{}", self.processor, self.$field)
            }
        }

        impl FromStr for $name {
            type Err = NetworkError;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_address())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let address = String::deserialize(deserializer)?;
                Self::parse(&address).map_err(serde::de::Error::custom)
            }
        }
    };
}

address_type!(
    /// Address of a port, `"processor.port"`.
    PortAddress,
    port
);

address_type!(
    /// Address of a property, `"processor.property"`.
    PropertyPath,
    property
);

/// Anything that can name a port or property: a typed address or a string.
pub trait IntoAddress<T> {
    fn into_address(self) -> Result<T>;
}

impl IntoAddress<PortAddress> for PortAddress {
    fn into_address(self) -> Result<PortAddress> {
        Ok(self)
    }
}

impl IntoAddress<PortAddress> for &PortAddress {
    fn into_address(self) -> Result<PortAddress> {
        Ok(self.clone())
    }
}

impl IntoAddress<PropertyPath> for PropertyPath {
    fn into_address(self) -> Result<PropertyPath> {
        Ok(self)
    }
}

impl IntoAddress<PropertyPath> for &PropertyPath {
    fn into_address(self) -> Result<PropertyPath> {
        Ok(self.clone())
    }
}

impl<T: FromStr<Err = NetworkError>> IntoAddress<T> for &str {
    fn into_address(self) -> Result<T> {
        self.parse()
    }
}

impl<T: FromStr<Err = NetworkError>> IntoAddress<T> for String {
    fn into_address(self) -> Result<T> {
        self.parse()
    }
}

impl<T: FromStr<Err = NetworkError>> IntoAddress<T> for &String {
    fn into_address(self) -> Result<T> {
        self.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_address() {
        let addr = PortAddress::parse("source.outport").unwrap();
        assert_eq!(addr.processor, "source");
        assert_eq!(addr.port, "outport");
        assert_eq!(addr.to_address(), "source.outport");
    }

    #[test]
    fn test_property_path_keeps_nested_names() {
        let path = PropertyPath::parse("camera.lookFrom.x").unwrap();
        assert_eq!(path.processor, "camera");
        assert_eq!(path.property, "lookFrom.x");
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(PortAddress::parse("noseparator").is_err());
        assert!(PortAddress::parse(".port").is_err());
        assert!(PortAddress::parse("proc.").is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let addr = PortAddress::new("a", "out");
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"a.out\"");
        let back: PortAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }
}
