// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

mod property;
mod value;

pub use property::Property;
pub use value::{PropertyKind, PropertyValue};
