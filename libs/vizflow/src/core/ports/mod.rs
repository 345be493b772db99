// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

mod data_type;
mod inport;
mod outport;
mod port_data;

pub use data_type::DataType;
pub use inport::{Inport, InportSpec};
pub use outport::{Outport, OutportSpec};
pub use port_data::PortData;
