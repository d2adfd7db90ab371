// SPDX-License-Identifier: MPL-2.0
//! Application-layer boundaries between the controller and its host.

pub mod port;
