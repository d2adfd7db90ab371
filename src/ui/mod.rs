// SPDX-License-Identifier: MPL-2.0
//! Controller-side UI state machines.

pub mod viewer;
