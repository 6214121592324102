//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

mod address;
pub use address::*;

mod amount;
pub use amount::*;

pub mod error;
pub mod listing;
pub mod outcome;
pub mod traits;
pub mod validation;

mod workflow;
pub use workflow::*;
