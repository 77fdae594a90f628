// Copyright 2025 the densetick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.
//!
//! Generating ticks never fails; only building a strategy from bad
//! configuration does.

extern crate alloc;

use alloc::string::String;

/// Errors raised while configuring a tick strategy.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TickError {
    /// A date format string contains a specifier chrono cannot render.
    #[error("invalid date format string `{format}`")]
    InvalidFormat {
        /// The rejected format string.
        format: String,
    },
    /// A manually supplied tick sits at NaN or infinity.
    #[error("tick value {value} is not finite")]
    NonFiniteTick {
        /// The rejected value.
        value: f64,
    },
}
