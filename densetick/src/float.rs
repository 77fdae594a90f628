// Copyright 2025 the densetick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! `f64::floor`, `f64::ceil` and `f64::log10` live in `std`, not `core`. Without
//! the `std` feature these dispatch to `libm`.

/// The float math tick sizing needs, for `f64` in `no_std` mode.
pub(crate) trait FloatExt {
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn log10(self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn floor(self) -> Self {
        libm::floor(self)
    }

    fn ceil(self) -> Self {
        libm::ceil(self)
    }

    fn log10(self) -> Self {
        libm::log10(self)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("densetick requires either the `std` or `libm` feature");
