// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Data structure for storing compile-time configuration options.
//!
//! Configuration is a typed `const` object rather than `#[cfg]` blocks
//! scattered through the drivers: every code path is type-checked whichever
//! options are enabled, and the compiler folds the constants away afterwards.

/// Data structure holding compile-time configuration options.
///
/// To change the configuration, enable the matching cargo feature of this
/// crate from the board crate.
pub(crate) struct Config {
    /// Whether the drivers should log every register write at `trace` level.
    ///
    /// If enabled, each write names the register and the value written,
    /// which is useful when bringing up a board against a datasheet.
    pub(crate) trace_register_writes: bool,

    /// Whether `Scb::enable_exception` and `Scb::disable_exception` should
    /// reject system exceptions that have no enable bit.
    ///
    /// By default SVCall, DebugMonitor, PendSV and SysTick fall through to the
    /// branch that enables (or disables) all three configurable faults, the
    /// same as `Exception::Other`. With this option they return
    /// `ErrorCode::NOSUPPORT` and leave the registers untouched instead.
    pub(crate) strict_exception_enable: bool,
}

/// A unique instance of `Config` where compile-time configuration options are
/// defined. This is the only location in the crate where `#[cfg(x)]` is used
/// to configure code based on Cargo features.
pub(crate) const CONFIG: Config = Config {
    trace_register_writes: cfg!(feature = "trace_registers"),
    strict_exception_enable: cfg!(feature = "strict_exceptions"),
};
