// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Standard error enum for driver operations

/// Errors reported by the NVIC, SCB and SysTick drivers.
///
/// A driver returning an error has not written any register, so discarding
/// the error gives the silent no-op behavior hardware drivers traditionally
/// have for bad arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum ErrorCode {
    /// An invalid parameter was passed, e.g. an interrupt line outside the
    /// supported register groups
    INVAL = 5,
    /// Parameter passed was too large for the field it is written to
    SIZE = 6,
    /// The peripheral has no such control for the given argument
    NOSUPPORT = 9,
}

impl From<ErrorCode> for usize {
    fn from(err: ErrorCode) -> usize {
        err as usize
    }
}
