// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripheral implementations for the TI TM4C123x Cortex-M4 MCU.
//!
//! Covers the interrupt side of the core: the NVIC, the system exception
//! controls in the SCB and the SysTick timer.

#![crate_name = "tm4c123x"]
#![crate_type = "rlib"]
#![no_std]

pub mod chip;
pub mod errorcode;
pub mod interrupts;
pub mod nvic;
pub mod priority;
pub mod scb;
pub mod systick;
pub mod utilities;

mod config;

pub use crate::errorcode::ErrorCode;
