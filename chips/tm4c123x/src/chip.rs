// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Chip-level view of the TM4C123x core peripherals.

use crate::nvic::{Nvic, NvicRegisters};
use crate::priority::Priority;
use crate::scb::{Exception, Scb, ScbRegisters};
use crate::systick::{Callback, SysTick, SysTickRegisterFile, SystickRegisters};
use crate::utilities::StaticRef;
use crate::ErrorCode;

/// Core clock after reset, running from the precision internal oscillator.
pub const SYSTEM_CLOCK_HZ: u32 = 16_000_000;

/// Priority given to the SysTick exception by `start_periodic_tick`.
pub const SYSTICK_PRIORITY: Priority = Priority::new(3);

const NVIC_BASE: StaticRef<NvicRegisters> =
    unsafe { StaticRef::new(0xe000_e000 as *const NvicRegisters) };

const SCB_BASE: StaticRef<ScbRegisters> =
    unsafe { StaticRef::new(0xe000_ed00 as *const ScbRegisters) };

const SYSTICK_BASE: StaticRef<SystickRegisters> =
    unsafe { StaticRef::new(0xe000_e010 as *const SystickRegisters) };

pub struct Tm4c123x<R: SysTickRegisterFile = StaticRef<SystickRegisters>> {
    pub nvic: Nvic,
    pub scb: Scb,
    pub systick: SysTick<R>,
}

impl Tm4c123x {
    /// The core peripherals at their architectural addresses.
    ///
    /// # Safety
    ///
    /// Must only be called on a TM4C123x, and only once: every returned
    /// driver assumes it is the sole owner of its registers.
    pub unsafe fn new() -> Tm4c123x {
        Tm4c123x::with_peripherals(
            Nvic::new(NVIC_BASE),
            Scb::new(SCB_BASE),
            SysTick::new_with_calibration(SYSTICK_BASE, SYSTEM_CLOCK_HZ),
        )
    }
}

impl<R: SysTickRegisterFile> Tm4c123x<R> {
    pub const fn with_peripherals(nvic: Nvic, scb: Scb, systick: SysTick<R>) -> Tm4c123x<R> {
        Tm4c123x { nvic, scb, systick }
    }

    /// Put the NVIC in a known state: every line disabled and nothing
    /// pending.
    pub fn init(&self) {
        log::debug!("tm4c123x: masking all peripheral interrupts");
        self.nvic.disable_all();
        self.nvic.clear_all_pending();
    }

    /// Raise the SysTick exception every `ms` milliseconds and run `callback`
    /// from it, at `SYSTICK_PRIORITY`.
    ///
    /// A period that does not fit the reload register fails with
    /// `ErrorCode::SIZE` before anything is written.
    pub fn start_periodic_tick(&self, ms: u32, callback: Callback) -> Result<(), ErrorCode> {
        self.systick.checked_reload(ms)?;
        self.scb
            .set_exception_priority(Exception::SysTick, SYSTICK_PRIORITY)?;
        self.systick.set_callback(callback);
        self.systick.try_init(ms)
    }
}
