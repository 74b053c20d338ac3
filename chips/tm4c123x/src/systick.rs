// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! ARM Cortex-M SysTick peripheral.
//!
//! SysTick is a 24-bit down-counter clocked from the system clock. It is used
//! here in two disciplines:
//!
//! - interrupt driven (`SysTick::init`): the counter reloads every period and
//!   raises the SysTick exception, whose handler calls the registered
//!   callback;
//! - polling (`SysTick::start_busy_wait`): the caller spins on COUNTFLAG for
//!   one period, then the counter is stopped again.
//!
//! The priority of the SysTick exception itself is set through
//! `scb::Scb::set_exception_priority(Exception::SysTick, ..)`.

use core::ptr;
use core::sync::atomic::{AtomicPtr, Ordering};

use crate::config::CONFIG;
use crate::utilities::registers::interfaces::{ReadWriteable, Readable, Writeable};
use crate::utilities::registers::{
    register_bitfields, register_structs, FieldValue, LocalRegisterCopy, ReadWrite,
};
use crate::utilities::StaticRef;
use crate::ErrorCode;

register_structs! {
    /// SysTick Registers.
    pub SystickRegisters {
        /// SysTick Control and Status Register
        (0x00 => syst_csr: ReadWrite<u32, ControlAndStatus::Register>),

        /// SysTick Reload Value Register
        (0x04 => syst_rvr: ReadWrite<u32, ReloadValue::Register>),

        /// SysTick Current Value Register
        (0x08 => syst_cvr: ReadWrite<u32, CurrentValue::Register>),

        /// SysTick Calibration Value Register, not implemented on the TM4C123x
        (0x0c => _reserved0),

        (0x10 => @END),
    }
}

register_bitfields![u32,
    pub ControlAndStatus [
        /// Returns 1 if timer counted to 0 since last time this was read.
        COUNTFLAG 16,

        /// Clock source is (0) PIOSC divided by 4 or (1) System Clock.
        CLKSOURCE 2,

        /// Set to 1 to enable SysTick exception request.
        TICKINT 1,

        /// Enable the counter (1 == Enabled).
        ENABLE 0
    ],

    pub ReloadValue [
        /// Value loaded to `syst_cvr` when counter is enabled and reaches 0.
        RELOAD          OFFSET(0)  NUMBITS(24)
    ],

    pub CurrentValue [
        /// Reads current value. Write of any value sets to 0.
        CURRENT         OFFSET(0)  NUMBITS(24)
    ]
];

/// Largest value the reload register can hold.
pub const MAX_RELOAD: u32 = 0x00ff_ffff;

/// Typed access to the three SysTick registers.
///
/// `SysTick` only touches the hardware through this trait. The MMIO register
/// block implements it, and host tests implement it with a simulated counter.
pub trait SysTickRegisterFile {
    /// Read the control and status register. On hardware this clears
    /// COUNTFLAG.
    fn control(&self) -> LocalRegisterCopy<u32, ControlAndStatus::Register>;

    /// Overwrite the control register with `value`.
    fn write_control(&self, value: FieldValue<u32, ControlAndStatus::Register>);

    /// Change only the fields named in `value`.
    fn modify_control(&self, value: FieldValue<u32, ControlAndStatus::Register>);

    fn reload(&self) -> u32;

    fn write_reload(&self, value: FieldValue<u32, ReloadValue::Register>);

    fn current(&self) -> u32;

    /// Write the current value register, which sets it to 0 and clears
    /// COUNTFLAG.
    fn clear_current(&self);
}

impl SysTickRegisterFile for StaticRef<SystickRegisters> {
    fn control(&self) -> LocalRegisterCopy<u32, ControlAndStatus::Register> {
        self.syst_csr.extract()
    }

    fn write_control(&self, value: FieldValue<u32, ControlAndStatus::Register>) {
        self.syst_csr.write(value);
    }

    fn modify_control(&self, value: FieldValue<u32, ControlAndStatus::Register>) {
        self.syst_csr.modify(value);
    }

    fn reload(&self) -> u32 {
        self.syst_rvr.read(ReloadValue::RELOAD)
    }

    fn write_reload(&self, value: FieldValue<u32, ReloadValue::Register>) {
        self.syst_rvr.write(value);
    }

    fn current(&self) -> u32 {
        self.syst_cvr.read(CurrentValue::CURRENT)
    }

    fn clear_current(&self) {
        self.syst_cvr.set(0);
    }
}

impl<R: SysTickRegisterFile + ?Sized> SysTickRegisterFile for &R {
    fn control(&self) -> LocalRegisterCopy<u32, ControlAndStatus::Register> {
        (**self).control()
    }

    fn write_control(&self, value: FieldValue<u32, ControlAndStatus::Register>) {
        (**self).write_control(value);
    }

    fn modify_control(&self, value: FieldValue<u32, ControlAndStatus::Register>) {
        (**self).modify_control(value);
    }

    fn reload(&self) -> u32 {
        (**self).reload()
    }

    fn write_reload(&self, value: FieldValue<u32, ReloadValue::Register>) {
        (**self).write_reload(value);
    }

    fn current(&self) -> u32 {
        (**self).current()
    }

    fn clear_current(&self) {
        (**self).clear_current();
    }
}

/// Procedure called from the SysTick exception.
///
/// It runs in interrupt context: it must be short, must not block and must
/// never call `SysTick::start_busy_wait`.
pub type Callback = fn();

/// A single callback slot shared between thread mode and the SysTick
/// exception.
///
/// Writers replace the callback with one pointer-sized store and the handler
/// reads it with one load, so the last writer wins and the handler never sees
/// a torn value. No other synchronization is provided.
pub struct CallbackSlot {
    callback: AtomicPtr<()>,
}

impl CallbackSlot {
    pub const fn new() -> CallbackSlot {
        CallbackSlot {
            callback: AtomicPtr::new(ptr::null_mut()),
        }
    }

    pub fn set(&self, callback: Callback) {
        self.callback.store(callback as *mut (), Ordering::Release);
    }

    pub fn clear(&self) {
        self.callback.store(ptr::null_mut(), Ordering::Release);
    }

    pub fn get(&self) -> Option<Callback> {
        let callback = self.callback.load(Ordering::Acquire);
        if callback.is_null() {
            None
        } else {
            // SAFETY: the only non-null values ever stored come from a
            // `Callback` in `set`, and function pointers have the size of a
            // data pointer on every supported target.
            Some(unsafe { core::mem::transmute::<*mut (), Callback>(callback) })
        }
    }

    /// Call the installed callback, if any. Returns whether one was called.
    pub fn invoke(&self) -> bool {
        match self.get() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

/// The process-wide SysTick callback, read by `systick_handler`.
pub static SYSTICK_CALLBACK: CallbackSlot = CallbackSlot::new();

/// SysTick exception entry, to be placed in the vector table.
pub extern "C" fn systick_handler() {
    SYSTICK_CALLBACK.invoke();
}

/// Operating state of the timer, as far as the registers reveal it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    /// Counter disabled and reload register cleared.
    Uninitialized,
    /// Counter disabled with a period configured.
    Stopped,
    /// Counting with the SysTick exception enabled.
    RunningInterrupt,
    /// Counting with the exception disabled, as during a busy wait.
    RunningPolling,
}

/// The ARM Cortex-M SysTick peripheral
///
/// Documented in the Cortex-MX Devices Generic User Guide, Chapter 4.4
pub struct SysTick<R: SysTickRegisterFile = StaticRef<SystickRegisters>> {
    registers: R,
    clocks_per_ms: u32,
    callback: &'static CallbackSlot,
}

impl<R: SysTickRegisterFile> SysTick<R> {
    /// Initialize the `SysTick` with an explicit clock speed, using the
    /// process-wide `SYSTICK_CALLBACK` slot.
    ///
    ///   * `clock_speed` - the frequency of SysTick tics in Hertz. The
    ///   counter runs from the system clock, so this is simply the CPU speed.
    pub const fn new_with_calibration(registers: R, clock_speed: u32) -> SysTick<R> {
        SysTick::new_with_callback_slot(registers, clock_speed, &SYSTICK_CALLBACK)
    }

    /// Like `new_with_calibration`, with the callback kept in `callback`
    /// instead of `SYSTICK_CALLBACK`.
    pub const fn new_with_callback_slot(
        registers: R,
        clock_speed: u32,
        callback: &'static CallbackSlot,
    ) -> SysTick<R> {
        SysTick {
            registers,
            clocks_per_ms: clock_speed / 1000,
            callback,
        }
    }

    /// Reload value for a period of `ms` milliseconds, before truncation to
    /// the 24-bit register. A period of 0 wraps to `u32::MAX`.
    pub fn reload_for(&self, ms: u32) -> u32 {
        self.clocks_per_ms.wrapping_mul(ms).wrapping_sub(1)
    }

    /// Reload value for a period of `ms` milliseconds, or `ErrorCode::SIZE`
    /// if the period is 0 or does not fit the 24-bit register.
    pub fn checked_reload(&self, ms: u32) -> Result<u32, ErrorCode> {
        self.clocks_per_ms
            .checked_mul(ms)
            .and_then(|clocks| clocks.checked_sub(1))
            .filter(|reload| *reload <= MAX_RELOAD)
            .ok_or(ErrorCode::SIZE)
    }

    // n.b.: 4.4.5 'hints and tips' suggests setting reload before value
    fn configure(&self, reload: u32, with_interrupt: bool) {
        if reload > MAX_RELOAD {
            log::warn!(
                "systick: reload {:#x} does not fit in 24 bits, truncated to {:#x}",
                reload,
                reload & MAX_RELOAD
            );
        }
        log::debug!(
            "systick: reload {:#08x}, interrupt {}",
            reload & MAX_RELOAD,
            with_interrupt
        );

        self.registers
            .write_control(ControlAndStatus::ENABLE::CLEAR);
        self.registers.write_reload(ReloadValue::RELOAD.val(reload));
        self.registers.clear_current();

        let control = ControlAndStatus::ENABLE::SET + ControlAndStatus::CLKSOURCE::SET;
        if CONFIG.trace_register_writes {
            log::trace!("systick: CSR <- ENABLE | CLKSOURCE, TICKINT {}", with_interrupt);
        }
        if with_interrupt {
            self.registers
                .write_control(control + ControlAndStatus::TICKINT::SET);
        } else {
            self.registers.write_control(control);
        }
    }

    /// Start periodic SysTick exceptions every `ms` milliseconds.
    ///
    /// A period whose reload value does not fit in 24 bits is truncated, as
    /// the hardware would; `try_init` rejects it instead.
    pub fn init(&self, ms: u32) {
        self.configure(self.reload_for(ms), true);
    }

    /// Like `init`, but fails with `ErrorCode::SIZE` and leaves the timer
    /// untouched if the period does not fit the reload register.
    pub fn try_init(&self, ms: u32) -> Result<(), ErrorCode> {
        let reload = self.checked_reload(ms)?;
        self.configure(reload, true);
        Ok(())
    }

    /// Block for `ms` milliseconds by polling COUNTFLAG, then stop the timer.
    ///
    /// There is no timeout: if the counter never wraps this never returns.
    /// Must not be called from the SysTick callback.
    pub fn start_busy_wait(&self, ms: u32) {
        self.configure(self.reload_for(ms), false);

        while !self.registers.control().is_set(ControlAndStatus::COUNTFLAG) {
            core::hint::spin_loop();
        }

        self.registers
            .write_control(ControlAndStatus::ENABLE::CLEAR);
        self.registers.clear_current();
    }

    /// Resume counting with the configuration last written.
    pub fn start(&self) {
        self.registers.modify_control(ControlAndStatus::ENABLE::SET);
    }

    /// Pause counting. Reload and current value are kept.
    pub fn stop(&self) {
        self.registers
            .modify_control(ControlAndStatus::ENABLE::CLEAR);
    }

    /// Stop the timer, clear its registers and drop the callback.
    pub fn deinit(&self) {
        self.registers
            .write_control(ControlAndStatus::ENABLE::CLEAR);
        self.registers.write_reload(ReloadValue::RELOAD.val(0));
        self.registers.clear_current();
        self.callback.clear();
    }

    /// Replace the callback run by `handle_interrupt`.
    pub fn set_callback(&self, callback: Callback) {
        self.callback.set(callback);
    }

    pub fn callback(&self) -> Option<Callback> {
        self.callback.get()
    }

    /// Service a SysTick exception: run the callback if one is installed.
    /// Returns whether a callback ran.
    pub fn handle_interrupt(&self) -> bool {
        self.callback.invoke()
    }

    pub fn reload_value(&self) -> u32 {
        self.registers.reload()
    }

    pub fn current_value(&self) -> u32 {
        self.registers.current()
    }

    /// Reads the control register, which clears COUNTFLAG as a side effect.
    pub fn is_enabled(&self) -> bool {
        self.registers.control().is_set(ControlAndStatus::ENABLE)
    }

    /// Reads the control register, which clears COUNTFLAG as a side effect.
    pub fn interrupt_enabled(&self) -> bool {
        self.registers.control().is_set(ControlAndStatus::TICKINT)
    }

    /// Whether the counter reached 0 since the control register was last
    /// read. The read itself clears the flag.
    pub fn has_expired(&self) -> bool {
        self.registers.control().is_set(ControlAndStatus::COUNTFLAG)
    }

    /// Reads the control register, which clears COUNTFLAG as a side effect:
    /// a wrap seen here is no longer reported by `has_expired`.
    pub fn state(&self) -> TimerState {
        let control = self.registers.control();
        if !control.is_set(ControlAndStatus::ENABLE) {
            if self.registers.reload() == 0 {
                TimerState::Uninitialized
            } else {
                TimerState::Stopped
            }
        } else if control.is_set(ControlAndStatus::TICKINT) {
            TimerState::RunningInterrupt
        } else {
            TimerState::RunningPolling
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::InMemoryRegister;
    use core::cell::Cell;
    use core::sync::atomic::AtomicUsize;

    const CLOCK_HZ: u32 = 16_000_000;

    /// SysTick registers in memory, with a counter that wraps after a given
    /// number of control-register polls while enabled.
    struct SimulatedSysTick {
        csr: InMemoryRegister<u32, ControlAndStatus::Register>,
        rvr: InMemoryRegister<u32, ReloadValue::Register>,
        cvr: InMemoryRegister<u32, CurrentValue::Register>,
        polls_until_wrap: Cell<u32>,
        flag_observations: Cell<u32>,
        last_enabling_write: Cell<u32>,
    }

    impl SimulatedSysTick {
        fn new(polls_until_wrap: u32) -> SimulatedSysTick {
            SimulatedSysTick {
                csr: InMemoryRegister::new(0),
                rvr: InMemoryRegister::new(0),
                cvr: InMemoryRegister::new(0),
                polls_until_wrap: Cell::new(polls_until_wrap),
                flag_observations: Cell::new(0),
                last_enabling_write: Cell::new(0),
            }
        }

        fn never_wraps() -> SimulatedSysTick {
            SimulatedSysTick::new(u32::MAX)
        }
    }

    impl SysTickRegisterFile for SimulatedSysTick {
        fn control(&self) -> LocalRegisterCopy<u32, ControlAndStatus::Register> {
            if self.csr.is_set(ControlAndStatus::ENABLE) {
                match self.polls_until_wrap.get() {
                    0 => self.csr.modify(ControlAndStatus::COUNTFLAG::SET),
                    n => self.polls_until_wrap.set(n - 1),
                }
            }
            let snapshot = self.csr.extract();
            if snapshot.is_set(ControlAndStatus::COUNTFLAG) {
                self.flag_observations.set(self.flag_observations.get() + 1);
                self.csr.modify(ControlAndStatus::COUNTFLAG::CLEAR);
            }
            snapshot
        }

        fn write_control(&self, value: FieldValue<u32, ControlAndStatus::Register>) {
            self.csr.write(value);
            if self.csr.is_set(ControlAndStatus::ENABLE) {
                self.last_enabling_write.set(self.csr.get());
            }
        }

        fn modify_control(&self, value: FieldValue<u32, ControlAndStatus::Register>) {
            self.csr.modify(value);
        }

        fn reload(&self) -> u32 {
            self.rvr.read(ReloadValue::RELOAD)
        }

        fn write_reload(&self, value: FieldValue<u32, ReloadValue::Register>) {
            self.rvr.write(value);
        }

        fn current(&self) -> u32 {
            self.cvr.read(CurrentValue::CURRENT)
        }

        fn clear_current(&self) {
            self.cvr.set(0);
            self.csr.modify(ControlAndStatus::COUNTFLAG::CLEAR);
        }
    }

    const ENABLE: u32 = 1 << 0;
    const TICKINT: u32 = 1 << 1;
    const CLKSOURCE: u32 = 1 << 2;

    #[test]
    fn init_one_millisecond() {
        static SLOT: CallbackSlot = CallbackSlot::new();
        let hw = SimulatedSysTick::never_wraps();
        hw.cvr.set(1234);
        let systick = SysTick::new_with_callback_slot(&hw, CLOCK_HZ, &SLOT);

        systick.init(1);

        assert_eq!(hw.rvr.get(), 15_999);
        assert_eq!(hw.cvr.get(), 0);
        assert_eq!(hw.csr.get(), ENABLE | TICKINT | CLKSOURCE);
        assert_eq!(systick.state(), TimerState::RunningInterrupt);
        assert!(systick.interrupt_enabled());
    }

    #[test]
    fn init_zero_wraps_to_full_range() {
        static SLOT: CallbackSlot = CallbackSlot::new();
        let hw = SimulatedSysTick::never_wraps();
        let systick = SysTick::new_with_callback_slot(&hw, CLOCK_HZ, &SLOT);

        assert_eq!(systick.reload_for(0), u32::MAX);
        systick.init(0);

        assert_eq!(systick.reload_value(), 0x00ff_ffff);
        assert_eq!(hw.csr.get(), ENABLE | TICKINT | CLKSOURCE);
    }

    #[test]
    fn oversized_period_is_truncated() {
        static SLOT: CallbackSlot = CallbackSlot::new();
        let _ = env_logger::try_init();
        let hw = SimulatedSysTick::never_wraps();
        let systick = SysTick::new_with_callback_slot(&hw, CLOCK_HZ, &SLOT);

        // 16000 * 2000 - 1 = 0x01e8_47ff
        systick.init(2000);
        assert_eq!(systick.reload_value(), 0x00e8_47ff);
    }

    #[test]
    fn try_init_checks_the_reload_width() {
        static SLOT: CallbackSlot = CallbackSlot::new();
        let hw = SimulatedSysTick::never_wraps();
        let systick = SysTick::new_with_callback_slot(&hw, CLOCK_HZ, &SLOT);

        assert_eq!(systick.try_init(2000), Err(ErrorCode::SIZE));
        assert_eq!(systick.try_init(0), Err(ErrorCode::SIZE));
        assert_eq!(hw.csr.get(), 0);
        assert_eq!(hw.rvr.get(), 0);

        // 16000 * 1048 - 1 is the longest period that fits.
        assert_eq!(systick.try_init(1048), Ok(()));
        assert_eq!(systick.reload_value(), 16_767_999);
        assert_eq!(systick.try_init(1049), Err(ErrorCode::SIZE));
        assert_eq!(systick.reload_value(), 16_767_999);
    }

    #[test]
    fn try_init_rejects_overflowing_periods() {
        static SLOT: CallbackSlot = CallbackSlot::new();
        let hw = SimulatedSysTick::never_wraps();
        let systick = SysTick::new_with_callback_slot(&hw, CLOCK_HZ, &SLOT);

        // 16000 * 268_436 wraps u32 to 8704.
        assert_eq!(systick.reload_for(268_436), 8703);
        assert_eq!(systick.checked_reload(268_436), Err(ErrorCode::SIZE));
        assert_eq!(systick.try_init(268_436), Err(ErrorCode::SIZE));
        assert_eq!(systick.try_init(u32::MAX), Err(ErrorCode::SIZE));
        assert_eq!(hw.csr.get(), 0);
        assert_eq!(hw.rvr.get(), 0);
        assert_eq!(systick.checked_reload(1), Ok(15_999));
    }

    #[test]
    fn state_query_consumes_the_expiry_flag() {
        static SLOT: CallbackSlot = CallbackSlot::new();
        let hw = SimulatedSysTick::new(0);
        let systick = SysTick::new_with_callback_slot(&hw, CLOCK_HZ, &SLOT);

        systick.init(1);
        assert_eq!(systick.state(), TimerState::RunningInterrupt);
        assert_eq!(hw.flag_observations.get(), 1);
    }

    #[test]
    fn busy_wait_polls_until_countflag() {
        static SLOT: CallbackSlot = CallbackSlot::new();
        let hw = SimulatedSysTick::new(5);
        hw.cvr.set(42);
        let systick = SysTick::new_with_callback_slot(&hw, CLOCK_HZ, &SLOT);

        systick.start_busy_wait(3);

        assert!(hw.flag_observations.get() >= 1);
        assert_eq!(hw.polls_until_wrap.get(), 0);
        assert_eq!(hw.last_enabling_write.get(), ENABLE | CLKSOURCE);
        assert_eq!(hw.csr.get() & ENABLE, 0);
        assert_eq!(hw.cvr.get(), 0);
        assert_eq!(hw.rvr.get(), 47_999);
        assert_eq!(systick.state(), TimerState::Stopped);
    }

    #[test]
    fn busy_wait_after_periodic_mode_drops_the_interrupt() {
        static SLOT: CallbackSlot = CallbackSlot::new();
        let hw = SimulatedSysTick::new(0);
        let systick = SysTick::new_with_callback_slot(&hw, CLOCK_HZ, &SLOT);

        systick.init(10);
        systick.start_busy_wait(1);

        assert_eq!(hw.last_enabling_write.get(), ENABLE | CLKSOURCE);
        assert!(!systick.is_enabled());
        assert!(!systick.interrupt_enabled());
    }

    #[test]
    fn expiry_flag_reports_a_wrap() {
        static SLOT: CallbackSlot = CallbackSlot::new();
        let hw = SimulatedSysTick::new(1);
        let systick = SysTick::new_with_callback_slot(&hw, CLOCK_HZ, &SLOT);

        systick.init(1);
        assert!(!systick.has_expired());
        assert!(systick.has_expired());
        assert_eq!(hw.flag_observations.get(), 1);
    }

    #[test]
    fn start_and_stop_toggle_only_enable() {
        static SLOT: CallbackSlot = CallbackSlot::new();
        let hw = SimulatedSysTick::never_wraps();
        let systick = SysTick::new_with_callback_slot(&hw, CLOCK_HZ, &SLOT);

        systick.init(5);
        hw.cvr.set(777);

        systick.stop();
        assert_eq!(hw.csr.get(), TICKINT | CLKSOURCE);
        assert_eq!(hw.rvr.get(), 79_999);
        assert_eq!(hw.cvr.get(), 777);
        assert_eq!(systick.state(), TimerState::Stopped);

        systick.start();
        assert_eq!(hw.csr.get(), ENABLE | TICKINT | CLKSOURCE);
        assert_eq!(hw.rvr.get(), 79_999);
        assert_eq!(hw.cvr.get(), 777);
        assert_eq!(systick.state(), TimerState::RunningInterrupt);
    }

    #[test]
    fn start_resumes_the_last_written_mode() {
        static SLOT: CallbackSlot = CallbackSlot::new();
        let hw = SimulatedSysTick::never_wraps();
        let systick = SysTick::new_with_callback_slot(&hw, CLOCK_HZ, &SLOT);

        hw.rvr.set(999);
        hw.csr.set(CLKSOURCE);
        assert_eq!(systick.state(), TimerState::Stopped);

        systick.start();
        assert_eq!(systick.state(), TimerState::RunningPolling);
    }

    #[test]
    fn callback_runs_until_deinit() {
        static SLOT: CallbackSlot = CallbackSlot::new();
        static TICKS: AtomicUsize = AtomicUsize::new(0);
        fn tick() {
            TICKS.fetch_add(1, Ordering::Relaxed);
        }

        let hw = SimulatedSysTick::never_wraps();
        let systick = SysTick::new_with_callback_slot(&hw, CLOCK_HZ, &SLOT);

        assert!(!systick.handle_interrupt());
        assert!(systick.callback().is_none());

        systick.init(1);
        systick.set_callback(tick);
        assert!(systick.handle_interrupt());
        assert_eq!(TICKS.load(Ordering::Relaxed), 1);

        systick.deinit();
        assert!(!systick.handle_interrupt());
        assert_eq!(TICKS.load(Ordering::Relaxed), 1);

        assert!(systick.callback().is_none());
        assert_eq!(hw.csr.get(), 0);
        assert_eq!(hw.rvr.get(), 0);
        assert_eq!(hw.cvr.get(), 0);
        assert_eq!(systick.state(), TimerState::Uninitialized);
    }

    #[test]
    fn last_callback_wins() {
        static FIRST: AtomicUsize = AtomicUsize::new(0);
        static SECOND: AtomicUsize = AtomicUsize::new(0);
        fn first() {
            FIRST.fetch_add(1, Ordering::Relaxed);
        }
        fn second() {
            SECOND.fetch_add(1, Ordering::Relaxed);
        }

        let slot = CallbackSlot::new();
        slot.set(first);
        slot.set(second);
        assert!(slot.invoke());
        assert_eq!(FIRST.load(Ordering::Relaxed), 0);
        assert_eq!(SECOND.load(Ordering::Relaxed), 1);

        slot.clear();
        assert!(!slot.invoke());
        assert_eq!(SECOND.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn vector_table_handler_uses_the_global_slot() {
        static TICKS: AtomicUsize = AtomicUsize::new(0);
        fn tick() {
            TICKS.fetch_add(1, Ordering::Relaxed);
        }

        SYSTICK_CALLBACK.set(tick);
        systick_handler();
        SYSTICK_CALLBACK.clear();
        systick_handler();

        assert_eq!(TICKS.load(Ordering::Relaxed), 1);
    }
}
