// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! ARM System Control Block: core exception enables and priorities.
//!
//! <http://infocenter.arm.com/help/index.jsp?topic=/com.arm.doc.dui0553a/CIHFDJCA.html>
//!
//! Only the system-handler priority registers (SYS_PRI1-3) and the System
//! Handler Control and State register are driven here.

use crate::config::CONFIG;
use crate::priority::Priority;
use crate::utilities::registers::interfaces::{ReadWriteable, Readable};
use crate::utilities::registers::{register_bitfields, register_structs, ReadWrite};
use crate::utilities::StaticRef;
use crate::ErrorCode;

register_structs! {
    /// In an ARMv7-M processor, a System Control Block (SCB) in the SCS
    /// provides key status information and control features for the processor.
    pub ScbRegisters {
        /// CPUID, ICSR, VTOR, AIRCR, SCR and CCR
        (0x00 => _reserved0),

        /// System Handler Priority Register 1
        (0x18 => sys_pri1: ReadWrite<u32, SystemHandlerPriority1::Register>),

        /// System Handler Priority Register 2
        (0x1c => sys_pri2: ReadWrite<u32, SystemHandlerPriority2::Register>),

        /// System Handler Priority Register 3
        (0x20 => sys_pri3: ReadWrite<u32, SystemHandlerPriority3::Register>),

        /// System Handler Control and State Register
        (0x24 => shcsr: ReadWrite<u32, SystemHandlerControlAndState::Register>),

        (0x28 => @END),
    }
}

register_bitfields![u32,
    SystemHandlerPriority1 [
        USAGE           OFFSET(21)  NUMBITS(3),
        BUS             OFFSET(13)  NUMBITS(3),
        MEM             OFFSET(5)   NUMBITS(3)
    ],

    SystemHandlerPriority2 [
        SVC             OFFSET(29)  NUMBITS(3)
    ],

    SystemHandlerPriority3 [
        TICK            OFFSET(29)  NUMBITS(3),
        PENDSV          OFFSET(21)  NUMBITS(3),
        DEBUG           OFFSET(5)   NUMBITS(3)
    ],

    SystemHandlerControlAndState [
        USGFAULTENA     OFFSET(18)  NUMBITS(1),
        BUSFAULTENA     OFFSET(17)  NUMBITS(1),
        MEMFAULTENA     OFFSET(16)  NUMBITS(1)
    ]
];

/// Core exceptions with an enable bit or a configurable priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exception {
    MemFault,
    BusFault,
    UsageFault,
    SVCall,
    DebugMonitor,
    PendSV,
    SysTick,
    /// Any other exception number.
    ///
    /// Enabling or disabling `Other` enables or disables all three
    /// configurable faults at once. Setting its priority is not supported.
    Other,
}

impl Exception {
    /// Map an exception number from the vector table to an `Exception`.
    /// Numbers without a dedicated control map to `Other`.
    pub const fn from_vector_number(number: u32) -> Exception {
        match number {
            4 => Exception::MemFault,
            5 => Exception::BusFault,
            6 => Exception::UsageFault,
            11 => Exception::SVCall,
            12 => Exception::DebugMonitor,
            14 => Exception::PendSV,
            15 => Exception::SysTick,
            _ => Exception::Other,
        }
    }

    pub const fn vector_number(self) -> Option<u32> {
        match self {
            Exception::MemFault => Some(4),
            Exception::BusFault => Some(5),
            Exception::UsageFault => Some(6),
            Exception::SVCall => Some(11),
            Exception::DebugMonitor => Some(12),
            Exception::PendSV => Some(14),
            Exception::SysTick => Some(15),
            Exception::Other => None,
        }
    }

    /// MemFault, BusFault and UsageFault are the only exceptions with an
    /// enable bit.
    pub const fn is_configurable_fault(self) -> bool {
        matches!(
            self,
            Exception::MemFault | Exception::BusFault | Exception::UsageFault
        )
    }
}

/// Driver for the System Control Block.
pub struct Scb {
    registers: StaticRef<ScbRegisters>,
}

impl Scb {
    pub const fn new(base: StaticRef<ScbRegisters>) -> Scb {
        Scb { registers: base }
    }

    /// Enable the handler of a configurable fault.
    ///
    /// Every exception other than the three configurable faults takes the
    /// fallback branch and enables all three faults together. For
    /// `Exception::Other` this is the documented behavior; for the named
    /// system exceptions it is kept for compatibility with existing callers
    /// and logged, unless `strict_exceptions` turns it into an error.
    pub fn enable_exception(&self, exception: Exception) -> Result<(), ErrorCode> {
        match exception {
            Exception::MemFault => self
                .registers
                .shcsr
                .modify(SystemHandlerControlAndState::MEMFAULTENA::SET),
            Exception::BusFault => self
                .registers
                .shcsr
                .modify(SystemHandlerControlAndState::BUSFAULTENA::SET),
            Exception::UsageFault => self
                .registers
                .shcsr
                .modify(SystemHandlerControlAndState::USGFAULTENA::SET),
            Exception::Other => self.enable_faults(),
            exception => {
                self.check_fault_fallback(exception)?;
                self.enable_faults();
            }
        }
        Ok(())
    }

    /// Disable the handler of a configurable fault. Mirrors
    /// `enable_exception`, including the fallback branch.
    pub fn disable_exception(&self, exception: Exception) -> Result<(), ErrorCode> {
        match exception {
            Exception::MemFault => self
                .registers
                .shcsr
                .modify(SystemHandlerControlAndState::MEMFAULTENA::CLEAR),
            Exception::BusFault => self
                .registers
                .shcsr
                .modify(SystemHandlerControlAndState::BUSFAULTENA::CLEAR),
            Exception::UsageFault => self
                .registers
                .shcsr
                .modify(SystemHandlerControlAndState::USGFAULTENA::CLEAR),
            Exception::Other => self.disable_faults(),
            exception => {
                self.check_fault_fallback(exception)?;
                self.disable_faults();
            }
        }
        Ok(())
    }

    fn check_fault_fallback(&self, exception: Exception) -> Result<(), ErrorCode> {
        if CONFIG.strict_exception_enable {
            return Err(ErrorCode::NOSUPPORT);
        }
        log::warn!(
            "scb: {:?} has no enable bit, applying to all configurable faults",
            exception
        );
        Ok(())
    }

    /// Enable MemFault, BusFault and UsageFault handlers.
    pub fn enable_faults(&self) {
        if CONFIG.trace_register_writes {
            log::trace!("scb: SHCSR |= MEMFAULTENA | BUSFAULTENA | USGFAULTENA");
        }
        self.registers.shcsr.modify(
            SystemHandlerControlAndState::MEMFAULTENA::SET
                + SystemHandlerControlAndState::BUSFAULTENA::SET
                + SystemHandlerControlAndState::USGFAULTENA::SET,
        );
    }

    /// Disable MemFault, BusFault and UsageFault handlers. Those faults then
    /// escalate to HardFault.
    pub fn disable_faults(&self) {
        if CONFIG.trace_register_writes {
            log::trace!("scb: SHCSR &= !(MEMFAULTENA | BUSFAULTENA | USGFAULTENA)");
        }
        self.registers.shcsr.modify(
            SystemHandlerControlAndState::MEMFAULTENA::CLEAR
                + SystemHandlerControlAndState::BUSFAULTENA::CLEAR
                + SystemHandlerControlAndState::USGFAULTENA::CLEAR,
        );
    }

    pub fn is_fault_enabled(&self, exception: Exception) -> Result<bool, ErrorCode> {
        let shcsr = &self.registers.shcsr;
        match exception {
            Exception::MemFault => Ok(shcsr.is_set(SystemHandlerControlAndState::MEMFAULTENA)),
            Exception::BusFault => Ok(shcsr.is_set(SystemHandlerControlAndState::BUSFAULTENA)),
            Exception::UsageFault => Ok(shcsr.is_set(SystemHandlerControlAndState::USGFAULTENA)),
            _ => Err(ErrorCode::NOSUPPORT),
        }
    }

    /// Set the priority of a system exception, keeping the other fields of
    /// its SYS_PRIn register. `Exception::Other` has no priority field and is
    /// rejected without touching any register.
    pub fn set_exception_priority(
        &self,
        exception: Exception,
        priority: Priority,
    ) -> Result<(), ErrorCode> {
        let level = u32::from(priority);
        match exception {
            Exception::MemFault => self
                .registers
                .sys_pri1
                .modify(SystemHandlerPriority1::MEM.val(level)),
            Exception::BusFault => self
                .registers
                .sys_pri1
                .modify(SystemHandlerPriority1::BUS.val(level)),
            Exception::UsageFault => self
                .registers
                .sys_pri1
                .modify(SystemHandlerPriority1::USAGE.val(level)),
            Exception::SVCall => self
                .registers
                .sys_pri2
                .modify(SystemHandlerPriority2::SVC.val(level)),
            Exception::DebugMonitor => self
                .registers
                .sys_pri3
                .modify(SystemHandlerPriority3::DEBUG.val(level)),
            Exception::PendSV => self
                .registers
                .sys_pri3
                .modify(SystemHandlerPriority3::PENDSV.val(level)),
            Exception::SysTick => self
                .registers
                .sys_pri3
                .modify(SystemHandlerPriority3::TICK.val(level)),
            Exception::Other => return Err(ErrorCode::NOSUPPORT),
        }
        if CONFIG.trace_register_writes {
            log::trace!("scb: {:?} priority <- {}", exception, level);
        }
        Ok(())
    }

    pub fn exception_priority(&self, exception: Exception) -> Result<Priority, ErrorCode> {
        let level = match exception {
            Exception::MemFault => self.registers.sys_pri1.read(SystemHandlerPriority1::MEM),
            Exception::BusFault => self.registers.sys_pri1.read(SystemHandlerPriority1::BUS),
            Exception::UsageFault => self.registers.sys_pri1.read(SystemHandlerPriority1::USAGE),
            Exception::SVCall => self.registers.sys_pri2.read(SystemHandlerPriority2::SVC),
            Exception::DebugMonitor => self.registers.sys_pri3.read(SystemHandlerPriority3::DEBUG),
            Exception::PendSV => self.registers.sys_pri3.read(SystemHandlerPriority3::PENDSV),
            Exception::SysTick => self.registers.sys_pri3.read(SystemHandlerPriority3::TICK),
            Exception::Other => return Err(ErrorCode::NOSUPPORT),
        };
        Ok(Priority::new(level as u8))
    }
}
