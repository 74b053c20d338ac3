// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Cortex-M4 NVIC, as implemented on the TM4C123x.
//!
//! Most NVIC configuration is in the NVIC registers:
//! <https://developer.arm.com/docs/100165/0201/nested-vectored-interrupt-controller/nvic-programmers-model/table-of-nvic-registers>
//!
//! The TM4C123GH6PM wires 139 peripheral interrupts. This driver controls the
//! enable and pending state of the first four register groups (lines 0-127)
//! and the priority of every line that has a priority register (0-139).
//! Requests outside those ranges fail with `ErrorCode::INVAL` without
//! touching a register.

use crate::config::CONFIG;
use crate::priority::Priority;
use crate::utilities::registers::interfaces::{ReadWriteable, Readable, Writeable};
use crate::utilities::registers::{register_bitfields, register_structs, Field, ReadWrite};
use crate::utilities::StaticRef;
use crate::ErrorCode;

/// Number of enable, disable and pending register groups this driver uses.
pub const ENABLE_GROUPS: usize = 4;

/// Number of interrupt priority registers, four lines each.
pub const PRIORITY_REGISTERS: usize = 35;

register_structs! {
    /// NVIC Registers.
    ///
    /// The set/clear banks are laid out for the architectural maximum of 32
    /// groups, as in the ARMv7-M ARM; only the first `ENABLE_GROUPS` are
    /// accessed.
    pub NvicRegisters {
        (0x000 => _reserved0),

        /// Interrupt Set-Enable Registers
        (0x100 => iser: [ReadWrite<u32, NvicSetClear::Register>; 32]),

        /// Interrupt Clear-Enable Registers
        (0x180 => icer: [ReadWrite<u32, NvicSetClear::Register>; 32]),

        /// Interrupt Set-Pending Registers
        (0x200 => ispr: [ReadWrite<u32, NvicSetClear::Register>; 32]),

        /// Interrupt Clear-Pending Registers
        (0x280 => icpr: [ReadWrite<u32, NvicSetClear::Register>; 32]),

        (0x300 => _reserved1),

        /// Interrupt Priority Registers (PRI0-PRI34)
        (0x400 => ipr: [ReadWrite<u32, NvicInterruptPriority::Register>; PRIORITY_REGISTERS]),

        (0x48c => @END),
    }
}

register_bitfields![u32,
    NvicSetClear [
        /// For register NVIC_XXXXn, access interrupt (m+(32*n)).
        BITS            OFFSET(0)   NUMBITS(32)
    ],

    /// Only the top three bits of each priority byte are implemented.
    NvicInterruptPriority [
        /// For register NVIC_IPRn, priority of interrupt number 4n+3.
        PRI_N3          OFFSET(29)  NUMBITS(3),

        /// For register NVIC_IPRn, priority of interrupt number 4n+2.
        PRI_N2          OFFSET(21)  NUMBITS(3),

        /// For register NVIC_IPRn, priority of interrupt number 4n+1.
        PRI_N1          OFFSET(13)  NUMBITS(3),

        /// For register NVIC_IPRn, priority of interrupt number 4n.
        PRI_N0          OFFSET(5)   NUMBITS(3)
    ]
];

/// Priority field of line `4n + slot`, indexed by `slot`.
const PRIORITY_FIELDS: [Field<u32, NvicInterruptPriority::Register>; 4] = [
    NvicInterruptPriority::PRI_N0,
    NvicInterruptPriority::PRI_N1,
    NvicInterruptPriority::PRI_N2,
    NvicInterruptPriority::PRI_N3,
];

/// A peripheral interrupt line, numbered as in the chip's vector table minus
/// the 16 system exceptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InterruptLine(u32);

impl InterruptLine {
    pub const fn new(number: u32) -> InterruptLine {
        InterruptLine(number)
    }

    pub const fn number(self) -> u32 {
        self.0
    }

    /// Index of the enable/disable/pending register holding this line.
    pub const fn enable_group(self) -> usize {
        (self.0 / 32) as usize
    }

    /// Single-bit mask of this line within its enable group.
    pub const fn enable_mask(self) -> u32 {
        1 << (self.0 % 32)
    }

    /// Index of the priority register holding this line.
    pub const fn priority_group(self) -> usize {
        (self.0 / 4) as usize
    }

    /// Bit offset of this line's 3-bit priority field in its register.
    pub const fn priority_offset(self) -> usize {
        (self.0 % 4) as usize * 8 + 5
    }

    fn priority_field(self) -> Field<u32, NvicInterruptPriority::Register> {
        PRIORITY_FIELDS[(self.0 % 4) as usize]
    }
}

/// Driver for the NVIC register block.
pub struct Nvic {
    registers: StaticRef<NvicRegisters>,
}

impl Nvic {
    pub const fn new(base: StaticRef<NvicRegisters>) -> Nvic {
        Nvic { registers: base }
    }

    fn enable_group(&self, line: InterruptLine) -> Result<usize, ErrorCode> {
        let group = line.enable_group();
        if group < ENABLE_GROUPS {
            Ok(group)
        } else {
            log::warn!("nvic: line {} has no enable group, ignored", line.0);
            Err(ErrorCode::INVAL)
        }
    }

    fn priority_register(
        &self,
        line: InterruptLine,
    ) -> Result<&ReadWrite<u32, NvicInterruptPriority::Register>, ErrorCode> {
        self.registers
            .ipr
            .get(line.priority_group())
            .ok_or(ErrorCode::INVAL)
    }

    /// Enable the interrupt
    ///
    /// The set-enable registers ignore zero bits, so writing the single-bit
    /// mask leaves every other line of the group as it was.
    pub fn enable_line(&self, line: InterruptLine) -> Result<(), ErrorCode> {
        let group = self.enable_group(line)?;
        if CONFIG.trace_register_writes {
            log::trace!("nvic: ISER{} <- {:#010x}", group, line.enable_mask());
        }
        self.registers.iser[group].set(line.enable_mask());
        Ok(())
    }

    /// Disable the interrupt
    pub fn disable_line(&self, line: InterruptLine) -> Result<(), ErrorCode> {
        let group = self.enable_group(line)?;
        if CONFIG.trace_register_writes {
            log::trace!("nvic: ICER{} <- {:#010x}", group, line.enable_mask());
        }
        self.registers.icer[group].set(line.enable_mask());
        Ok(())
    }

    pub fn is_line_enabled(&self, line: InterruptLine) -> Result<bool, ErrorCode> {
        let group = self.enable_group(line)?;
        Ok(self.registers.iser[group].get() & line.enable_mask() != 0)
    }

    /// Set the priority of `line`, keeping the other three fields of its
    /// priority register.
    ///
    /// The read-modify-write is not atomic: callers must not update the same
    /// priority register from two execution contexts at once.
    pub fn set_line_priority(
        &self,
        line: InterruptLine,
        priority: Priority,
    ) -> Result<(), ErrorCode> {
        let register = self.priority_register(line).inspect_err(|_| {
            log::warn!("nvic: line {} has no priority register, ignored", line.0)
        })?;
        if CONFIG.trace_register_writes {
            log::trace!(
                "nvic: PRI{}[{}] <- {}",
                line.priority_group(),
                line.priority_offset(),
                priority.value()
            );
        }
        register.modify(line.priority_field().val(priority.into()));
        Ok(())
    }

    pub fn line_priority(&self, line: InterruptLine) -> Result<Priority, ErrorCode> {
        let register = self.priority_register(line)?;
        Ok(Priority::new(register.read(line.priority_field()) as u8))
    }

    /// Force `line` pending
    pub fn set_pending(&self, line: InterruptLine) -> Result<(), ErrorCode> {
        let group = self.enable_group(line)?;
        self.registers.ispr[group].set(line.enable_mask());
        Ok(())
    }

    /// Clear pending state
    pub fn clear_pending(&self, line: InterruptLine) -> Result<(), ErrorCode> {
        let group = self.enable_group(line)?;
        self.registers.icpr[group].set(line.enable_mask());
        Ok(())
    }

    pub fn is_pending(&self, line: InterruptLine) -> Result<bool, ErrorCode> {
        let group = self.enable_group(line)?;
        Ok(self.registers.ispr[group].get() & line.enable_mask() != 0)
    }

    /// Get the lowest numbered pending interrupt, or `None` if none are
    /// pending.
    pub fn next_pending(&self) -> Option<InterruptLine> {
        for (block, ispr) in self.registers.ispr.iter().take(ENABLE_GROUPS).enumerate() {
            let ispr = ispr.get();

            // If there are any high bits there is a pending interrupt
            if ispr != 0 {
                // trailing_zeros == index of first high bit
                let bit = ispr.trailing_zeros();
                return Some(InterruptLine(block as u32 * 32 + bit));
            }
        }
        None
    }

    /// Disable all interrupts
    pub fn disable_all(&self) {
        for icer in self.registers.icer.iter().take(ENABLE_GROUPS) {
            icer.set(!0)
        }
    }

    /// Clear all pending interrupts
    pub fn clear_all_pending(&self) {
        for icpr in self.registers.icpr.iter().take(ENABLE_GROUPS) {
            icpr.set(!0)
        }
    }
}
