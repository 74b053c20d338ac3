// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Interrupt and exception priority levels.
//!
//! The TM4C123x implements three priority bits per interrupt, placed in the
//! top three bits of each 8-bit priority byte. Both the NVIC line priorities
//! and the SCB system-handler priorities use the same encoding.

use crate::ErrorCode;

/// A 3-bit priority level.
///
/// Lower values are more urgent: among pending and enabled sources the
/// hardware services the one with the numerically lowest priority first.
/// The derived ordering compares the raw level, so `Priority::HIGHEST` is the
/// *smallest* value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    /// Number of implemented priority bits.
    pub const BITS: u32 = 3;

    const MASK: u8 = (1 << Self::BITS) - 1;

    /// The most urgent level, 0.
    pub const HIGHEST: Priority = Priority(0);

    /// The least urgent level, 7.
    pub const LOWEST: Priority = Priority(Self::MASK);

    /// Create a priority from `level`, discarding every bit above the third.
    pub const fn new(level: u8) -> Priority {
        Priority(level & Self::MASK)
    }

    /// Create a priority from `level`, failing with `ErrorCode::SIZE` if it
    /// does not fit in three bits.
    pub fn try_new(level: u8) -> Result<Priority, ErrorCode> {
        if level > Self::MASK {
            Err(ErrorCode::SIZE)
        } else {
            Ok(Priority(level))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<Priority> for u32 {
    fn from(priority: Priority) -> u32 {
        u32::from(priority.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn new_discards_upper_bits(level: u8) {
        assert_eq!(Priority::new(level), Priority::new(level & 0b111));
        assert!(Priority::new(level).value() <= 7);
    }

    #[quickcheck]
    fn try_new_rejects_wide_levels(level: u8) {
        match Priority::try_new(level) {
            Ok(priority) => {
                assert!(level <= 7);
                assert_eq!(priority.value(), level);
            }
            Err(e) => {
                assert!(level > 7);
                assert_eq!(e, ErrorCode::SIZE);
            }
        }
    }

    #[test]
    fn bounds() {
        assert_eq!(Priority::HIGHEST.value(), 0);
        assert_eq!(Priority::LOWEST.value(), 7);
        assert!(Priority::HIGHEST < Priority::LOWEST);
        assert_eq!(u32::from(Priority::new(5)), 5);
    }
}
