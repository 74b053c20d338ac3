// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Utility types shared by the peripheral drivers.

mod static_ref;

pub use self::static_ref::StaticRef;

/// Re-export the tock-register-interface library.
pub mod registers {
    pub use tock_registers::fields::{Field, FieldValue};
    pub use tock_registers::interfaces;
    pub use tock_registers::registers::{InMemoryRegister, ReadWrite};
    pub use tock_registers::{register_bitfields, register_structs, LocalRegisterCopy};
}
