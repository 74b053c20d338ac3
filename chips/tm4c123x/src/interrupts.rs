// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Named interrupt lines of the TM4C123GH6PM (datasheet table 2-9).
//!
//! Gaps in the numbering are reserved lines.

use crate::nvic::InterruptLine;

pub const GPIOA: InterruptLine = InterruptLine::new(0);
pub const GPIOB: InterruptLine = InterruptLine::new(1);
pub const GPIOC: InterruptLine = InterruptLine::new(2);
pub const GPIOD: InterruptLine = InterruptLine::new(3);
pub const GPIOE: InterruptLine = InterruptLine::new(4);
pub const UART0: InterruptLine = InterruptLine::new(5);
pub const UART1: InterruptLine = InterruptLine::new(6);
pub const SSI0: InterruptLine = InterruptLine::new(7);
pub const I2C0: InterruptLine = InterruptLine::new(8);
pub const PWM0_FAULT: InterruptLine = InterruptLine::new(9);
pub const PWM0_0: InterruptLine = InterruptLine::new(10);
pub const PWM0_1: InterruptLine = InterruptLine::new(11);
pub const PWM0_2: InterruptLine = InterruptLine::new(12);
pub const QEI0: InterruptLine = InterruptLine::new(13);
pub const ADC0SS0: InterruptLine = InterruptLine::new(14);
pub const ADC0SS1: InterruptLine = InterruptLine::new(15);
pub const ADC0SS2: InterruptLine = InterruptLine::new(16);
pub const ADC0SS3: InterruptLine = InterruptLine::new(17);
pub const WATCHDOG: InterruptLine = InterruptLine::new(18);
pub const TIMER0A: InterruptLine = InterruptLine::new(19);
pub const TIMER0B: InterruptLine = InterruptLine::new(20);
pub const TIMER1A: InterruptLine = InterruptLine::new(21);
pub const TIMER1B: InterruptLine = InterruptLine::new(22);
pub const TIMER2A: InterruptLine = InterruptLine::new(23);
pub const TIMER2B: InterruptLine = InterruptLine::new(24);
pub const COMP0: InterruptLine = InterruptLine::new(25);
pub const COMP1: InterruptLine = InterruptLine::new(26);
pub const SYSCTL: InterruptLine = InterruptLine::new(28);
pub const FLASH: InterruptLine = InterruptLine::new(29);
pub const GPIOF: InterruptLine = InterruptLine::new(30);
pub const UART2: InterruptLine = InterruptLine::new(33);
pub const SSI1: InterruptLine = InterruptLine::new(34);
pub const TIMER3A: InterruptLine = InterruptLine::new(35);
pub const TIMER3B: InterruptLine = InterruptLine::new(36);
pub const I2C1: InterruptLine = InterruptLine::new(37);
pub const QEI1: InterruptLine = InterruptLine::new(38);
pub const CAN0: InterruptLine = InterruptLine::new(39);
pub const CAN1: InterruptLine = InterruptLine::new(40);
pub const HIBERNATE: InterruptLine = InterruptLine::new(43);
pub const USB0: InterruptLine = InterruptLine::new(44);
pub const PWM0_3: InterruptLine = InterruptLine::new(45);
pub const UDMA: InterruptLine = InterruptLine::new(46);
pub const UDMAERR: InterruptLine = InterruptLine::new(47);
pub const ADC1SS0: InterruptLine = InterruptLine::new(48);
pub const ADC1SS1: InterruptLine = InterruptLine::new(49);
pub const ADC1SS2: InterruptLine = InterruptLine::new(50);
pub const ADC1SS3: InterruptLine = InterruptLine::new(51);
pub const SSI2: InterruptLine = InterruptLine::new(57);
pub const SSI3: InterruptLine = InterruptLine::new(58);
pub const UART3: InterruptLine = InterruptLine::new(59);
pub const UART4: InterruptLine = InterruptLine::new(60);
pub const UART5: InterruptLine = InterruptLine::new(61);
pub const UART6: InterruptLine = InterruptLine::new(62);
pub const UART7: InterruptLine = InterruptLine::new(63);
pub const I2C2: InterruptLine = InterruptLine::new(68);
pub const I2C3: InterruptLine = InterruptLine::new(69);
pub const TIMER4A: InterruptLine = InterruptLine::new(70);
pub const TIMER4B: InterruptLine = InterruptLine::new(71);
pub const TIMER5A: InterruptLine = InterruptLine::new(92);
pub const TIMER5B: InterruptLine = InterruptLine::new(93);
pub const WTIMER0A: InterruptLine = InterruptLine::new(94);
pub const WTIMER0B: InterruptLine = InterruptLine::new(95);
pub const WTIMER1A: InterruptLine = InterruptLine::new(96);
pub const WTIMER1B: InterruptLine = InterruptLine::new(97);
pub const WTIMER2A: InterruptLine = InterruptLine::new(98);
pub const WTIMER2B: InterruptLine = InterruptLine::new(99);
pub const WTIMER3A: InterruptLine = InterruptLine::new(100);
pub const WTIMER3B: InterruptLine = InterruptLine::new(101);
pub const WTIMER4A: InterruptLine = InterruptLine::new(102);
pub const WTIMER4B: InterruptLine = InterruptLine::new(103);
pub const WTIMER5A: InterruptLine = InterruptLine::new(104);
pub const WTIMER5B: InterruptLine = InterruptLine::new(105);
pub const SYSEXC: InterruptLine = InterruptLine::new(106);
pub const PWM1_0: InterruptLine = InterruptLine::new(134);
pub const PWM1_1: InterruptLine = InterruptLine::new(135);
pub const PWM1_2: InterruptLine = InterruptLine::new(136);
pub const PWM1_3: InterruptLine = InterruptLine::new(137);
pub const PWM1_FAULT: InterruptLine = InterruptLine::new(138);

/// Number of peripheral interrupt lines wired on this chip.
pub const NUM_INTERRUPTS: u32 = 139;
