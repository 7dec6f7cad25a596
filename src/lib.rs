//! Bit-banged SPI driver for the TI DRV8301 three-phase gate driver.
//!
//! The link is software-emulated over plain GPIO ([`BitBangDriver`]), so no
//! SPI peripheral is required; any host exposing `embedded-hal` pins and a
//! delay source will do. [`Drv8301`] layers the chip's 16-bit register
//! protocol and the configuration sequences (power-up, PWM input mode,
//! fault handling, device ID) on top of the [`Drv8301Driver`] seam.
//!
//! Everything is blocking and single-master: one `&mut` owner of the pins,
//! no interrupts, no locking, bounded time per operation.

#![cfg_attr(not(test), no_std)]

mod chip;
mod driver;

pub use chip::{Drv8301, OcpMode, PwmMode, Reg, OC_ADJ_DEFAULT};
pub use driver::bitbang::BitBangDriver;
pub use driver::Drv8301Driver;
