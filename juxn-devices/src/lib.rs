//! The minimal device pair this workspace ships with: a `system` device
//! satisfying the slot-dispatch contract, and a `console` device that
//! writes to standard output/error. Anything implementing
//! [`juxn_core::Device`] can be registered into any of the other 14 slots;
//! richer peripherals (screen, audio, file, datetime, controller) are out
//! of scope for this crate.
#![warn(missing_docs)]

mod console;
mod system;

pub use console::Console;
pub use system::System;
