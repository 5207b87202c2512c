//! A generic, `no_std` microstep lookup library for **step/dir** stepper drivers.
//!
//! Different driver chips use different bit patterns on their mode-select pins
//! (MS1-MS3, M0-M2, CFG...) to select a microstep resolution. This library maps
//! the human-readable microstep count from a configuration (1, 2, 4, ... 256) to
//! the mode bits each supported chip expects. It is hardware-agnostic: it only
//! produces the values, the caller owns the pin/register writes.

#![no_std]

pub mod enums;
pub mod microsteps;
pub mod models;

pub use enums::{DecayMode, Waveform};
pub use microsteps::{search_table, translate_microsteps, MicrostepTable};
pub use models::{canonical_code, DriverModel, UnknownModel};

/// Lowest valid runtime driver-model code.
pub const DRIVER_MODEL_FIRST: u16 = 2;
/// Highest valid runtime driver-model code.
pub const DRIVER_MODEL_LAST: u16 = 13;

/// Sentinel returned when a recognized model has no entry for the
/// requested microstep count.
pub const MODE_NOT_FOUND: u8 = 0;
/// Sentinel returned for a driver-model code outside the known set.
pub const MODE_UNKNOWN_MODEL: u8 = 1;

/// Default state of the mode switch before a slew.
pub const MODE_SWITCH_BEFORE_SLEW: bool = false;
/// Default state of the mode switch during sleep.
pub const MODE_SWITCH_SLEEP: bool = false;
