//! Supported step/dir driver models and their per-chip configuration data.

use crate::microsteps::MicrostepTable;

/// Error returned when a raw code cannot be converted to a [`DriverModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownModel;

/// A stepper-driver chip family with a step/dir interface.
///
/// Discriminants are the runtime model codes used in configurations.
/// Build-time variant codes (TMC2130, TMC5160, quiet variants) are
/// normalized to one of these before dispatch, see [`alias`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DriverModel {
    A4988 = 2,
    Drv8825 = 3,
    S109 = 4,
    Lv8729 = 5,
    Raps128 = 6,
    Tmc2100 = 7,
    Tmc2208 = 8,
    Tmc2209 = 9,
    St820 = 10,
    /// Universal TMC SPI comms, covers TMC2130 and TMC5160.
    TmcSpi = 11,
    /// Step/dir servo with EN low. Digital gearing on the M0 pin:
    /// low = 1x, going high = 2, 4, 8, 16, 32, 64, or 128x.
    Servo = 12,
    /// Step/dir servo with EN high. Shares the servo gearing table on
    /// the typed path, but [`crate::translate_microsteps`] does not
    /// dispatch it and returns [`crate::MODE_UNKNOWN_MODEL`] instead.
    Servo2 = 13,
}

impl DriverModel {
    /// All runtime models, in code order.
    pub const ALL: [Self; 12] = [
        Self::A4988,
        Self::Drv8825,
        Self::S109,
        Self::Lv8729,
        Self::Raps128,
        Self::Tmc2100,
        Self::Tmc2208,
        Self::Tmc2209,
        Self::St820,
        Self::TmcSpi,
        Self::Servo,
        Self::Servo2,
    ];

    /// Resolves a raw runtime model code.
    ///
    /// Returns `None` for anything outside the known set, including the
    /// build-time [`alias`] codes.
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            2 => Some(Self::A4988),
            3 => Some(Self::Drv8825),
            4 => Some(Self::S109),
            5 => Some(Self::Lv8729),
            6 => Some(Self::Raps128),
            7 => Some(Self::Tmc2100),
            8 => Some(Self::Tmc2208),
            9 => Some(Self::Tmc2209),
            10 => Some(Self::St820),
            11 => Some(Self::TmcSpi),
            12 => Some(Self::Servo),
            13 => Some(Self::Servo2),
            _ => None,
        }
    }

    /// The raw model code for this driver.
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// The (microsteps, mode bits) pairs this driver supports.
    ///
    /// LV8729 and RAPS128 share one table, their mode-bit layouts are
    /// identical.
    #[must_use]
    pub const fn microstep_table(self) -> MicrostepTable {
        match self {
            Self::A4988 => &[(1, 0), (2, 1), (4, 2), (8, 3), (16, 7)],
            Self::Drv8825 => &[(1, 0), (2, 1), (4, 2), (8, 3), (16, 4), (32, 5)],
            Self::S109 => &[(1, 4), (2, 2), (4, 6), (8, 5), (16, 3), (32, 7)],
            Self::Lv8729 | Self::Raps128 => &[
                (1, 0),
                (2, 1),
                (4, 2),
                (8, 3),
                (16, 4),
                (32, 5),
                (64, 6),
                (128, 7),
            ],
            Self::Tmc2100 => &[(1, 0), (2, 1), (4, 2), (16, 3)],
            Self::Tmc2208 => &[(2, 1), (4, 2), (8, 0), (16, 3)],
            Self::Tmc2209 => &[(8, 0), (16, 3), (32, 1), (64, 2)],
            Self::St820 => &[
                (1, 0),
                (2, 1),
                (4, 2),
                (8, 3),
                (16, 4),
                (32, 5),
                (128, 6),
                (256, 7),
            ],
            Self::TmcSpi => &[
                (1, 8),
                (2, 7),
                (4, 6),
                (8, 5),
                (16, 4),
                (32, 3),
                (64, 2),
                (128, 1),
                (256, 0),
            ],
            Self::Servo | Self::Servo2 => &[
                (1, 0),
                (2, 1),
                (4, 1),
                (8, 1),
                (16, 1),
                (32, 1),
                (64, 1),
                (128, 1),
            ],
        }
    }

    /// Mode bits for the given microstep count, `None` when this driver
    /// has no such setting.
    #[must_use]
    pub fn mode_bits(self, microsteps: u16) -> Option<u8> {
        self.microstep_table()
            .iter()
            .find(|&&(steps, _)| steps == microsteps)
            .map(|&(_, mode)| mode)
    }

    /// Minimum step pulse width in nanoseconds.
    #[must_use]
    pub const fn pulse_width_ns(self) -> u32 {
        match self {
            Self::A4988 => 1000,
            Self::Drv8825 => 2000,
            Self::S109 => 300,
            Self::Lv8729 => 500,
            // 7000 per datasheet? 5000 works on a Mega2560.
            Self::Raps128 => 5000,
            Self::Tmc2100 | Self::Tmc2208 | Self::Tmc2209 | Self::TmcSpi => 103,
            Self::St820 => 20,
            // enough for 500 kHz stepping
            Self::Servo | Self::Servo2 => 1000,
        }
    }
}

impl TryFrom<u16> for DriverModel {
    type Error = UnknownModel;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(UnknownModel)
    }
}

/// Build-time variant codes that never appear at runtime.
///
/// Configurations may name a concrete TMC SPI chip or a quiet variant;
/// those collapse to [`DriverModel::TmcSpi`] or [`DriverModel::Tmc2209`]
/// before dispatch, see [`canonical_code`].
pub mod alias {
    pub const TMC2130: u16 = 100;
    pub const TMC2130_QUIET: u16 = 101;
    pub const TMC2130_VQUIET: u16 = 102;

    pub const TMC5160: u16 = 110;
    pub const TMC5160_QUIET: u16 = 111;
    pub const TMC5160_VQUIET: u16 = 112;

    pub const TMC2209_QUIET: u16 = 121;
    pub const TMC2209_VQUIET: u16 = 122;

    /// Same hardware as SERVO.
    pub const SERVO1: u16 = 12;
}

/// Collapses build-time [`alias`] codes to their runtime model code.
///
/// Any other code, valid or not, passes through unchanged.
#[must_use]
pub const fn canonical_code(code: u16) -> u16 {
    match code {
        alias::TMC2130..=alias::TMC2130_VQUIET | alias::TMC5160..=alias::TMC5160_VQUIET => {
            DriverModel::TmcSpi.code()
        }
        alias::TMC2209_QUIET | alias::TMC2209_VQUIET => DriverModel::Tmc2209.code(),
        _ => code,
    }
}
