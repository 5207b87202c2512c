//! Microstep table search and driver dispatch.

use crate::models::DriverModel;
use crate::{MODE_NOT_FOUND, MODE_UNKNOWN_MODEL};

/// An ordered list of (microsteps, mode bits) pairs for one driver model.
pub type MicrostepTable = &'static [(u16, u8)];

/// Scans a table for a microstep count and returns its mode bits.
///
/// Returns [`MODE_NOT_FOUND`] (0) when the table has no matching entry.
/// Callers must treat 0 as "not supported" when it is outside the
/// model's real mode-bit range.
#[must_use]
pub fn search_table(table: &[(u16, u8)], microsteps: u16) -> u8 {
    for &(steps, mode) in table {
        if steps == microsteps {
            return mode;
        }
    }

    MODE_NOT_FOUND
}

/// Translates the human-readable microsteps in a configuration to the
/// mode-bit setting for the given driver model.
///
/// `axis` is accepted for call-site symmetry and future diagnostics; the
/// translation does not depend on it.
///
/// Unmatched inputs never fail loudly: an unsupported microstep count
/// for a recognized model yields [`MODE_NOT_FOUND`] (0), while a model
/// code outside the known set yields [`MODE_UNKNOWN_MODEL`] (1). The
/// asymmetry is deliberate, 1 acts as a full-step-like fallback when
/// nothing is known about the driver at all.
///
/// Only the EN-low servo is wired into the translation;
/// [`DriverModel::Servo2`] takes the unknown-model fallback too.
#[must_use]
pub fn translate_microsteps(_axis: u8, model: u16, microsteps: u16) -> u8 {
    match DriverModel::from_code(model) {
        Some(DriverModel::Servo2) | None => MODE_UNKNOWN_MODEL,
        Some(model) => search_table(model.microstep_table(), microsteps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_entry_resolves() {
        for model in DriverModel::ALL {
            for &(steps, mode) in model.microstep_table() {
                assert_eq!(model.mode_bits(steps), Some(mode));
                if model == DriverModel::Servo2 {
                    continue;
                }
                assert_eq!(
                    translate_microsteps(0, model.code(), steps),
                    mode,
                    "{model:?} at {steps} microsteps"
                );
            }
        }
    }

    #[test]
    fn test_en_high_servo_takes_the_fallback() {
        for microsteps in [0, 1, 2, 3, 8, 128, 256] {
            assert_eq!(
                translate_microsteps(0, DriverModel::Servo2.code(), microsteps),
                MODE_UNKNOWN_MODEL
            );
        }
        // the EN-low servo still resolves through the gearing table
        assert_eq!(translate_microsteps(0, DriverModel::Servo.code(), 1), 0);
        assert_eq!(translate_microsteps(0, DriverModel::Servo.code(), 128), 1);
    }

    #[test]
    fn test_known_settings() {
        assert_eq!(translate_microsteps(0, DriverModel::A4988.code(), 8), 3);
        assert_eq!(translate_microsteps(0, DriverModel::Drv8825.code(), 32), 5);
        assert_eq!(translate_microsteps(0, DriverModel::Tmc2209.code(), 8), 0);
        assert_eq!(translate_microsteps(0, DriverModel::TmcSpi.code(), 256), 0);
        assert_eq!(translate_microsteps(0, DriverModel::S109.code(), 1), 4);
    }

    #[test]
    fn test_unsupported_microsteps() {
        assert_eq!(
            translate_microsteps(0, DriverModel::Tmc2209.code(), 3),
            MODE_NOT_FOUND
        );
        assert_eq!(
            translate_microsteps(0, DriverModel::A4988.code(), 32),
            MODE_NOT_FOUND
        );
        assert_eq!(DriverModel::Tmc2209.mode_bits(3), None);
        assert_eq!(DriverModel::A4988.mode_bits(32), None);
    }

    #[test]
    fn test_unknown_model() {
        assert_eq!(translate_microsteps(0, 999, 16), MODE_UNKNOWN_MODEL);
        assert_eq!(translate_microsteps(0, 0, 16), MODE_UNKNOWN_MODEL);
        assert_eq!(translate_microsteps(0, 1, 1), MODE_UNKNOWN_MODEL);
        assert_eq!(translate_microsteps(0, 14, 8), MODE_UNKNOWN_MODEL);
    }

    #[test]
    fn test_axis_is_ignored() {
        for axis in 0..4 {
            assert_eq!(translate_microsteps(axis, DriverModel::A4988.code(), 8), 3);
        }
    }

    #[test]
    fn test_lv8729_raps128_agree() {
        for microsteps in 0..=256 {
            assert_eq!(
                translate_microsteps(0, DriverModel::Lv8729.code(), microsteps),
                translate_microsteps(0, DriverModel::Raps128.code(), microsteps)
            );
        }
    }

    #[test]
    fn test_scan_order_does_not_matter() {
        for model in DriverModel::ALL {
            let table = model.microstep_table();
            let mut reversed = [(0u16, 0u8); 16];
            let reversed = &mut reversed[..table.len()];
            for (dst, &src) in reversed.iter_mut().zip(table.iter().rev()) {
                *dst = src;
            }

            for microsteps in 0..=256 {
                assert_eq!(
                    search_table(table, microsteps),
                    search_table(reversed, microsteps)
                );
            }
        }
    }

    #[test]
    fn test_search_empty_table() {
        assert_eq!(search_table(&[], 16), MODE_NOT_FOUND);
    }
}
