/// Step signal wave form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Waveform {
    Square = 2,
    Pulse = 3,
    /// Step on both edges of the step signal.
    Dedge = 4,
}

/// Current decay mode for drivers that expose one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DecayMode {
    Open = 2,
    StealthChop = 3,
    SpreadCycle = 4,
}
