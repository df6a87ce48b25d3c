//! Sensor configuration types
//!
//! Typed values for every multi-bit setting of the VCNL4040. Each type knows
//! its raw bit-field encoding; the driver packs them into the configuration
//! registers with read-modify-write so neighbouring fields are preserved.
//!
//! # Example
//!
//! ```ignore
//! # use vcnl4040::{Vcnl4040Driver, config::{AmbientIntegrationTime, LedCurrent}};
//! # let mut sensor: Vcnl4040Driver<_> = todo!();
//! sensor.set_ambient_integration_time(AmbientIntegrationTime::Ms160)?;
//! sensor.set_proximity_led_current(LedCurrent::Ma100)?;
//! # Ok::<(), vcnl4040::Error<()>>(())
//! ```

/// Ambient light integration time (`ALS_IT`)
///
/// Longer integration gives finer lux resolution at the cost of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AmbientIntegrationTime {
    /// 80 ms, 0.1 lux/step, 6553.5 lux full scale
    #[default]
    Ms80 = 0,
    /// 160 ms, 0.05 lux/step
    Ms160 = 1,
    /// 320 ms, 0.025 lux/step
    Ms320 = 2,
    /// 640 ms, 0.0125 lux/step, 819.2 lux full scale
    Ms640 = 3,
}

impl AmbientIntegrationTime {
    /// Integration period in milliseconds
    #[must_use]
    pub const fn millis(self) -> u32 {
        80 << (self as u32)
    }

    /// Lux represented by one count of `ALS_DATA` at this integration time
    #[must_use]
    pub fn lux_per_count(self) -> f32 {
        0.1 / f32::from(1u8 << (self as u8))
    }

    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::Ms80,
            1 => Self::Ms160,
            2 => Self::Ms320,
            _ => Self::Ms640,
        }
    }
}

/// Ambient light interrupt persistence (`ALS_PERS`)
///
/// Number of consecutive out-of-window samples before the interrupt fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AmbientPersistence {
    /// 1 sample
    #[default]
    One = 0,
    /// 2 samples
    Two = 1,
    /// 4 samples
    Four = 2,
    /// 8 samples
    Eight = 3,
}

impl AmbientPersistence {
    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::One,
            1 => Self::Two,
            2 => Self::Four,
            _ => Self::Eight,
        }
    }
}

/// Proximity integration time (`PS_IT`)
///
/// Expressed in multiples of the base IRED pulse width `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProximityIntegrationTime {
    /// 1T
    #[default]
    T1 = 0,
    /// 1.5T
    T1_5 = 1,
    /// 2T
    T2 = 2,
    /// 2.5T
    T2_5 = 3,
    /// 3T
    T3 = 4,
    /// 3.5T
    T3_5 = 5,
    /// 4T
    T4 = 6,
    /// 8T
    T8 = 7,
}

impl ProximityIntegrationTime {
    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => Self::T1,
            1 => Self::T1_5,
            2 => Self::T2,
            3 => Self::T2_5,
            4 => Self::T3,
            5 => Self::T3_5,
            6 => Self::T4,
            _ => Self::T8,
        }
    }
}

/// Proximity interrupt persistence (`PS_PERS`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProximityPersistence {
    /// 1 hit
    #[default]
    One = 0,
    /// 2 hits
    Two = 1,
    /// 3 hits
    Three = 2,
    /// 4 hits
    Four = 3,
}

impl ProximityPersistence {
    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::One,
            1 => Self::Two,
            2 => Self::Three,
            _ => Self::Four,
        }
    }
}

/// IRED on/off duty ratio (`PS_DUTY`)
///
/// A lower duty ratio lowers average LED current and response rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProximityDutyCycle {
    /// 1/40
    #[default]
    Duty1_40 = 0,
    /// 1/80
    Duty1_80 = 1,
    /// 1/160
    Duty1_160 = 2,
    /// 1/320
    Duty1_320 = 3,
}

impl ProximityDutyCycle {
    /// Denominator of the duty ratio
    #[must_use]
    pub const fn ratio(self) -> u16 {
        40 << (self as u16)
    }

    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::Duty1_40,
            1 => Self::Duty1_80,
            2 => Self::Duty1_160,
            _ => Self::Duty1_320,
        }
    }
}

/// Proximity interrupt trigger condition (`PS_INT`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProximityInterruptMode {
    /// Proximity interrupts disabled
    #[default]
    Disabled = 0,
    /// Trigger when an object comes closer than the high threshold
    Close = 1,
    /// Trigger when an object moves beyond the low threshold
    Away = 2,
    /// Trigger on both close and away events
    CloseOrAway = 3,
}

impl ProximityInterruptMode {
    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::Disabled,
            1 => Self::Close,
            2 => Self::Away,
            _ => Self::CloseOrAway,
        }
    }
}

/// Proximity multi-pulse count (`PS_MPS`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MultiPulse {
    /// 1 pulse per measurement
    #[default]
    One = 0,
    /// 2 pulses
    Two = 1,
    /// 4 pulses
    Four = 2,
    /// 8 pulses
    Eight = 3,
}

impl MultiPulse {
    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::One,
            1 => Self::Two,
            2 => Self::Four,
            _ => Self::Eight,
        }
    }
}

/// IRED drive current (`LED_I`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedCurrent {
    /// 50 mA
    #[default]
    Ma50 = 0,
    /// 75 mA
    Ma75 = 1,
    /// 100 mA
    Ma100 = 2,
    /// 120 mA
    Ma120 = 3,
    /// 140 mA
    Ma140 = 4,
    /// 160 mA
    Ma160 = 5,
    /// 180 mA
    Ma180 = 6,
    /// 200 mA
    Ma200 = 7,
}

impl LedCurrent {
    /// Drive current in milliamps
    #[must_use]
    pub const fn milliamps(self) -> u8 {
        match self {
            Self::Ma50 => 50,
            Self::Ma75 => 75,
            Self::Ma100 => 100,
            Self::Ma120 => 120,
            Self::Ma140 => 140,
            Self::Ma160 => 160,
            Self::Ma180 => 180,
            Self::Ma200 => 200,
        }
    }

    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => Self::Ma50,
            1 => Self::Ma75,
            2 => Self::Ma100,
            3 => Self::Ma120,
            4 => Self::Ma140,
            5 => Self::Ma160,
            6 => Self::Ma180,
            _ => Self::Ma200,
        }
    }
}
