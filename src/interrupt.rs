//! Interrupt status decoding
//!
//! The VCNL4040 reports interrupt events in the high byte of `INT_FLAG`
//! (0x0B). Reading the register clears the flags on the chip, so a status
//! value should be inspected in full rather than re-read per flag.
//!
//! Which events can fire is configured on the driver:
//! - Proximity: [`ProximityInterruptMode`](crate::config::ProximityInterruptMode)
//!   against the `PS_THDL` / `PS_THDH` window
//! - Ambient light: an enable bit against the `ALS_THDL` / `ALS_THDH` window
//!
//! # Example
//!
//! ```ignore
//! # use vcnl4040::{Vcnl4040Driver, config::ProximityInterruptMode};
//! # let mut sensor: Vcnl4040Driver<_> = todo!();
//! sensor.set_proximity_low_threshold(200)?;
//! sensor.set_proximity_high_threshold(1000)?;
//! sensor.enable_proximity_interrupts(ProximityInterruptMode::CloseOrAway)?;
//!
//! let status = sensor.read_interrupt_status()?;
//! if status.proximity_close() {
//!     // object approached
//! }
//! # Ok::<(), vcnl4040::Error<()>>(())
//! ```

/// Object moved beyond the proximity low threshold
pub const PROXIMITY_AWAY: u8 = 0x01;
/// Object came closer than the proximity high threshold
pub const PROXIMITY_CLOSE: u8 = 0x02;
/// Ambient light rose above the high threshold
pub const AMBIENT_LIGHT_HIGH: u8 = 0x10;
/// Ambient light fell below the low threshold
pub const AMBIENT_LIGHT_LOW: u8 = 0x20;
/// Proximity entered sunlight protection mode
pub const SUNLIGHT_PROTECTION: u8 = 0x40;

/// Interrupt status flags
///
/// Wraps the raw flag byte. Bits that the chip leaves reserved are kept as
/// read and are visible through [`bits`](Self::bits).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptStatus(u8);

impl InterruptStatus {
    /// Wrap a raw flag byte
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw flag byte
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Proximity away event
    #[must_use]
    pub const fn proximity_away(self) -> bool {
        self.0 & PROXIMITY_AWAY != 0
    }

    /// Proximity close event
    #[must_use]
    pub const fn proximity_close(self) -> bool {
        self.0 & PROXIMITY_CLOSE != 0
    }

    /// Ambient light high-threshold event
    #[must_use]
    pub const fn ambient_light_high(self) -> bool {
        self.0 & AMBIENT_LIGHT_HIGH != 0
    }

    /// Ambient light low-threshold event
    #[must_use]
    pub const fn ambient_light_low(self) -> bool {
        self.0 & AMBIENT_LIGHT_LOW != 0
    }

    /// Sunlight protection engaged on the proximity channel
    #[must_use]
    pub const fn sunlight_protection(self) -> bool {
        self.0 & SUNLIGHT_PROTECTION != 0
    }

    /// Check if any event flag is set
    #[must_use]
    pub const fn any(self) -> bool {
        self.0
            & (PROXIMITY_AWAY
                | PROXIMITY_CLOSE
                | AMBIENT_LIGHT_HIGH
                | AMBIENT_LIGHT_LOW
                | SUNLIGHT_PROTECTION)
            != 0
    }
}

impl From<InterruptStatus> for u8 {
    fn from(status: InterruptStatus) -> Self {
        status.0
    }
}
