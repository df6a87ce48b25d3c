#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod device;
pub mod interface;
pub mod interrupt;
pub mod registers;

// Re-export main types
pub use config::{
    AmbientIntegrationTime, AmbientPersistence, LedCurrent, MultiPulse, ProximityDutyCycle,
    ProximityIntegrationTime, ProximityInterruptMode, ProximityPersistence,
};
pub use device::Vcnl4040Driver;
pub use interface::I2cInterface;
pub use interrupt::InterruptStatus;

/// VCNL4040 I2C address (fixed: 0x60)
///
/// Use [`I2cInterface::default()`] for this address.
pub const I2C_ADDRESS: u8 = 0x60;

/// Expected value of the ID register (command code 0x0C)
pub const DEVICE_ID: u16 = 0x0186;

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Invalid ID register value (contains the actual value read)
    InvalidDevice(u16),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
