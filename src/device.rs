//! High-level driver API for the VCNL4040
//!
//! This module provides a user-friendly interface to the VCNL4040 sensor:
//! identity verification, sensor enable defaults, data reads and typed
//! accessors for every configuration bit-field.
//!
//! Configuration setters use read-modify-write on the shared 16-bit
//! registers, so changing one setting never disturbs another.

use crate::config::{
    AmbientIntegrationTime, AmbientPersistence, LedCurrent, MultiPulse, ProximityDutyCycle,
    ProximityIntegrationTime, ProximityInterruptMode, ProximityPersistence,
};
use crate::interrupt::InterruptStatus;
use crate::registers::Vcnl4040 as RegisterDevice;
use crate::{DEVICE_ID, Error};

use device_driver::RegisterInterface;

/// Main driver for the VCNL4040
pub struct Vcnl4040Driver<I> {
    device: RegisterDevice<I>,
}

impl<I> Vcnl4040Driver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Create a new VCNL4040 driver instance
    ///
    /// This verifies the device ID register but does not power up any
    /// sensor. Call `init()` after construction to apply the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The ID register contains a value other than [`DEVICE_ID`]
    pub fn new(interface: I) -> Result<Self, Error<I::Error>> {
        let mut driver = Self {
            device: RegisterDevice::new(interface),
        };

        let id = driver.read_device_id()?;
        if id != DEVICE_ID {
            #[cfg(feature = "defmt")]
            defmt::warn!("VCNL4040: unexpected device id {=u16:#x}", id);
            return Err(Error::InvalidDevice(id));
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("VCNL4040: device id ok");

        Ok(driver)
    }

    /// Initialize the device with default settings
    ///
    /// Powers up the proximity, ambient light and white channels and
    /// selects 16-bit proximity output. Every other bit in the configuration
    /// registers keeps its current value.
    ///
    /// After enabling the channels this waits one ambient integration period
    /// so the first reads return a completed measurement.
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay provider implementing `embedded_hal::delay::DelayNs`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut sensor = Vcnl4040Driver::new(interface)?;
    /// sensor.init(&mut delay)?;
    /// let proximity = sensor.read_proximity()?;
    /// ```
    pub fn init<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.device.ps_conf().modify(|w| {
            w.set_ps_sd(false);
            w.set_ps_hd(true);
        })?;

        self.device.als_conf().modify(|w| {
            w.set_als_sd(false);
        })?;

        self.device.ps_conf_ms().modify(|w| {
            w.set_white_sd(false);
        })?;

        let integration_time = self.ambient_integration_time()?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "VCNL4040: sensors enabled, waiting {=u32} ms for first sample",
            integration_time.millis()
        );

        delay.delay_ms(integration_time.millis());

        Ok(())
    }

    /// Read the device ID register
    ///
    /// Should return 0x0186 for a valid VCNL4040
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_device_id(&mut self) -> Result<u16, Error<I::Error>> {
        let reg = self.device.device_id().read()?;
        Ok(reg.device_id())
    }

    // ==================== MEASUREMENTS ====================

    /// Read the proximity output
    ///
    /// 12 or 16 significant bits depending on
    /// [`set_proximity_high_resolution`](Self::set_proximity_high_resolution).
    /// Larger values mean a closer object.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_proximity(&mut self) -> Result<u16, Error<I::Error>> {
        let reg = self.device.ps_data().read()?;
        Ok(reg.data())
    }

    /// Read the raw ambient light output
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_ambient_light(&mut self) -> Result<u16, Error<I::Error>> {
        let reg = self.device.als_data().read()?;
        Ok(reg.data())
    }

    /// Read the raw white channel output
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_white(&mut self) -> Result<u16, Error<I::Error>> {
        let reg = self.device.white_data().read()?;
        Ok(reg.data())
    }

    /// Read ambient light in lux
    ///
    /// Scales the raw ambient output by the resolution of the currently
    /// configured integration time (0.1 lux per count at 80 ms, halving with
    /// each doubling of the integration time).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_lux(&mut self) -> Result<f32, Error<I::Error>> {
        let integration_time = self.ambient_integration_time()?;
        let raw = self.read_ambient_light()?;
        Ok(f32::from(raw) * integration_time.lux_per_count())
    }

    // ==================== SENSOR ENABLE ====================

    /// Power the proximity sensor up or down
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn enable_proximity(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ps_conf().modify(|w| {
            w.set_ps_sd(!enable);
        })?;
        Ok(())
    }

    /// Check whether the proximity sensor is powered up
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_proximity_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ps_conf().read()?;
        Ok(!reg.ps_sd())
    }

    /// Power the ambient light sensor up or down
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn enable_ambient_light(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.als_conf().modify(|w| {
            w.set_als_sd(!enable);
        })?;
        Ok(())
    }

    /// Check whether the ambient light sensor is powered up
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_ambient_light_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.als_conf().read()?;
        Ok(!reg.als_sd())
    }

    /// Power the white channel up or down
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn enable_white_light(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ps_conf_ms().modify(|w| {
            w.set_white_sd(!enable);
        })?;
        Ok(())
    }

    /// Check whether the white channel is powered up
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_white_light_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ps_conf_ms().read()?;
        Ok(!reg.white_sd())
    }

    // ==================== THRESHOLDS ====================

    /// Set the proximity low threshold (`PS_THDL`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_proximity_low_threshold(&mut self, threshold: u16) -> Result<(), Error<I::Error>> {
        self.device.ps_thdl().write(|w| {
            w.set_threshold(threshold);
        })?;
        Ok(())
    }

    /// Read the proximity low threshold (`PS_THDL`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn proximity_low_threshold(&mut self) -> Result<u16, Error<I::Error>> {
        let reg = self.device.ps_thdl().read()?;
        Ok(reg.threshold())
    }

    /// Set the proximity high threshold (`PS_THDH`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_proximity_high_threshold(&mut self, threshold: u16) -> Result<(), Error<I::Error>> {
        self.device.ps_thdh().write(|w| {
            w.set_threshold(threshold);
        })?;
        Ok(())
    }

    /// Read the proximity high threshold (`PS_THDH`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn proximity_high_threshold(&mut self) -> Result<u16, Error<I::Error>> {
        let reg = self.device.ps_thdh().read()?;
        Ok(reg.threshold())
    }

    /// Set the ambient light low threshold (`ALS_THDL`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_ambient_light_low_threshold(
        &mut self,
        threshold: u16,
    ) -> Result<(), Error<I::Error>> {
        self.device.als_thdl().write(|w| {
            w.set_threshold(threshold);
        })?;
        Ok(())
    }

    /// Read the ambient light low threshold (`ALS_THDL`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn ambient_light_low_threshold(&mut self) -> Result<u16, Error<I::Error>> {
        let reg = self.device.als_thdl().read()?;
        Ok(reg.threshold())
    }

    /// Set the ambient light high threshold (`ALS_THDH`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_ambient_light_high_threshold(
        &mut self,
        threshold: u16,
    ) -> Result<(), Error<I::Error>> {
        self.device.als_thdh().write(|w| {
            w.set_threshold(threshold);
        })?;
        Ok(())
    }

    /// Read the ambient light high threshold (`ALS_THDH`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn ambient_light_high_threshold(&mut self) -> Result<u16, Error<I::Error>> {
        let reg = self.device.als_thdh().read()?;
        Ok(reg.threshold())
    }

    // ==================== INTERRUPTS ====================

    /// Enable or disable ambient light threshold interrupts
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn enable_ambient_light_interrupts(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.als_conf().modify(|w| {
            w.set_als_int_en(enable);
        })?;
        Ok(())
    }

    /// Check whether ambient light interrupts are enabled
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn ambient_light_interrupts_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.als_conf().read()?;
        Ok(reg.als_int_en())
    }

    /// Select the proximity interrupt trigger condition
    ///
    /// [`ProximityInterruptMode::Disabled`] turns proximity interrupts off.
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn enable_proximity_interrupts(
        &mut self,
        mode: ProximityInterruptMode,
    ) -> Result<(), Error<I::Error>> {
        self.device.ps_conf().modify(|w| {
            w.set_ps_int(mode as u8);
        })?;
        Ok(())
    }

    /// Read the proximity interrupt trigger condition
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn proximity_interrupt_mode(&mut self) -> Result<ProximityInterruptMode, Error<I::Error>> {
        let reg = self.device.ps_conf().read()?;
        Ok(ProximityInterruptMode::from_bits(reg.ps_int()))
    }

    /// Read interrupt status
    ///
    /// Reading `INT_FLAG` clears the flags on the chip.
    ///
    /// # Returns
    /// Current interrupt status flags
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn read_interrupt_status(&mut self) -> Result<InterruptStatus, Error<I::Error>> {
        let reg = self.device.int_flag().read()?;
        Ok(InterruptStatus::from_bits(reg.flags()))
    }

    /// Set how many consecutive out-of-window ambient samples raise an interrupt
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn set_ambient_light_persistence(
        &mut self,
        persistence: AmbientPersistence,
    ) -> Result<(), Error<I::Error>> {
        self.device.als_conf().modify(|w| {
            w.set_als_pers(persistence as u8);
        })?;
        Ok(())
    }

    /// Read the ambient light interrupt persistence
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn ambient_light_persistence(&mut self) -> Result<AmbientPersistence, Error<I::Error>> {
        let reg = self.device.als_conf().read()?;
        Ok(AmbientPersistence::from_bits(reg.als_pers()))
    }

    /// Set how many consecutive proximity hits raise an interrupt
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn set_proximity_persistence(
        &mut self,
        persistence: ProximityPersistence,
    ) -> Result<(), Error<I::Error>> {
        self.device.ps_conf().modify(|w| {
            w.set_ps_pers(persistence as u8);
        })?;
        Ok(())
    }

    /// Read the proximity interrupt persistence
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn proximity_persistence(&mut self) -> Result<ProximityPersistence, Error<I::Error>> {
        let reg = self.device.ps_conf().read()?;
        Ok(ProximityPersistence::from_bits(reg.ps_pers()))
    }

    /// Route proximity detection to the INT pin as a logic level
    ///
    /// In logic mode the INT pin goes low while an object is closer than the
    /// high threshold and releases once it passes the low threshold; no
    /// `INT_FLAG` read is needed to re-arm it.
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn set_proximity_logic_mode(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ps_conf_ms().modify(|w| {
            w.set_ps_ms(enable);
        })?;
        Ok(())
    }

    // ==================== AMBIENT LIGHT CONFIGURATION ====================

    /// Set the ambient light integration time
    ///
    /// The next sample at the new setting is available after two integration
    /// periods; see [`wait_for_ambient_sample`](Self::wait_for_ambient_sample).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_ambient_integration_time(
        &mut self,
        integration_time: AmbientIntegrationTime,
    ) -> Result<(), Error<I::Error>> {
        self.device.als_conf().modify(|w| {
            w.set_als_it(integration_time as u8);
        })?;
        Ok(())
    }

    /// Read the ambient light integration time
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn ambient_integration_time(&mut self) -> Result<AmbientIntegrationTime, Error<I::Error>> {
        let reg = self.device.als_conf().read()?;
        Ok(AmbientIntegrationTime::from_bits(reg.als_it()))
    }

    /// Block until an ambient sample at the current integration time is ready
    ///
    /// Waits two integration periods, which covers a conversion that was
    /// already in progress when the setting changed.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn wait_for_ambient_sample<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        let integration_time = self.ambient_integration_time()?;
        delay.delay_ms(integration_time.millis() * 2);
        Ok(())
    }

    // ==================== PROXIMITY CONFIGURATION ====================

    /// Set the IRED drive current
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_proximity_led_current(&mut self, current: LedCurrent) -> Result<(), Error<I::Error>> {
        self.device.ps_conf_ms().modify(|w| {
            w.set_led_i(current as u8);
        })?;
        Ok(())
    }

    /// Read the IRED drive current
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn proximity_led_current(&mut self) -> Result<LedCurrent, Error<I::Error>> {
        let reg = self.device.ps_conf_ms().read()?;
        Ok(LedCurrent::from_bits(reg.led_i()))
    }

    /// Set the IRED on/off duty ratio
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_proximity_duty_cycle(
        &mut self,
        duty_cycle: ProximityDutyCycle,
    ) -> Result<(), Error<I::Error>> {
        self.device.ps_conf().modify(|w| {
            w.set_ps_duty(duty_cycle as u8);
        })?;
        Ok(())
    }

    /// Read the IRED on/off duty ratio
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn proximity_duty_cycle(&mut self) -> Result<ProximityDutyCycle, Error<I::Error>> {
        let reg = self.device.ps_conf().read()?;
        Ok(ProximityDutyCycle::from_bits(reg.ps_duty()))
    }

    /// Set the proximity integration time
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_proximity_integration_time(
        &mut self,
        integration_time: ProximityIntegrationTime,
    ) -> Result<(), Error<I::Error>> {
        self.device.ps_conf().modify(|w| {
            w.set_ps_it(integration_time as u8);
        })?;
        Ok(())
    }

    /// Read the proximity integration time
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn proximity_integration_time(
        &mut self,
    ) -> Result<ProximityIntegrationTime, Error<I::Error>> {
        let reg = self.device.ps_conf().read()?;
        Ok(ProximityIntegrationTime::from_bits(reg.ps_it()))
    }

    /// Select 16-bit (`true`) or 12-bit (`false`) proximity output
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_proximity_high_resolution(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ps_conf().modify(|w| {
            w.set_ps_hd(enable);
        })?;
        Ok(())
    }

    /// Check whether proximity output is 16 bits wide
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn proximity_high_resolution(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ps_conf().read()?;
        Ok(reg.ps_hd())
    }

    /// Set the number of IRED pulses per proximity measurement
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_proximity_multi_pulse(&mut self, pulses: MultiPulse) -> Result<(), Error<I::Error>> {
        self.device.ps_conf_ms().modify(|w| {
            w.set_ps_mps(pulses as u8);
        })?;
        Ok(())
    }

    /// Read the number of IRED pulses per proximity measurement
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn proximity_multi_pulse(&mut self) -> Result<MultiPulse, Error<I::Error>> {
        let reg = self.device.ps_conf_ms().read()?;
        Ok(MultiPulse::from_bits(reg.ps_mps()))
    }

    /// Enable or disable proximity smart persistence
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_proximity_smart_persistence(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ps_conf_ms().modify(|w| {
            w.set_ps_smart_pers(enable);
        })?;
        Ok(())
    }

    /// Enable or disable sunlight cancellation on the proximity channel
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_sunlight_cancellation(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ps_conf_ms().modify(|w| {
            w.set_ps_sc_en(enable);
        })?;
        Ok(())
    }

    /// Switch proximity between continuous and active force (one-shot) mode
    ///
    /// In active force mode the sensor only measures after
    /// [`trigger_proximity`](Self::trigger_proximity).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_proximity_active_force(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ps_conf_ms().modify(|w| {
            w.set_ps_af(enable);
        })?;
        Ok(())
    }

    /// Start one proximity measurement in active force mode
    ///
    /// The chip clears the trigger bit itself once the measurement is done.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn trigger_proximity(&mut self) -> Result<(), Error<I::Error>> {
        self.device.ps_conf_ms().modify(|w| {
            w.set_ps_trig(true);
        })?;
        Ok(())
    }

    /// Set the proximity cancellation level (`PS_CANC`)
    ///
    /// The level is subtracted from every proximity reading to remove
    /// crosstalk from a cover glass.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_proximity_cancellation(&mut self, level: u16) -> Result<(), Error<I::Error>> {
        self.device.ps_canc().write(|w| {
            w.set_level(level);
        })?;
        Ok(())
    }

    /// Read the proximity cancellation level (`PS_CANC`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn proximity_cancellation(&mut self) -> Result<u16, Error<I::Error>> {
        let reg = self.device.ps_canc().read()?;
        Ok(reg.level())
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }

    /// Get a reference to the underlying register device (for advanced usage)
    pub const fn device(&self) -> &RegisterDevice<I> {
        &self.device
    }

    /// Get a mutable reference to the underlying register device (for advanced usage)
    pub fn device_mut(&mut self) -> &mut RegisterDevice<I> {
        &mut self.device
    }
}
