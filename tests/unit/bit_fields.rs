//! Unit tests for bit-field packing and isolation
//!
//! Every setter must change only its own field: all other bits of the
//! 16-bit register, reserved ones included, keep the value the hardware had.

use crate::common::{MockInterface, create_initialized_driver};
use vcnl4040::{
    AmbientIntegrationTime, AmbientPersistence, LedCurrent, MultiPulse, ProximityDutyCycle,
    ProximityIntegrationTime, ProximityInterruptMode, ProximityPersistence, Vcnl4040Driver,
};

const ALS_CONF: u8 = 0x00;
const PS_CONF: u8 = 0x03;
const PS_CONF_MS: u8 = 0x04;

/// Bit patterns the other bits are preloaded with
const BACKGROUNDS: [u16; 3] = [0x0000, 0xFFFF, 0xA5A5];

/// Preload `address` with `background`, run `apply`, and check that only
/// the bits in `mask` changed, to `expected`.
fn assert_isolated<F>(address: u8, mask: u16, expected: u16, apply: F)
where
    F: Fn(&mut Vcnl4040Driver<MockInterface>),
{
    for background in BACKGROUNDS {
        let (mut driver, interface) = create_initialized_driver();
        interface.set_register(address, background);

        apply(&mut driver);

        let value = interface.get_register(address);
        assert_eq!(
            value & !mask,
            background & !mask,
            "Bits outside field {:#06x} changed (background {:#06x}, got {:#06x})",
            mask,
            background,
            value
        );
        assert_eq!(
            value & mask,
            expected,
            "Field {:#06x} has wrong value (background {:#06x}, got {:#06x})",
            mask,
            background,
            value
        );
    }
}

#[test]
fn test_ambient_integration_time_field() {
    assert_isolated(ALS_CONF, 0x00C0, 0x0080, |d| {
        d.set_ambient_integration_time(AmbientIntegrationTime::Ms320)
            .unwrap();
    });
    assert_isolated(ALS_CONF, 0x00C0, 0x0000, |d| {
        d.set_ambient_integration_time(AmbientIntegrationTime::Ms80)
            .unwrap();
    });
}

#[test]
fn test_ambient_persistence_field() {
    assert_isolated(ALS_CONF, 0x000C, 0x000C, |d| {
        d.set_ambient_light_persistence(AmbientPersistence::Eight)
            .unwrap();
    });
    assert_isolated(ALS_CONF, 0x000C, 0x0004, |d| {
        d.set_ambient_light_persistence(AmbientPersistence::Two)
            .unwrap();
    });
}

#[test]
fn test_ambient_enable_field() {
    assert_isolated(ALS_CONF, 0x0001, 0x0000, |d| {
        d.enable_ambient_light(true).unwrap();
    });
    assert_isolated(ALS_CONF, 0x0001, 0x0001, |d| {
        d.enable_ambient_light(false).unwrap();
    });
}

#[test]
fn test_ambient_interrupt_enable_field() {
    assert_isolated(ALS_CONF, 0x0002, 0x0002, |d| {
        d.enable_ambient_light_interrupts(true).unwrap();
    });
    assert_isolated(ALS_CONF, 0x0002, 0x0000, |d| {
        d.enable_ambient_light_interrupts(false).unwrap();
    });
}

#[test]
fn test_proximity_enable_field() {
    assert_isolated(PS_CONF, 0x0001, 0x0000, |d| {
        d.enable_proximity(true).unwrap();
    });
    assert_isolated(PS_CONF, 0x0001, 0x0001, |d| {
        d.enable_proximity(false).unwrap();
    });
}

#[test]
fn test_proximity_integration_time_field() {
    assert_isolated(PS_CONF, 0x000E, 0x000E, |d| {
        d.set_proximity_integration_time(ProximityIntegrationTime::T8)
            .unwrap();
    });
    assert_isolated(PS_CONF, 0x000E, 0x0006, |d| {
        d.set_proximity_integration_time(ProximityIntegrationTime::T2_5)
            .unwrap();
    });
}

#[test]
fn test_proximity_persistence_field() {
    assert_isolated(PS_CONF, 0x0030, 0x0020, |d| {
        d.set_proximity_persistence(ProximityPersistence::Three)
            .unwrap();
    });
}

#[test]
fn test_proximity_duty_cycle_field() {
    assert_isolated(PS_CONF, 0x00C0, 0x00C0, |d| {
        d.set_proximity_duty_cycle(ProximityDutyCycle::Duty1_320)
            .unwrap();
    });
    assert_isolated(PS_CONF, 0x00C0, 0x0040, |d| {
        d.set_proximity_duty_cycle(ProximityDutyCycle::Duty1_80)
            .unwrap();
    });
}

#[test]
fn test_proximity_interrupt_mode_field() {
    let cases = [
        (ProximityInterruptMode::Disabled, 0x0000),
        (ProximityInterruptMode::Close, 0x0100),
        (ProximityInterruptMode::Away, 0x0200),
        (ProximityInterruptMode::CloseOrAway, 0x0300),
    ];

    for (mode, expected) in cases {
        assert_isolated(PS_CONF, 0x0300, expected, |d| {
            d.enable_proximity_interrupts(mode).unwrap();
        });
    }
}

#[test]
fn test_proximity_high_resolution_field() {
    assert_isolated(PS_CONF, 0x0800, 0x0800, |d| {
        d.set_proximity_high_resolution(true).unwrap();
    });
    assert_isolated(PS_CONF, 0x0800, 0x0000, |d| {
        d.set_proximity_high_resolution(false).unwrap();
    });
}

#[test]
fn test_led_current_field() {
    assert_isolated(PS_CONF_MS, 0x0700, 0x0700, |d| {
        d.set_proximity_led_current(LedCurrent::Ma200).unwrap();
    });
    assert_isolated(PS_CONF_MS, 0x0700, 0x0200, |d| {
        d.set_proximity_led_current(LedCurrent::Ma100).unwrap();
    });
}

#[test]
fn test_multi_pulse_field() {
    assert_isolated(PS_CONF_MS, 0x0060, 0x0040, |d| {
        d.set_proximity_multi_pulse(MultiPulse::Four).unwrap();
    });
}

#[test]
fn test_proximity_mode_flags() {
    assert_isolated(PS_CONF_MS, 0x0001, 0x0001, |d| {
        d.set_sunlight_cancellation(true).unwrap();
    });
    assert_isolated(PS_CONF_MS, 0x0008, 0x0008, |d| {
        d.set_proximity_active_force(true).unwrap();
    });
    assert_isolated(PS_CONF_MS, 0x0010, 0x0000, |d| {
        d.set_proximity_smart_persistence(false).unwrap();
    });
    assert_isolated(PS_CONF_MS, 0x4000, 0x4000, |d| {
        d.set_proximity_logic_mode(true).unwrap();
    });
    assert_isolated(PS_CONF_MS, 0x0004, 0x0004, |d| {
        d.trigger_proximity().unwrap();
    });
}

#[test]
fn test_white_enable_field() {
    assert_isolated(PS_CONF_MS, 0x8000, 0x0000, |d| {
        d.enable_white_light(true).unwrap();
    });
    assert_isolated(PS_CONF_MS, 0x8000, 0x8000, |d| {
        d.enable_white_light(false).unwrap();
    });
}

#[test]
fn test_getters_decode_fields() {
    let (mut driver, interface) = create_initialized_driver();
    // ALS_IT = 640 ms, ALS_PERS = 4, ALS_INT_EN
    interface.set_register(ALS_CONF, 0x00CA);
    // PS_INT = away, PS_DUTY = 1/160, PS_PERS = 2, PS_IT = 3.5T
    interface.set_register(PS_CONF, 0x029A);
    // LED_I = 140 mA, PS_MPS = 8
    interface.set_register(PS_CONF_MS, 0x0460);

    assert_eq!(
        driver.ambient_integration_time().unwrap(),
        AmbientIntegrationTime::Ms640
    );
    assert_eq!(
        driver.ambient_light_persistence().unwrap(),
        AmbientPersistence::Four
    );
    assert!(driver.ambient_light_interrupts_enabled().unwrap());

    assert_eq!(
        driver.proximity_interrupt_mode().unwrap(),
        ProximityInterruptMode::Away
    );
    assert_eq!(
        driver.proximity_duty_cycle().unwrap(),
        ProximityDutyCycle::Duty1_160
    );
    assert_eq!(
        driver.proximity_persistence().unwrap(),
        ProximityPersistence::Two
    );
    assert_eq!(
        driver.proximity_integration_time().unwrap(),
        ProximityIntegrationTime::T3_5
    );
    assert!(!driver.proximity_high_resolution().unwrap());

    assert_eq!(driver.proximity_led_current().unwrap(), LedCurrent::Ma140);
    assert_eq!(driver.proximity_multi_pulse().unwrap(), MultiPulse::Eight);
}
