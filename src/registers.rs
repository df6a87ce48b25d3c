//! Register definitions for the VCNL4040
//!
//! The VCNL4040 exposes thirteen 16-bit registers, addressed by "command
//! codes" 0x00-0x0C. Every register is transferred low byte first, so the
//! register map uses little-endian byte order. Where the datasheet splits a
//! command code into two 8-bit halves (e.g. `PS_CONF1` / `PS_CONF2`), both
//! halves are modelled as one 16-bit register: the low half occupies bits
//! 0..8 and the high half bits 8..16.
//!
//! Bits not listed in a register are reserved and must be written as read,
//! which is why the driver only ever touches bit-fields through
//! read-modify-write.

device_driver::create_device!(
    device_name: Vcnl4040,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = LE;
        }

        /// `ALS_CONF` - Ambient light sensor configuration (0x00)
        register AlsConf {
            const ADDRESS = 0x00;
            const SIZE_BITS = 16;

            /// ALS shutdown (true = powered down)
            als_sd: bool = 0,
            /// ALS interrupt enable
            als_int_en: bool = 1,
            /// ALS interrupt persistence (1, 2, 4, 8 samples)
            als_pers: uint = 2..4,
            /// ALS integration time (80, 160, 320, 640 ms)
            als_it: uint = 6..8,
        },

        /// `ALS_THDH` - Ambient light high interrupt threshold (0x01)
        register AlsThdh {
            const ADDRESS = 0x01;
            const SIZE_BITS = 16;

            threshold: uint = 0..16,
        },

        /// `ALS_THDL` - Ambient light low interrupt threshold (0x02)
        register AlsThdl {
            const ADDRESS = 0x02;
            const SIZE_BITS = 16;

            threshold: uint = 0..16,
        },

        /// `PS_CONF1` (low byte) and `PS_CONF2` (high byte) (0x03)
        register PsConf {
            const ADDRESS = 0x03;
            const SIZE_BITS = 16;

            /// Proximity shutdown (true = powered down)
            ps_sd: bool = 0,
            /// Proximity integration time (1T .. 8T)
            ps_it: uint = 1..4,
            /// Proximity interrupt persistence (1 .. 4 hits)
            ps_pers: uint = 4..6,
            /// IRED on/off duty ratio (1/40 .. 1/320)
            ps_duty: uint = 6..8,
            /// Proximity interrupt trigger (disabled, close, away, both)
            ps_int: uint = 8..10,
            /// Proximity output resolution (false = 12 bit, true = 16 bit)
            ps_hd: bool = 11,
        },

        /// `PS_CONF3` (low byte) and `PS_MS` (high byte) (0x04)
        register PsConfMs {
            const ADDRESS = 0x04;
            const SIZE_BITS = 16;

            /// Sunlight cancellation enable
            ps_sc_en: bool = 0,
            /// Trigger a single proximity measurement in active force mode
            ps_trig: bool = 2,
            /// Active force mode
            ps_af: bool = 3,
            /// Smart persistence
            ps_smart_pers: bool = 4,
            /// Multi pulse count (1, 2, 4, 8 pulses)
            ps_mps: uint = 5..7,
            /// IRED drive current (50 .. 200 mA)
            led_i: uint = 8..11,
            /// Proximity logic output mode on the INT pin
            ps_ms: bool = 14,
            /// White channel shutdown (true = powered down)
            white_sd: bool = 15,
        },

        /// `PS_CANC` - Proximity cancellation level (0x05)
        register PsCanc {
            const ADDRESS = 0x05;
            const SIZE_BITS = 16;

            level: uint = 0..16,
        },

        /// `PS_THDL` - Proximity low interrupt threshold (0x06)
        register PsThdl {
            const ADDRESS = 0x06;
            const SIZE_BITS = 16;

            threshold: uint = 0..16,
        },

        /// `PS_THDH` - Proximity high interrupt threshold (0x07)
        register PsThdh {
            const ADDRESS = 0x07;
            const SIZE_BITS = 16;

            threshold: uint = 0..16,
        },

        /// `PS_DATA` - Proximity output (0x08)
        register PsData {
            const ADDRESS = 0x08;
            const SIZE_BITS = 16;

            data: uint = 0..16,
        },

        /// `ALS_DATA` - Ambient light output (0x09)
        register AlsData {
            const ADDRESS = 0x09;
            const SIZE_BITS = 16;

            data: uint = 0..16,
        },

        /// `WHITE_DATA` - White channel output (0x0A)
        register WhiteData {
            const ADDRESS = 0x0A;
            const SIZE_BITS = 16;

            data: uint = 0..16,
        },

        /// `INT_FLAG` - Interrupt flags (0x0B)
        ///
        /// Only the high byte carries flags. Reading the register clears them.
        register IntFlag {
            const ADDRESS = 0x0B;
            const SIZE_BITS = 16;

            /// Raw flag byte (bits 8..16)
            flags: uint = 8..16,
        },

        /// ID - Device identification (0x0C)
        /// Expected value: 0x0186
        register DeviceId {
            const ADDRESS = 0x0C;
            const SIZE_BITS = 16;

            /// Device ID (should read 0x0186)
            device_id: uint = 0..16,
        }
    }
);

// Re-export commonly used types for convenience
pub use Vcnl4040 as RegisterDevice;
