//! Register map and field definitions for the LIS3MDL
//!
//! Addresses and bit positions follow the LIS3MDL datasheet (DocID024204),
//! section 7 "Register mapping". Fields are right-aligned views used by
//! [`get_field`](crate::get_field) / [`set_field`](crate::set_field).

use crate::field::Field;

/// `WHO_AM_I` - device identification, reads 0x3D
pub const WHO_AM_I: u8 = 0x0F;

/// `CTRL_REG1` - temperature enable, X/Y operating mode, data rate, self-test
pub const CTRL_REG1: u8 = 0x20;
/// `CTRL_REG2` - full scale, reboot, soft reset
pub const CTRL_REG2: u8 = 0x21;
/// `CTRL_REG3` - low power, SPI mode, measurement mode
pub const CTRL_REG3: u8 = 0x22;
/// `CTRL_REG4` - Z operating mode, output endianness
pub const CTRL_REG4: u8 = 0x23;
/// `CTRL_REG5` - fast read, block data update
pub const CTRL_REG5: u8 = 0x24;

/// `STATUS_REG` - data available / overrun flags
pub const STATUS_REG: u8 = 0x27;

/// `OUT_X_L` - X axis output, low byte
pub const OUT_X_L: u8 = 0x28;
/// `OUT_X_H` - X axis output, high byte
pub const OUT_X_H: u8 = 0x29;
/// `OUT_Y_L` - Y axis output, low byte
pub const OUT_Y_L: u8 = 0x2A;
/// `OUT_Y_H` - Y axis output, high byte
pub const OUT_Y_H: u8 = 0x2B;
/// `OUT_Z_L` - Z axis output, low byte
pub const OUT_Z_L: u8 = 0x2C;
/// `OUT_Z_H` - Z axis output, high byte
pub const OUT_Z_H: u8 = 0x2D;

/// `INT_CFG` - interrupt configuration
pub const INT_CFG: u8 = 0x30;

// ==================== CTRL_REG1 ====================

/// Data rate: `OM[1:0] DO[2:0] FAST_ODR` (6-bit code, see [`DataRate`](crate::DataRate))
pub const DATA_RATE: Field = Field::new(CTRL_REG1, 0b0111_1110);

/// Data rate without the X/Y operating mode: `DO[2:0] FAST_ODR`
pub const OUTPUT_DATA_RATE: Field = Field::new(CTRL_REG1, 0b0001_1110);

/// X/Y operating mode `OM[1:0]`
pub const XY_OPERATING_MODE: Field = Field::new(CTRL_REG1, 0b0110_0000);

/// Temperature sensor enable
pub const TEMP_EN: Field = Field::new(CTRL_REG1, 0b1000_0000);

/// Self-test enable
pub const SELF_TEST: Field = Field::new(CTRL_REG1, 0b0000_0001);

// ==================== CTRL_REG2 ====================

/// Full-scale selection `FS[1:0]`
pub const FULL_SCALE: Field = Field::new(CTRL_REG2, 0b0110_0000);

/// Reboot memory content
pub const REBOOT: Field = Field::new(CTRL_REG2, 0b0000_1000);

/// Reset configuration and user registers (self-clearing)
pub const SOFT_RST: Field = Field::new(CTRL_REG2, 0b0000_0100);

// ==================== CTRL_REG3 ====================

/// Measurement mode `MD[1:0]`
pub const MEASUREMENT_MODE: Field = Field::new(CTRL_REG3, 0b0000_0011);

// ==================== CTRL_REG4 ====================

/// Z operating mode `OMZ[1:0]`
pub const Z_OPERATING_MODE: Field = Field::new(CTRL_REG4, 0b0000_1100);

/// Big/little endian output selection (0 = low byte at the lower address)
pub const BLE: Field = Field::new(CTRL_REG4, 0b0000_0010);

// ==================== CTRL_REG5 ====================

/// Fast read (high output bytes only)
pub const FAST_READ: Field = Field::new(CTRL_REG5, 0b1000_0000);

/// Block data update: output registers are not updated until both bytes are read
pub const BDU: Field = Field::new(CTRL_REG5, 0b0100_0000);

// ==================== INT_CFG ====================

/// Per-axis interrupt enables `XIEN YIEN ZIEN`
pub const INTERRUPT_AXES: Field = Field::new(INT_CFG, 0b1110_0000);

/// Interrupt active level (1 = active high)
pub const INTERRUPT_ACTIVE_HIGH: Field = Field::new(INT_CFG, 0b0000_0100);

/// Latch interrupt request
pub const INTERRUPT_LATCH: Field = Field::new(INT_CFG, 0b0000_0010);

/// Interrupt pin enable `IEN`
pub const INTERRUPT_ENABLE: Field = Field::new(INT_CFG, 0b0000_0001);

/// Every configurable field, for table-driven checks
pub const ALL_FIELDS: [Field; 17] = [
    DATA_RATE,
    OUTPUT_DATA_RATE,
    XY_OPERATING_MODE,
    TEMP_EN,
    SELF_TEST,
    FULL_SCALE,
    REBOOT,
    SOFT_RST,
    MEASUREMENT_MODE,
    Z_OPERATING_MODE,
    BLE,
    FAST_READ,
    BDU,
    INTERRUPT_AXES,
    INTERRUPT_ACTIVE_HIGH,
    INTERRUPT_LATCH,
    INTERRUPT_ENABLE,
];
