#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod data;
pub mod device;
pub mod field;
pub mod interface;
pub mod registers;

// Re-export main types
pub use config::{
    CodeTable, DataRate, DecodeError, FullScale, InterruptAxes, MagConfig, MeasurementMode,
    OperatingMode, ParamError, decode_data_rate, decode_full_scale, encode_data_rate,
};
pub use data::{Axis, DataStatus, MagData, MagDataGauss, read_all, read_axis};
pub use device::Lis3mdl;
pub use field::{Field, get_field, get_flag, set_field, set_flag};
pub use interface::{I2cTransport, SpiTransport, Transport};

#[cfg(feature = "async")]
pub use interface::AsyncTransport;

/// LIS3MDL I2C address when the SDO/SA1 pin is low
///
/// Use [`I2cTransport::default()`] for this configuration.
pub const I2C_ADDRESS_SA1_LOW: u8 = 0x1C;

/// LIS3MDL I2C address when the SDO/SA1 pin is high
///
/// Most breakout boards pull SA1 high. Use [`I2cTransport::alternative()`]
/// for this configuration.
pub const I2C_ADDRESS_SA1_HIGH: u8 = 0x1E;

/// Expected value of the `WHO_AM_I` register
pub const WHO_AM_I_VALUE: u8 = 0x3D;

/// Driver errors
///
/// Every fallible operation returns either its value or one of these; a
/// failed call never produces a partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The transport failed to complete a bus transaction
    Comm(E),
    /// The bus transaction succeeded but the register held a code with no
    /// meaning in the lookup table
    Decode(DecodeError),
    /// Caller-supplied value out of range (too wide for its field, or a data
    /// rate below the slowest supported step)
    Param,
    /// The device at the configured address is not a LIS3MDL (contains the
    /// `WHO_AM_I` value actually read)
    InvalidDevice(u8),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Comm(error)
    }
}
