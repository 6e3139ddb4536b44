//! Axis decoding and measurement types
//!
//! Output registers hold each axis as a little-endian pair (low byte at the
//! lower address, with `CTRL_REG4.BLE` cleared). Every axis is fetched with a
//! single multi-byte transport read so the two halves come from one sample.

use crate::Error;
use crate::config::FullScale;
use crate::interface::Transport;
use crate::registers::{OUT_X_L, OUT_Y_L, OUT_Z_L};

#[cfg(feature = "async")]
use crate::interface::AsyncTransport;

/// Measurement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// X axis
    X,
    /// Y axis
    Y,
    /// Z axis
    Z,
}

impl Axis {
    /// Parse an axis name (`x`, `y`, `z`, either case)
    #[must_use]
    pub const fn from_char(name: char) -> Option<Self> {
        match name {
            'x' | 'X' => Some(Self::X),
            'y' | 'Y' => Some(Self::Y),
            'z' | 'Z' => Some(Self::Z),
            _ => None,
        }
    }

    /// Address of the axis' low output byte
    #[must_use]
    pub const fn low_register(self) -> u8 {
        match self {
            Self::X => OUT_X_L,
            Self::Y => OUT_Y_L,
            Self::Z => OUT_Z_L,
        }
    }
}

/// Magnetometer data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagData {
    /// X-axis magnetic field (raw)
    pub x: i16,
    /// Y-axis magnetic field (raw)
    pub y: i16,
    /// Z-axis magnetic field (raw)
    pub z: i16,
}

impl MagData {
    /// Assemble from the six output bytes starting at `OUT_X_L`
    #[must_use]
    pub const fn from_le_bytes(bytes: [u8; 6]) -> Self {
        Self {
            x: i16::from_le_bytes([bytes[0], bytes[1]]),
            y: i16::from_le_bytes([bytes[2], bytes[3]]),
            z: i16::from_le_bytes([bytes[4], bytes[5]]),
        }
    }

    /// Value of one axis
    #[must_use]
    pub const fn axis(&self, axis: Axis) -> i16 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Magnetometer data in gauss
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagDataGauss {
    /// X-axis magnetic field in gauss
    pub x: f32,
    /// Y-axis magnetic field in gauss
    pub y: f32,
    /// Z-axis magnetic field in gauss
    pub z: f32,
}

impl MagDataGauss {
    /// Convert raw samples using the sensitivity of `full_scale`
    #[must_use]
    pub fn from_raw(raw: MagData, full_scale: FullScale) -> Self {
        let sensitivity = full_scale.sensitivity();
        Self {
            x: f32::from(raw.x) / sensitivity,
            y: f32::from(raw.y) / sensitivity,
            z: f32::from(raw.z) / sensitivity,
        }
    }

    /// Magnitude of the field vector in gauss
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Normalize the field vector to unit length
    ///
    /// If the magnitude is near zero, returns (0, 0, 0).
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag < 1e-6 {
            Self {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            }
        } else {
            Self {
                x: self.x / mag,
                y: self.y / mag,
                z: self.z / mag,
            }
        }
    }
}

/// Decoded `STATUS_REG`
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataStatus {
    /// New X data available
    pub x_available: bool,
    /// New Y data available
    pub y_available: bool,
    /// New Z data available
    pub z_available: bool,
    /// New data available on all axes
    pub xyz_available: bool,
    /// X data overwritten before it was read
    pub x_overrun: bool,
    /// Y data overwritten before it was read
    pub y_overrun: bool,
    /// Z data overwritten before it was read
    pub z_overrun: bool,
    /// Data overwritten on at least one axis
    pub xyz_overrun: bool,
}

impl DataStatus {
    /// Decode a `STATUS_REG` snapshot
    #[must_use]
    pub const fn from_bits(status: u8) -> Self {
        Self {
            x_available: status & 0x01 != 0,
            y_available: status & 0x02 != 0,
            z_available: status & 0x04 != 0,
            xyz_available: status & 0x08 != 0,
            x_overrun: status & 0x10 != 0,
            y_overrun: status & 0x20 != 0,
            z_overrun: status & 0x40 != 0,
            xyz_overrun: status & 0x80 != 0,
        }
    }

    /// Whether a new sample is available on `axis`
    #[must_use]
    pub const fn available(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x_available,
            Axis::Y => self.y_available,
            Axis::Z => self.z_available,
        }
    }
}

/// Read one axis as a signed 16-bit sample
///
/// Issues one 2-byte read starting at the axis' low register.
///
/// # Errors
///
/// Returns [`Error::Comm`] if the read fails; no value is produced.
pub fn read_axis<T: Transport>(transport: &mut T, axis: Axis) -> Result<i16, Error<T::Error>> {
    let mut buffer = [0u8; 2];
    transport.read(axis.low_register(), &mut buffer)?;
    Ok(i16::from_le_bytes(buffer))
}

/// Read all three axes with one 6-byte read starting at `OUT_X_L`
///
/// # Errors
///
/// Returns [`Error::Comm`] if the read fails.
pub fn read_all<T: Transport>(transport: &mut T) -> Result<MagData, Error<T::Error>> {
    let mut buffer = [0u8; 6];
    transport.read(OUT_X_L, &mut buffer)?;
    Ok(MagData::from_le_bytes(buffer))
}

/// Async version of [`read_axis`]
///
/// # Errors
///
/// Returns [`Error::Comm`] if the read fails.
#[cfg(feature = "async")]
pub async fn read_axis_async<T: AsyncTransport>(
    transport: &mut T,
    axis: Axis,
) -> Result<i16, Error<T::Error>> {
    let mut buffer = [0u8; 2];
    transport.read(axis.low_register(), &mut buffer).await?;
    Ok(i16::from_le_bytes(buffer))
}

/// Async version of [`read_all`]
///
/// # Errors
///
/// Returns [`Error::Comm`] if the read fails.
#[cfg(feature = "async")]
pub async fn read_all_async<T: AsyncTransport>(
    transport: &mut T,
) -> Result<MagData, Error<T::Error>> {
    let mut buffer = [0u8; 6];
    transport.read(OUT_X_L, &mut buffer).await?;
    Ok(MagData::from_le_bytes(buffer))
}
