//! High-level driver API for the LIS3MDL
//!
//! [`Lis3mdl`] owns (or borrows, via `&mut T`) a transport and exposes typed
//! accessors on top of the field protocol. Nothing read from the device is
//! cached: every getter re-reads the register and every setter is a
//! read-modify-write of just its field.

use crate::config::{
    DataRate, DecodeError, FullScale, InterruptAxes, MEASUREMENT_MODE_TABLE, MagConfig,
    MeasurementMode, OperatingMode, decode_data_rate, decode_full_scale, encode_data_rate,
};
use crate::data::{Axis, DataStatus, MagData, MagDataGauss};
use crate::field::Field;
use crate::registers;
use crate::{Error, WHO_AM_I_VALUE};

#[cfg(not(feature = "async"))]
use crate::data::{read_all, read_axis};
#[cfg(not(feature = "async"))]
use crate::field::{get_field, get_flag, set_field, set_flag};
#[cfg(not(feature = "async"))]
use crate::interface::Transport;

#[cfg(feature = "async")]
use crate::data::{read_all_async, read_axis_async};
#[cfg(feature = "async")]
use crate::field::{get_field_async, set_field_async};
#[cfg(feature = "async")]
use crate::interface::AsyncTransport;

/// Main driver for the LIS3MDL
pub struct Lis3mdl<T> {
    transport: T,
}

impl<T> Lis3mdl<T> {
    /// Consume the driver and return the transport
    pub fn release(self) -> T {
        self.transport
    }
}

/// Map a table miss on `field` to the driver error
fn decode_failed<E>(field: Field, error: DecodeError) -> Error<E> {
    #[cfg(feature = "defmt")]
    defmt::warn!(
        "Unmapped code 0x{:02X} in register 0x{:02X}",
        error.raw,
        field.address()
    );
    #[cfg(not(feature = "defmt"))]
    let _ = field;

    Error::Decode(error)
}

/// Field value that selects `rate`, and the field it goes into
///
/// `FAST_ODR` rates own the X/Y operating mode bits; slower rates leave them
/// alone.
const fn data_rate_target(rate: DataRate) -> (Field, u8) {
    if rate.is_fast() {
        (registers::DATA_RATE, rate.code())
    } else {
        (
            registers::OUTPUT_DATA_RATE,
            rate.code() & registers::OUTPUT_DATA_RATE.max_value(),
        )
    }
}

#[cfg(not(feature = "async"))]
impl<T> Lis3mdl<T>
where
    T: Transport,
{
    /// Create a new LIS3MDL driver instance
    ///
    /// Runs the transport's one-time `init` and verifies the `WHO_AM_I`
    /// register. The device configuration is left untouched; call
    /// [`configure`](Self::configure) to start measuring.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Transport setup or communication with the device fails
    /// - The `WHO_AM_I` register contains an unexpected value
    pub fn new(mut transport: T) -> Result<Self, Error<T::Error>> {
        transport.init()?;
        let mut driver = Self { transport };

        let who_am_i = driver.read_who_am_i()?;
        if who_am_i != WHO_AM_I_VALUE {
            #[cfg(feature = "defmt")]
            defmt::warn!("Unexpected WHO_AM_I 0x{:02X}", who_am_i);
            return Err(Error::InvalidDevice(who_am_i));
        }

        #[cfg(feature = "defmt")]
        defmt::info!("LIS3MDL detected");

        Ok(driver)
    }

    /// Read the `WHO_AM_I` register
    ///
    /// Should return 0x3D for a LIS3MDL.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_who_am_i(&mut self) -> Result<u8, Error<T::Error>> {
        let mut id = [0u8];
        self.transport.read(registers::WHO_AM_I, &mut id)?;
        Ok(id[0])
    }

    /// Read the raw value of any field
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn get_field(&mut self, field: Field) -> Result<u8, Error<T::Error>> {
        get_field(&mut self.transport, field)
    }

    /// Write the raw value of any field, preserving the rest of its register
    ///
    /// # Errors
    ///
    /// Returns [`Error::Param`] if `value` is too wide for the field, or a
    /// communication error.
    pub fn set_field(&mut self, field: Field, value: u8) -> Result<(), Error<T::Error>> {
        set_field(&mut self.transport, field, value)
    }

    /// Apply a complete configuration
    ///
    /// Output byte order is forced to little endian (low byte at the lower
    /// address), which the axis readers rely on. The measurement mode is
    /// written last so conversions start with the final settings.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure(&mut self, config: &MagConfig) -> Result<(), Error<T::Error>> {
        set_flag(&mut self.transport, registers::BLE, false)?;
        set_flag(
            &mut self.transport,
            registers::BDU,
            config.block_data_update,
        )?;
        self.set_full_scale(config.full_scale)?;

        let mode = config.effective_operating_mode();
        if !config.data_rate.is_fast() {
            set_field(
                &mut self.transport,
                registers::XY_OPERATING_MODE,
                mode.code(),
            )?;
        }
        self.set_data_rate(config.data_rate)?;
        self.set_z_operating_mode(mode)?;

        self.set_measurement_mode(config.measurement_mode)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Applied configuration: {}", config);

        Ok(())
    }

    /// Read the current output data rate
    ///
    /// Alias bit patterns (don't-care bits of the data rate code) decode to
    /// their canonical rate.
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails or the code cannot be decoded.
    pub fn data_rate(&mut self) -> Result<DataRate, Error<T::Error>> {
        let raw = get_field(&mut self.transport, registers::DATA_RATE)?;
        decode_data_rate(raw).map_err(|e| decode_failed(registers::DATA_RATE, e))
    }

    /// Set the output data rate
    ///
    /// Rates above 80 Hz also select the X/Y operating mode (see
    /// [`DataRate::operating_mode`]); slower rates keep the current one.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_data_rate(&mut self, rate: DataRate) -> Result<(), Error<T::Error>> {
        let (field, value) = data_rate_target(rate);
        set_field(&mut self.transport, field, value)
    }

    /// Set the fastest supported data rate that does not exceed `hz`
    ///
    /// Returns the rate actually selected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Param`] if `hz` is below 0.625 Hz, or a communication
    /// error.
    pub fn set_data_rate_hz(&mut self, hz: f32) -> Result<DataRate, Error<T::Error>> {
        let rate = encode_data_rate(hz).map_err(|_| Error::Param)?;
        self.set_data_rate(rate)?;
        Ok(rate)
    }

    /// Read the current full-scale range
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails or the code cannot be decoded.
    pub fn full_scale(&mut self) -> Result<FullScale, Error<T::Error>> {
        let raw = get_field(&mut self.transport, registers::FULL_SCALE)?;
        decode_full_scale(raw).map_err(|e| decode_failed(registers::FULL_SCALE, e))
    }

    /// Set the full-scale range
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_full_scale(&mut self, full_scale: FullScale) -> Result<(), Error<T::Error>> {
        set_field(&mut self.transport, registers::FULL_SCALE, full_scale.code())
    }

    /// Read the X/Y operating mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn xy_operating_mode(&mut self) -> Result<OperatingMode, Error<T::Error>> {
        let raw = get_field(&mut self.transport, registers::XY_OPERATING_MODE)?;
        Ok(OperatingMode::from_bits(raw))
    }

    /// Read the Z operating mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn z_operating_mode(&mut self) -> Result<OperatingMode, Error<T::Error>> {
        let raw = get_field(&mut self.transport, registers::Z_OPERATING_MODE)?;
        Ok(OperatingMode::from_bits(raw))
    }

    /// Set the Z operating mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_z_operating_mode(&mut self, mode: OperatingMode) -> Result<(), Error<T::Error>> {
        set_field(&mut self.transport, registers::Z_OPERATING_MODE, mode.code())
    }

    /// Set the operating mode of all three axes
    ///
    /// While a `FAST_ODR` rate is active the X/Y mode selects the rate, so this
    /// also changes the data rate.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_operating_mode(&mut self, mode: OperatingMode) -> Result<(), Error<T::Error>> {
        set_field(
            &mut self.transport,
            registers::XY_OPERATING_MODE,
            mode.code(),
        )?;
        self.set_z_operating_mode(mode)
    }

    /// Read the measurement mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails or the code cannot be decoded.
    pub fn measurement_mode(&mut self) -> Result<MeasurementMode, Error<T::Error>> {
        let raw = get_field(&mut self.transport, registers::MEASUREMENT_MODE)?;
        MEASUREMENT_MODE_TABLE
            .decode(raw)
            .map_err(|e| decode_failed(registers::MEASUREMENT_MODE, e))
    }

    /// Set the measurement mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_measurement_mode(&mut self, mode: MeasurementMode) -> Result<(), Error<T::Error>> {
        set_field(&mut self.transport, registers::MEASUREMENT_MODE, mode.code())
    }

    /// Enable or disable block data update
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_block_data_update(&mut self, enabled: bool) -> Result<(), Error<T::Error>> {
        set_flag(&mut self.transport, registers::BDU, enabled)
    }

    /// Whether the interrupt pin is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn interrupt_enabled(&mut self) -> Result<bool, Error<T::Error>> {
        get_flag(&mut self.transport, registers::INTERRUPT_ENABLE)
    }

    /// Enable or disable the interrupt pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_interrupt(&mut self, enabled: bool) -> Result<(), Error<T::Error>> {
        set_flag(&mut self.transport, registers::INTERRUPT_ENABLE, enabled)
    }

    /// Read which axes generate interrupts
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn interrupt_axes(&mut self) -> Result<InterruptAxes, Error<T::Error>> {
        let raw = get_field(&mut self.transport, registers::INTERRUPT_AXES)?;
        Ok(InterruptAxes::from_bits(raw))
    }

    /// Select which axes generate interrupts
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_interrupt_axes(&mut self, axes: InterruptAxes) -> Result<(), Error<T::Error>> {
        set_field(&mut self.transport, registers::INTERRUPT_AXES, axes.bits())
    }

    /// Select the interrupt pin polarity
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_interrupt_active_high(&mut self, active_high: bool) -> Result<(), Error<T::Error>> {
        set_flag(
            &mut self.transport,
            registers::INTERRUPT_ACTIVE_HIGH,
            active_high,
        )
    }

    /// Latch interrupt requests until `INT_SRC` is read
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_interrupt_latch(&mut self, latched: bool) -> Result<(), Error<T::Error>> {
        set_flag(&mut self.transport, registers::INTERRUPT_LATCH, latched)
    }

    /// Read the data-available / overrun flags
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn data_status(&mut self) -> Result<DataStatus, Error<T::Error>> {
        let mut status = [0u8];
        self.transport.read(registers::STATUS_REG, &mut status)?;
        Ok(DataStatus::from_bits(status[0]))
    }

    /// Read one axis (raw)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_axis(&mut self, axis: Axis) -> Result<i16, Error<T::Error>> {
        read_axis(&mut self.transport, axis)
    }

    /// Read all three axes (raw) in one transaction
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_mag(&mut self) -> Result<MagData, Error<T::Error>> {
        read_all(&mut self.transport)
    }

    /// Read all three axes in gauss
    ///
    /// The full-scale setting is re-read first, so the conversion always
    /// matches the current device configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails or the full-scale code cannot
    /// be decoded.
    pub fn read_mag_gauss(&mut self) -> Result<MagDataGauss, Error<T::Error>> {
        let full_scale = self.full_scale()?;
        let raw = self.read_mag()?;
        Ok(MagDataGauss::from_raw(raw, full_scale))
    }

    /// Reset configuration and user registers to their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn soft_reset(&mut self) -> Result<(), Error<T::Error>> {
        set_flag(&mut self.transport, registers::SOFT_RST, true)
    }

    /// Reload trimming parameters from non-volatile memory
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn reboot(&mut self) -> Result<(), Error<T::Error>> {
        set_flag(&mut self.transport, registers::REBOOT, true)
    }
}

#[cfg(feature = "async")]
impl<T> Lis3mdl<T>
where
    T: AsyncTransport,
{
    /// Create a new LIS3MDL driver instance (async)
    ///
    /// Runs the transport's one-time `init` and verifies the `WHO_AM_I`
    /// register.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Transport setup or communication with the device fails
    /// - The `WHO_AM_I` register contains an unexpected value
    pub async fn new(mut transport: T) -> Result<Self, Error<T::Error>> {
        transport.init().await?;
        let mut driver = Self { transport };

        let who_am_i = driver.read_who_am_i().await?;
        if who_am_i != WHO_AM_I_VALUE {
            #[cfg(feature = "defmt")]
            defmt::warn!("Unexpected WHO_AM_I 0x{:02X}", who_am_i);
            return Err(Error::InvalidDevice(who_am_i));
        }

        #[cfg(feature = "defmt")]
        defmt::info!("LIS3MDL detected");

        Ok(driver)
    }

    /// Read the `WHO_AM_I` register (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_who_am_i(&mut self) -> Result<u8, Error<T::Error>> {
        let mut id = [0u8];
        self.transport.read(registers::WHO_AM_I, &mut id).await?;
        Ok(id[0])
    }

    /// Read the raw value of any field (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn get_field(&mut self, field: Field) -> Result<u8, Error<T::Error>> {
        get_field_async(&mut self.transport, field).await
    }

    /// Write the raw value of any field (async)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Param`] if `value` is too wide for the field, or a
    /// communication error.
    pub async fn set_field(&mut self, field: Field, value: u8) -> Result<(), Error<T::Error>> {
        set_field_async(&mut self.transport, field, value).await
    }

    async fn set_flag(&mut self, field: Field, enabled: bool) -> Result<(), Error<T::Error>> {
        set_field_async(&mut self.transport, field, u8::from(enabled)).await
    }

    /// Apply a complete configuration (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn configure(&mut self, config: &MagConfig) -> Result<(), Error<T::Error>> {
        self.set_flag(registers::BLE, false).await?;
        self.set_flag(registers::BDU, config.block_data_update)
            .await?;
        self.set_full_scale(config.full_scale).await?;

        let mode = config.effective_operating_mode();
        if !config.data_rate.is_fast() {
            self.set_field(registers::XY_OPERATING_MODE, mode.code())
                .await?;
        }
        self.set_data_rate(config.data_rate).await?;
        self.set_z_operating_mode(mode).await?;

        self.set_measurement_mode(config.measurement_mode).await?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Applied configuration: {}", config);

        Ok(())
    }

    /// Read the current output data rate (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails or the code cannot be decoded.
    pub async fn data_rate(&mut self) -> Result<DataRate, Error<T::Error>> {
        let raw = self.get_field(registers::DATA_RATE).await?;
        decode_data_rate(raw).map_err(|e| decode_failed(registers::DATA_RATE, e))
    }

    /// Set the output data rate (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_data_rate(&mut self, rate: DataRate) -> Result<(), Error<T::Error>> {
        let (field, value) = data_rate_target(rate);
        self.set_field(field, value).await
    }

    /// Set the fastest supported data rate that does not exceed `hz` (async)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Param`] if `hz` is below 0.625 Hz, or a communication
    /// error.
    pub async fn set_data_rate_hz(&mut self, hz: f32) -> Result<DataRate, Error<T::Error>> {
        let rate = encode_data_rate(hz).map_err(|_| Error::Param)?;
        self.set_data_rate(rate).await?;
        Ok(rate)
    }

    /// Read the current full-scale range (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails or the code cannot be decoded.
    pub async fn full_scale(&mut self) -> Result<FullScale, Error<T::Error>> {
        let raw = self.get_field(registers::FULL_SCALE).await?;
        decode_full_scale(raw).map_err(|e| decode_failed(registers::FULL_SCALE, e))
    }

    /// Set the full-scale range (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_full_scale(&mut self, full_scale: FullScale) -> Result<(), Error<T::Error>> {
        self.set_field(registers::FULL_SCALE, full_scale.code())
            .await
    }

    /// Read the X/Y operating mode (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn xy_operating_mode(&mut self) -> Result<OperatingMode, Error<T::Error>> {
        let raw = self.get_field(registers::XY_OPERATING_MODE).await?;
        Ok(OperatingMode::from_bits(raw))
    }

    /// Read the Z operating mode (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn z_operating_mode(&mut self) -> Result<OperatingMode, Error<T::Error>> {
        let raw = self.get_field(registers::Z_OPERATING_MODE).await?;
        Ok(OperatingMode::from_bits(raw))
    }

    /// Set the Z operating mode (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_z_operating_mode(
        &mut self,
        mode: OperatingMode,
    ) -> Result<(), Error<T::Error>> {
        self.set_field(registers::Z_OPERATING_MODE, mode.code())
            .await
    }

    /// Set the operating mode of all three axes (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_operating_mode(&mut self, mode: OperatingMode) -> Result<(), Error<T::Error>> {
        self.set_field(registers::XY_OPERATING_MODE, mode.code())
            .await?;
        self.set_z_operating_mode(mode).await
    }

    /// Read the measurement mode (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails or the code cannot be decoded.
    pub async fn measurement_mode(&mut self) -> Result<MeasurementMode, Error<T::Error>> {
        let raw = self.get_field(registers::MEASUREMENT_MODE).await?;
        MEASUREMENT_MODE_TABLE
            .decode(raw)
            .map_err(|e| decode_failed(registers::MEASUREMENT_MODE, e))
    }

    /// Set the measurement mode (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_measurement_mode(
        &mut self,
        mode: MeasurementMode,
    ) -> Result<(), Error<T::Error>> {
        self.set_field(registers::MEASUREMENT_MODE, mode.code())
            .await
    }

    /// Enable or disable block data update (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_block_data_update(&mut self, enabled: bool) -> Result<(), Error<T::Error>> {
        self.set_flag(registers::BDU, enabled).await
    }

    /// Whether the interrupt pin is enabled (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn interrupt_enabled(&mut self) -> Result<bool, Error<T::Error>> {
        Ok(self.get_field(registers::INTERRUPT_ENABLE).await? != 0)
    }

    /// Enable or disable the interrupt pin (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_interrupt(&mut self, enabled: bool) -> Result<(), Error<T::Error>> {
        self.set_flag(registers::INTERRUPT_ENABLE, enabled).await
    }

    /// Read which axes generate interrupts (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn interrupt_axes(&mut self) -> Result<InterruptAxes, Error<T::Error>> {
        let raw = self.get_field(registers::INTERRUPT_AXES).await?;
        Ok(InterruptAxes::from_bits(raw))
    }

    /// Select which axes generate interrupts (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_interrupt_axes(&mut self, axes: InterruptAxes) -> Result<(), Error<T::Error>> {
        self.set_field(registers::INTERRUPT_AXES, axes.bits()).await
    }

    /// Select the interrupt pin polarity (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_interrupt_active_high(
        &mut self,
        active_high: bool,
    ) -> Result<(), Error<T::Error>> {
        self.set_flag(registers::INTERRUPT_ACTIVE_HIGH, active_high)
            .await
    }

    /// Latch interrupt requests until `INT_SRC` is read (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_interrupt_latch(&mut self, latched: bool) -> Result<(), Error<T::Error>> {
        self.set_flag(registers::INTERRUPT_LATCH, latched).await
    }

    /// Read the data-available / overrun flags (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn data_status(&mut self) -> Result<DataStatus, Error<T::Error>> {
        let mut status = [0u8];
        self.transport
            .read(registers::STATUS_REG, &mut status)
            .await?;
        Ok(DataStatus::from_bits(status[0]))
    }

    /// Read one axis (raw, async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_axis(&mut self, axis: Axis) -> Result<i16, Error<T::Error>> {
        read_axis_async(&mut self.transport, axis).await
    }

    /// Read all three axes (raw, async) in one transaction
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_mag(&mut self) -> Result<MagData, Error<T::Error>> {
        read_all_async(&mut self.transport).await
    }

    /// Read all three axes in gauss (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails or the full-scale code cannot
    /// be decoded.
    pub async fn read_mag_gauss(&mut self) -> Result<MagDataGauss, Error<T::Error>> {
        let full_scale = self.full_scale().await?;
        let raw = self.read_mag().await?;
        Ok(MagDataGauss::from_raw(raw, full_scale))
    }

    /// Reset configuration and user registers to their defaults (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn soft_reset(&mut self) -> Result<(), Error<T::Error>> {
        self.set_flag(registers::SOFT_RST, true).await
    }

    /// Reload trimming parameters from non-volatile memory (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn reboot(&mut self) -> Result<(), Error<T::Error>> {
        self.set_flag(registers::REBOOT, true).await
    }
}
