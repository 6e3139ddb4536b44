//! Bus transports for the LIS3MDL
//!
//! The [`Transport`] trait is the single point of hardware variability in this
//! crate: everything above it (fields, decoded configuration, axis reads) is
//! bus-agnostic. Implementations are provided for I2C and SPI on top of the
//! `embedded-hal` 1.0 traits; anything else (a simulated register file, a
//! bit-banged bus, a bridge chip) only has to implement the three operations.
//!
//! A transport call is one complete bus transaction. When several drivers
//! share one physical bus, serialization belongs to the bus handle you wrap,
//! e.g. an `embedded_hal_bus::i2c::RefCellDevice` or `MutexDevice`.

use crate::I2C_ADDRESS_SA1_LOW;

use embedded_hal::i2c::{I2c, Operation as I2cOperation};
use embedded_hal::spi::{Operation as SpiOperation, SpiDevice};

/// Sub-address auto-increment flag for multi-byte I2C accesses
const I2C_AUTO_INCREMENT: u8 = 0x80;

/// SPI read flag (R/W bit of the command byte)
const SPI_READ: u8 = 0x80;

/// SPI address auto-increment flag (M/S bit of the command byte)
const SPI_AUTO_INCREMENT: u8 = 0x40;

/// Byte-addressed register access over some bus
///
/// Multi-byte accesses cover consecutive registers in ascending address
/// order. A `write` is all-or-nothing: either every byte is sent in one
/// transaction or an error is returned. Transports never retry.
pub trait Transport {
    /// Bus error type
    type Error;

    /// One-time bus or peripheral setup
    ///
    /// Not required to be idempotent. [`Lis3mdl::new`](crate::Lis3mdl::new)
    /// calls it exactly once, before any register access.
    ///
    /// # Errors
    ///
    /// Returns the bus error if setup fails.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Read `buffer.len()` consecutive registers starting at `register`
    ///
    /// # Errors
    ///
    /// Returns the bus error if the transaction fails.
    fn read(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;

    /// Write `data.len()` consecutive registers starting at `register`
    ///
    /// # Errors
    ///
    /// Returns the bus error if the transaction fails.
    fn write(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        T::init(self)
    }

    fn read(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        T::read(self, register, buffer)
    }

    fn write(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, register, data)
    }
}

/// Async counterpart of [`Transport`]
#[cfg(feature = "async")]
#[allow(async_fn_in_trait)]
pub trait AsyncTransport {
    /// Bus error type
    type Error;

    /// One-time bus or peripheral setup (see [`Transport::init`])
    ///
    /// # Errors
    ///
    /// Returns the bus error if setup fails.
    async fn init(&mut self) -> Result<(), Self::Error>;

    /// Read `buffer.len()` consecutive registers starting at `register`
    ///
    /// # Errors
    ///
    /// Returns the bus error if the transaction fails.
    async fn read(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;

    /// Write `data.len()` consecutive registers starting at `register`
    ///
    /// # Errors
    ///
    /// Returns the bus error if the transaction fails.
    async fn write(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error>;
}

#[cfg(feature = "async")]
impl<T: AsyncTransport + ?Sized> AsyncTransport for &mut T {
    type Error = T::Error;

    async fn init(&mut self) -> Result<(), Self::Error> {
        T::init(self).await
    }

    async fn read(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        T::read(self, register, buffer).await
    }

    async fn write(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, register, data).await
    }
}

/// Sub-address byte for an I2C access of `len` bytes
const fn i2c_sub_address(register: u8, len: usize) -> u8 {
    if len > 1 {
        register | I2C_AUTO_INCREMENT
    } else {
        register
    }
}

/// Command byte for an SPI access of `len` bytes
const fn spi_command(register: u8, len: usize, read: bool) -> u8 {
    let mut command = register & !(SPI_READ | SPI_AUTO_INCREMENT);
    if read {
        command |= SPI_READ;
    }
    if len > 1 {
        command |= SPI_AUTO_INCREMENT;
    }
    command
}

/// I2C transport for the LIS3MDL
pub struct I2cTransport<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cTransport<I2C> {
    /// Create a new I2C transport with the SA1-low address (0x1C)
    ///
    /// # Example
    /// ```ignore
    /// let transport = I2cTransport::default(i2c);
    /// let mut mag = Lis3mdl::new(transport)?;
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_SA1_LOW,
        }
    }

    /// Create a new I2C transport with the SA1-high address (0x1E)
    ///
    /// Use this when the SDO/SA1 pin is pulled up to VDD.
    pub const fn alternative(i2c: I2C) -> Self {
        Self {
            i2c,
            address: crate::I2C_ADDRESS_SA1_HIGH,
        }
    }

    /// Create a new I2C transport with a custom 7-bit device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// The 7-bit device address this transport talks to
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Consume the transport and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> Transport for I2cTransport<I2C>
where
    I2C: I2c<Error = E>,
{
    type Error = E;

    fn init(&mut self) -> Result<(), Self::Error> {
        // The bus itself is configured by the HAL before it is handed over
        Ok(())
    }

    fn read(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        let sub_address = i2c_sub_address(register, buffer.len());
        self.i2c.write_read(self.address, &[sub_address], buffer)
    }

    fn write(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        let sub_address = i2c_sub_address(register, data.len());
        // Adjacent writes are merged into a single bus write (no repeated start)
        self.i2c.transaction(
            self.address,
            &mut [
                I2cOperation::Write(&[sub_address]),
                I2cOperation::Write(data),
            ],
        )
    }
}

#[cfg(feature = "async")]
impl<I2C, E> AsyncTransport for I2cTransport<I2C>
where
    I2C: embedded_hal_async::i2c::I2c<Error = E>,
{
    type Error = E;

    async fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn read(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        let sub_address = i2c_sub_address(register, buffer.len());
        self.i2c
            .write_read(self.address, &[sub_address], buffer)
            .await
    }

    async fn write(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        let sub_address = i2c_sub_address(register, data.len());
        self.i2c
            .transaction(
                self.address,
                &mut [
                    embedded_hal_async::i2c::Operation::Write(&[sub_address]),
                    embedded_hal_async::i2c::Operation::Write(data),
                ],
            )
            .await
    }
}

/// SPI transport for the LIS3MDL
///
/// # Note on Chip Select
///
/// This transport uses the `SpiDevice` trait from `embedded-hal`, which manages
/// the chip select (CS) pin for the whole transaction. If using
/// `embedded-hal-bus`, you would typically create it like:
/// ```ignore
/// let spi_device = embedded_hal_bus::spi::ExclusiveDevice::new(spi_bus, cs_pin, delay);
/// let transport = SpiTransport::new(spi_device);
/// ```
pub struct SpiTransport<SPI> {
    spi: SPI,
}

impl<SPI> SpiTransport<SPI> {
    /// Create a new SPI transport with the given SPI device
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Consume the transport and return the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI, E> Transport for SpiTransport<SPI>
where
    SPI: SpiDevice<Error = E>,
{
    type Error = E;

    fn init(&mut self) -> Result<(), Self::Error> {
        // 4-wire SPI is the power-on default (CTRL_REG3.SIM = 0)
        Ok(())
    }

    fn read(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        let command = spi_command(register, buffer.len(), true);
        self.spi.transaction(&mut [
            SpiOperation::Write(&[command]),
            SpiOperation::Read(buffer),
        ])
    }

    fn write(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        let command = spi_command(register, data.len(), false);
        self.spi.transaction(&mut [
            SpiOperation::Write(&[command]),
            SpiOperation::Write(data),
        ])
    }
}

#[cfg(feature = "async")]
impl<SPI, E> AsyncTransport for SpiTransport<SPI>
where
    SPI: embedded_hal_async::spi::SpiDevice<Error = E>,
{
    type Error = E;

    async fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn read(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        let command = spi_command(register, buffer.len(), true);
        self.spi
            .transaction(&mut [
                embedded_hal_async::spi::Operation::Write(&[command]),
                embedded_hal_async::spi::Operation::Read(buffer),
            ])
            .await
    }

    async fn write(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        let command = spi_command(register, data.len(), false);
        self.spi
            .transaction(&mut [
                embedded_hal_async::spi::Operation::Write(&[command]),
                embedded_hal_async::spi::Operation::Write(data),
            ])
            .await
    }
}
