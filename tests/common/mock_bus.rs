//! Byte-level I2C and SPI bus mocks
//!
//! These sit below the real `I2cTransport` / `SpiTransport` and emulate the
//! LIS3MDL sub-address rules (auto-increment only when requested), so tests can
//! check what actually goes over the wire.

use embedded_hal::i2c::{self, NoAcknowledgeSource};
use embedded_hal::spi;
use std::collections::HashMap;

/// Mock bus error type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBusError {
    /// No device answered at the address
    NoDevice,
}

impl i2c::Error for MockBusError {
    fn kind(&self) -> i2c::ErrorKind {
        i2c::ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
    }
}

impl spi::Error for MockBusError {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

/// One recorded bus operation
#[derive(Debug, Clone, PartialEq)]
pub enum BusOp {
    /// Bytes sent by the controller
    Write(Vec<u8>),
    /// Number of bytes read by the controller
    Read(usize),
}

/// One recorded I2C transaction
#[derive(Debug, Clone, PartialEq)]
pub struct I2cTransaction {
    /// 7-bit device address
    pub address: u8,
    /// Operations in order
    pub ops: Vec<BusOp>,
}

/// Register pointer of an emulated device
struct Pointer {
    register: u8,
    auto_increment: bool,
}

impl Pointer {
    fn next(&mut self) -> usize {
        let current = usize::from(self.register);
        if self.auto_increment {
            self.register = self.register.wrapping_add(1);
        }
        current
    }
}

/// Mock I2C bus hosting any number of LIS3MDL-like register files
#[derive(Default)]
pub struct MockI2cBus {
    devices: HashMap<u8, [u8; 256]>,
    transactions: Vec<I2cTransaction>,
}

impl MockI2cBus {
    /// Create a bus with no devices
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a device at `address` with a LIS3MDL `WHO_AM_I`
    pub fn with_device(mut self, address: u8) -> Self {
        let mut registers = [0u8; 256];
        registers[0x0F] = 0x3D;
        self.devices.insert(address, registers);
        self
    }

    /// Set a register of the device at `address`
    pub fn set_register(&mut self, address: u8, register: u8, value: u8) {
        if let Some(registers) = self.devices.get_mut(&address) {
            registers[usize::from(register)] = value;
        }
    }

    /// Read a register of the device at `address`
    pub fn register(&self, address: u8, register: u8) -> u8 {
        self.devices
            .get(&address)
            .map_or(0, |registers| registers[usize::from(register)])
    }

    /// Recorded transactions
    pub fn transactions(&self) -> &[I2cTransaction] {
        &self.transactions
    }
}

impl i2c::ErrorType for MockI2cBus {
    type Error = MockBusError;
}

impl i2c::I2c for MockI2cBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [i2c::Operation<'_>],
    ) -> Result<(), Self::Error> {
        let registers = self
            .devices
            .get_mut(&address)
            .ok_or(MockBusError::NoDevice)?;

        let mut pointer: Option<Pointer> = None;
        let mut ops = Vec::new();

        for operation in operations.iter_mut() {
            match operation {
                i2c::Operation::Write(bytes) => {
                    ops.push(BusOp::Write(bytes.to_vec()));
                    for &byte in bytes.iter() {
                        match pointer.as_mut() {
                            // First byte of the transaction is the sub-address
                            None => {
                                pointer = Some(Pointer {
                                    register: byte & 0x7F,
                                    auto_increment: byte & 0x80 != 0,
                                });
                            }
                            Some(pointer) => registers[pointer.next()] = byte,
                        }
                    }
                }
                i2c::Operation::Read(buffer) => {
                    ops.push(BusOp::Read(buffer.len()));
                    let pointer = pointer.get_or_insert(Pointer {
                        register: 0,
                        auto_increment: false,
                    });
                    for byte in buffer.iter_mut() {
                        *byte = registers[pointer.next()];
                    }
                }
            }
        }

        self.transactions.push(I2cTransaction { address, ops });
        Ok(())
    }
}

/// Mock SPI device (chip select handled per transaction)
pub struct MockSpiDevice {
    registers: [u8; 256],
    transactions: Vec<Vec<BusOp>>,
}

impl MockSpiDevice {
    /// Create a device with a LIS3MDL `WHO_AM_I`
    pub fn new() -> Self {
        let mut registers = [0u8; 256];
        registers[0x0F] = 0x3D;
        Self {
            registers,
            transactions: Vec::new(),
        }
    }

    /// Set a register
    pub fn set_register(&mut self, register: u8, value: u8) {
        self.registers[usize::from(register)] = value;
    }

    /// Read a register
    pub fn register(&self, register: u8) -> u8 {
        self.registers[usize::from(register)]
    }

    /// Recorded transactions
    pub fn transactions(&self) -> &[Vec<BusOp>] {
        &self.transactions
    }
}

impl spi::ErrorType for MockSpiDevice {
    type Error = MockBusError;
}

impl spi::SpiDevice for MockSpiDevice {
    fn transaction(&mut self, operations: &mut [spi::Operation<'_, u8>]) -> Result<(), Self::Error> {
        let mut pointer: Option<Pointer> = None;
        let mut ops = Vec::new();

        for operation in operations.iter_mut() {
            match operation {
                spi::Operation::Write(bytes) => {
                    ops.push(BusOp::Write(bytes.to_vec()));
                    for &byte in bytes.iter() {
                        match pointer.as_mut() {
                            // First byte is the command: R/W, M/S, 6-bit address
                            None => {
                                pointer = Some(Pointer {
                                    register: byte & 0x3F,
                                    auto_increment: byte & 0x40 != 0,
                                });
                            }
                            Some(pointer) => self.registers[pointer.next()] = byte,
                        }
                    }
                }
                spi::Operation::Read(buffer) => {
                    ops.push(BusOp::Read(buffer.len()));
                    let pointer = pointer.get_or_insert(Pointer {
                        register: 0,
                        auto_increment: false,
                    });
                    for byte in buffer.iter_mut() {
                        *byte = self.registers[pointer.next()];
                    }
                }
                _ => unimplemented!("operation not used by the LIS3MDL transport"),
            }
        }

        self.transactions.push(ops);
        Ok(())
    }
}
