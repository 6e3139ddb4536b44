//! Register fields and the read-modify-write protocol
//!
//! A [`Field`] names a contiguous bit-range inside one 8-bit register. Field
//! values are always handled right-aligned: bit 0 of a value maps to the lowest
//! set bit of the field mask.
//!
//! [`set_field`] re-reads the register on every call and writes back the whole
//! byte with only the field's bits replaced, so neighbouring fields keep
//! whatever the hardware (or another agent) last put there. The sequence is
//! not atomic against other bus masters; one in-flight update per transport is
//! the caller's responsibility.

use crate::Error;
use crate::interface::Transport;

#[cfg(feature = "async")]
use crate::interface::AsyncTransport;

/// A masked bit-range within one register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    address: u8,
    mask: u8,
}

impl Field {
    /// Define a field
    ///
    /// Fields are static configuration; define them as `const` items so the
    /// mask checks run at compile time.
    ///
    /// # Panics
    ///
    /// Panics if `mask` is zero or its set bits are not contiguous.
    #[must_use]
    pub const fn new(address: u8, mask: u8) -> Self {
        assert!(mask != 0, "field mask must not be empty");
        let aligned = mask >> mask.trailing_zeros();
        assert!(
            aligned & aligned.wrapping_add(1) == 0,
            "field mask bits must be contiguous"
        );
        Self { address, mask }
    }

    /// Register address
    #[must_use]
    pub const fn address(self) -> u8 {
        self.address
    }

    /// Bit mask within the register
    #[must_use]
    pub const fn mask(self) -> u8 {
        self.mask
    }

    /// Position of the field's least significant bit
    #[must_use]
    pub const fn shift(self) -> u32 {
        self.mask.trailing_zeros()
    }

    /// Number of bits in the field
    #[must_use]
    pub const fn width(self) -> u32 {
        self.mask.count_ones()
    }

    /// Largest value the field can hold
    #[must_use]
    pub const fn max_value(self) -> u8 {
        self.mask >> self.shift()
    }

    /// Extract the right-aligned field value from a register snapshot
    #[must_use]
    pub const fn extract(self, register: u8) -> u8 {
        (register & self.mask) >> self.shift()
    }

    /// Replace the field bits of `register` with `value`
    ///
    /// Bits of `value` beyond the field width are dropped, never spilled into
    /// neighbouring bits.
    #[must_use]
    pub const fn insert(self, register: u8, value: u8) -> u8 {
        (register & !self.mask) | ((value << self.shift()) & self.mask)
    }
}

/// Read the current value of `field`
///
/// # Errors
///
/// Returns [`Error::Comm`] if the register read fails.
pub fn get_field<T: Transport>(transport: &mut T, field: Field) -> Result<u8, Error<T::Error>> {
    let mut register = [0u8];
    transport.read(field.address(), &mut register)?;
    Ok(field.extract(register[0]))
}

/// Update `field` to `value`, preserving every other bit of its register
///
/// The register is written only after it has been read successfully.
///
/// # Errors
///
/// Returns [`Error::Param`] (without touching the bus) if `value` does not fit
/// in the field, or [`Error::Comm`] if the read or the write fails.
pub fn set_field<T: Transport>(
    transport: &mut T,
    field: Field,
    value: u8,
) -> Result<(), Error<T::Error>> {
    if value > field.max_value() {
        return Err(Error::Param);
    }

    let mut register = [0u8];
    transport.read(field.address(), &mut register)?;

    let updated = field.insert(register[0], value);

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "RMW reg 0x{:02X}: 0x{:02X} -> 0x{:02X}",
        field.address(),
        register[0],
        updated
    );

    transport.write(field.address(), &[updated])?;
    Ok(())
}

/// Read a single-bit field as a flag
///
/// # Errors
///
/// Returns [`Error::Comm`] if the register read fails.
pub fn get_flag<T: Transport>(transport: &mut T, field: Field) -> Result<bool, Error<T::Error>> {
    Ok(get_field(transport, field)? != 0)
}

/// Set or clear a single-bit field
///
/// # Errors
///
/// Returns [`Error::Comm`] if the read or the write fails.
pub fn set_flag<T: Transport>(
    transport: &mut T,
    field: Field,
    enabled: bool,
) -> Result<(), Error<T::Error>> {
    set_field(transport, field, u8::from(enabled))
}

/// Async version of [`get_field`]
///
/// # Errors
///
/// Returns [`Error::Comm`] if the register read fails.
#[cfg(feature = "async")]
pub async fn get_field_async<T: AsyncTransport>(
    transport: &mut T,
    field: Field,
) -> Result<u8, Error<T::Error>> {
    let mut register = [0u8];
    transport.read(field.address(), &mut register).await?;
    Ok(field.extract(register[0]))
}

/// Async version of [`set_field`]
///
/// # Errors
///
/// Returns [`Error::Param`] (without touching the bus) if `value` does not fit
/// in the field, or [`Error::Comm`] if the read or the write fails.
#[cfg(feature = "async")]
pub async fn set_field_async<T: AsyncTransport>(
    transport: &mut T,
    field: Field,
    value: u8,
) -> Result<(), Error<T::Error>> {
    if value > field.max_value() {
        return Err(Error::Param);
    }

    let mut register = [0u8];
    transport.read(field.address(), &mut register).await?;

    let updated = field.insert(register[0], value);

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "RMW reg 0x{:02X}: 0x{:02X} -> 0x{:02X}",
        field.address(),
        register[0],
        updated
    );

    transport.write(field.address(), &[updated]).await?;
    Ok(())
}
