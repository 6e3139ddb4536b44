//! Decoded configuration types
//!
//! Raw field codes are translated to physical units through [`CodeTable`]s.
//! A table lists the canonical code of every value and the alias rules that
//! fold the remaining bit patterns onto those canonical codes. The LIS3MDL
//! tables below are plain static data; another sensor model only needs its own
//! tables and field map.

/// A raw code that does not correspond to any table entry
///
/// Distinct from a bus error: the read succeeded but the content is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecodeError {
    /// The raw field value that failed to decode
    pub raw: u8,
}

/// A requested value outside the supported range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParamError;

/// Folds a family of raw bit patterns onto its canonical code
///
/// The rule applies when `raw & match_mask == match_value`; the canonical code
/// is then `raw & canonical_mask`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AliasRule {
    /// Bits that select the family
    pub match_mask: u8,
    /// Required value of the selecting bits
    pub match_value: u8,
    /// Bits that are significant within the family
    pub canonical_mask: u8,
}

/// Lookup table between raw field codes and decoded values
#[derive(Debug, Clone, Copy)]
pub struct CodeTable<T: 'static> {
    entries: &'static [(u8, T)],
    aliases: &'static [AliasRule],
}

impl<T> CodeTable<T> {
    /// Build a table from `(canonical code, value)` pairs and alias rules
    ///
    /// Rules are tried in order; the first match wins.
    #[must_use]
    pub const fn new(entries: &'static [(u8, T)], aliases: &'static [AliasRule]) -> Self {
        Self { entries, aliases }
    }

    /// Table entries as `(canonical code, value)` pairs
    #[must_use]
    pub const fn entries(&self) -> &'static [(u8, T)] {
        self.entries
    }

    /// Map a raw code to the canonical code of its alias family
    ///
    /// Codes matched by no rule are already canonical.
    #[must_use]
    pub fn canonicalize(&self, raw: u8) -> u8 {
        self.aliases
            .iter()
            .find(|rule| raw & rule.match_mask == rule.match_value)
            .map_or(raw, |rule| raw & rule.canonical_mask)
    }
}

impl<T: Copy> CodeTable<T> {
    /// Decode a raw code, collapsing aliases first
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the canonical code has no entry.
    pub fn decode(&self, raw: u8) -> Result<T, DecodeError> {
        let canonical = self.canonicalize(raw);
        self.entries
            .iter()
            .find(|(code, _)| *code == canonical)
            .map(|(_, value)| *value)
            .ok_or(DecodeError { raw })
    }
}

/// Output data rate
///
/// Discriminants are the 6-bit `OM[1:0] DO[2:0] FAST_ODR` code of
/// [`DATA_RATE`](crate::registers::DATA_RATE). Rates above 80 Hz use
/// `FAST_ODR`, where the X/Y operating mode selects the rate and the `DO`
/// bits are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DataRate {
    /// 0.625 Hz
    Hz0_625 = 0b00_0000,
    /// 1.25 Hz
    Hz1_25 = 0b00_0010,
    /// 2.5 Hz
    Hz2_5 = 0b00_0100,
    /// 5 Hz
    Hz5 = 0b00_0110,
    /// 10 Hz
    Hz10 = 0b00_1000,
    /// 20 Hz
    Hz20 = 0b00_1010,
    /// 40 Hz
    Hz40 = 0b00_1100,
    /// 80 Hz
    Hz80 = 0b00_1110,
    /// 155 Hz (`FAST_ODR`, ultra-high-performance X/Y)
    Hz155 = 0b11_0001,
    /// 300 Hz (`FAST_ODR`, high-performance X/Y)
    Hz300 = 0b10_0001,
    /// 560 Hz (`FAST_ODR`, medium-performance X/Y)
    Hz560 = 0b01_0001,
    /// 1000 Hz (`FAST_ODR`, low-power X/Y)
    Hz1000 = 0b00_0001,
}

/// `FAST_ODR` bit of the data rate code
const FAST_ODR: u8 = 0b00_0001;

/// LIS3MDL data rate table
///
/// With `FAST_ODR` set the `DO` bits are don't-care; with it clear the X/Y
/// operating mode bits do not affect the rate.
pub const DATA_RATE_TABLE: CodeTable<DataRate> = CodeTable::new(
    &[
        (0b00_0000, DataRate::Hz0_625),
        (0b00_0010, DataRate::Hz1_25),
        (0b00_0100, DataRate::Hz2_5),
        (0b00_0110, DataRate::Hz5),
        (0b00_1000, DataRate::Hz10),
        (0b00_1010, DataRate::Hz20),
        (0b00_1100, DataRate::Hz40),
        (0b00_1110, DataRate::Hz80),
        (0b11_0001, DataRate::Hz155),
        (0b10_0001, DataRate::Hz300),
        (0b01_0001, DataRate::Hz560),
        (0b00_0001, DataRate::Hz1000),
    ],
    &[
        AliasRule {
            match_mask: FAST_ODR,
            match_value: FAST_ODR,
            canonical_mask: 0b11_0001,
        },
        AliasRule {
            match_mask: FAST_ODR,
            match_value: 0,
            canonical_mask: 0b00_1110,
        },
    ],
);

impl DataRate {
    /// Raw 6-bit code
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Rate in Hz
    #[must_use]
    pub const fn hz(self) -> f32 {
        match self {
            Self::Hz0_625 => 0.625,
            Self::Hz1_25 => 1.25,
            Self::Hz2_5 => 2.5,
            Self::Hz5 => 5.0,
            Self::Hz10 => 10.0,
            Self::Hz20 => 20.0,
            Self::Hz40 => 40.0,
            Self::Hz80 => 80.0,
            Self::Hz155 => 155.0,
            Self::Hz300 => 300.0,
            Self::Hz560 => 560.0,
            Self::Hz1000 => 1000.0,
        }
    }

    /// Whether this rate uses `FAST_ODR` (rates above 80 Hz)
    #[must_use]
    pub const fn is_fast(self) -> bool {
        self.code() & FAST_ODR != 0
    }

    /// X/Y operating mode implied by a `FAST_ODR` rate
    ///
    /// Returns `None` for rates up to 80 Hz, which work in any mode.
    #[must_use]
    pub const fn operating_mode(self) -> Option<OperatingMode> {
        if self.is_fast() {
            Some(OperatingMode::from_bits(self.code() >> 4))
        } else {
            None
        }
    }
}

/// Decode a raw [`DATA_RATE`](crate::registers::DATA_RATE) field value
///
/// # Errors
///
/// Returns [`DecodeError`] if the code is not in [`DATA_RATE_TABLE`].
pub fn decode_data_rate(raw: u8) -> Result<DataRate, DecodeError> {
    DATA_RATE_TABLE.decode(raw)
}

/// Pick the fastest supported rate that does not exceed `hz`
///
/// Never rounds up: 3 Hz selects 2.5 Hz, not 5 Hz.
///
/// # Errors
///
/// Returns [`ParamError`] if `hz` is below the slowest rate (0.625 Hz) or NaN.
pub fn encode_data_rate(hz: f32) -> Result<DataRate, ParamError> {
    let mut best: Option<DataRate> = None;
    for &(_, rate) in DATA_RATE_TABLE.entries() {
        if rate.hz() <= hz && best.is_none_or(|current| rate.hz() > current.hz()) {
            best = Some(rate);
        }
    }
    best.ok_or(ParamError)
}

/// Magnetic full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FullScale {
    /// ±4 gauss (most sensitive)
    Gauss4 = 0b00,
    /// ±8 gauss
    Gauss8 = 0b01,
    /// ±12 gauss
    Gauss12 = 0b10,
    /// ±16 gauss (widest range)
    Gauss16 = 0b11,
}

/// LIS3MDL full-scale table
pub const FULL_SCALE_TABLE: CodeTable<FullScale> = CodeTable::new(
    &[
        (0b00, FullScale::Gauss4),
        (0b01, FullScale::Gauss8),
        (0b10, FullScale::Gauss12),
        (0b11, FullScale::Gauss16),
    ],
    &[],
);

impl FullScale {
    /// Raw 2-bit code
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Range in gauss (symmetric, ±)
    #[must_use]
    pub const fn gauss(self) -> u8 {
        match self {
            Self::Gauss4 => 4,
            Self::Gauss8 => 8,
            Self::Gauss12 => 12,
            Self::Gauss16 => 16,
        }
    }

    /// Sensitivity in LSB/gauss
    #[must_use]
    pub const fn sensitivity(self) -> f32 {
        match self {
            Self::Gauss4 => 6842.0,
            Self::Gauss8 => 3421.0,
            Self::Gauss12 => 2281.0,
            Self::Gauss16 => 1711.0,
        }
    }
}

/// Decode a raw [`FULL_SCALE`](crate::registers::FULL_SCALE) field value
///
/// # Errors
///
/// Returns [`DecodeError`] if the code is not in [`FULL_SCALE_TABLE`].
pub fn decode_full_scale(raw: u8) -> Result<FullScale, DecodeError> {
    FULL_SCALE_TABLE.decode(raw)
}

/// Axis operating mode (noise / current trade-off)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OperatingMode {
    /// Low-power mode
    LowPower = 0b00,
    /// Medium-performance mode
    MediumPerformance = 0b01,
    /// High-performance mode
    HighPerformance = 0b10,
    /// Ultra-high-performance mode
    UltraHighPerformance = 0b11,
}

impl OperatingMode {
    /// Decode a 2-bit `OM`/`OMZ` value (upper bits ignored)
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::LowPower,
            0b01 => Self::MediumPerformance,
            0b10 => Self::HighPerformance,
            _ => Self::UltraHighPerformance,
        }
    }

    /// Raw 2-bit code
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Measurement (conversion) mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MeasurementMode {
    /// Continuous conversion
    Continuous = 0b00,
    /// Single conversion, then back to power-down
    Single = 0b01,
    /// No conversions (power-on default)
    PowerDown = 0b10,
}

/// LIS3MDL measurement mode table; `0b11` is an alias of power-down
pub const MEASUREMENT_MODE_TABLE: CodeTable<MeasurementMode> = CodeTable::new(
    &[
        (0b00, MeasurementMode::Continuous),
        (0b01, MeasurementMode::Single),
        (0b10, MeasurementMode::PowerDown),
    ],
    &[AliasRule {
        match_mask: 0b10,
        match_value: 0b10,
        canonical_mask: 0b10,
    }],
);

impl MeasurementMode {
    /// Raw 2-bit code
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Per-axis interrupt generation enables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptAxes {
    /// Interrupt on X axis
    pub x: bool,
    /// Interrupt on Y axis
    pub y: bool,
    /// Interrupt on Z axis
    pub z: bool,
}

impl InterruptAxes {
    /// All axes enabled
    pub const ALL: Self = Self {
        x: true,
        y: true,
        z: true,
    };

    /// Decode the 3-bit `XIEN YIEN ZIEN` field value
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            x: bits & 0b100 != 0,
            y: bits & 0b010 != 0,
            z: bits & 0b001 != 0,
        }
    }

    /// Encode as the 3-bit `XIEN YIEN ZIEN` field value
    #[must_use]
    pub const fn bits(self) -> u8 {
        ((self.x as u8) << 2) | ((self.y as u8) << 1) | (self.z as u8)
    }
}

/// Magnetometer configuration applied by [`Lis3mdl::configure`](crate::Lis3mdl::configure)
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagConfig {
    /// Output data rate
    pub data_rate: DataRate,
    /// Full-scale range
    pub full_scale: FullScale,
    /// Operating mode for rates up to 80 Hz (`FAST_ODR` rates set their own)
    pub operating_mode: OperatingMode,
    /// Measurement mode
    pub measurement_mode: MeasurementMode,
    /// Block data update (keeps low/high output bytes from the same sample)
    pub block_data_update: bool,
}

impl Default for MagConfig {
    fn default() -> Self {
        Self {
            data_rate: DataRate::Hz80,
            full_scale: FullScale::Gauss4,
            operating_mode: OperatingMode::HighPerformance,
            measurement_mode: MeasurementMode::Continuous,
            block_data_update: true,
        }
    }
}

impl MagConfig {
    /// Operating mode that will actually be in effect for this configuration
    #[must_use]
    pub const fn effective_operating_mode(&self) -> OperatingMode {
        match self.data_rate.operating_mode() {
            Some(mode) => mode,
            None => self.operating_mode,
        }
    }
}
