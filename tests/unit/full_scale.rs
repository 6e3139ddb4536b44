//! Unit tests for full-scale configuration and modes

use crate::common::create_mock_driver;
use lis3mdl::registers::{CTRL_REG2, CTRL_REG3, CTRL_REG4, CTRL_REG5};
use lis3mdl::{FullScale, MeasurementMode, OperatingMode};

#[test]
fn test_full_scale_survives_unrelated_writes() {
    let (mut driver, transport) = create_mock_driver();

    driver.set_full_scale(FullScale::Gauss16).unwrap();
    assert_eq!(transport.get_register(CTRL_REG2), 0b0110_0000);

    // Another agent flips the bits around the field
    let current = transport.get_register(CTRL_REG2);
    transport.set_register(CTRL_REG2, current | 0b1001_1111);

    assert_eq!(driver.full_scale().unwrap(), FullScale::Gauss16);
}

#[test]
fn test_set_full_scale_keeps_neighbours() {
    let (mut driver, transport) = create_mock_driver();
    transport.set_register(CTRL_REG2, 0b1000_1100);

    driver.set_full_scale(FullScale::Gauss8).unwrap();

    assert_eq!(transport.get_register(CTRL_REG2), 0b1010_1100);
    assert_eq!(driver.full_scale().unwrap(), FullScale::Gauss8);
}

#[test]
fn test_every_full_scale_round_trips() {
    let (mut driver, _transport) = create_mock_driver();

    for full_scale in [
        FullScale::Gauss4,
        FullScale::Gauss8,
        FullScale::Gauss12,
        FullScale::Gauss16,
    ] {
        driver.set_full_scale(full_scale).unwrap();
        assert_eq!(driver.full_scale().unwrap(), full_scale);
    }
}

#[test]
fn test_measurement_mode_alias() {
    let (mut driver, transport) = create_mock_driver();

    // Power-on value
    assert_eq!(
        driver.measurement_mode().unwrap(),
        MeasurementMode::PowerDown
    );

    transport.set_register(CTRL_REG3, 0b0000_0010);
    assert_eq!(
        driver.measurement_mode().unwrap(),
        MeasurementMode::PowerDown
    );

    driver
        .set_measurement_mode(MeasurementMode::Continuous)
        .unwrap();
    assert_eq!(transport.get_register(CTRL_REG3), 0x00);
    assert_eq!(
        driver.measurement_mode().unwrap(),
        MeasurementMode::Continuous
    );
}

#[test]
fn test_set_operating_mode_covers_all_axes() {
    let (mut driver, transport) = create_mock_driver();
    transport.set_register(CTRL_REG4, 0b0000_0010);

    driver
        .set_operating_mode(OperatingMode::UltraHighPerformance)
        .unwrap();

    assert_eq!(
        driver.xy_operating_mode().unwrap(),
        OperatingMode::UltraHighPerformance
    );
    assert_eq!(
        driver.z_operating_mode().unwrap(),
        OperatingMode::UltraHighPerformance
    );
    // BLE untouched
    assert_eq!(transport.get_register(CTRL_REG4), 0b0000_1110);
}

#[test]
fn test_block_data_update_flag() {
    let (mut driver, transport) = create_mock_driver();
    transport.set_register(CTRL_REG5, 0b1000_0000);

    driver.set_block_data_update(true).unwrap();
    assert_eq!(transport.get_register(CTRL_REG5), 0b1100_0000);

    driver.set_block_data_update(false).unwrap();
    assert_eq!(transport.get_register(CTRL_REG5), 0b1000_0000);
}

#[test]
fn test_soft_reset_and_reboot_bits() {
    let (mut driver, transport) = create_mock_driver();
    transport.set_register(CTRL_REG2, 0b0100_0000);

    driver.soft_reset().unwrap();
    assert_eq!(transport.get_register(CTRL_REG2), 0b0100_0100);

    driver.reboot().unwrap();
    assert_eq!(transport.get_register(CTRL_REG2), 0b0100_1100);
}
