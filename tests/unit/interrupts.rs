//! Unit tests for interrupt configuration

use crate::common::create_mock_driver;
use lis3mdl::InterruptAxes;
use lis3mdl::registers::INT_CFG;

#[test]
fn test_power_on_interrupt_state() {
    let (mut driver, _transport) = create_mock_driver();

    assert!(!driver.interrupt_enabled().unwrap());
    assert_eq!(driver.interrupt_axes().unwrap(), InterruptAxes::ALL);
}

#[test]
fn test_interrupt_configuration_keeps_reserved_bit() {
    let (mut driver, transport) = create_mock_driver();

    driver
        .set_interrupt_axes(InterruptAxes {
            x: false,
            y: false,
            z: true,
        })
        .unwrap();
    driver.set_interrupt_active_high(true).unwrap();
    driver.set_interrupt_latch(true).unwrap();
    driver.set_interrupt(true).unwrap();

    // Bit 3 must read back as 1
    assert_eq!(transport.get_register(INT_CFG), 0b0010_1111);
    assert!(driver.interrupt_enabled().unwrap());

    driver.set_interrupt(false).unwrap();
    assert_eq!(transport.get_register(INT_CFG), 0b0010_1110);
}
