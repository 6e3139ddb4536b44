//! Common test utilities and mock implementations

pub mod mock_bus;

pub use mock_transport::{MockError, MockTransport, Operation};
pub use test_utils::{assert_float_eq, create_mock_driver};
