pub mod fixtures;
#[cfg(feature = "test-live")]
pub mod utilities;
