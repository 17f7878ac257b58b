//! System configuration and hardware constants
//!
//! Compile-time limits of the controller and of the serial event bus.
//! Everything sized at build time is centralized here.

/// Maximum number of channels available on any board, for both HV and RF
pub const MAX_CHANNELS: usize = 8;

/// Default serial read buffer, and so the default capacity of one
/// `SerialDataReceived` (one USB CDC packet)
pub const SERIAL_RX_BUFFER_SIZE: usize = 64;

/// Serial events queued before the oldest unread one is dropped
pub const SERIAL_EVENT_CAP: usize = 16;

/// Maximum number of serial event subscribers
pub const SERIAL_EVENT_SUBS: usize = 4;

/// Maximum number of non-immediate serial event publishers
pub const SERIAL_EVENT_PUBS: usize = 1;
