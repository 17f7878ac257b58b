//! AMPS Box Core Library
//!
//! Data layer for the 8-channel AMPS controller ("the box"), a device
//! with independently configurable high voltage (HV) and radio frequency
//! (RF) channels driven over a serial link.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  DEVICE CONTROL (external)                   │
//! ├──────────────────────────────┬──────────────────────────────┤
//! │        CHANNEL STORE          │    SERIAL RECEPTION EVENTS   │
//! │  8 HV + 8 RF slots, gated by  │  SerialDataReceived over a   │
//! │  configured channel counts    │  pub/sub channel             │
//! ├──────────────────────────────┴──────────────────────────────┤
//! │             SERIAL TRANSPORT / PROTOCOL (external)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two halves do not depend on each other.
//!
//! # Design Principles
//!
//! - **Fixed storage**: every channel slot exists from construction; the
//!   configured counts only gate access
//! - **Distinct failures**: out-of-range and missing-record lookups are
//!   separate error variants
//! - **Immutable events**: received bytes are never modified after capture

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Per-channel records
///
/// The record trait the store is generic over, plus the bundled HV and
/// RF records.
pub mod channel;

/// Channel Store
///
/// Bounds-checked storage of HV and RF channel state for one device.
pub mod store;

/// Serial Reception Events
///
/// Received-bytes payload and its pub/sub delivery.
pub mod events;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::channel::{ChannelRecord, HvChannelData, RfChannelData};
    pub use crate::config::MAX_CHANNELS;
    pub use crate::events::{
        SerialDataReceived, SerialEventChannel, SerialEventError, SerialEventSource,
        SerialEventSubscriber,
    };
    pub use crate::store::{ChannelError, ChannelStore, DeviceData};

    // Logging
    #[cfg(feature = "embedded")]
    pub use defmt::{debug, error, info, trace, warn};
}
