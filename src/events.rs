//! Serial Reception Events
//!
//! Bytes read from the controller's serial port are handed to listeners
//! as [`SerialDataReceived`] values over an `embassy-sync` pub/sub
//! channel. The transport side publishes through a [`SerialEventSource`];
//! response parsers hold a [`SerialEventSubscriber`].

use core::fmt;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::pubsub::{ImmediatePublisher, PubSubChannel, Subscriber};
use heapless::Vec;

use crate::config::{
    SERIAL_EVENT_CAP, SERIAL_EVENT_PUBS, SERIAL_EVENT_SUBS, SERIAL_RX_BUFFER_SIZE,
};

/// Raw bytes captured by the serial transport in one read
///
/// `N` is the transport's read buffer size, so one read always fits in one
/// event. Immutable once built. An empty payload is a valid event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SerialDataReceived<const N: usize = SERIAL_RX_BUFFER_SIZE> {
    received_bytes: Vec<u8, N>,
}

impl<const N: usize> SerialDataReceived<N> {
    /// Wrap captured bytes as-is
    #[must_use]
    pub const fn new(received_bytes: Vec<u8, N>) -> Self {
        Self { received_bytes }
    }

    /// Copy captured bytes into a new event
    ///
    /// # Errors
    ///
    /// [`SerialEventError::Overflow`] if `bytes` is longer than the read
    /// buffer `N`. Input is never truncated.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SerialEventError> {
        let received_bytes = Vec::from_slice(bytes).map_err(|()| SerialEventError::Overflow {
            len: bytes.len(),
            capacity: N,
        })?;
        Ok(Self { received_bytes })
    }

    /// Get the received bytes
    #[must_use]
    pub fn received_bytes(&self) -> &[u8] {
        &self.received_bytes
    }

    /// Number of bytes received
    #[must_use]
    pub fn len(&self) -> usize {
        self.received_bytes.len()
    }

    /// Check if no bytes were received
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.received_bytes.is_empty()
    }

    /// Take the received bytes
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8, N> {
        self.received_bytes
    }
}

impl<const N: usize> AsRef<[u8]> for SerialDataReceived<N> {
    fn as_ref(&self) -> &[u8] {
        self.received_bytes()
    }
}

#[cfg(feature = "embedded")]
impl<const N: usize> defmt::Format for SerialDataReceived<N> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "SerialRx({=[u8]:x})", self.received_bytes());
    }
}

/// Serial event construction error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SerialEventError {
    /// Read is larger than the event's buffer
    Overflow {
        /// Length of the rejected payload
        len: usize,
        /// Maximum payload of one event
        capacity: usize,
    },
}

impl fmt::Display for SerialEventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow { len, capacity } => {
                write!(f, "{len} received bytes exceed event capacity of {capacity}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SerialEventError {}

#[cfg(feature = "embedded")]
impl defmt::Format for SerialEventError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Overflow { len, capacity } => {
                defmt::write!(f, "Overflow(len={}, capacity={})", len, capacity);
            }
        }
    }
}

/// Pub/sub channel carrying serial reception events
pub type SerialEventChannel<M, const N: usize = SERIAL_RX_BUFFER_SIZE> = PubSubChannel<
    M,
    SerialDataReceived<N>,
    SERIAL_EVENT_CAP,
    SERIAL_EVENT_SUBS,
    SERIAL_EVENT_PUBS,
>;

/// Listener end of a [`SerialEventChannel`]
pub type SerialEventSubscriber<'a, M, const N: usize = SERIAL_RX_BUFFER_SIZE> = Subscriber<
    'a,
    M,
    SerialDataReceived<N>,
    SERIAL_EVENT_CAP,
    SERIAL_EVENT_SUBS,
    SERIAL_EVENT_PUBS,
>;

type SerialEventPublisher<'a, M, const N: usize> = ImmediatePublisher<
    'a,
    M,
    SerialDataReceived<N>,
    SERIAL_EVENT_CAP,
    SERIAL_EVENT_SUBS,
    SERIAL_EVENT_PUBS,
>;

/// Transport-side publisher of serial reception events
///
/// Publishing never blocks. When the queue is full the oldest event is
/// dropped and any subscriber that had not read it sees a lag count on its
/// next read. With no subscribers, events are discarded.
pub struct SerialEventSource<'a, M: RawMutex, const N: usize = SERIAL_RX_BUFFER_SIZE> {
    publisher: SerialEventPublisher<'a, M, N>,
}

impl<'a, M: RawMutex, const N: usize> SerialEventSource<'a, M, N> {
    /// Create a source publishing into `channel`
    #[must_use]
    pub fn new(channel: &'a SerialEventChannel<M, N>) -> Self {
        Self {
            publisher: channel.immediate_publisher(),
        }
    }

    /// Deliver one event to every subscriber
    pub fn publish(&self, event: SerialDataReceived<N>) {
        #[cfg(feature = "embedded")]
        defmt::trace!("serial rx: {} bytes", event.len());

        self.publisher.publish_immediate(event);
    }

    /// Deliver the bytes of one read from the port as one event
    ///
    /// An empty read yields one empty event.
    ///
    /// # Errors
    ///
    /// [`SerialEventError::Overflow`] if the read is larger than the event
    /// buffer `N`. Nothing is published in that case.
    pub fn received(&self, bytes: &[u8]) -> Result<(), SerialEventError> {
        let event = match SerialDataReceived::from_slice(bytes) {
            Ok(event) => event,
            Err(err) => {
                #[cfg(feature = "embedded")]
                defmt::debug!("serial rx: read rejected, {}", err);

                return Err(err);
            }
        };
        self.publish(event);
        Ok(())
    }
}
