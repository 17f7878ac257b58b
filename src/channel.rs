//! Per-channel records
//!
//! The store only needs to know a record's channel number. The value
//! fields of the bundled HV and RF records are written by the protocol
//! layer and are not interpreted here.

/// A record holding the state of one physical channel
///
/// Records are created with `Default` and then bound to their slot
/// with [`ChannelRecord::set_channel`].
pub trait ChannelRecord: Default {
    /// Get the 1-based channel number this record belongs to
    fn channel(&self) -> u8;

    /// Bind the record to a channel number
    fn set_channel(&mut self, channel: u8);

    /// Create a default record bound to `channel`
    #[must_use]
    fn for_channel(channel: u8) -> Self {
        let mut record = Self::default();
        record.set_channel(channel);
        record
    }
}

/// High voltage channel state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HvChannelData {
    /// Channel number (1-based)
    pub channel: u8,
    /// Output set point in volts
    pub voltage: i32,
}

impl HvChannelData {
    /// Create a record for `channel` with the given set point
    #[must_use]
    pub const fn new(channel: u8, voltage: i32) -> Self {
        Self { channel, voltage }
    }
}

impl ChannelRecord for HvChannelData {
    fn channel(&self) -> u8 {
        self.channel
    }

    fn set_channel(&mut self, channel: u8) {
        self.channel = channel;
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for HvChannelData {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "HV{}({} V)", self.channel, self.voltage);
    }
}

/// RF channel state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RfChannelData {
    /// Channel number (1-based)
    pub channel: u8,
    /// Drive frequency in Hz
    pub frequency_hz: u32,
    /// Drive level in device counts
    pub drive_level: u16,
}

impl RfChannelData {
    /// Create a record for `channel` with the given drive settings
    #[must_use]
    pub const fn new(channel: u8, frequency_hz: u32, drive_level: u16) -> Self {
        Self {
            channel,
            frequency_hz,
            drive_level,
        }
    }
}

impl ChannelRecord for RfChannelData {
    fn channel(&self) -> u8 {
        self.channel
    }

    fn set_channel(&mut self, channel: u8) {
        self.channel = channel;
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for RfChannelData {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "RF{}({} Hz, drive={})",
            self.channel,
            self.frequency_hz,
            self.drive_level
        );
    }
}
