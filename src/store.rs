//! Channel Store
//!
//! Holds the HV and RF state of every channel on one device. All
//! [`MAX_CHANNELS`] slots are populated when the store is built; the
//! configured channel counts only decide which of them may be looked up.
//!
//! A lookup can fail in two distinct ways:
//!
//! - [`ChannelError::OutOfRange`]: the channel number is above the
//!   configured HV channel count. RF lookups are gated by the HV count too.
//! - [`ChannelError::NotFound`]: the number passed the count check but no
//!   record sits in that slot, either because [`ChannelStore::clear`] emptied
//!   it or because the number has no slot at all (0, or past the last slot
//!   when the count is misconfigured above the hardware maximum).

use core::fmt;

use crate::channel::{ChannelRecord, HvChannelData, RfChannelData};
use crate::config::MAX_CHANNELS;

/// Channel lookup error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelError {
    /// Channel number is above the configured channel count
    OutOfRange {
        /// Requested channel
        channel: u8,
        /// Configured channel count the request was checked against
        supported: u8,
    },
    /// Channel passed the range check but holds no record
    NotFound {
        /// Requested channel
        channel: u8,
    },
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { channel, supported } => write!(
                f,
                "channel {channel} is not supported by the device ({supported} configured)"
            ),
            Self::NotFound { channel } => write!(f, "no data stored for channel {channel}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChannelError {}

#[cfg(feature = "embedded")]
impl defmt::Format for ChannelError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::OutOfRange { channel, supported } => {
                defmt::write!(f, "OutOfRange(ch={}, supported={})", channel, supported);
            }
            Self::NotFound { channel } => defmt::write!(f, "NotFound(ch={})", channel),
        }
    }
}

/// Per-device HV and RF channel state
#[derive(Clone, Debug)]
pub struct ChannelStore<H, R> {
    /// Number of HV channels exposed by the device
    hv_channel_count: u8,
    /// Number of RF channels exposed by the device
    rf_channel_count: u8,
    /// HV records, slot `i` holds channel `i + 1`
    hv: [Option<H>; MAX_CHANNELS],
    /// RF records, slot `i` holds channel `i + 1`
    rf: [Option<R>; MAX_CHANNELS],
}

/// Channel store over the bundled record types
pub type DeviceData = ChannelStore<HvChannelData, RfChannelData>;

impl<H: ChannelRecord, R: ChannelRecord> ChannelStore<H, R> {
    /// Create a store with every HV and RF slot populated
    ///
    /// Both channel counts start at zero, so no lookup succeeds until the
    /// owning device configures them.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hv_channel_count: 0,
            rf_channel_count: 0,
            hv: populated(),
            rf: populated(),
        }
    }

    /// Get the number of supported HV channels
    #[must_use]
    pub const fn hv_channel_count(&self) -> u8 {
        self.hv_channel_count
    }

    /// Set the number of supported HV channels
    ///
    /// Not checked against [`MAX_CHANNELS`]; keeping it in range is up to
    /// the caller.
    pub fn set_hv_channel_count(&mut self, count: u8) {
        self.hv_channel_count = count;
    }

    /// Get the number of supported RF channels
    #[must_use]
    pub const fn rf_channel_count(&self) -> u8 {
        self.rf_channel_count
    }

    /// Set the number of supported RF channels
    ///
    /// Not checked against [`MAX_CHANNELS`].
    pub fn set_rf_channel_count(&mut self, count: u8) {
        self.rf_channel_count = count;
    }

    /// Get the HV data for a channel
    ///
    /// Negative channel numbers are not representable; callers converting
    /// from a signed value must reject them first.
    ///
    /// # Errors
    ///
    /// [`ChannelError::OutOfRange`] if `channel` is above the HV channel
    /// count, [`ChannelError::NotFound`] if the slot holds no record.
    pub fn hv_data(&self, channel: u8) -> Result<&H, ChannelError> {
        check_range(channel, self.hv_channel_count)?;
        slot(&self.hv, channel)
    }

    /// Get the HV data for a channel mutably
    ///
    /// # Errors
    ///
    /// Same as [`Self::hv_data`].
    pub fn hv_data_mut(&mut self, channel: u8) -> Result<&mut H, ChannelError> {
        check_range(channel, self.hv_channel_count)?;
        slot_mut(&mut self.hv, channel)
    }

    /// Get the RF data for a channel
    ///
    /// The range check uses the HV channel count, not the RF count.
    ///
    /// # Errors
    ///
    /// [`ChannelError::OutOfRange`] if `channel` is above the HV channel
    /// count, [`ChannelError::NotFound`] if the slot holds no record.
    pub fn rf_data(&self, channel: u8) -> Result<&R, ChannelError> {
        check_range(channel, self.hv_channel_count)?;
        slot(&self.rf, channel)
    }

    /// Get the RF data for a channel mutably
    ///
    /// # Errors
    ///
    /// Same as [`Self::rf_data`].
    pub fn rf_data_mut(&mut self, channel: u8) -> Result<&mut R, ChannelError> {
        check_range(channel, self.hv_channel_count)?;
        slot_mut(&mut self.rf, channel)
    }

    /// Iterate the HV records exposed by the configured HV count
    pub fn hv_channels(&self) -> impl Iterator<Item = &H> + '_ {
        exposed(&self.hv, self.hv_channel_count)
    }

    /// Iterate the RF records exposed by the configured HV count
    pub fn rf_channels(&self) -> impl Iterator<Item = &R> + '_ {
        exposed(&self.rf, self.hv_channel_count)
    }

    /// Remove every HV and RF record
    ///
    /// Channel counts are left as they are, so lookups that pass the range
    /// check now fail with [`ChannelError::NotFound`].
    pub fn clear(&mut self) {
        self.rf.fill_with(|| None);
        self.hv.fill_with(|| None);

        #[cfg(feature = "embedded")]
        defmt::debug!("channel store cleared");
    }

    /// Refill every slot with a fresh record bound to its channel
    pub fn repopulate(&mut self) {
        self.hv = populated();
        self.rf = populated();

        #[cfg(feature = "embedded")]
        defmt::debug!("channel store repopulated");
    }

    /// Check whether every HV and RF slot holds a record
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.hv.iter().all(Option::is_some) && self.rf.iter().all(Option::is_some)
    }
}

impl<H: ChannelRecord, R: ChannelRecord> Default for ChannelStore<H, R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "embedded")]
impl<H: ChannelRecord, R: ChannelRecord> defmt::Format for ChannelStore<H, R> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "ChannelStore(hv={}, rf={}, populated={})",
            self.hv_channel_count,
            self.rf_channel_count,
            self.is_populated()
        );
    }
}

/// Build a full set of slots, each bound to its channel number
fn populated<T: ChannelRecord>() -> [Option<T>; MAX_CHANNELS] {
    core::array::from_fn(|i| Some(T::for_channel(slot_channel(i))))
}

#[allow(clippy::cast_possible_truncation)]
const fn slot_channel(index: usize) -> u8 {
    index as u8 + 1
}

/// Map a 1-based channel number to its slot
fn slot_index(channel: u8) -> Option<usize> {
    usize::from(channel)
        .checked_sub(1)
        .filter(|&index| index < MAX_CHANNELS)
}

fn check_range(channel: u8, supported: u8) -> Result<(), ChannelError> {
    if channel > supported {
        #[cfg(feature = "embedded")]
        defmt::debug!("channel {} rejected, {} supported", channel, supported);

        return Err(ChannelError::OutOfRange { channel, supported });
    }
    Ok(())
}

fn slot<T>(slots: &[Option<T>; MAX_CHANNELS], channel: u8) -> Result<&T, ChannelError> {
    slot_index(channel)
        .and_then(|index| slots.get(index))
        .and_then(Option::as_ref)
        .ok_or(ChannelError::NotFound { channel })
}

fn slot_mut<T>(slots: &mut [Option<T>; MAX_CHANNELS], channel: u8) -> Result<&mut T, ChannelError> {
    slot_index(channel)
        .and_then(|index| slots.get_mut(index))
        .and_then(Option::as_mut)
        .ok_or(ChannelError::NotFound { channel })
}

fn exposed<T>(slots: &[Option<T>; MAX_CHANNELS], count: u8) -> impl Iterator<Item = &T> + '_ {
    slots
        .iter()
        .take(usize::from(count))
        .filter_map(Option::as_ref)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_index_is_one_based() {
        assert_eq!(slot_index(1), Some(0));
        assert_eq!(slot_index(8), Some(7));
    }

    #[test]
    fn slot_index_rejects_unslotted_channels() {
        assert_eq!(slot_index(0), None);
        assert_eq!(slot_index(9), None);
        assert_eq!(slot_index(u8::MAX), None);
    }

    #[test]
    fn slot_channel_inverts_slot_index() {
        for index in 0..MAX_CHANNELS {
            assert_eq!(slot_index(slot_channel(index)), Some(index));
        }
    }

    #[test]
    fn range_check_allows_equal() {
        assert!(check_range(3, 3).is_ok());
        assert_eq!(
            check_range(4, 3),
            Err(ChannelError::OutOfRange {
                channel: 4,
                supported: 3
            })
        );
    }
}
