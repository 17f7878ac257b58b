//! Channel Record Tests
//!
//! Tests for the record trait and the bundled HV/RF records.

use ampsbox_core::channel::{ChannelRecord, HvChannelData, RfChannelData};

// =============================================================================
// HV Record Tests
// =============================================================================

#[test]
fn test_hv_default_is_unbound() {
    let record = HvChannelData::default();
    assert_eq!(record.channel(), 0);
    assert_eq!(record.voltage, 0);
}

#[test]
fn test_hv_for_channel() {
    let record = HvChannelData::for_channel(3);
    assert_eq!(record, HvChannelData::new(3, 0));
}

#[test]
fn test_hv_set_channel_keeps_values() {
    let mut record = HvChannelData::new(1, 250);
    record.set_channel(6);
    assert_eq!(record.channel(), 6);
    assert_eq!(record.voltage, 250);
}

// =============================================================================
// RF Record Tests
// =============================================================================

#[test]
fn test_rf_default_is_unbound() {
    let record = RfChannelData::default();
    assert_eq!(record.channel(), 0);
    assert_eq!(record.frequency_hz, 0);
    assert_eq!(record.drive_level, 0);
}

#[test]
fn test_rf_for_channel() {
    let record = RfChannelData::for_channel(8);
    assert_eq!(record.channel, 8);
    assert_eq!(record, RfChannelData::new(8, 0, 0));
}

#[test]
fn test_rf_set_channel_keeps_values() {
    let mut record = RfChannelData::new(2, 1_100_000, 90);
    record.set_channel(5);
    assert_eq!(record, RfChannelData::new(5, 1_100_000, 90));
}
