//! Fuzzes the Dasig X descriptor fixup entry points.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_rdesc_fixup
#![no_main]
use hid_rakk_protocol::{fixup_for_device, fixup_report_descriptor, BusType, DasigXVariant};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic on arbitrary bytes; unmatched input is a no-op by
    // contract, never an error.
    if data.len() < 5 {
        return;
    }
    let (head, rest) = data.split_at(5);
    let bus = if head[0] & 0x01 == 0 {
        BusType::Usb
    } else {
        BusType::Bluetooth
    };
    let vid = u16::from_le_bytes([head[1], head[2]]);
    let pid = u16::from_le_bytes([head[3], head[4]]);

    let mut rdesc = rest.to_vec();
    let _ = fixup_for_device(bus, vid, pid, &mut rdesc);

    let variant = match head[0] >> 6 {
        0 => DasigXVariant::Wired,
        1 => DasigXVariant::Dongle,
        _ => DasigXVariant::Bluetooth,
    };
    let mut rdesc = rest.to_vec();
    let _ = fixup_report_descriptor(variant, &mut rdesc);
});
