//! Dasig X report-descriptor fixups.
//!
//! All three variants ship firmware that declares a button usage range of
//! 1..=3 even though the hardware has five buttons, so generic HID parsers
//! drop the side buttons. The wired firmware additionally mis-sizes its
//! button report fields in a way that in-place patching cannot salvage, so
//! that variant gets a verified-correct replacement descriptor instead.
//!
//! Both operations are pure transforms over a caller-owned buffer. There is
//! no error path: every unmatched or out-of-range condition degrades to
//! "leave the descriptor untouched".

#![deny(static_mut_refs)]

use tracing::{debug, info};

use crate::types::{BusType, DasigXVariant};

/// Descriptor length emitted by the buggy wired firmware.
///
/// The replacement applies only on an exact match; any other length is
/// assumed to be a future firmware revision and passed through untouched.
pub const WIRED_FAULTY_RDESC_LEN: usize = 193;

/// Shortest descriptor the surgical scan will look at.
pub const FAULT_SCAN_MIN_LEN: usize = 30;

/// The faulty item run the dongle and Bluetooth firmwares emit:
/// Usage Page (Button), Usage Minimum (1), Usage Maximum (3).
pub const BUTTON_RANGE_FAULT: [u8; 6] = [0x05, 0x09, 0x19, 0x01, 0x29, 0x03];

/// Replacement descriptor for the wired variant: Report ID 1, a five-button
/// bitmap padded to a byte, 16-bit relative X/Y, and an 8-bit wheel.
pub static FIXED_RDESC: [u8; 66] = [
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x02, // Usage (Mouse)
    0xA1, 0x01, // Collection (Application)
    0x85, 0x01, //   Report ID (1)
    0x09, 0x01, //   Usage (Pointer)
    0xA1, 0x00, //   Collection (Physical)
    0x05, 0x09, //     Usage Page (Button)
    0x19, 0x01, //     Usage Minimum (1)
    0x29, 0x05, //     Usage Maximum (5)
    0x15, 0x00, //     Logical Minimum (0)
    0x25, 0x01, //     Logical Maximum (1)
    0x75, 0x01, //     Report Size (1)
    0x95, 0x05, //     Report Count (5)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x75, 0x03, //     Report Size (3)
    0x95, 0x01, //     Report Count (1)
    0x81, 0x01, //     Input (Constant)
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x30, //     Usage (X)
    0x09, 0x31, //     Usage (Y)
    0x16, 0x01, 0x80, // Logical Minimum (-32767)
    0x26, 0xFF, 0x7F, // Logical Maximum (32767)
    0x75, 0x10, //     Report Size (16)
    0x95, 0x02, //     Report Count (2)
    0x81, 0x06, //     Input (Data, Variable, Relative)
    0x09, 0x38, //     Usage (Wheel)
    0x15, 0x81, //     Logical Minimum (-127)
    0x25, 0x7F, //     Logical Maximum (127)
    0x75, 0x08, //     Report Size (8)
    0x95, 0x01, //     Report Count (1)
    0x81, 0x06, //     Input (Data, Variable, Relative)
    0xC0, //   End Collection
    0xC0, // End Collection
];

// Byte offsets relative to the start of the fault signature. The firmware
// lays out Logical Minimum/Maximum and Report Size between the Usage Maximum
// and the Report Count, so the Report Count tag sits at a fixed distance.
const USAGE_MAX_DATA: usize = 5;
const REPORT_COUNT_TAG_AT: usize = 10;
const REPORT_COUNT_DATA_AT: usize = 11;

/// HID short-item prefix for a one-byte Report Count.
const REPORT_COUNT_TAG: u8 = 0x95;

/// Button count the hardware actually has.
const DASIG_X_BUTTON_COUNT: u8 = 0x05;

/// Outcome of a report-descriptor fixup pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdescFixup {
    /// The firmware descriptor was discarded; parse this replacement
    /// instead. Its length is `descriptor.len()`.
    Replaced(&'static [u8]),
    /// The caller's buffer was patched in place. `offset` is where the
    /// fault signature starts; `report_count_adjusted` records whether the
    /// trailing Report Count data byte was also rewritten.
    Patched {
        offset: usize,
        report_count_adjusted: bool,
    },
    /// Nothing recognized; the buffer is byte-identical to the input.
    Unchanged,
}

impl RdescFixup {
    /// Descriptor bytes the HID parser should consume after the fixup.
    ///
    /// Resolves the replaced/patched/unchanged cases back to a single slice
    /// the way an in-kernel `report_fixup` returns a buffer pointer.
    pub fn descriptor<'a>(self, original: &'a [u8]) -> &'a [u8] {
        match self {
            Self::Replaced(fixed) => fixed,
            Self::Patched { .. } | Self::Unchanged => original,
        }
    }
}

/// Find the first occurrence of [`BUTTON_RANGE_FAULT`] within the scan bound.
///
/// The window is one byte wider than the signature: a signature starting in
/// the final six bytes never matches. That is the exact bound the shipped
/// firmware workaround established, and descriptors real devices emit keep
/// the button block well clear of the tail.
pub fn find_button_range_fault(rdesc: &[u8]) -> Option<usize> {
    rdesc
        .windows(BUTTON_RANGE_FAULT.len() + 1)
        .position(|window| window.starts_with(&BUTTON_RANGE_FAULT))
}

/// Correct the report descriptor of an already-classified Dasig X variant.
///
/// Never fails and never reads or writes outside `rdesc`: unmatched lengths
/// and missing signatures fall through to [`RdescFixup::Unchanged`].
pub fn fixup_report_descriptor(variant: DasigXVariant, rdesc: &mut [u8]) -> RdescFixup {
    match variant {
        DasigXVariant::Wired => {
            if rdesc.len() != WIRED_FAULTY_RDESC_LEN {
                debug!(
                    len = rdesc.len(),
                    "wired descriptor length unrecognized, passing through"
                );
                return RdescFixup::Unchanged;
            }
            info!(
                from = WIRED_FAULTY_RDESC_LEN,
                to = FIXED_RDESC.len(),
                "replacing Dasig X wired report descriptor"
            );
            RdescFixup::Replaced(&FIXED_RDESC)
        }
        DasigXVariant::Dongle | DasigXVariant::Bluetooth => {
            if rdesc.len() < FAULT_SCAN_MIN_LEN {
                debug!(
                    len = rdesc.len(),
                    "descriptor too short for button-range scan, passing through"
                );
                return RdescFixup::Unchanged;
            }
            let Some(offset) = find_button_range_fault(rdesc) else {
                debug!("no button-range fault found, passing through");
                return RdescFixup::Unchanged;
            };

            // Usage Maximum data byte: 3 becomes 5. The scan bound keeps
            // this offset in range.
            if let Some(usage_max) = rdesc.get_mut(offset + USAGE_MAX_DATA) {
                *usage_max = DASIG_X_BUTTON_COUNT;
            }

            // Rewrite the Report Count data byte so five bits are allocated
            // for the five buttons, but only when the tag at the expected
            // distance really is a Report Count and both bytes are in range.
            let report_count_adjusted = rdesc.get(offset + REPORT_COUNT_TAG_AT).copied()
                == Some(REPORT_COUNT_TAG)
                && match rdesc.get_mut(offset + REPORT_COUNT_DATA_AT) {
                    Some(count) => {
                        *count = DASIG_X_BUTTON_COUNT;
                        true
                    }
                    None => false,
                };

            info!(
                transport = variant.name(),
                offset, report_count_adjusted, "patched Dasig X button usage range"
            );
            RdescFixup::Patched {
                offset,
                report_count_adjusted,
            }
        }
    }
}

/// Probe-path entry point: classify a raw device identity, then fix up.
///
/// Devices outside the match table get [`RdescFixup::Unchanged`], so this is
/// safe to call unconditionally from a bus enumeration hook.
pub fn fixup_for_device(
    bus: BusType,
    vendor_id: u16,
    product_id: u16,
    rdesc: &mut [u8],
) -> RdescFixup {
    match crate::types::classify_device(bus, vendor_id, product_id) {
        Some(variant) => fixup_report_descriptor(variant, rdesc),
        None => RdescFixup::Unchanged,
    }
}
