//! Rakk Dasig X HID report-descriptor fixups.
//!
//! The Dasig X gaming mouse family ships firmware whose report descriptors
//! declare only three of the five hardware buttons. This crate classifies a
//! device by (bus, VID, PID) and corrects the descriptor before a HID parser
//! sees it: the wired variant gets a compiled-in replacement descriptor, the
//! dongle and Bluetooth variants get a two-byte in-place patch of the faulty
//! button usage range.
//!
//! The crate is intentionally I/O-free and allocation-free on hot paths. It
//! provides pure functions over caller-owned buffers that can be tested and
//! fuzzed without hardware or OS-level HID plumbing; transport handling and
//! report parsing stay with the host stack.
//!
//! # VID / PID
//! - Vendor ID: `0x248A` (Rakk; shared white-label VID, never matched alone)
//! - Wired: `0xFB01`, dongle: `0xFA02`, Bluetooth: `0x8266`
//!
//! # Sources
//! - Vendor Linux kernel driver `hid-rakk-dasig-x.c` (device table,
//!   replacement descriptor, fault signature and patch offsets)
//! - USB HID specification 1.11 (item encoding, section 6.2.2.2)

#![deny(static_mut_refs)]

pub mod ids;
pub mod item;
pub mod rdesc;
pub mod types;

// Flat re-exports so callers can use `hid_rakk_protocol::Foo`.
pub use ids::{
    is_rakk, product_name, PRODUCT_DASIG_X_BLUETOOTH, PRODUCT_DASIG_X_DONGLE,
    PRODUCT_DASIG_X_WIRED, VENDOR_ID,
};
pub use item::{validate, ItemType, RdescError, ShortItem, ShortItems};
pub use rdesc::{
    find_button_range_fault, fixup_for_device, fixup_report_descriptor, RdescFixup,
    BUTTON_RANGE_FAULT, FAULT_SCAN_MIN_LEN, FIXED_RDESC, WIRED_FAULTY_RDESC_LEN,
};
pub use types::{classify_device, BusType, DasigXVariant, DeviceMatch, DEVICE_TABLE};
