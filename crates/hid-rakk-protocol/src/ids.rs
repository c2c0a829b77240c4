//! Rakk USB vendor and product ID constants.
//!
//! Rakk is a Philippine gaming peripheral brand. The Dasig X mouse family
//! enumerates under VID `0x248A` across three transports: a wired USB mode,
//! a 2.4 GHz USB dongle, and Bluetooth.
//!
//! Sources:
//! - Vendor Linux kernel driver `hid-rakk-dasig-x.c`:
//!   `USB_VENDOR_ID_RAKK = 0x248A`,
//!   `USB_DEVICE_ID_RAKK_DASIG_X = 0xfb01`,
//!   `USB_DEVICE_ID_RAKK_DASIG_X_DONGLE = 0xfa02`,
//!   `USB_DEVICE_ID_RAKK_DASIG_X_BLUETOOTH = 0x8266`
//! - USB enumeration captures of wired and dongle modes (lsusb, hidraw
//!   `HIDIOCGRAWINFO`); the Bluetooth PID is the value the mouse reports in
//!   its device ID record after pairing.
//!
//! VID `0x248A` is shared by several white-label mouse firmwares and is not
//! registered to Rakk in public USB-ID databases. Matching therefore always
//! pairs the VID with one of the Dasig X PIDs below, never the VID alone.

#![deny(static_mut_refs)]

/// Rakk USB Vendor ID, as matched by the vendor kernel driver.
///
/// Shared with other white-label firmwares; never match on this alone.
pub const VENDOR_ID: u16 = 0x248A;

/// Dasig X in wired USB mode.
///
/// This mode ships the 193-byte faulty report descriptor that needs a full
/// replacement (see [`crate::rdesc`]).
pub const PRODUCT_DASIG_X_WIRED: u16 = 0xFB01;

/// Dasig X 2.4 GHz USB receiver dongle.
///
/// The dongle descriptor carries extra report IDs for DPI and media keys and
/// is patched surgically rather than replaced.
pub const PRODUCT_DASIG_X_DONGLE: u16 = 0xFA02;

/// Dasig X paired over Bluetooth.
///
/// Same descriptor fault as the dongle; reported through the Bluetooth HID
/// device ID record rather than USB enumeration.
pub const PRODUCT_DASIG_X_BLUETOOTH: u16 = 0x8266;

/// Returns `true` if the VID/PID pair identifies a known Dasig X variant.
pub fn is_rakk(vid: u16, pid: u16) -> bool {
    vid == VENDOR_ID
        && matches!(
            pid,
            PRODUCT_DASIG_X_WIRED | PRODUCT_DASIG_X_DONGLE | PRODUCT_DASIG_X_BLUETOOTH
        )
}

/// Returns the product name for a known Dasig X PID, or `None`.
pub fn product_name(pid: u16) -> Option<&'static str> {
    match pid {
        PRODUCT_DASIG_X_WIRED => Some("Rakk Dasig X (wired)"),
        PRODUCT_DASIG_X_DONGLE => Some("Rakk Dasig X (dongle)"),
        PRODUCT_DASIG_X_BLUETOOTH => Some("Rakk Dasig X (Bluetooth)"),
        _ => None,
    }
}
