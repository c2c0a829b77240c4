//! Dasig X device identity: bus types, variants, and the host match table.

#![deny(static_mut_refs)]

use crate::ids::{
    PRODUCT_DASIG_X_BLUETOOTH, PRODUCT_DASIG_X_DONGLE, PRODUCT_DASIG_X_WIRED, VENDOR_ID,
};

/// Transport bus a HID device enumerated on.
///
/// Raw values follow the Linux input bus numbering (`BUS_USB = 0x03`,
/// `BUS_BLUETOOTH = 0x05`), which is what hidraw and uhid report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusType {
    Usb,
    Bluetooth,
}

impl BusType {
    /// Map a raw Linux bus number to a supported transport.
    ///
    /// Buses the Dasig X never enumerates on (I2C, virtual, ...) map to
    /// `None` so callers fall through to their generic handling.
    pub const fn from_raw(bus: u16) -> Option<Self> {
        match bus {
            0x03 => Some(Self::Usb),
            0x05 => Some(Self::Bluetooth),
            _ => None,
        }
    }

    /// Raw Linux bus number for this transport.
    pub const fn raw(self) -> u16 {
        match self {
            Self::Usb => 0x03,
            Self::Bluetooth => 0x05,
        }
    }
}

/// Dasig X hardware variant, the unit the fixup logic dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DasigXVariant {
    /// Wired USB mode. Descriptor is replaced wholesale.
    Wired,
    /// 2.4 GHz USB dongle. Descriptor is patched in place.
    Dongle,
    /// Bluetooth mode. Same in-place patch as the dongle.
    Bluetooth,
}

impl DasigXVariant {
    /// Short transport label for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wired => "wired",
            Self::Dongle => "dongle",
            Self::Bluetooth => "Bluetooth",
        }
    }
}

/// One entry of the host-facing device match table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceMatch {
    pub bus: BusType,
    pub vendor_id: u16,
    pub product_id: u16,
    pub variant: DasigXVariant,
}

impl DeviceMatch {
    /// Returns `true` when this entry matches the given device identity.
    pub const fn matches(&self, bus: BusType, vendor_id: u16, product_id: u16) -> bool {
        self.bus.raw() == bus.raw()
            && self.vendor_id == vendor_id
            && self.product_id == product_id
    }
}

/// The three identities the fixup handles. Host frameworks use this table to
/// decide which devices route through the fixup at all.
pub const DEVICE_TABLE: [DeviceMatch; 3] = [
    DeviceMatch {
        bus: BusType::Usb,
        vendor_id: VENDOR_ID,
        product_id: PRODUCT_DASIG_X_WIRED,
        variant: DasigXVariant::Wired,
    },
    DeviceMatch {
        bus: BusType::Usb,
        vendor_id: VENDOR_ID,
        product_id: PRODUCT_DASIG_X_DONGLE,
        variant: DasigXVariant::Dongle,
    },
    DeviceMatch {
        bus: BusType::Bluetooth,
        vendor_id: VENDOR_ID,
        product_id: PRODUCT_DASIG_X_BLUETOOTH,
        variant: DasigXVariant::Bluetooth,
    },
];

/// Classify a device identity against [`DEVICE_TABLE`].
///
/// This is a pure function: it never performs I/O and may be called from any
/// context, including test code with constructed identities. Unrecognized
/// identities return `None`; the caller treats that as "leave the descriptor
/// alone", never as an error.
pub fn classify_device(bus: BusType, vendor_id: u16, product_id: u16) -> Option<DasigXVariant> {
    DEVICE_TABLE
        .iter()
        .find(|entry| entry.matches(bus, vendor_id, product_id))
        .map(|entry| entry.variant)
}
