//! Property-based tests for the Dasig X descriptor fixups.
//!
//! Uses proptest with 500 cases to verify invariants on:
//! - Identity behavior for unrecognized devices and unrecognized lengths
//! - Patch locality: at most two bytes ever change, at fixed offsets
//! - Idempotence of the surgical patch
//! - The exact historical scan bound
//! - Robustness: arbitrary inputs never panic

use hid_rakk_protocol::{
    classify_device, find_button_range_fault, fixup_for_device, fixup_report_descriptor, validate,
    BusType, DasigXVariant, RdescFixup, BUTTON_RANGE_FAULT,
};
use proptest::prelude::*;

fn any_bus() -> impl Strategy<Value = BusType> {
    prop_oneof![Just(BusType::Usb), Just(BusType::Bluetooth)]
}

fn any_variant() -> impl Strategy<Value = DasigXVariant> {
    prop_oneof![
        Just(DasigXVariant::Wired),
        Just(DasigXVariant::Dongle),
        Just(DasigXVariant::Bluetooth),
    ]
}

fn count_faults(buf: &[u8]) -> usize {
    buf.windows(BUTTON_RANGE_FAULT.len())
        .filter(|window| *window == BUTTON_RANGE_FAULT.as_slice())
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Devices outside the match table never see their descriptor change.
    #[test]
    fn prop_unrecognized_identity_is_identity(
        bus in any_bus(),
        vid in any::<u16>(),
        pid in any::<u16>(),
        bytes in proptest::collection::vec(any::<u8>(), 0..200),
    ) {
        prop_assume!(classify_device(bus, vid, pid).is_none());
        let mut buf = bytes.clone();
        let outcome = fixup_for_device(bus, vid, pid, &mut buf);
        prop_assert_eq!(outcome, RdescFixup::Unchanged);
        prop_assert_eq!(buf, bytes);
    }

    /// The wired replacement fires on exactly one length.
    #[test]
    fn prop_wired_other_lengths_are_identity(
        len in 0usize..400,
        fill in any::<u8>(),
    ) {
        prop_assume!(len != 193);
        let mut buf = vec![fill; len];
        let outcome = fixup_report_descriptor(DasigXVariant::Wired, &mut buf);
        prop_assert_eq!(outcome, RdescFixup::Unchanged);
        prop_assert!(buf.iter().all(|&byte| byte == fill));
    }

    /// Whatever the input, the surgical patch touches at most the two bytes
    /// at the documented offsets, and only after a real signature match.
    #[test]
    fn prop_patch_locality(
        bytes in proptest::collection::vec(any::<u8>(), 30..160),
        pos_seed in any::<usize>(),
    ) {
        let mut buf = bytes;
        // Plant a signature at an in-bounds position so the patched path is
        // actually exercised; accidental extra signatures are fine.
        let pos = pos_seed % (buf.len() - 6);
        buf[pos..pos + 6].copy_from_slice(&BUTTON_RANGE_FAULT);
        let before = buf.clone();

        let outcome = fixup_report_descriptor(DasigXVariant::Bluetooth, &mut buf);
        if let RdescFixup::Patched { offset, report_count_adjusted } = outcome {
            prop_assert_eq!(&before[offset..offset + 6], BUTTON_RANGE_FAULT.as_slice());
            for (index, (old, new)) in before.iter().zip(buf.iter()).enumerate() {
                if index == offset + 5 {
                    prop_assert_eq!(*new, 0x05);
                } else if report_count_adjusted && index == offset + 11 {
                    prop_assert_eq!(*new, 0x05);
                } else {
                    prop_assert_eq!(old, new, "byte {} must not change", index);
                }
            }
            if report_count_adjusted {
                prop_assert_eq!(before[offset + 10], 0x95);
            }
        } else {
            prop_assert!(false, "expected a patch, got {:?}", outcome);
        }
    }

    /// A second pass over a patched single-fault descriptor is a no-op.
    #[test]
    fn prop_patch_is_idempotent(
        prefix in proptest::collection::vec(0u8..5u8, 24..80),
        suffix in proptest::collection::vec(0u8..5u8, 1..40),
    ) {
        let mut buf = prefix;
        buf.extend_from_slice(&BUTTON_RANGE_FAULT);
        buf.extend_from_slice(&suffix);
        prop_assume!(count_faults(&buf) == 1);

        let first = fixup_report_descriptor(DasigXVariant::Dongle, &mut buf);
        prop_assert!(matches!(first, RdescFixup::Patched { .. }), "expected Patched");
        let after_first = buf.clone();

        let second = fixup_report_descriptor(DasigXVariant::Dongle, &mut buf);
        prop_assert_eq!(second, RdescFixup::Unchanged);
        prop_assert_eq!(buf, after_first);
    }

    /// A signature is matched at `len - 7` but never at `len - 6`.
    #[test]
    fn prop_scan_bound_is_exact(prefix in proptest::collection::vec(0u8..5u8, 24..=60)) {
        let bound = prefix.len();

        // Signature fills the tail: out of bounds for the scan.
        let mut tail_case = prefix.clone();
        tail_case.extend_from_slice(&BUTTON_RANGE_FAULT);
        prop_assert_eq!(find_button_range_fault(&tail_case), None);
        let before = tail_case.clone();
        let outcome = fixup_report_descriptor(DasigXVariant::Dongle, &mut tail_case);
        prop_assert_eq!(outcome, RdescFixup::Unchanged);
        prop_assert_eq!(&tail_case, &before);

        // One more byte after the signature: exactly at the bound.
        let mut bound_case = prefix;
        bound_case.extend_from_slice(&BUTTON_RANGE_FAULT);
        bound_case.push(0xAA);
        prop_assert_eq!(find_button_range_fault(&bound_case), Some(bound));
        let outcome = fixup_report_descriptor(DasigXVariant::Dongle, &mut bound_case);
        prop_assert!(matches!(outcome, RdescFixup::Patched { offset, .. } if offset == bound), "expected Patched at bound");
    }

    /// Arbitrary identities and buffers never panic, and the item walker
    /// accepts whatever the fixup leaves behind or rejects it as an error,
    /// never a crash.
    #[test]
    fn prop_never_panics(
        variant in any_variant(),
        bus_raw in any::<u16>(),
        vid in any::<u16>(),
        pid in any::<u16>(),
        bytes in proptest::collection::vec(any::<u8>(), 0..300),
    ) {
        let mut buf = bytes;
        let _ = fixup_report_descriptor(variant, &mut buf);
        if let Some(bus) = BusType::from_raw(bus_raw) {
            let _ = fixup_for_device(bus, vid, pid, &mut buf);
        }
        let _ = validate(&buf);
    }
}
