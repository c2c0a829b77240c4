//! Fuzzes the HID short-item walker.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_rdesc_items
#![no_main]
use hid_rakk_protocol::{validate, ShortItems};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Walking arbitrary bytes may yield an error but must never panic, and
    // decoded items must stay inside the buffer.
    let _ = validate(data);
    for item in ShortItems::new(data).filter_map(Result::ok) {
        assert!(item.offset < data.len());
        assert!(item.offset + 1 + item.data_len <= data.len());
    }
});
