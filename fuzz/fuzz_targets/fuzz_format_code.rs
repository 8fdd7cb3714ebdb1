//! Fuzz target for soft-label layout codes.
//!
//! Tests that any i32 code either decodes to a layout satisfying the
//! layout invariants or is rejected cleanly, including i32::MIN, whose
//! magnitude does not negate.

#![no_main]

use libfuzzer_sys::fuzz_target;
use termattr::SlkFormat;

fuzz_target!(|code: i32| {
    let Ok(format) = SlkFormat::from_code(code) else {
        return;
    };

    // Decoded layouts always satisfy the group invariants.
    assert!(!format.groups().is_empty());
    assert!(format.groups().len() <= SlkFormat::MAX_GROUPS);
    assert!(format.groups().iter().all(|&g| g >= 1));
    assert!(format.slot_count() <= SlkFormat::MAX_SLOTS);

    // Display never panics and reflects the index-line flag.
    let shown = format.to_string();
    assert_eq!(shown.ends_with("+index"), format.show_index_line());

    // The negative twin selects the same groups with the index line on.
    if code > 0 {
        let twin = SlkFormat::from_code(-code).expect("positive code decoded");
        assert_eq!(twin.groups(), format.groups());
        assert!(twin.show_index_line());
    }
});
