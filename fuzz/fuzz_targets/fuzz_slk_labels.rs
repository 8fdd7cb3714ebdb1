//! Fuzz target for soft-label layout geometry and label text.
//!
//! Tests that arbitrary row widths, layout codes, and label strings never
//! panic and never produce overlapping slots. Label text is untrusted and
//! may contain combining marks, wide glyphs, or broken clusters.

#![no_main]

use libfuzzer_sys::fuzz_target;
use termattr::{Justify, SlkFormat, SlkManager};

fuzz_target!(|input: (u16, i32, u8, &str)| {
    let (columns, code, slot, text) = input;

    let mut slk = SlkManager::new(columns);
    let format = SlkFormat::from_code(code).unwrap_or(SlkFormat::THREE_TWO_THREE);
    slk.init_layout(format);

    // Slots never overlap, whatever the row width.
    for pair in slk.slots().windows(2) {
        assert!(pair[0].width >= 1);
        assert!(pair[1].x >= pair[0].x + pair[0].width);
    }

    // Out-of-range indexes are rejected without touching anything;
    // in-range text is truncated to a prefix of itself.
    let index = usize::from(slot);
    if slk.set_label(index, text, Justify::Center).is_ok() {
        let stored = slk.label(index).expect("slot was just written");
        assert!(text.starts_with(stored));
    }

    // Rendering pads every slot without panicking.
    for s in slk.slots() {
        let _ = s.render();
    }
});
