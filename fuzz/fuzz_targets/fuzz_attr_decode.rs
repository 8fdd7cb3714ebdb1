//! Fuzz target for attribute word decoding.
//!
//! Tests that arbitrary bit patterns decode without panicking and that
//! canonicalization and the narrow round trip hold for every input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use termattr::{DirectColor, NarrowAttr, Rgb5, WideAttr};

fuzz_target!(|data: (u64, u16)| {
    let (wide_raw, narrow_raw) = data;

    // Every accessor must tolerate arbitrary reserved and payload bits.
    let wide = WideAttr::from_raw(wide_raw);
    let _ = wide.flags();
    let _ = wide.color();
    let _ = wide.pair_index();
    let _ = wide.direct_color();
    let _ = wide.is_direct();

    // Canonicalization re-encodes exactly what decoded, then fixes.
    let canonical = wide.canonical();
    assert_eq!(canonical.flags(), wide.flags());
    assert_eq!(canonical.color(), wide.color());
    assert_eq!(canonical.canonical(), canonical);

    // The narrow word is a bijection on its 16 bits.
    let narrow = NarrowAttr::from_raw(narrow_raw);
    assert_eq!(NarrowAttr::new(narrow.flags(), narrow.pair()).raw(), narrow_raw);

    // Unpacking ignores bits above the payload and never yields an
    // out-of-range channel.
    let direct = DirectColor::unpack(wide_raw);
    assert!(direct.fg().r() <= Rgb5::MAX_CHANNEL);
    assert!(direct.bg().b() <= Rgb5::MAX_CHANNEL);
    assert!(direct.blend() <= Rgb5::MAX_CHANNEL);
    assert_eq!(DirectColor::unpack(direct.pack()), direct);
});
