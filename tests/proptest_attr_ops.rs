//! Property-based tests for attribute words, packed colors, and layout codes.
//!
//! Uses proptest to verify invariants of the attribute codec (wide and
//! narrow words), 5-bit channel packing, pair-table definition, soft-label
//! layout codes, and cursor shape cycling.

use proptest::prelude::*;
use termattr::{
    BlinkSlot, ColorSpec, CursorBlink, CursorShape, DirectColor, Error, NarrowAttr, PairTable,
    PaletteColor, Rgb5, SlkFormat, StyleFlags, WideAttr,
};

// ============================================================================
// Strategies
// ============================================================================

/// Generate an arbitrary set of style flags.
fn style_flags_strategy() -> impl Strategy<Value = StyleFlags> {
    any::<u16>().prop_map(StyleFlags::from_bits_truncate)
}

/// Generate a 5-bit RGB value with channels in [0, 31].
fn rgb5_strategy() -> impl Strategy<Value = Rgb5> {
    (0u8..=31, 0u8..=31, 0u8..=31).prop_map(|(r, g, b)| Rgb5::new(r, g, b))
}

/// Generate a packed direct color with an in-range blend ratio.
fn direct_color_strategy() -> impl Strategy<Value = DirectColor> {
    (rgb5_strategy(), rgb5_strategy(), 0u8..=31)
        .prop_map(|(fg, bg, blend)| DirectColor::new(fg, bg, blend))
}

/// Generate either color source.
fn color_spec_strategy() -> impl Strategy<Value = ColorSpec> {
    prop_oneof![
        any::<u8>().prop_map(ColorSpec::Pair),
        direct_color_strategy().prop_map(ColorSpec::Direct),
    ]
}

/// Generate hex layout digits that decode to a valid multi-group layout.
///
/// Seven digits at most so the encoded code always fits in `i32`, and the
/// single-digit codes 0 through 3 are excluded because those select the
/// classic named layouts instead of being read digit-by-digit.
fn layout_digits_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=15, 1..=7)
        .prop_filter("codes 0-3 are named layouts", |d| d.len() > 1 || d[0] > 3)
        .prop_filter("at most 36 labels", |d| {
            d.iter().map(|&g| usize::from(g)).sum::<usize>() <= SlkFormat::MAX_SLOTS
        })
}

/// Generate one of the nine cursor shapes.
fn cursor_shape_strategy() -> impl Strategy<Value = CursorShape> {
    prop::sample::select(CursorShape::ALL.to_vec())
}

/// Generate a blink slot.
fn blink_slot_strategy() -> impl Strategy<Value = BlinkSlot> {
    prop_oneof![Just(BlinkSlot::Primary), Just(BlinkSlot::Alternate)]
}

// ============================================================================
// Wide Attribute Word Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Encoding then decoding returns the original flags and color.
    #[test]
    fn wide_new_round_trips(flags in style_flags_strategy(), color in color_spec_strategy()) {
        let attr = WideAttr::new(flags, color);
        prop_assert_eq!(attr.flags(), flags);
        prop_assert_eq!(attr.color(), color);
    }

    /// Replacing the flags leaves the color untouched.
    #[test]
    fn wide_with_flags_keeps_color(
        flags in style_flags_strategy(),
        color in color_spec_strategy(),
        new_flags in style_flags_strategy(),
    ) {
        let attr = WideAttr::new(flags, color).with_flags(new_flags);
        prop_assert_eq!(attr.flags(), new_flags);
        prop_assert_eq!(attr.color(), color);
    }

    /// Replacing the color leaves the flags untouched.
    #[test]
    fn wide_with_color_keeps_flags(
        flags in style_flags_strategy(),
        color in color_spec_strategy(),
        new_color in color_spec_strategy(),
    ) {
        let attr = WideAttr::new(flags, color).with_color(new_color);
        prop_assert_eq!(attr.flags(), flags);
        prop_assert_eq!(attr.color(), new_color);
    }

    /// union_flags is bitwise OR on the flag field.
    #[test]
    fn wide_union_flags_is_bitwise_or(
        a in style_flags_strategy(),
        b in style_flags_strategy(),
        color in color_spec_strategy(),
    ) {
        let attr = WideAttr::new(a, color).union_flags(b);
        prop_assert_eq!(attr.flags(), a | b);
        prop_assert_eq!(attr.color(), color);
    }

    /// Exactly one of the color accessors answers, matching the discriminant.
    #[test]
    fn wide_color_accessors_partition(flags in style_flags_strategy(), color in color_spec_strategy()) {
        let attr = WideAttr::new(flags, color);
        match color {
            ColorSpec::Pair(index) => {
                prop_assert!(!attr.is_direct());
                prop_assert_eq!(attr.pair_index(), Some(index));
                prop_assert_eq!(attr.direct_color(), None);
            }
            ColorSpec::Direct(direct) => {
                prop_assert!(attr.is_direct());
                prop_assert_eq!(attr.pair_index(), None);
                prop_assert_eq!(attr.direct_color(), Some(direct));
            }
        }
    }

    /// Canonicalizing an arbitrary word preserves what its fields decode to.
    #[test]
    fn wide_canonical_preserves_decoded_fields(raw in any::<u64>()) {
        let attr = WideAttr::from_raw(raw);
        let canonical = attr.canonical();
        prop_assert_eq!(canonical.flags(), attr.flags());
        prop_assert_eq!(canonical.color(), attr.color());
    }

    /// Canonicalization is idempotent.
    #[test]
    fn wide_canonical_idempotent(raw in any::<u64>()) {
        let canonical = WideAttr::from_raw(raw).canonical();
        prop_assert_eq!(canonical.canonical(), canonical);
    }

    /// Canonical words carry nothing outside their live fields.
    #[test]
    fn wide_canonical_reserved_bits_zero(raw in any::<u64>()) {
        let canonical = WideAttr::from_raw(raw).canonical();
        prop_assert_eq!(canonical.raw() & 0xF000, 0, "reserved low nibble set");
        if canonical.is_direct() {
            prop_assert_eq!(canonical.raw() >> 52, 0, "bits above the direct payload set");
        } else {
            prop_assert_eq!(canonical.raw() >> 24, 0, "bits above the pair index set");
        }
    }

    /// A pair word decodes its index alone, whatever sits above it.
    #[test]
    fn wide_pair_decode_ignores_stale_payload(index in any::<u8>(), junk in any::<u64>()) {
        let stale = (junk << 24) & !WideAttr::DIRECT_FLAG & 0x000F_FFFF_FF00_0000;
        let attr = WideAttr::from_raw(WideAttr::from_pair(index).raw() | stale);
        prop_assert_eq!(attr.pair_index(), Some(index));
    }
}

// ============================================================================
// Narrow Attribute Word Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The narrow constructor keeps exactly the supported flag subset.
    #[test]
    fn narrow_new_keeps_supported_flags(flags in style_flags_strategy(), pair in any::<u8>()) {
        let attr = NarrowAttr::new(flags, pair);
        prop_assert_eq!(attr.flags(), flags & NarrowAttr::SUPPORTED);
        prop_assert_eq!(attr.pair(), pair);
    }

    /// Every 16-bit pattern decodes and re-encodes to itself.
    #[test]
    fn narrow_raw_round_trip(raw in any::<u16>()) {
        let attr = NarrowAttr::from_raw(raw);
        let rebuilt = NarrowAttr::new(attr.flags(), attr.pair());
        prop_assert_eq!(rebuilt.raw(), raw);
    }

    /// Re-encoding decoded fields is stable after the first pass.
    #[test]
    fn narrow_encode_is_stable(flags in style_flags_strategy(), pair in any::<u8>()) {
        let first = NarrowAttr::new(flags, pair);
        let second = NarrowAttr::new(first.flags(), first.pair());
        prop_assert_eq!(second, first);
    }
}

// ============================================================================
// Channel Packing Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Out-of-range channels clamp to the 5-bit maximum.
    #[test]
    fn rgb5_new_clamps(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let color = Rgb5::new(r, g, b);
        prop_assert_eq!(color.r(), r.min(Rgb5::MAX_CHANNEL));
        prop_assert_eq!(color.g(), g.min(Rgb5::MAX_CHANNEL));
        prop_assert_eq!(color.b(), b.min(Rgb5::MAX_CHANNEL));
    }

    /// Blend 0 returns the base color, blend 31 the target.
    #[test]
    fn rgb5_lerp_endpoints(a in rgb5_strategy(), b in rgb5_strategy()) {
        prop_assert_eq!(a.lerp(b, 0), a);
        prop_assert_eq!(a.lerp(b, Rgb5::MAX_CHANNEL), b);
    }

    /// Blend ratios past the maximum saturate at the target.
    #[test]
    fn rgb5_lerp_saturates(a in rgb5_strategy(), b in rgb5_strategy(), blend in 32u8..) {
        prop_assert_eq!(a.lerp(b, blend), b);
    }

    /// Each interpolated channel stays between its two endpoints.
    #[test]
    fn rgb5_lerp_channelwise_between(
        a in rgb5_strategy(),
        b in rgb5_strategy(),
        blend in any::<u8>(),
    ) {
        let mixed = a.lerp(b, blend);
        prop_assert!(between_inclusive(mixed.r(), a.r(), b.r()),
            "r={} not between {} and {}", mixed.r(), a.r(), b.r());
        prop_assert!(between_inclusive(mixed.g(), a.g(), b.g()),
            "g={} not between {} and {}", mixed.g(), a.g(), b.g());
        prop_assert!(between_inclusive(mixed.b(), a.b(), b.b()),
            "b={} not between {} and {}", mixed.b(), a.b(), b.b());
    }

    /// Packing then unpacking returns the original direct color.
    #[test]
    fn direct_pack_unpack_round_trip(direct in direct_color_strategy()) {
        prop_assert_eq!(DirectColor::unpack(direct.pack()), direct);
    }

    /// The packed form never exceeds the 35-bit payload.
    #[test]
    fn direct_pack_fits_payload(direct in direct_color_strategy()) {
        prop_assert_eq!(direct.pack() & !DirectColor::PACKED_MASK, 0);
    }

    /// Unpacking ignores anything above the payload bits.
    #[test]
    fn direct_unpack_ignores_high_bits(direct in direct_color_strategy(), junk in any::<u64>()) {
        let noisy = direct.pack() | (junk << DirectColor::PACKED_BITS);
        prop_assert_eq!(DirectColor::unpack(noisy), direct);
    }

    /// The constructor clamps the blend ratio like a channel.
    #[test]
    fn direct_new_clamps_blend(fg in rgb5_strategy(), bg in rgb5_strategy(), blend in any::<u8>()) {
        let direct = DirectColor::new(fg, bg, blend);
        prop_assert_eq!(direct.blend(), blend.min(Rgb5::MAX_CHANNEL));
    }

    /// Decoration color sits at its blend endpoints.
    #[test]
    fn direct_decoration_endpoints(fg in rgb5_strategy(), bg in rgb5_strategy()) {
        prop_assert_eq!(DirectColor::new(fg, bg, 0).decoration_rgb(), fg);
        prop_assert_eq!(DirectColor::new(fg, bg, Rgb5::MAX_CHANNEL).decoration_rgb(), bg);
    }
}

// ============================================================================
// Pair Table Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Any in-range definition resolves back to what was written.
    #[test]
    fn pair_define_resolves_back(
        index in 0u16..=PairTable::MAX_PAIR,
        fg in any::<u8>(),
        bg in any::<u8>(),
    ) {
        let mut table = PairTable::new();
        table.define(index, PaletteColor::new(fg), PaletteColor::new(bg)).unwrap();
        let narrow = index as u8;
        prop_assert_eq!(table.resolve(narrow), (PaletteColor::new(fg), PaletteColor::new(bg)));
        prop_assert_eq!(table.fg(narrow), PaletteColor::new(fg));
        prop_assert_eq!(table.bg(narrow), PaletteColor::new(bg));
    }

    /// An out-of-range definition reports its index and changes nothing.
    #[test]
    fn pair_define_out_of_range_is_noop(
        index in 256u16..=u16::MAX,
        fg in any::<u8>(),
        bg in any::<u8>(),
    ) {
        let mut table = PairTable::new();
        table.define(5, PaletteColor::GREEN, PaletteColor::BLUE).unwrap();
        let before = table.clone();

        let err = table
            .define(index, PaletteColor::new(fg), PaletteColor::new(bg))
            .unwrap_err();
        prop_assert!(
            matches!(err, Error::InvalidPairIndex { index: reported } if reported == index),
            "unexpected error for index {}: {:?}", index, err
        );
        prop_assert_eq!(&table, &before);
    }
}

// ============================================================================
// Layout Code Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Hex digit codes decode one group per digit, high digit first.
    #[test]
    fn layout_digit_codes_decode(digits in layout_digits_strategy()) {
        let format = SlkFormat::from_code(encode_digits(&digits)).unwrap();
        prop_assert_eq!(format.groups(), digits.as_slice());
        prop_assert_eq!(
            format.slot_count(),
            digits.iter().map(|&g| usize::from(g)).sum::<usize>()
        );
        prop_assert!(!format.show_index_line());
    }

    /// A negative code selects the same groups plus the index line.
    #[test]
    fn layout_negative_code_adds_index_line(digits in layout_digits_strategy()) {
        let code = encode_digits(&digits);
        let format = SlkFormat::from_code(-code).unwrap();
        prop_assert_eq!(format.groups(), digits.as_slice());
        prop_assert!(format.show_index_line());
    }

    /// An embedded zero digit rejects the whole code.
    #[test]
    fn layout_zero_digit_rejected(
        digits in prop::collection::vec(1u8..=15, 1..=6),
        position in any::<prop::sample::Index>(),
    ) {
        let mut spliced = digits;
        // Splice past the leading digit; a leading zero nibble is invisible.
        spliced.insert(position.index(spliced.len()) + 1, 0);
        let code = encode_digits(&spliced);

        let err = SlkFormat::from_code(code).unwrap_err();
        prop_assert!(
            matches!(err, Error::InvalidLayoutFormat { code: reported } if reported == code),
            "unexpected error for code {:#x}: {:?}", code, err
        );
    }

    /// Codes asking for more than 36 labels are rejected.
    #[test]
    fn layout_overflow_rejected(digits in prop::collection::vec(10u8..=15, 4..=7)) {
        let code = encode_digits(&digits);
        prop_assert!(
            digits.iter().map(|&g| usize::from(g)).sum::<usize>() > SlkFormat::MAX_SLOTS
        );
        prop_assert!(SlkFormat::from_code(code).is_err());
    }

    /// Display prints the decoded groups in decimal, dash separated.
    #[test]
    fn layout_display_matches_groups(digits in layout_digits_strategy()) {
        let code = encode_digits(&digits);
        let expected: String = digits
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join("-");

        prop_assert_eq!(SlkFormat::from_code(code).unwrap().to_string(), expected.clone());
        prop_assert_eq!(
            SlkFormat::from_code(-code).unwrap().to_string(),
            format!("{expected}+index")
        );
    }
}

// ============================================================================
// Cursor Shape Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Slot shapes survive the packed-code round trip.
    #[test]
    fn cursor_code_round_trip(primary in 0u8..9, alternate in 0u8..9) {
        let code = (u16::from(primary) << 8) | u16::from(alternate);
        let state = CursorBlink::from_code(code).unwrap();
        prop_assert_eq!(state.to_code(), code);
        prop_assert_eq!(
            state.shapes(),
            (
                CursorShape::from_code(primary).unwrap(),
                CursorShape::from_code(alternate).unwrap(),
            )
        );
    }

    /// A packed code decodes exactly when both bytes name a shape.
    #[test]
    fn cursor_code_validity(code in any::<u16>()) {
        let primary = (code >> 8) as u8;
        let alternate = (code & 0xFF) as u8;
        let expected = primary < CursorShape::COUNT as u8 && alternate < CursorShape::COUNT as u8;
        prop_assert_eq!(CursorBlink::from_code(code).is_some(), expected);
    }

    /// Nine cycles from any shape return to it, visiting all nine shapes.
    #[test]
    fn cursor_cycle_is_a_full_cycle(shape in cursor_shape_strategy(), slot in blink_slot_strategy()) {
        let mut state = CursorBlink::new();
        state.set(slot, shape);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..CursorShape::COUNT {
            seen.insert(state.cycle(slot).code());
        }
        prop_assert_eq!(seen.len(), CursorShape::COUNT);
        prop_assert_eq!(state.shape(slot), shape);
    }

    /// Cycling one slot never moves the other.
    #[test]
    fn cursor_cycle_touches_only_its_slot(
        primary in cursor_shape_strategy(),
        alternate in cursor_shape_strategy(),
        slot in blink_slot_strategy(),
    ) {
        let mut state = CursorBlink::new();
        state.set(BlinkSlot::Primary, primary);
        state.set(BlinkSlot::Alternate, alternate);
        state.cycle(slot);

        let untouched = match slot {
            BlinkSlot::Primary => BlinkSlot::Alternate,
            BlinkSlot::Alternate => BlinkSlot::Primary,
        };
        let expected = match untouched {
            BlinkSlot::Primary => primary,
            BlinkSlot::Alternate => alternate,
        };
        prop_assert_eq!(state.shape(untouched), expected);
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Encode layout digits into a hex code, high digit first.
fn encode_digits(digits: &[u8]) -> i32 {
    digits.iter().fold(0, |acc, &d| (acc << 4) | i32::from(d))
}

/// Check if value is between min and max (inclusive), accounting for either order.
fn between_inclusive(value: u8, a: u8, b: u8) -> bool {
    let (min, max) = if a <= b { (a, b) } else { (b, a) };
    value >= min && value <= max
}
