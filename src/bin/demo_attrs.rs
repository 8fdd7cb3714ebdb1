//! `demo_attrs` — `termattr` demonstration binary
//!
//! Drives the full attribute subsystem against a headless sink: packed
//! wide attributes, the color-pair table, 5-bit direct color, cursor
//! blink-state cycling, and the soft-label row, all wired through the
//! event dispatcher with a fixed input script.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin demo_attrs
//! cargo run --bin demo_attrs -- --help
//! cargo run --bin demo_attrs -- -f 431 -i
//! cargo run --bin demo_attrs -- --dump-json
//! ```

#![allow(clippy::cast_possible_truncation)] // Screen coordinates fit in u16

use std::collections::VecDeque;
use std::ffi::OsString;
use std::fmt::Write as _;

use termattr::{
    BlinkSlot, ColorSpec, Directive, Dispatcher, Event, EventSource, Justify, KeyEvent, PairGrid,
    PairTable, PaletteColor, PointerAction, PointerButton, PointerEvent, Region, RegionMap,
    ResizeEvent, Rgb5, Session, SessionConfig, SessionSink, SlkSlot, StyleFlags, WideAttr,
};
use termattr::{DirectColor, LogLevel};

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "demo_attrs - termattr demonstration binary

USAGE:
    demo_attrs [OPTIONS]

OPTIONS:
    -h, --help            Print this help message and exit
    -s, --size <WxH>      Headless screen size (default: 80x24)
    -f, --format <HEX>    Soft-label layout code, hex digits (default: a)
    -i, --index-line      Reserve an index line above the soft labels
    -l, --locale <NAME>   Session locale name (default: C)
        --no-slk          Disable the soft-label row entirely
        --dump-json       Print the final session state as JSON on stdout

The demo runs a fixed event script against a headless sink: it toggles
blink, redefines a color pair from a pointer press, cycles both cursor
slots, resizes, switches the soft-label layout from a label's own text,
and quits.

EXAMPLES:
    demo_attrs                      # Scripted run, summary on stderr
    demo_attrs --dump-json          # Machine-readable final state
    demo_attrs -f 431 -i            # 4-3-1 layout with an index line
";

/// Application configuration parsed from command-line arguments.
#[derive(Clone, Debug)]
pub struct Config {
    pub columns: u16,
    pub rows: u16,
    pub format_code: i32,
    pub show_index_line: bool,
    pub slk_enabled: bool,
    pub locale: String,
    pub dump_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: 80,
            rows: 24,
            format_code: 0xa,
            show_index_line: false,
            slk_enabled: true,
            locale: "C".to_string(),
            dump_json: false,
        }
    }
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "-s" | "--size" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => {
                            return ParseResult::Error(
                                "--size requires a value (e.g., 80x24)".to_string(),
                            );
                        }
                    };
                    match parse_size(&value) {
                        Some((w, h)) => {
                            config.columns = w;
                            config.rows = h;
                        }
                        None => {
                            return ParseResult::Error(format!(
                                "Invalid --size: {value} (use WxH format, e.g., 80x24)"
                            ));
                        }
                    }
                }

                "-f" | "--format" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => return ParseResult::Error("--format requires a value".to_string()),
                    };
                    match parse_format_code(&value) {
                        Some(code) => config.format_code = code,
                        None => {
                            return ParseResult::Error(format!(
                                "Invalid --format value: {value} (hex digits, e.g., 431)"
                            ));
                        }
                    }
                }

                "-i" | "--index-line" => config.show_index_line = true,
                "-l" | "--locale" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => return ParseResult::Error("--locale requires a value".to_string()),
                    };
                    config.locale = value;
                }

                "--no-slk" => config.slk_enabled = false,
                "--dump-json" => config.dump_json = true,

                other => {
                    if other.starts_with('-') {
                        return ParseResult::Error(format!("Unknown option: {other}"));
                    }
                    // Ignore positional arguments for now
                }
            }
        }

        ParseResult::Config(config)
    }
}

/// Parse a size string like "80x24" into (width, height).
fn parse_size(s: &str) -> Option<(u16, u16)> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        return None;
    }
    let w = parts[0].parse::<u16>().ok()?;
    let h = parts[1].parse::<u16>().ok()?;
    if w == 0 || h == 0 {
        return None;
    }
    Some((w, h))
}

/// Parse a soft-label layout code given as hex digits ("a", "431", "2134").
fn parse_format_code(s: &str) -> Option<i32> {
    let code = i32::from_str_radix(s, 16).ok()?;
    if code < 0 { None } else { Some(code) }
}

// ============================================================================
// Headless Sink
// ============================================================================

/// One resolved screen cell.
#[derive(Clone, Copy, Debug)]
struct HeadlessCell {
    glyph: char,
    /// Foreground palette index. Meaningless when `direct` is set.
    fg: u8,
    bg: u8,
    flags: u16,
    direct: bool,
}

impl Default for HeadlessCell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            fg: PaletteColor::WHITE.index(),
            bg: PaletteColor::BLACK.index(),
            flags: 0,
            direct: false,
        }
    }
}

/// In-memory screen. Pair attributes are resolved against the live table
/// at paint time, so a redefined pair shows its new colors on the next
/// redraw without any cell being rewritten.
struct HeadlessSink {
    columns: u16,
    rows: u16,
    cells: Vec<HeadlessCell>,
    slk_row: String,
    index_line: bool,
    cells_drawn: u64,
    slk_paints: u64,
    relayouts: u64,
}

impl HeadlessSink {
    fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            cells: vec![HeadlessCell::default(); usize::from(columns) * usize::from(rows)],
            slk_row: String::new(),
            index_line: false,
            cells_drawn: 0,
            slk_paints: 0,
            relayouts: 0,
        }
    }

    fn cell(&self, col: u16, row: u16) -> Option<&HeadlessCell> {
        if col >= self.columns || row >= self.rows {
            return None;
        }
        self.cells
            .get(usize::from(row) * usize::from(self.columns) + usize::from(col))
    }

    fn direct_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.direct).count()
    }
}

impl SessionSink for HeadlessSink {
    fn render_cell(&mut self, row: u16, col: u16, glyph: char, attr: WideAttr, pairs: &PairTable) {
        if col >= self.columns || row >= self.rows {
            return;
        }
        let (fg, bg, direct) = match attr.color() {
            ColorSpec::Pair(pair) => {
                let (fg, bg) = pairs.resolve(pair);
                (fg.index(), bg.index(), false)
            }
            ColorSpec::Direct(_) => (0, 0, true),
        };
        let index = usize::from(row) * usize::from(self.columns) + usize::from(col);
        self.cells[index] = HeadlessCell {
            glyph,
            fg,
            bg,
            flags: attr.flags().bits(),
            direct,
        };
        self.cells_drawn += 1;
    }

    fn paint_slk_row(&mut self, slots: &[SlkSlot], show_index_line: bool) {
        let mut row: Vec<char> = vec![' '; usize::from(self.columns)];
        for slot in slots {
            for (i, ch) in slot.render().chars().enumerate() {
                let col = usize::from(slot.x) + i;
                if col < row.len() {
                    row[col] = ch;
                }
            }
        }
        self.slk_row = row.into_iter().collect();
        self.index_line = show_index_line;
        self.slk_paints += 1;
    }

    fn relayout(&mut self, columns: u16, rows: u16) {
        self.columns = columns;
        self.rows = rows;
        self.cells = vec![HeadlessCell::default(); usize::from(columns) * usize::from(rows)];
        self.relayouts += 1;
    }
}

// ============================================================================
// Scripted Input
// ============================================================================

/// Replays a fixed event list, then reports quit forever.
struct ScriptedSource {
    events: VecDeque<Event>,
}

impl ScriptedSource {
    fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into(),
        }
    }
}

impl EventSource for ScriptedSource {
    fn poll_event(&mut self) -> termattr::Result<Event> {
        Ok(self.events.pop_front().unwrap_or(Event::Quit))
    }
}

/// The demo's fixed input script.
fn demo_script() -> Vec<Event> {
    vec![
        // Blink on.
        Event::Key(KeyEvent::f(2)),
        // Redefine pair 12 from the grid.
        Event::Pointer(PointerEvent::press(51, 1, PointerButton::Left)),
        // Pair 263: out of table, swallowed.
        Event::Pointer(PointerEvent::press(69, 23, PointerButton::Left)),
        // Cycle both cursor slots once.
        Event::Pointer(PointerEvent::press(72, 22, PointerButton::Left)),
        Event::Pointer(PointerEvent::press(72, 23, PointerButton::Left)),
        // Releases are not presses.
        Event::Pointer(PointerEvent::release(72, 23, PointerButton::Left)),
        // Grow the screen.
        Event::Resize(ResizeEvent::new(120, 40)),
        // Switch layout to the code in slot 3's label ("431").
        Event::Key(KeyEvent::f(3)),
        // Done.
        Event::Key(KeyEvent::f(1)),
    ]
}

// ============================================================================
// Scene
// ============================================================================

/// Grid probe: the cell painted with pair 12, redefined by the script.
const PROBE: (u16, u16) = (51, 1);

/// The classic soft-label set. Slots 3..=11 carry layout codes so a
/// function key can switch to the layout written on its own label.
const STANDARD_LABELS: [&str; 36] = [
    "Quit", "Blink", "431", "2134", "55", "62", "83", "7", "b", "25", "Able", "Baker", "Charlie",
    "Dog", "Easy", "Fox", "Golf", "How", "Item", "Jig", "King", "Love", "Mike", "Nan", "Oboe",
    "Peter", "Queen", "Roger", "Sugar", "Tear", "Uncle", "Victor", "Whiskey", "X-Ray", "Yoke",
    "Zebra",
];

/// Pointer regions: the pair grid on the right half, and one row per
/// cursor slot beside its bottom corner.
fn demo_regions() -> RegionMap {
    let mut regions = RegionMap::new();
    regions.add(
        Region::new(71, 22, 9, 1),
        PointerAction::CycleCursor(BlinkSlot::Primary),
    );
    regions.add(
        Region::new(71, 23, 9, 1),
        PointerAction::CycleCursor(BlinkSlot::Alternate),
    );
    regions.add(
        Region::new(49, 1, 22, 23),
        PointerAction::RedefinePair(PairGrid {
            x: 49,
            cell_width: 2,
            per_row: 11,
        }),
    );
    regions
}

/// Fix the conventional low pairs a driver sets at startup (pair 1 white
/// on black, pair 2 black on yellow), then fill the table above the
/// reserved range with the palette ramp the grid shows before any click.
fn define_startup_pairs(pairs: &mut PairTable) -> termattr::Result<()> {
    pairs.define(1, PaletteColor::WHITE, PaletteColor::BLACK)?;
    pairs.define(2, PaletteColor::BLACK, PaletteColor::YELLOW)?;
    for index in PairTable::RESERVED_PAIRS..=PairTable::MAX_PAIR {
        let fg = PaletteColor::new((index - PairTable::RESERVED_PAIRS) as u8);
        pairs.define(index, fg, PaletteColor::BLACK)?;
    }
    Ok(())
}

fn draw_text(sink: &mut HeadlessSink, pairs: &PairTable, row: u16, col: u16, text: &str, attr: WideAttr) {
    for (i, glyph) in text.chars().enumerate() {
        let Some(col) = col.checked_add(i as u16) else {
            break;
        };
        sink.render_cell(row, col, glyph, attr, pairs);
    }
}

/// Paint the showcase scene: a title, one row per style flag, a direct
/// color gradient, the pair grid, and the cursor-state labels.
fn draw_scene(session: &Session, sink: &mut HeadlessSink) {
    let pairs = session.pairs();

    draw_text(
        sink,
        pairs,
        0,
        2,
        "termattr attribute showcase",
        WideAttr::from_flags(StyleFlags::BOLD | StyleFlags::UNDERLINE),
    );

    // One sample row per style flag.
    let mut row = 2;
    for (name, flag) in StyleFlags::all().iter_names() {
        draw_text(sink, pairs, row, 2, name, WideAttr::from_flags(flag));
        row += 1;
    }

    // Direct-color gradient: red foreground blended toward a blue
    // background in all 32 steps.
    for blend in 0..=Rgb5::MAX_CHANNEL {
        let color = DirectColor::new(Rgb5::new(31, 0, 0), Rgb5::new(0, 0, 31), blend);
        sink.render_cell(15, 2 + u16::from(blend), '#', WideAttr::from_direct(color), pairs);
    }

    draw_text(
        sink,
        pairs,
        17,
        2,
        "line decorations",
        WideAttr::from_flags(
            StyleFlags::UNDERLINE | StyleFlags::OVERLINE | StyleFlags::LEFTLINE | StyleFlags::RIGHTLINE,
        ),
    );

    // The pair grid: 11 two-column cells per row, pair index climbing by
    // row, matching the pointer-region geometry.
    for y in 1..=23u16 {
        for cell in 0..11u16 {
            let pair = cell + y * 11;
            if pair > PairTable::MAX_PAIR {
                continue;
            }
            let attr = WideAttr::from_pair(pair as u8);
            let x = 49 + cell * 2;
            sink.render_cell(y, x, '#', attr, pairs);
            sink.render_cell(y, x + 1, '#', attr, pairs);
        }
    }

    // Cursor-state labels beside the clickable rows.
    let (primary, alternate) = session.cursor().shapes();
    draw_text(sink, pairs, 22, 71, primary.label(), WideAttr::NORMAL);
    draw_text(sink, pairs, 23, 71, alternate.label(), WideAttr::NORMAL);
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> termattr::Result<()> {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => run(&config),
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            Ok(())
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn run(config: &Config) -> termattr::Result<()> {
    termattr::set_log_callback(|level: LogLevel, msg: &str| {
        eprintln!("[{level:?}] {msg}");
    });

    eprintln!(
        "Running headless attribute demo ({}x{})...",
        config.columns, config.rows
    );

    let (session, sink) = run_script(config)?;

    if config.dump_json {
        print!("{}", dump_json(&session, &sink));
    } else {
        eprintln!("Demo script completed");
        eprintln!("  Layout: {}", session.slk().format());
        eprintln!("  Cursor code: {:#06x}", session.cursor().to_code());
        eprintln!("  Blink: {}", session.blink_enabled());
        eprintln!("  Cells drawn: {}", sink.cells_drawn);
        eprintln!("  SLK paints: {}", sink.slk_paints);
    }
    Ok(())
}

/// Build the session, replay the fixed script, and return the final state.
fn run_script(config: &Config) -> termattr::Result<(Session, HeadlessSink)> {
    let mut session = Session::new(SessionConfig {
        columns: config.columns,
        format_code: config.format_code,
        locale: config.locale.clone(),
        slk_enabled: config.slk_enabled,
        show_index_line: config.show_index_line,
    })?;
    // Line decorations (underline and friends) share one override color.
    session.set_line_color(Some(PaletteColor::RED));
    define_startup_pairs(session.pairs_mut())?;

    let mut sink = HeadlessSink::new(config.columns, config.rows);
    let dispatcher =
        Dispatcher::new(demo_regions()).with_labels(STANDARD_LABELS, Justify::Center);

    dispatcher.apply_labels(&mut session, &mut sink);
    draw_scene(&session, &mut sink);

    let mut source = ScriptedSource::new(demo_script());
    loop {
        let event = source.poll_event()?;
        if dispatcher.dispatch(&mut session, &mut sink, event) == Directive::Quit {
            break;
        }
        draw_scene(&session, &mut sink);
    }

    Ok((session, sink))
}

// ============================================================================
// JSON Dump
// ============================================================================

fn json_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

/// Final session state as a flat JSON object. Hand-rolled so the binary
/// stays free of non-library dependencies.
fn dump_json(session: &Session, sink: &HeadlessSink) -> String {
    let (primary, alternate) = session.cursor().shapes();
    let probe = sink.cell(PROBE.0, PROBE.1);

    let mut out = String::new();
    out.push_str("{\n");
    let _ = writeln!(out, "  \"columns\": {},", sink.columns);
    let _ = writeln!(out, "  \"rows\": {},", sink.rows);
    let _ = writeln!(out, "  \"blink_enabled\": {},", session.blink_enabled());
    let _ = writeln!(out, "  \"cursor_primary\": \"{}\",", json_escape(primary.label()));
    let _ = writeln!(
        out,
        "  \"cursor_alternate\": \"{}\",",
        json_escape(alternate.label())
    );
    let _ = writeln!(out, "  \"cursor_code\": {},", session.cursor().to_code());
    let _ = writeln!(out, "  \"layout\": \"{}\",", json_escape(&session.slk().format().to_string()));
    let _ = writeln!(out, "  \"slot_count\": {},", session.slk().slot_count());
    let _ = writeln!(out, "  \"index_line\": {},", sink.index_line);
    let labels: Vec<String> = session
        .slk()
        .slots()
        .iter()
        .map(|slot| format!("\"{}\"", json_escape(&slot.text)))
        .collect();
    let _ = writeln!(out, "  \"labels\": [{}],", labels.join(", "));
    let _ = writeln!(out, "  \"slk_row\": \"{}\",", json_escape(sink.slk_row.trim_end()));
    let _ = writeln!(
        out,
        "  \"probe_fg\": {},",
        probe.map_or(255, |cell| cell.fg)
    );
    let _ = writeln!(
        out,
        "  \"probe_bg\": {},",
        probe.map_or(255, |cell| cell.bg)
    );
    match session.line_color() {
        Some(color) => {
            let _ = writeln!(out, "  \"line_color\": {},", color.index());
        }
        None => {
            let _ = writeln!(out, "  \"line_color\": null,");
        }
    }
    let _ = writeln!(out, "  \"direct_cells\": {},", sink.direct_cell_count());
    let _ = writeln!(out, "  \"cells_drawn\": {},", sink.cells_drawn);
    let _ = writeln!(out, "  \"slk_paints\": {},", sink.slk_paints);
    let _ = writeln!(out, "  \"relayouts\": {}", sink.relayouts);
    out.push_str("}\n");
    out
}

// ============================================================================
// Tests
// ============================================================================
