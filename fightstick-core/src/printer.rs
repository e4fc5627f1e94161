//! Raster printer: walks a bitmap with the d-pad and inks set pixels.
//!
//! Each call to [`Printer::step`] produces one d-pad direction, moves the
//! cursor accordingly and presses A when the pixel under the cursor is set.
//! Two traversals are available:
//!
//! - **Simple**: one row at a time, alternating direction per row. A neutral
//!   tick separates every two moves so the console never sees the same
//!   direction twice in a row, which it would treat as a held, accelerating
//!   press.
//! - **Zig-zag**: two rows at a time. Horizontal moves on odd ticks, down/up
//!   on even ticks, so direction always changes between reports without
//!   spending ticks on neutral stops. The tail of each pattern drops onto the
//!   next row pair and visits the last column of the lower row three times.
//!   The sweep ends as soon as the cursor moves below the last row.

use crate::bitmap::Bitmap;
use crate::config::{ConfigError, SweepMode};
use switch_proto::{Buttons, Hat, Report};

/// Button that paints the pixel under the cursor.
pub const INK_BUTTON: Buttons = Buttons::A;

/// Cursor position on the canvas, in pixels from the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
}

impl Cursor {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Move one pixel along each component of `hat`.
    #[inline]
    pub fn advance(&mut self, hat: Hat) {
        self.x += hat.dx();
        self.y += hat.dy();
    }
}

/// Result of one [`Printer::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SweepProgress {
    Drawing,
    /// Every row has been covered. Nothing was inked on this tick.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SimplePhase {
    StopX,
    MoveX,
    StopY,
    MoveY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sweep {
    Simple(SimplePhase),
    ZigZag { tick: u32 },
}

/// Ticks in one zig-zag row-pair pattern for a bitmap `width` pixels wide.
///
/// 642 for the 320-pixel canvas.
#[inline]
#[must_use]
pub const fn zigzag_pattern_len(width: u16) -> u32 {
    2 * width as u32 + 2
}

/// Direction of pattern tick `tick` for a cursor on row `y`.
///
/// For a width `w`:
/// - ticks `2w - 1` and `2w + 1` move down onto the next row pair,
///   with a neutral tick `2w` between them;
/// - other odd ticks move right on row pairs where `y mod 4 < 2` and left
///   on the others;
/// - other even ticks move down when `tick mod 4 == 0` and up otherwise.
#[must_use]
pub const fn zigzag_direction(tick: u32, width: u16, y: i32) -> Hat {
    let row_end = 2 * width as u32;
    if tick == row_end.wrapping_sub(1) || tick == row_end + 1 {
        Hat::Down
    } else if tick == row_end {
        Hat::Center
    } else if tick % 2 == 1 {
        if y.rem_euclid(4) < 2 {
            Hat::Right
        } else {
            Hat::Left
        }
    } else if tick % 4 == 0 {
        Hat::Down
    } else {
        Hat::Up
    }
}

/// Drives the cursor over a [`Bitmap`] one tick at a time.
#[derive(Debug, Clone)]
pub struct Printer<'a> {
    bitmap: Bitmap<'a>,
    cursor: Cursor,
    sweep: Sweep,
}

impl<'a> Printer<'a> {
    /// Start a traversal with the cursor at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OddZigZagWidth`] for a zig-zag sweep over an
    /// odd-width bitmap.
    pub fn new(bitmap: Bitmap<'a>, mode: SweepMode) -> Result<Self, ConfigError> {
        let sweep = match mode {
            SweepMode::Simple => Sweep::Simple(SimplePhase::StopX),
            SweepMode::ZigZag if bitmap.width() % 2 != 0 => {
                return Err(ConfigError::OddZigZagWidth)
            }
            SweepMode::ZigZag => Sweep::ZigZag { tick: 0 },
        };
        Ok(Self {
            bitmap,
            cursor: Cursor::ORIGIN,
            sweep,
        })
    }

    #[inline]
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub fn bitmap(&self) -> &Bitmap<'a> {
        &self.bitmap
    }

    /// Press the ink button if the pixel under the cursor is set.
    pub fn ink(&self, report: &mut Report) {
        if self.bitmap.get(self.cursor.x, self.cursor.y) {
            report.buttons |= INK_BUTTON;
        }
    }

    /// Produce this tick's move and ink.
    pub fn step(&mut self, report: &mut Report) -> SweepProgress {
        let progress = match self.sweep {
            Sweep::Simple(phase) => self.simple_step(phase, report),
            Sweep::ZigZag { tick } => self.zigzag_step(tick, report),
        };
        if progress == SweepProgress::Drawing {
            self.ink(report);
        }
        progress
    }

    fn travel(&mut self, hat: Hat, report: &mut Report) {
        report.hat = hat;
        self.cursor.advance(hat);
    }

    /// Rows alternate direction: even rows go right, odd rows go left.
    fn row_direction(&self) -> Hat {
        if self.cursor.y.rem_euclid(2) == 0 {
            Hat::Right
        } else {
            Hat::Left
        }
    }

    fn at_row_end(&self) -> bool {
        match self.row_direction() {
            Hat::Right => self.cursor.x >= i32::from(self.bitmap.width()) - 1,
            _ => self.cursor.x <= 0,
        }
    }

    fn simple_step(&mut self, phase: SimplePhase, report: &mut Report) -> SweepProgress {
        let next = match phase {
            SimplePhase::StopX => {
                if self.at_row_end() {
                    SimplePhase::StopY
                } else {
                    SimplePhase::MoveX
                }
            }
            SimplePhase::MoveX => {
                self.travel(self.row_direction(), report);
                if self.at_row_end() {
                    SimplePhase::StopY
                } else {
                    SimplePhase::StopX
                }
            }
            SimplePhase::StopY => {
                if self.cursor.y < i32::from(self.bitmap.height()) - 1 {
                    SimplePhase::MoveY
                } else {
                    return SweepProgress::Finished;
                }
            }
            SimplePhase::MoveY => {
                self.travel(Hat::Down, report);
                SimplePhase::StopX
            }
        };
        self.sweep = Sweep::Simple(next);
        SweepProgress::Drawing
    }

    fn zigzag_step(&mut self, tick: u32, report: &mut Report) -> SweepProgress {
        let width = self.bitmap.width();
        self.travel(zigzag_direction(tick, width, self.cursor.y), report);
        if self.cursor.y > i32::from(self.bitmap.height()) - 1 {
            return SweepProgress::Finished;
        }

        let next = (tick + 1) % zigzag_pattern_len(width);
        self.sweep = Sweep::ZigZag { tick: next };
        SweepProgress::Drawing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Checkerboard-ish pattern with a few blank bytes.
    fn pattern(bytes: usize) -> Vec<u8> {
        (0..bytes).map(|i| (i as u8).wrapping_mul(37) ^ 0x5A).collect()
    }

    /// Run a printer to completion, returning every drawing tick's report and
    /// the cursor after it.
    fn run_to_end(printer: &mut Printer<'_>, limit: usize) -> Vec<(Report, Cursor)> {
        let mut ticks = Vec::new();
        for _ in 0..limit {
            let mut report = Report::neutral();
            match printer.step(&mut report) {
                SweepProgress::Drawing => ticks.push((report, printer.cursor())),
                SweepProgress::Finished => return ticks,
            }
        }
        panic!("printer did not finish within {limit} ticks");
    }

    #[test]
    fn test_simple_sweep_visits_every_cell_once() {
        let data = pattern(4 * 6);
        let bitmap = Bitmap::new(&data, 13, 6).unwrap();
        let mut printer = Printer::new(bitmap, SweepMode::Simple).unwrap();

        let ticks = run_to_end(&mut printer, 10_000);

        let mut visits: HashMap<(i32, i32), u32> = HashMap::new();
        visits.insert((0, 0), 1);
        for (report, cursor) in &ticks {
            if report.hat != Hat::Center {
                *visits.entry((cursor.x, cursor.y)).or_default() += 1;
            }
        }
        assert_eq!(visits.len(), 13 * 6);
        for y in 0..6 {
            for x in 0..13 {
                assert_eq!(visits.get(&(x, y)), Some(&1), "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_simple_sweep_ink_matches_bitmap() {
        let data = pattern(2 * 5);
        let bitmap = Bitmap::new(&data, 16, 5).unwrap();
        let mut printer = Printer::new(bitmap, SweepMode::Simple).unwrap();

        for (report, cursor) in run_to_end(&mut printer, 10_000) {
            assert_eq!(
                report.buttons.contains(INK_BUTTON),
                bitmap.get(cursor.x, cursor.y),
                "cursor {cursor:?}"
            );
        }
    }

    #[test]
    fn test_simple_sweep_never_repeats_a_direction() {
        let data = [0u8; 3 * 4];
        let bitmap = Bitmap::new(&data, 24, 4).unwrap();
        let mut printer = Printer::new(bitmap, SweepMode::Simple).unwrap();

        let ticks = run_to_end(&mut printer, 10_000);
        for pair in ticks.windows(2) {
            assert!(
                pair[0].0.hat == Hat::Center || pair[1].0.hat == Hat::Center,
                "two consecutive moves: {:?} then {:?}",
                pair[0].0.hat,
                pair[1].0.hat
            );
        }
    }

    #[test]
    fn test_simple_sweep_boustrophedon() {
        let data = [0u8; 2];
        let bitmap = Bitmap::new(&data, 3, 2).unwrap();
        let mut printer = Printer::new(bitmap, SweepMode::Simple).unwrap();

        let hats: Vec<Hat> = run_to_end(&mut printer, 100)
            .iter()
            .map(|(report, _)| report.hat)
            .collect();
        assert_eq!(
            hats,
            [
                Hat::Center, // StopX
                Hat::Right,
                Hat::Center,
                Hat::Right,
                Hat::Center, // StopY
                Hat::Down,
                Hat::Center,
                Hat::Left,
                Hat::Center,
                Hat::Left,
            ]
        );
        assert_eq!(printer.cursor(), Cursor { x: 0, y: 1 });
    }

    #[test]
    fn test_simple_sweep_single_column() {
        let data = [0b1, 0b0, 0b1];
        let bitmap = Bitmap::new(&data, 1, 3).unwrap();
        let mut printer = Printer::new(bitmap, SweepMode::Simple).unwrap();

        let ticks = run_to_end(&mut printer, 100);
        assert_eq!(printer.cursor(), Cursor { x: 0, y: 2 });
        assert!(ticks.iter().all(|(_, cursor)| cursor.x == 0));
    }

    #[test]
    fn test_zigzag_golden_pattern() {
        let w = Bitmap::CANVAS_WIDTH;
        assert_eq!(zigzag_pattern_len(w), 642);

        let golden = [
            (0, Hat::Down),
            (1, Hat::Right),
            (2, Hat::Up),
            (3, Hat::Right),
            (4, Hat::Down),
            (5, Hat::Right),
            (6, Hat::Up),
            (636, Hat::Down),
            (637, Hat::Right),
            (638, Hat::Up),
            (639, Hat::Down),
            (640, Hat::Center),
            (641, Hat::Down),
        ];
        for (tick, expected) in golden {
            assert_eq!(zigzag_direction(tick, w, 0), expected, "tick {tick}");
        }

        // Rows 2 and 3 travel left; the vertical pattern is unchanged.
        assert_eq!(zigzag_direction(1, w, 2), Hat::Left);
        assert_eq!(zigzag_direction(3, w, 3), Hat::Left);
        assert_eq!(zigzag_direction(4, w, 3), Hat::Down);
        assert_eq!(zigzag_direction(641, w, 3), Hat::Down);
    }

    #[test]
    fn test_zigzag_pattern_composition() {
        let w = Bitmap::CANVAS_WIDTH;
        let mut counts: HashMap<Hat, u32> = HashMap::new();
        let mut cursor = Cursor::ORIGIN;
        for tick in 0..zigzag_pattern_len(w) {
            let hat = zigzag_direction(tick, w, cursor.y);
            *counts.entry(hat).or_default() += 1;
            cursor.advance(hat);
        }
        assert_eq!(counts[&Hat::Right], 319);
        assert_eq!(counts[&Hat::Down], 162);
        assert_eq!(counts[&Hat::Up], 160);
        assert_eq!(counts[&Hat::Center], 1);
        assert_eq!(cursor, Cursor { x: 319, y: 2 });
    }

    #[test]
    fn test_zigzag_covers_canvas_rows() {
        let data = pattern(40 * 4);
        let bitmap = Bitmap::new(&data, 320, 4).unwrap();
        let mut printer = Printer::new(bitmap, SweepMode::ZigZag).unwrap();

        let ticks = run_to_end(&mut printer, 10_000);
        // The final tick of the last pattern reports Finished.
        assert_eq!(ticks.len(), 2 * 642 - 1);
        assert_eq!(printer.cursor(), Cursor { x: 0, y: 4 });

        let mut visited = vec![vec![false; 320]; 4];
        visited[0][0] = true;
        for (report, cursor) in &ticks {
            if bitmap.contains(cursor.x, cursor.y) {
                visited[cursor.y as usize][cursor.x as usize] = true;
            }
            assert_eq!(
                report.buttons.contains(INK_BUTTON),
                bitmap.get(cursor.x, cursor.y)
            );
        }
        assert!(visited.iter().flatten().all(|&v| v));
    }

    #[test]
    fn test_zigzag_odd_height_stops_below_last_row() {
        let data = [0xFFu8; 2 * 3];
        let bitmap = Bitmap::new(&data, 16, 3).unwrap();
        let mut printer = Printer::new(bitmap, SweepMode::ZigZag).unwrap();

        let ticks = run_to_end(&mut printer, 1_000);
        // First pattern covers rows 0-1, the second's opening Down leaves row 2.
        assert_eq!(ticks.len(), zigzag_pattern_len(16) as usize);
        assert!(ticks.iter().all(|(_, cursor)| cursor.y <= 2));
        assert_eq!(printer.cursor(), Cursor { x: 15, y: 3 });
    }

    #[test]
    fn test_zigzag_direction_zero_width() {
        assert_eq!(zigzag_direction(0, 0, 0), Hat::Center);
        assert_eq!(zigzag_direction(1, 0, 0), Hat::Down);
        assert_eq!(zigzag_direction(u32::MAX, 0, 0), Hat::Down);
    }

    #[test]
    fn test_zigzag_triple_visit_at_pattern_tail() {
        let data = [0u8; 40 * 2];
        let bitmap = Bitmap::new(&data, 320, 2).unwrap();
        let mut printer = Printer::new(bitmap, SweepMode::ZigZag).unwrap();

        let ticks = run_to_end(&mut printer, 1_000);
        let tail = ticks.iter().filter(|(_, c)| *c == Cursor { x: 319, y: 1 }).count();
        assert_eq!(tail, 3);
    }

    #[test]
    fn test_zigzag_rejects_odd_width() {
        let data = [0u8; 2];
        let bitmap = Bitmap::new(&data, 9, 1).unwrap();
        assert_eq!(
            Printer::new(bitmap, SweepMode::ZigZag).err(),
            Some(ConfigError::OddZigZagWidth)
        );
        assert!(Printer::new(bitmap, SweepMode::Simple).is_ok());
    }
}
