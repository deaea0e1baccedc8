//! Astronomical phase engine - seasons, moon phases, and eclipse alignment
//!
//! This module provides the pure mappings the lab screens are built on: a
//! continuous time-like input (calendar month, lunar day, orbit angle) goes
//! in, a discrete observable state (season, phase name, lit fraction,
//! alignment verdict) comes out. All models are deliberately simplified for
//! a young audience; the cut points below are the app's canon, not ephemeris
//! truth.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

// ============================================================================
// Constants
// ============================================================================

/// Length of the lunar cycle in days (one synodic month, rounded for kids)
pub const SYNODIC_MONTH: f64 = 29.5;

/// Months in a year; month indices run 0 (January) to 11 (December)
pub const MONTHS_PER_YEAR: i64 = 12;

/// Short month names indexed by month number
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short month name for a fractional month value (wraps like [`Season::from_month`])
pub fn month_name(month: f64) -> &'static str {
    MONTH_NAMES[(month.floor() as i64).rem_euclid(MONTHS_PER_YEAR) as usize]
}

// ============================================================================
// Seasons
// ============================================================================

/// Season of the year, mapped from the calendar month
///
/// The four month-sets partition 0-11 exactly, so every month value maps to
/// precisely one season. Note the sets are anchored on northern-hemisphere
/// meteorology: Winter straddles the year boundary (Dec, Jan, Feb).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Season {
    /// Months 11, 0, 1
    #[default]
    Winter,
    /// Months 2, 3, 4
    Spring,
    /// Months 5, 6, 7
    Summer,
    /// Months 8, 9, 10
    Autumn,
}

impl Season {
    /// All four seasons in calendar order starting at the year boundary
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Autumn];

    /// Get the season for a fractional month value
    ///
    /// Only `floor(month) mod 12` is significant; out-of-range and negative
    /// inputs wrap rather than error.
    pub fn from_month(month: f64) -> Self {
        let m = (month.floor() as i64).rem_euclid(MONTHS_PER_YEAR);
        match m {
            11 | 0 | 1 => Season::Winter,
            2..=4 => Season::Spring,
            5..=7 => Season::Summer,
            _ => Season::Autumn, // 8-10
        }
    }

    /// The integer months (0-11) belonging to this season
    pub fn months(&self) -> [u32; 3] {
        match self {
            Season::Winter => [11, 0, 1],
            Season::Spring => [2, 3, 4],
            Season::Summer => [5, 6, 7],
            Season::Autumn => [8, 9, 10],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
        }
    }

    /// One-line explanation shown in the Earth Lab HUD
    pub fn description(&self) -> &'static str {
        match self {
            Season::Winter => "North Pole tilts away from Sun.",
            Season::Spring => "Sun shines equally on both hemispheres.",
            Season::Summer => "North Pole tilts towards Sun.",
            Season::Autumn => "Days start getting shorter.",
        }
    }
}

/// Orbital placement angle (radians) for the Earth at a given month
///
/// Display-only: December sits at angle 0 on the right of the screen, March
/// at the bottom, June on the left, September at the top. Nothing in the
/// season logic consumes this value.
pub fn earth_orbit_angle(month: f64) -> f64 {
    ((month - 11.0) / 6.0) * PI
}

// ============================================================================
// Moon phases
// ============================================================================

/// Named lunar phase, mapped from the moon's age in days
///
/// The eight bands are the app's canon and are deliberately non-uniform
/// (e.g. New Moon owns `[0, 1]` and `[28.5, 29.5]`); don't regularize them
/// to even eighths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    ThirdQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// Get the phase for a lunar age in days
    ///
    /// Input is clamped into `[0, 29.5]` first; sliders may hand us boundary
    /// floats a hair outside the range.
    pub fn from_day(day: f64) -> Self {
        let d = day.clamp(0.0, SYNODIC_MONTH);
        if d <= 1.0 || d >= 28.5 {
            MoonPhase::NewMoon
        } else if d < 6.5 {
            MoonPhase::WaxingCrescent
        } else if d <= 8.5 {
            MoonPhase::FirstQuarter
        } else if d < 14.0 {
            MoonPhase::WaxingGibbous
        } else if d <= 15.5 {
            MoonPhase::FullMoon
        } else if d < 21.5 {
            MoonPhase::WaningGibbous
        } else if d <= 23.5 {
            MoonPhase::ThirdQuarter
        } else {
            MoonPhase::WaningCrescent
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::ThirdQuarter => "Third Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    /// Is the moon growing towards full at this age?
    pub fn is_waxing(&self) -> bool {
        matches!(
            self,
            MoonPhase::WaxingCrescent | MoonPhase::FirstQuarter | MoonPhase::WaxingGibbous
        )
    }
}

/// Fraction of the lunar disc that is lit, in `[0, 1]`
///
/// Smooth cosine model: 0 at day 0, 1 at day 14.75, back to 0 at day 29.5.
/// Independent of the name lookup above.
pub fn illumination_fraction(day: f64) -> f64 {
    (1.0 - (day / SYNODIC_MONTH * TAU).cos()) / 2.0
}

/// Orbital placement angle (degrees, `[0, 360)`) for the moon at a given age
///
/// Display-only, like [`earth_orbit_angle`]: a new moon sits at 180 degrees
/// (between Earth and Sun) and sweeps backwards through the cycle.
pub fn orbit_display_angle(day: f64) -> f64 {
    (180.0 - day * (360.0 / SYNODIC_MONTH)).rem_euclid(360.0)
}

/// Which limb of the disc holds the light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LitSide {
    /// Waxing: light on the right (leading) edge
    Right,
    /// Waning: light on the left (trailing) edge
    Left,
}

/// Outline of the lit region of the lunar disc in a 100x100 viewbox
///
/// The lit region is bounded by one semicircle of the disc and the
/// terminator, an elliptical arc whose x-radius shrinks from 50 to 0 and
/// back over each half-cycle. The terminator bulges towards the dark side
/// for a crescent and towards the lit side for a gibbous, which is what the
/// sweep flag encodes; the flip happens at the quarter moons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonOutline {
    pub lit_side: LitSide,
    /// Terminator x-radius, `|50 * cos(local * 2pi)|`
    pub terminator_rx: f64,
    /// SVG arc sweep flag for the terminator: 0 = crescent, 1 = gibbous
    pub terminator_sweep: u8,
}

impl MoonOutline {
    /// Build the outline for a lunar age in days
    pub fn from_day(day: f64) -> Self {
        let phase = day.rem_euclid(SYNODIC_MONTH) / SYNODIC_MONTH;
        let (lit_side, local) = if phase <= 0.5 {
            (LitSide::Right, phase)
        } else {
            (LitSide::Left, phase - 0.5)
        };
        let rx = 50.0 * (local * TAU).cos();
        Self {
            lit_side,
            terminator_rx: rx.abs(),
            terminator_sweep: if local < 0.25 { 0 } else { 1 },
        }
    }

    /// Render the outline as an SVG path for the lit region
    pub fn svg_path(&self) -> String {
        // Sweep 1 walks the right semicircle top-to-bottom, sweep 0 the left.
        let side = match self.lit_side {
            LitSide::Right => 1,
            LitSide::Left => 0,
        };
        format!(
            "M 50 0 A 50 50 0 0 {} 50 100 A {} 50 0 0 {} 50 0",
            side, self.terminator_rx, self.terminator_sweep
        )
    }
}

// ============================================================================
// Eclipse alignment
// ============================================================================

/// Normalize an angle into `[0, 360)` degrees
///
/// Modulo with negative results corrected by adding a full turn, so callers
/// may pass any real angle (sliders, accumulated rotations).
pub fn normalize_deg(angle: f64) -> f64 {
    let a = angle % 360.0;
    if a < 0.0 {
        a + 360.0
    } else {
        a
    }
}

/// A target angular range for an eclipse level
///
/// If `start_deg > end_deg` the window wraps through 0/360 (e.g. 340 -> 20
/// covers the top of the circle).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentWindow {
    pub start_deg: f64,
    pub end_deg: f64,
}

impl AlignmentWindow {
    pub const fn new(start_deg: f64, end_deg: f64) -> Self {
        Self { start_deg, end_deg }
    }

    /// Does this window wrap through the 0/360 seam?
    pub fn wraps(&self) -> bool {
        self.start_deg > self.end_deg
    }

    /// Is the (wrapped) angle inside the window?
    pub fn contains(&self, angle_deg: f64) -> bool {
        let a = normalize_deg(angle_deg);
        if self.wraps() {
            a >= self.start_deg || a <= self.end_deg
        } else {
            a >= self.start_deg && a <= self.end_deg
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_from_month() {
        assert_eq!(Season::from_month(0.0), Season::Winter);
        assert_eq!(Season::from_month(1.0), Season::Winter);
        assert_eq!(Season::from_month(2.0), Season::Spring);
        assert_eq!(Season::from_month(4.9), Season::Spring);
        assert_eq!(Season::from_month(5.0), Season::Summer);
        assert_eq!(Season::from_month(7.0), Season::Summer);
        assert_eq!(Season::from_month(8.0), Season::Autumn);
        assert_eq!(Season::from_month(10.99), Season::Autumn);
        assert_eq!(Season::from_month(11.0), Season::Winter);
    }

    #[test]
    fn test_season_wraps_out_of_range_months() {
        assert_eq!(Season::from_month(12.0), Season::Winter);
        assert_eq!(Season::from_month(14.5), Season::Spring);
        assert_eq!(Season::from_month(-1.0), Season::Winter);
        assert_eq!(Season::from_month(-10.0), Season::Spring); // floor(-10) mod 12 = 2
    }

    #[test]
    fn test_season_partition_is_total_and_disjoint() {
        // Every month claimed exactly once across the four seasons.
        let mut claimed = [0u32; 12];
        for season in Season::ALL {
            for m in season.months() {
                claimed[m as usize] += 1;
            }
        }
        assert_eq!(claimed, [1; 12]);

        // And from_month agrees with the month-sets.
        for season in Season::ALL {
            for m in season.months() {
                assert_eq!(Season::from_month(m as f64), season);
            }
        }
    }

    #[test]
    fn test_month_name_wraps() {
        assert_eq!(month_name(0.0), "Jan");
        assert_eq!(month_name(11.9), "Dec");
        assert_eq!(month_name(12.0), "Jan");
        assert_eq!(month_name(-1.0), "Dec");
    }

    #[test]
    fn test_earth_orbit_angle_anchors() {
        // Dec on the right (0 rad), Mar at the bottom, Jun on the left.
        assert!((earth_orbit_angle(11.0) - 0.0).abs() < 1e-9);
        assert!((earth_orbit_angle(2.0) + 1.5 * PI).abs() < 1e-9);
        assert!((earth_orbit_angle(5.0) + PI).abs() < 1e-9);
    }

    #[test]
    fn test_moon_phase_boundaries() {
        assert_eq!(MoonPhase::from_day(0.0), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::from_day(1.0), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::from_day(1.1), MoonPhase::WaxingCrescent);
        assert_eq!(MoonPhase::from_day(6.4), MoonPhase::WaxingCrescent);
        assert_eq!(MoonPhase::from_day(6.5), MoonPhase::FirstQuarter);
        assert_eq!(MoonPhase::from_day(7.4), MoonPhase::FirstQuarter);
        assert_eq!(MoonPhase::from_day(8.5), MoonPhase::FirstQuarter);
        assert_eq!(MoonPhase::from_day(8.6), MoonPhase::WaxingGibbous);
        assert_eq!(MoonPhase::from_day(13.9), MoonPhase::WaxingGibbous);
        assert_eq!(MoonPhase::from_day(14.0), MoonPhase::FullMoon);
        assert_eq!(MoonPhase::from_day(14.8), MoonPhase::FullMoon);
        assert_eq!(MoonPhase::from_day(15.5), MoonPhase::FullMoon);
        assert_eq!(MoonPhase::from_day(15.6), MoonPhase::WaningGibbous);
        assert_eq!(MoonPhase::from_day(21.4), MoonPhase::WaningGibbous);
        assert_eq!(MoonPhase::from_day(21.5), MoonPhase::ThirdQuarter);
        assert_eq!(MoonPhase::from_day(22.1), MoonPhase::ThirdQuarter);
        assert_eq!(MoonPhase::from_day(23.5), MoonPhase::ThirdQuarter);
        assert_eq!(MoonPhase::from_day(23.6), MoonPhase::WaningCrescent);
        assert_eq!(MoonPhase::from_day(28.4), MoonPhase::WaningCrescent);
        assert_eq!(MoonPhase::from_day(28.5), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::from_day(29.5), MoonPhase::NewMoon);
    }

    #[test]
    fn test_moon_phase_tolerates_slider_overshoot() {
        assert_eq!(MoonPhase::from_day(-0.1), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::from_day(29.6), MoonPhase::NewMoon);
    }

    #[test]
    fn test_moon_phase_table_is_total() {
        // Step across the whole slider range; every value must map.
        let mut day = 0.0;
        while day <= SYNODIC_MONTH {
            let _ = MoonPhase::from_day(day).name();
            day += 0.1;
        }
    }

    #[test]
    fn test_illumination_round_trip() {
        assert!(illumination_fraction(0.0).abs() < 1e-9);
        assert!((illumination_fraction(14.75) - 1.0).abs() < 1e-9);
        assert!(illumination_fraction(SYNODIC_MONTH).abs() < 1e-9);
    }

    #[test]
    fn test_illumination_symmetry() {
        for i in 0..=295 {
            let d = i as f64 * 0.1;
            let a = illumination_fraction(d);
            let b = illumination_fraction(SYNODIC_MONTH - d);
            assert!((a - b).abs() < 1e-9, "asymmetric at day {}", d);
            assert!((0.0..=1.0).contains(&a));
        }
    }

    #[test]
    fn test_orbit_display_angle() {
        // New moon between Earth and Sun.
        assert!((orbit_display_angle(0.0) - 180.0).abs() < 1e-9);
        // Full moon behind the Earth (angle wraps to 0).
        assert!(orbit_display_angle(14.75) < 1e-9);
        // Always in [0, 360).
        for i in 0..=295 {
            let a = orbit_display_angle(i as f64 * 0.1);
            assert!((0.0..360.0).contains(&a));
        }
    }

    #[test]
    fn test_outline_sides() {
        assert_eq!(MoonOutline::from_day(3.0).lit_side, LitSide::Right);
        assert_eq!(MoonOutline::from_day(10.0).lit_side, LitSide::Right);
        assert_eq!(MoonOutline::from_day(18.0).lit_side, LitSide::Left);
        assert_eq!(MoonOutline::from_day(26.0).lit_side, LitSide::Left);
    }

    #[test]
    fn test_outline_sweep_flips_at_quarters() {
        // Waxing: crescent before local phase 0.25, gibbous after.
        assert_eq!(MoonOutline::from_day(3.0).terminator_sweep, 0);
        assert_eq!(MoonOutline::from_day(10.0).terminator_sweep, 1);
        // Waning mirrors: gibbous first, then crescent.
        assert_eq!(MoonOutline::from_day(18.0).terminator_sweep, 0);
        assert_eq!(MoonOutline::from_day(26.0).terminator_sweep, 1);
    }

    #[test]
    fn test_outline_terminator_radius() {
        // Full width at the cycle ends, zero at the quarters.
        assert!((MoonOutline::from_day(0.0).terminator_rx - 50.0).abs() < 1e-9);
        let quarter = SYNODIC_MONTH / 4.0;
        assert!(MoonOutline::from_day(quarter).terminator_rx < 1e-9);
        // Radius never leaves [0, 50].
        for i in 0..=295 {
            let rx = MoonOutline::from_day(i as f64 * 0.1).terminator_rx;
            assert!((0.0..=50.0).contains(&rx));
        }
    }

    #[test]
    fn test_outline_svg_path_shape() {
        let waxing = MoonOutline::from_day(3.0).svg_path();
        assert!(waxing.starts_with("M 50 0 A 50 50 0 0 1 50 100"));
        let waning = MoonOutline::from_day(20.0).svg_path();
        assert!(waning.starts_with("M 50 0 A 50 50 0 0 0 50 100"));
    }

    #[test]
    fn test_normalize_deg() {
        assert!((normalize_deg(0.0) - 0.0).abs() < 1e-9);
        assert!((normalize_deg(360.0) - 0.0).abs() < 1e-9);
        assert!((normalize_deg(-10.0) - 350.0).abs() < 1e-9);
        assert!((normalize_deg(725.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_alignment_simple_window() {
        let w = AlignmentWindow::new(175.0, 185.0);
        assert!(!w.wraps());
        assert!(w.contains(180.0));
        assert!(w.contains(175.0));
        assert!(w.contains(185.0));
        assert!(!w.contains(170.0));
        assert!(!w.contains(186.0));
    }

    #[test]
    fn test_alignment_wraparound_window() {
        let w = AlignmentWindow::new(340.0, 20.0);
        assert!(w.wraps());
        assert!(w.contains(350.0));
        assert!(w.contains(0.0));
        assert!(w.contains(10.0));
        assert!(w.contains(20.0));
        assert!(w.contains(340.0));
        assert!(!w.contains(180.0));
        assert!(!w.contains(339.0));
        assert!(!w.contains(21.0));
    }

    #[test]
    fn test_alignment_full_turn_invariance() {
        let windows = [AlignmentWindow::new(340.0, 20.0), AlignmentWindow::new(175.0, 185.0)];
        for w in windows {
            for i in 0..360 {
                let a = i as f64;
                assert_eq!(w.contains(a), w.contains(a + 360.0));
                assert_eq!(w.contains(a), w.contains(a - 360.0));
            }
        }
    }
}
