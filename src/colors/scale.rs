use std::fmt;

use serde::Serialize;

const RED_HUE: u16 = 0;
const RECORD_GREEN_HUE: u16 = 100;
const LUCK_GREEN_HUE: u16 = 120;
const SATURATION: u8 = 65;

// Lightness floors keeping cell text legible at the luck extremes.
const NEGATIVE_LUCK_LIGHTNESS_FLOOR: f64 = 25.0;
const POSITIVE_LUCK_LIGHTNESS_FLOOR: f64 = 13.0;

/// An HSL color as handed to the presentation layer. Serializes (and
/// displays) as the CSS `hsl(...)` string the table cells use directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: f64,
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

impl Serialize for HslColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Heat-map color for a win/loss cell: dark red for a bad record, dark
/// green for a good one, with mediocre records washed out toward light
/// red/green. Total over all inputs; a zero-game record (impossible for a
/// valid league, where every week has at least one opponent) falls through
/// to the green branch at a fixed lightness.
pub fn record_cell_color(wins: u32, losses: u32) -> HslColor {
    let total_games = f64::from(wins + losses);
    if wins < losses {
        let win_percentage = f64::from(wins) / total_games;
        HslColor {
            hue: RED_HUE,
            saturation: SATURATION,
            lightness: (win_percentage + 0.5) * 100.0,
        }
    } else {
        let loss_percentage = if total_games == 0.0 {
            0.0
        } else {
            f64::from(losses) / total_games
        };
        HslColor {
            hue: RECORD_GREEN_HUE,
            saturation: SATURATION,
            lightness: (loss_percentage + 0.4) * 100.0,
        }
    }
}

/// Color for the luck cell: red scale below zero luck, green scale at or
/// above it, each clamped to a minimum lightness so the darkest cells stay
/// readable.
pub fn luck_cell_color(luck: f64) -> HslColor {
    if luck < 0.0 {
        HslColor {
            hue: RED_HUE,
            saturation: SATURATION,
            lightness: ((luck + 0.8) * 100.0).max(NEGATIVE_LUCK_LIGHTNESS_FLOOR),
        }
    } else {
        HslColor {
            hue: LUCK_GREEN_HUE,
            saturation: SATURATION,
            lightness: ((0.7 - luck) * 100.0).max(POSITIVE_LUCK_LIGHTNESS_FLOOR),
        }
    }
}
