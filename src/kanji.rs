//! Static kanji datasets: the chart records, the glyph -> SVG asset name
//! table and the glyph -> stroke-order instruction table.
//!
//! All three are plain `&'static` slices; the lookup maps over them are built
//! once on first use and never mutated afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::TraceError;

/// Instruction shown when a glyph has no stroke-order entry.
pub const STROKE_ORDER_FALLBACK: &str = "Stroke order data not available";
/// Meaning shown when a glyph has no asset entry.
pub const UNKNOWN_MEANING: &str = "Unknown";

/// One card of the kanji chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CharacterRecord {
    pub glyph: &'static str,
    pub hiragana: &'static str,
    pub romaji: &'static str,
    pub meaning: &'static str,
}

const fn rec(
    glyph: &'static str,
    hiragana: &'static str,
    romaji: &'static str,
    meaning: &'static str,
) -> CharacterRecord {
    CharacterRecord {
        glyph,
        hiragana,
        romaji,
        meaning,
    }
}

pub const KANJI_CHART: &[CharacterRecord] = &[
    rec("人", "ひと", "hito", "Person"),
    rec("女", "おんな", "onna", "Woman"),
    rec("男", "おとこ", "otoko", "Man"),
    rec("子", "こ", "ko", "Child"),
    rec("手", "て", "te", "Hand"),
    rec("目", "め", "me", "Eye"),
    rec("耳", "みみ", "mimi", "Ear"),
    rec("口", "くち", "kuchi", "Mouth"),
    rec("足", "あし", "ashi", "Foot / Leg"),
    rec("日", "ひ", "hi", "Sun / Day"),
    rec("月", "つき", "tsuki", "Moon / Month"),
    rec("年", "とし", "toshi", "Year"),
    rec("週", "しゅう", "shuu", "Week"),
    rec("火", "ひ", "hi", "Fire"),
    rec("水", "みず", "mizu", "Water"),
    rec("木", "き", "ki", "Tree / Wood"),
    rec("山", "やま", "yama", "Mountain"),
    rec("白", "しろ", "shiro", "White"),
    rec("父", "ちち", "chichi", "Father"),
    rec("母", "はは", "haha", "Mother"),
];

/// Glyph -> SVG asset identifier (file stem under the asset base).
pub const KANJI_ASSETS: &[(&str, &str)] = &[
    ("人", "person"),
    ("女", "woman"),
    ("男", "man"),
    ("子", "child"),
    ("手", "hand"),
    ("目", "eye"),
    ("耳", "ear"),
    ("口", "mouth"),
    ("足", "foot"),
    ("日", "day"),
    ("月", "month"),
    ("年", "year"),
    ("週", "week"),
    ("火", "fire"),
    ("水", "water"),
    ("木", "tree"),
    ("山", "mountain"),
    ("白", "white"),
    ("父", "father"),
    ("母", "mother"),
];

pub const KANJI_STROKE_ORDERS: &[(&str, &[&str])] = &[
    (
        "人",
        &[
            "Draw the left diagonal stroke from top to bottom.",
            "Draw the right diagonal stroke crossing the first.",
        ],
    ),
    (
        "女",
        &[
            "Draw the top horizontal stroke from left to right.",
            "Draw the left diagonal stroke starting near the middle.",
            "Draw the sweeping stroke on the right side.",
        ],
    ),
    (
        "男",
        &[
            "Draw the left vertical stroke in the field radical.",
            "Draw the horizontal stroke inside the field.",
            "Complete the field radical strokes.",
            "Draw the right-side stroke.",
        ],
    ),
    (
        "子",
        &[
            "Draw the horizontal stroke on top.",
            "Draw the vertical stroke through the center.",
            "Draw the sweeping stroke at the bottom.",
        ],
    ),
    (
        "手",
        &[
            "Draw the top horizontal stroke.",
            "Draw the vertical stroke down through the center.",
            "Draw the left diagonal stroke.",
            "Draw the right diagonal stroke.",
            "Draw the final horizontal stroke at the bottom.",
        ],
    ),
    (
        "目",
        &[
            "Draw the top horizontal stroke.",
            "Draw the left vertical stroke.",
            "Draw the inner horizontal strokes from top to bottom.",
            "Draw the right vertical stroke.",
            "Draw the bottom horizontal stroke.",
        ],
    ),
    (
        "耳",
        &[
            "Draw the top horizontal stroke.",
            "Draw the left vertical stroke.",
            "Draw the inner strokes in order from top to bottom.",
            "Draw the bottom horizontal stroke.",
        ],
    ),
    (
        "口",
        &[
            "Draw the left vertical stroke.",
            "Draw the top horizontal stroke.",
            "Draw the right vertical stroke.",
            "Draw the bottom horizontal stroke to close the box.",
        ],
    ),
    (
        "足",
        &[
            "Draw the left vertical stroke.",
            "Draw the horizontal strokes inside.",
            "Draw the sweeping strokes on the right.",
        ],
    ),
    (
        "日",
        &[
            "Draw the outer box starting from top horizontal.",
            "Draw the left vertical stroke.",
            "Draw the bottom horizontal stroke.",
            "Draw the right vertical stroke.",
            "Draw the inner horizontal stroke.",
        ],
    ),
    (
        "月",
        &[
            "Draw the left vertical stroke with a hook.",
            "Draw the inner strokes from top to bottom.",
            "Draw the right vertical stroke.",
        ],
    ),
    (
        "年",
        &[
            "Draw the top horizontal stroke.",
            "Draw the vertical stroke intersecting the horizontal.",
            "Draw the sweeping stroke at the bottom.",
            "Draw the final stroke on the right.",
        ],
    ),
    (
        "週",
        &[
            "Draw the outer box radical strokes.",
            "Draw the inner strokes from top to bottom and left to right.",
        ],
    ),
    (
        "火",
        &[
            "Draw the left diagonal stroke.",
            "Draw the right diagonal stroke.",
            "Draw the small left flick stroke near the middle.",
            "Draw the small right flick stroke near the middle.",
            "Draw the bottom vertical stroke.",
        ],
    ),
    (
        "水",
        &[
            "Draw the left diagonal stroke from top to bottom.",
            "Draw the right diagonal stroke crossing the first.",
            "Draw the vertical stroke with a flick in the middle.",
            "Draw the short diagonal stroke on the right side.",
        ],
    ),
    (
        "木",
        &[
            "Draw the horizontal stroke on top.",
            "Draw the vertical stroke through the center.",
            "Draw the left diagonal stroke.",
            "Draw the right diagonal stroke.",
        ],
    ),
    (
        "山",
        &[
            "Draw the left vertical stroke.",
            "Draw the middle vertical stroke, taller than the first.",
            "Draw the right vertical stroke.",
            "Draw the base horizontal stroke.",
        ],
    ),
    (
        "白",
        &[
            "Draw the top horizontal stroke.",
            "Draw the vertical stroke through the middle.",
            "Draw the left and right strokes forming the shape.",
            "Draw the bottom horizontal stroke.",
        ],
    ),
    (
        "父",
        &[
            "Draw the top left diagonal stroke.",
            "Draw the top right diagonal stroke.",
            "Draw the vertical stroke through the center.",
            "Draw the sweeping strokes at the bottom.",
        ],
    ),
    (
        "母",
        &[
            "Draw the top horizontal stroke.",
            "Draw the left vertical stroke.",
            "Draw the curved strokes on the right.",
            "Draw the bottom strokes.",
        ],
    ),
];

fn asset_map() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| KANJI_ASSETS.iter().copied().collect())
}

fn stroke_order_map() -> &'static HashMap<&'static str, &'static [&'static str]> {
    static MAP: OnceLock<HashMap<&'static str, &'static [&'static str]>> = OnceLock::new();
    MAP.get_or_init(|| KANJI_STROKE_ORDERS.iter().copied().collect())
}

fn record_map() -> &'static HashMap<&'static str, &'static CharacterRecord> {
    static MAP: OnceLock<HashMap<&'static str, &'static CharacterRecord>> = OnceLock::new();
    MAP.get_or_init(|| KANJI_CHART.iter().map(|r| (r.glyph, r)).collect())
}

/// Chart records in display order.
pub fn character_records() -> &'static [CharacterRecord] {
    KANJI_CHART
}

pub fn record_for(glyph: &str) -> Option<&'static CharacterRecord> {
    record_map().get(glyph).copied()
}

/// Glyph -> asset identifier. `None` for glyphs outside the table.
pub fn resolve_asset(glyph: &str) -> Option<&'static str> {
    asset_map().get(glyph).copied()
}

pub fn stroke_order(glyph: &str) -> Result<&'static [&'static str], TraceError> {
    stroke_order_map()
        .get(glyph)
        .copied()
        .ok_or_else(|| TraceError::UnknownStrokeOrder {
            glyph: glyph.to_string(),
        })
}

/// Instructions for display: the table entry, or the single fallback line.
pub fn stroke_order_or_fallback(glyph: &str) -> Vec<&'static str> {
    match stroke_order(glyph) {
        Ok(steps) => steps.to_vec(),
        Err(_) => vec![STROKE_ORDER_FALLBACK],
    }
}

/// Meaning shown on the tracing page: the capitalized asset name, or
/// [`UNKNOWN_MEANING`] when the glyph has no asset.
pub fn meaning_for(glyph: &str) -> String {
    match resolve_asset(glyph) {
        Some(asset) => capitalize(asset),
        None => UNKNOWN_MEANING.to_string(),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(feature = "serde_json")]
pub fn chart_json() -> Result<String, TraceError> {
    serde_json::to_string(KANJI_CHART).map_err(|e| TraceError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_asset_known_and_unknown() {
        assert_eq!(resolve_asset("人"), Some("person"));
        assert_eq!(resolve_asset("母"), Some("mother"));
        assert_eq!(resolve_asset("犬"), None);
        assert_eq!(resolve_asset(""), None);
    }

    #[test]
    fn test_stroke_order_lookup() {
        let steps = stroke_order("人").unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0], "Draw the left diagonal stroke from top to bottom.");
        assert!(matches!(
            stroke_order("犬"),
            Err(TraceError::UnknownStrokeOrder { .. })
        ));
    }

    #[test]
    fn test_stroke_order_fallback() {
        assert_eq!(stroke_order_or_fallback("犬"), vec![STROKE_ORDER_FALLBACK]);
        assert_eq!(stroke_order_or_fallback("木").len(), 4);
    }

    #[test]
    fn test_meaning_is_capitalized_asset_name() {
        assert_eq!(meaning_for("人"), "Person");
        assert_eq!(meaning_for("日"), "Day");
        assert_eq!(meaning_for("足"), "Foot");
        assert_eq!(meaning_for("犬"), "Unknown");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("person"), "Person");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_record_for() {
        let r = record_for("山").unwrap();
        assert_eq!(r.romaji, "yama");
        assert!(record_for("犬").is_none());
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn test_chart_json_lists_every_record() {
        let json = chart_json().unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains(r#""glyph":"人""#));
        assert_eq!(json.matches(r#""romaji""#).count(), KANJI_CHART.len());
    }
}
