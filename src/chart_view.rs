//! Chart page: one button card per kanji record, five to a row.

use gloo::events::EventListener;
use web_sys::{Element, HtmlButtonElement};

use crate::app;
use crate::dom;
use crate::error::TraceError;
use crate::kanji::CharacterRecord;
use crate::route::Route;

pub fn card_label(record: &CharacterRecord) -> String {
    format!("{} - {}", record.glyph, record.meaning)
}

/// Route a card selection leads to. Any glyph yields a valid trace route.
pub fn selection_route(record: &CharacterRecord) -> Route {
    Route::Trace(record.glyph.to_string())
}

pub fn select_character(record: &CharacterRecord) {
    app::navigate(selection_route(record));
}

pub struct ChartView {
    _listeners: Vec<EventListener>,
}

impl ChartView {
    pub fn mount(root: &Element, records: &'static [CharacterRecord]) -> Result<Self, TraceError> {
        let doc = dom::document()?;
        let page = dom::element(&doc, "div", "kt-chart", None)?;
        page.append_child(&*dom::element(&doc, "h1", "", Some("Kanji Chart"))?)?;
        let grid = dom::element(&doc, "div", "kt-grid", None)?;
        let mut listeners = Vec::with_capacity(records.len());
        for record in records {
            let card: HtmlButtonElement = dom::typed_element(&doc, "button", "kt-card")?;
            card.set_attribute("aria-label", &card_label(record))?;
            card.append_child(&*dom::element(&doc, "div", "kt-card-glyph", Some(record.glyph))?)?;
            let row = dom::element(&doc, "div", "kt-card-row", None)?;
            let romaji = dom::element(&doc, "span", "kt-romaji", None)?;
            romaji.append_child(&*dom::element(&doc, "i", "", Some(record.romaji))?)?;
            row.append_child(&romaji)?;
            row.append_child(&*dom::element(&doc, "span", "kt-hiragana", Some(record.hiragana))?)?;
            row.append_child(&*dom::element(&doc, "span", "kt-meaning", Some(record.meaning))?)?;
            card.append_child(&row)?;
            grid.append_child(&card)?;
            listeners.push(EventListener::new(&card, "click", move |_| {
                select_character(record);
            }));
        }
        page.append_child(&grid)?;
        root.append_child(&page)?;
        Ok(Self {
            _listeners: listeners,
        })
    }
}
