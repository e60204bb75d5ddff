//! "Want some music?": pick a track or continue in silence.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use web_sys::HtmlElement;

use super::{Callback, Mount};
use crate::dom;
use crate::error::Result;
use crate::tracks::{TRACKS, TrackId};

/// Local highlight; nothing leaves the screen until a completion button.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MusicChoice {
    selected: Option<TrackId>,
}

impl MusicChoice {
    pub fn select(&mut self, id: TrackId) {
        self.selected = Some(id);
    }

    pub fn selected(&self) -> Option<TrackId> {
        self.selected
    }

    /// "Play & Continue" is only offered once something is highlighted.
    pub fn can_continue(&self) -> bool {
        self.selected.is_some()
    }
}

const ROW: &str = "width:100%; padding:16px; border-radius:14px; border:2px solid; display:flex; align-items:center; gap:16px; cursor:pointer; margin-bottom:12px; transition:all 0.3s; text-align:left; background:#fff;";

fn row_style(active: bool, index: usize) -> String {
    let (border, bg) = if active {
        ("#f43f5e", "rgba(244,63,94,0.10)")
    } else {
        ("rgba(244,63,94,0.2)", "#fff")
    };
    format!(
        "{ROW} border-color:{border}; background:{bg}; animation:vc-slide-up 0.5s ease-out both; animation-delay:{:.1}s;",
        0.1 * index as f64
    )
}

pub fn mount(m: &mut Mount<'_>, on_complete: Callback<Option<TrackId>>) -> Result<()> {
    let page = m.page("")?;
    m.floating_hearts(&page, 12, 0.2)?;
    let col = m.column(&page, 448)?;

    dom::child(m.doc, &col, "div", "font-size:48px; margin-bottom:24px;", Some("🎵"))?;
    dom::child(m.doc, &col, "h1", dom::TITLE, Some("Want some music?"))?;

    let choice = Rc::new(RefCell::new(MusicChoice::default()));
    let list = dom::child(m.doc, &col, "div", "margin-bottom:32px;", None)?;

    let proceed = dom::el(
        m.doc,
        "button",
        &format!("{} width:100%;", dom::BUTTON),
        Some("Play & Continue 🎶"),
    )?;
    dom::set_shown(&proceed, false);

    let mut rows: Vec<(TrackId, HtmlElement, HtmlElement)> = Vec::with_capacity(TRACKS.len());
    for (i, t) in TRACKS.iter().enumerate() {
        let row = dom::child(m.doc, &list, "button", &row_style(false, i), None)?;
        dom::child(
            m.doc,
            &row,
            "span",
            "width:40px; height:40px; border-radius:50%; background:#fde2e7; display:flex; align-items:center; justify-content:center;",
            Some("♪"),
        )?;
        let text = dom::child(m.doc, &row, "div", "", None)?;
        dom::child(m.doc, &text, "p", "margin:0; font-weight:600;", Some(t.title))?;
        dom::child(m.doc, &text, "p", &format!("{} margin:0; font-size:14px; text-align:left;", dom::MUTED), Some(t.artist))?;
        let mark = dom::child(m.doc, &row, "span", "margin-left:auto; color:#f43f5e; font-size:20px;", Some("♥"))?;
        dom::set_shown(&mark, false);
        rows.push((t.id, row, mark));
    }
    let rows = Rc::new(rows);

    for (id, row, _) in rows.iter() {
        let id = *id;
        let choice = choice.clone();
        let rows_cb = rows.clone();
        let proceed = proceed.clone();
        dom::on_click(row, move || {
            choice.borrow_mut().select(id);
            debug!(track = %id, "music highlighted");
            for (i, (rid, r, mark)) in rows_cb.iter().enumerate() {
                let active = *rid == id;
                dom::set_style(r, &row_style(active, i));
                dom::set_shown(mark, active);
            }
            dom::set_shown(&proceed, true);
        })?;
    }

    let actions = dom::child(m.doc, &col, "div", "display:flex; flex-direction:column; gap:12px;", None)?;
    actions.append_child(&proceed)?;
    {
        let choice = choice.clone();
        let on_complete = on_complete.clone();
        dom::on_click(&proceed, move || {
            let picked = choice.borrow().selected();
            if picked.is_some() {
                on_complete(picked);
            }
        })?;
    }
    let silent = dom::child(
        m.doc,
        &actions,
        "button",
        &format!("{} background:none; border:none; padding:12px; font-size:14px; cursor:pointer;", dom::MUTED),
        Some("No music"),
    )?;
    dom::on_click(&silent, move || on_complete(None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continue_requires_a_highlight() {
        let mut c = MusicChoice::default();
        assert!(!c.can_continue());
        c.select(TrackId::Montreal);
        c.select(TrackId::KissLand);
        assert!(c.can_continue());
        assert_eq!(c.selected(), Some(TrackId::KissLand));
    }

    #[test]
    fn rows_stagger_and_highlight() {
        assert!(row_style(true, 0).contains("border-color:#f43f5e"));
        assert!(row_style(false, 2).contains("animation-delay:0.2s"));
    }
}
