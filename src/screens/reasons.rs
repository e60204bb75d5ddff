//! "Reasons I Love You": tap each card to reveal it; the letter button appears
//! once all are open.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use super::{Callback, Mount};
use crate::dom;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Reveal {
    revealed: Vec<bool>,
}

impl Reveal {
    pub fn new(total: usize) -> Self {
        Self { revealed: vec![false; total] }
    }

    /// Returns true only the first time `index` is revealed.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    pub fn total(&self) -> usize {
        self.revealed.len()
    }

    pub fn all_revealed(&self) -> bool {
        self.count() == self.total()
    }

    pub fn progress_label(&self) -> String {
        format!("{} of {} revealed", self.count(), self.total())
    }
}

fn card_style(revealed: bool) -> String {
    format!(
        "background:#fff; border-radius:18px; padding:24px; cursor:pointer; box-shadow:0 2px 8px rgba(0,0,0,0.06); display:flex; flex-direction:column; align-items:center; text-align:center; transition:all 0.3s; min-height:{}px;",
        if revealed { 200 } else { 140 }
    )
}

pub fn mount(m: &mut Mount<'_>, on_complete: Callback) -> Result<()> {
    let doc = m.doc;
    let page = m.page(" justify-content:flex-start; padding:48px 16px;")?;
    let col = dom::child(doc, &page, "div", "width:100%; max-width:1024px; margin:0 auto;", None)?;

    let frame = dom::child(
        doc,
        &col,
        "div",
        "width:176px; height:176px; margin:0 auto 24px auto; border-radius:50%; border:4px solid #f43f5e; overflow:hidden; animation:vc-float 3s ease-in-out infinite;",
        None,
    )?;
    dom::img(doc, &frame, &m.config.assets.cat_flower, "Cute cat with flower", "width:100%; height:100%; object-fit:cover;")?;
    dom::child(doc, &col, "h1", &format!("{} margin-bottom:40px;", dom::TITLE), Some("Reasons I Love You"))?;

    let grid = dom::child(
        doc,
        &col,
        "div",
        "display:grid; grid-template-columns:repeat(auto-fit, minmax(260px, 1fr)); gap:20px;",
        None,
    )?;

    let footer = dom::child(doc, &col, "div", "margin-top:40px; text-align:center;", None)?;
    let progress = dom::child(doc, &footer, "p", dom::MUTED, None)?;
    let open_letter = dom::child(doc, &footer, "button", dom::BUTTON, Some("💌 Open Your Letter"))?;
    dom::set_shown(&open_letter, false);

    let state = Rc::new(RefCell::new(Reveal::new(m.config.reasons.len())));
    progress.set_text_content(Some(&state.borrow().progress_label()));

    for (i, reason) in m.config.reasons.iter().enumerate() {
        let card = dom::child(doc, &grid, "div", &card_style(false), None)?;
        let icon = dom::child(doc, &card, "div", "font-size:32px; margin-bottom:12px; color:rgba(244,63,94,0.5);", Some("♡"))?;
        dom::child(doc, &card, "h3", "font-size:20px; font-weight:600; margin:0 0 8px 0;", Some(&reason.title))?;
        let body = dom::child(doc, &card, "p", &format!("{} font-size:14px; line-height:1.6; margin-top:8px; animation:vc-slide-up 0.5s ease-out both;", dom::MUTED), Some(&reason.content))?;
        dom::set_shown(&body, false);
        let hint = dom::child(doc, &card, "p", "color:rgba(159,122,136,0.6); font-size:12px; font-style:italic; margin-top:8px;", Some("Tap to reveal"))?;

        let state = state.clone();
        let progress = progress.clone();
        let open_letter = open_letter.clone();
        let card_el = card.clone();
        dom::on_click(&card, move || {
            let mut st = state.borrow_mut();
            if !st.reveal(i) {
                return;
            }
            debug!(card = i, revealed = st.count(), "reason revealed");
            dom::set_style(&card_el, &card_style(true));
            dom::set_style(&icon, "font-size:32px; margin-bottom:12px; color:#f43f5e;");
            icon.set_text_content(Some("♥"));
            dom::set_shown(&body, true);
            dom::set_shown(&hint, false);
            let done = st.all_revealed();
            progress.set_text_content(Some(&st.progress_label()));
            dom::set_shown(&progress, !done);
            dom::set_shown(&open_letter, done);
        })?;
    }

    dom::on_click(&open_letter, move || on_complete(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_idempotent() {
        let mut r = Reveal::new(3);
        assert!(r.reveal(1));
        assert!(!r.reveal(1));
        assert_eq!(r.count(), 1);
        assert!(r.is_revealed(1));
        assert!(!r.is_revealed(0));
        assert_eq!(r.progress_label(), "1 of 3 revealed");
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut r = Reveal::new(2);
        assert!(!r.reveal(5));
        assert!(!r.is_revealed(5));
        assert_eq!(r.count(), 0);
    }

    #[test]
    fn all_revealed_in_any_order() {
        let mut r = Reveal::new(6);
        for i in [5, 0, 3, 1, 4] {
            r.reveal(i);
            assert!(!r.all_revealed());
        }
        r.reveal(2);
        assert!(r.all_revealed());
    }
}
