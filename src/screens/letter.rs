//! Sealed envelope that opens into the love letter.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use super::{Callback, Mount};
use crate::dom;
use crate::error::Result;

pub fn mount(m: &mut Mount<'_>, on_complete: Callback) -> Result<()> {
    let doc = m.doc;
    let page = m.page("")?;
    m.floating_hearts(&page, 10, 0.15)?;
    let col = m.column(&page, 600)?;

    let envelope = dom::child(
        doc,
        &col,
        "button",
        "background:none; border:none; cursor:pointer; font-size:120px; animation:vc-float 3s ease-in-out infinite;",
        Some("💌"),
    )?;
    let hint = dom::child(doc, &col, "p", dom::MUTED, Some("Tap to open your letter"))?;

    let paper = dom::child(
        doc,
        &col,
        "div",
        "background:#fffdf8; border-radius:18px; padding:40px 32px; box-shadow:0 20px 40px rgba(190,18,60,0.12); text-align:left; animation:vc-bounce-in 0.6s ease-out both;",
        None,
    )?;
    dom::set_shown(&paper, false);
    for (i, line) in m.config.letter.iter().enumerate() {
        let style = if i == 0 {
            "font-family:'Dancing Script', cursive; font-size:30px; color:#be123c; margin:0 0 20px 0;"
        } else {
            "font-size:18px; line-height:1.8; margin:0 0 16px 0;"
        };
        dom::child(doc, &paper, "p", style, Some(line))?;
    }
    dom::child(
        doc,
        &paper,
        "p",
        "font-family:'Dancing Script', cursive; font-size:26px; color:#be123c; text-align:right; margin-top:32px;",
        Some(&format!("{} 💖", m.config.signature)),
    )?;
    let next = dom::child(doc, &col, "button", &format!("{} margin-top:32px;", dom::BUTTON), Some("Continue 💝"))?;
    dom::set_shown(&next, false);

    let opened = Rc::new(Cell::new(false));
    {
        let envelope_el = envelope.clone();
        let next = next.clone();
        dom::on_click(&envelope, move || {
            if opened.replace(true) {
                return;
            }
            debug!("letter opened");
            dom::set_shown(&envelope_el, false);
            dom::set_shown(&hint, false);
            dom::set_shown(&paper, true);
            dom::set_shown(&next, true);
        })?;
    }
    dom::on_click(&next, move || on_complete(()))
}
