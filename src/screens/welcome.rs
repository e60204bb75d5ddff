//! Opening page: greeting and a start button.

use super::{Callback, Mount};
use crate::dom;
use crate::error::Result;

pub fn mount(m: &mut Mount<'_>, on_start: Callback) -> Result<()> {
    let page = m.page("")?;
    m.floating_hearts(&page, 15, 0.3)?;
    let col = m.column(&page, 560)?;

    dom::child(m.doc, &col, "div", "font-size:60px; margin-bottom:32px;", Some("💕"))?;
    dom::child(m.doc, &col, "h1", dom::TITLE, Some(&m.config.greeting))?;
    dom::child(
        m.doc,
        &col,
        "p",
        &format!("{} font-size:22px; margin-bottom:64px;", dom::MUTED),
        Some(&m.config.subtitle),
    )?;
    let start = dom::child(
        m.doc,
        &col,
        "button",
        &format!("{} animation-delay:0.3s;", dom::BUTTON),
        Some("Start 💖"),
    )?;
    dom::on_click(&start, move || on_start(()))
}
