//! Finale: a bouquet and a closing note. Terminal, takes no callbacks.

use super::Mount;
use crate::decor::FLOWER_EMOJIS;
use crate::dom;
use crate::error::Result;

const BOUQUET_SIZE: usize = 18;

pub fn mount(m: &mut Mount<'_>) -> Result<()> {
    let doc = m.doc;
    let page = m.page(" background:linear-gradient(180deg,#fff5f7,#ffe4ec);")?;

    let field = dom::child(doc, &page, "div", "position:absolute; inset:0; pointer-events:none; overflow:hidden;", None)?;
    for _ in 0..BOUQUET_SIZE {
        let f = m.rng.floater();
        let glyph = m.rng.pick(FLOWER_EMOJIS);
        dom::child(
            doc,
            &field,
            "div",
            &format!(
                "position:absolute; left:{:.1}%; top:{:.1}%; font-size:{:.0}px; animation:vc-float 4s ease-in-out infinite; animation-delay:{:.2}s;",
                f.left_pct, f.top_pct, f.size_px, f.delay_s
            ),
            Some(glyph),
        )?;
    }

    let col = m.column(&page, 560)?;
    dom::child(doc, &col, "div", "font-size:96px; margin-bottom:24px; animation:vc-bounce-in 0.8s ease-out both;", Some("💐"))?;
    dom::child(doc, &col, "h1", dom::TITLE, Some("These are for you"))?;
    dom::child(
        doc,
        &col,
        "p",
        "font-family:'Dancing Script', cursive; font-size:26px; color:#f43f5e; margin:0 0 12px 0;",
        Some("Happy Valentine's Day, my love 🌹"),
    )?;
    dom::child(doc, &col, "p", &format!("{} font-size:18px;", dom::MUTED), Some(&m.config.signature))?;
    Ok(())
}
