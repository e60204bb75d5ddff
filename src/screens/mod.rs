//! Presentation units, one per [`Screen`](crate::flow::Screen).
//!
//! Each unit owns its interaction state (a plain struct, tested on the host) and a
//! `mount` function that builds its DOM under the stage element. The only channel
//! back to the card is the callback(s) passed to `mount`; handlers must release
//! any local `RefCell` borrow before invoking them, because the card re-renders
//! synchronously.

use std::rc::Rc;

use web_sys::{Document, HtmlElement};

use crate::config::CardConfig;
use crate::decor::DecorRng;
use crate::dom;
use crate::error::Result;

pub mod flowers;
pub mod heart_fill;
pub mod letter;
pub mod music_select;
pub mod question;
pub mod reasons;
pub mod welcome;

/// Callback handed from the card to a presentation unit.
pub type Callback<T = ()> = Rc<dyn Fn(T)>;

/// What a unit gets to build itself.
pub struct Mount<'a> {
    pub doc: &'a Document,
    pub stage: &'a HtmlElement,
    pub config: &'a Rc<CardConfig>,
    pub rng: &'a mut DecorRng,
}

impl Mount<'_> {
    /// Full-page container appended to the stage.
    pub fn page(&self, extra_style: &str) -> Result<HtmlElement> {
        dom::child(
            self.doc,
            self.stage,
            "div",
            &format!("{}{}", dom::PAGE, extra_style),
            None,
        )
    }

    /// Background layer of drifting hearts.
    pub fn floating_hearts(&mut self, page: &HtmlElement, count: usize, opacity: f64) -> Result<()> {
        let layer = dom::child(
            self.doc,
            page,
            "div",
            "position:absolute; inset:0; pointer-events:none; overflow:hidden;",
            None,
        )?;
        for _ in 0..count {
            let f = self.rng.floater();
            dom::child(self.doc, &layer, "div", &f.style(opacity), Some("♥"))?;
        }
        Ok(())
    }

    /// Centered foreground column.
    pub fn column(&self, page: &HtmlElement, max_width_px: u32) -> Result<HtmlElement> {
        dom::child(
            self.doc,
            page,
            "div",
            &format!(
                "position:relative; z-index:10; text-align:center; width:100%; max-width:{max_width_px}px; animation:vc-slide-up 0.6s ease-out both;"
            ),
            None,
        )
    }
}
