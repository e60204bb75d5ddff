//! "Will you be my Valentine?" with an evasive No button.
//!
//! No → "Are you sure?" → Try again brings the question back with a bigger Yes
//! and a displaced No, until No gives up entirely. Yes → celebration, whose
//! button asks the card for the flowers page. None of this changes the screen.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use web_sys::HtmlElement;

use super::{Callback, Mount};
use crate::decor::{DecorRng, HEART_EMOJIS};
use crate::dom;
use crate::error::Result;

/// Which of the three local views is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Asking,
    AreYouSure,
    Celebrating,
}

#[derive(Debug, Clone)]
pub struct Question {
    view: View,
    no_clicks: u32,
    max_no: u32,
    no_offset: (f64, f64),
}

impl Question {
    pub fn new(max_no: u32) -> Self {
        Self { view: View::Asking, no_clicks: 0, max_no, no_offset: (0.0, 0.0) }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn no_clicks(&self) -> u32 {
        self.no_clicks
    }

    pub fn no_offset(&self) -> (f64, f64) {
        self.no_offset
    }

    pub fn yes(&mut self) {
        self.view = View::Celebrating;
    }

    pub fn no(&mut self) {
        if self.view == View::Asking && self.no_visible() {
            self.view = View::AreYouSure;
        }
    }

    /// Back to the question with the No button moved somewhere else.
    pub fn try_again(&mut self, rng: &mut DecorRng) {
        if self.view != View::AreYouSure {
            return;
        }
        self.view = View::Asking;
        self.no_clicks += 1;
        self.no_offset = (rng.range(-100.0, 100.0), rng.range(-50.0, 50.0));
    }

    pub fn no_visible(&self) -> bool {
        self.no_clicks < self.max_no
    }

    pub fn yes_scale(&self) -> f64 {
        1.0 + self.no_clicks as f64 * 0.2
    }

    pub fn yes_padding_px(&self) -> u32 {
        16 + self.no_clicks * 6
    }

    pub fn yes_font_px(&self) -> u32 {
        18 + self.no_clicks * 3
    }

    fn yes_style(&self) -> String {
        let pad = self.yes_padding_px();
        format!(
            "{} font-weight:700; transition:all 0.3s; transform:scale({}); padding:{}px {}px; font-size:{}px;",
            dom::BUTTON,
            self.yes_scale(),
            pad,
            pad * 2,
            self.yes_font_px()
        )
    }

    fn no_style(&self) -> String {
        let (x, y) = self.no_offset;
        format!(
            "padding:12px 24px; border-radius:9999px; font-weight:600; border:none; cursor:pointer; color:#9f7a88; background:#fde2e7; transition:all 0.3s; transform:translate({x:.0}px, {y:.0}px);"
        )
    }
}

struct Views {
    asking: HtmlElement,
    unsure: HtmlElement,
    celebrating: HtmlElement,
    yes: HtmlElement,
    no: HtmlElement,
}

impl Views {
    fn show(&self, q: &Question) {
        dom::set_shown(&self.asking, q.view() == View::Asking);
        dom::set_shown(&self.unsure, q.view() == View::AreYouSure);
        dom::set_shown(&self.celebrating, q.view() == View::Celebrating);
        dom::set_style(&self.yes, &q.yes_style());
        dom::set_style(&self.no, &q.no_style());
        dom::set_shown(&self.no, q.no_visible());
    }
}

const GIF: &str = "width:224px; height:224px; margin:0 auto 24px auto; display:block; border-radius:18px; object-fit:contain;";

pub fn mount(m: &mut Mount<'_>, on_flowers: Callback) -> Result<()> {
    let doc = m.doc;
    let config = m.config.clone();
    let assets = &config.assets;

    // Asking
    let asking = m.page("")?;
    let col = dom::child(doc, &asking, "div", "text-align:center; max-width:512px;", None)?;
    dom::img(doc, &col, &assets.cat_gun, "Cat", &format!("{GIF} animation:vc-float 3s ease-in-out infinite;"))?;
    dom::child(doc, &col, "h1", &format!("{} margin-bottom:48px;", dom::TITLE), Some("Will you be my Valentine? 💝"))?;
    let buttons = dom::child(doc, &col, "div", "display:flex; flex-wrap:wrap; justify-content:center; align-items:center; gap:24px; min-height:100px; position:relative;", None)?;
    let yes = dom::child(doc, &buttons, "button", "", Some("Yes! 💖"))?;
    let no = dom::child(doc, &buttons, "button", "", Some("No..."))?;

    // Are you sure?
    let unsure = m.page("")?;
    let col = dom::child(doc, &unsure, "div", "text-align:center; max-width:512px;", None)?;
    dom::img(doc, &col, &assets.crying, "Crying", &format!("{GIF} animation:vc-float 3s ease-in-out infinite;"))?;
    dom::child(doc, &col, "p", "font-family:'Dancing Script', cursive; font-size:30px; color:#f43f5e; margin-bottom:32px; animation:vc-bounce-in 0.5s ease-out both;", Some("Are you sure? 😢"))?;
    let again = dom::child(doc, &col, "button", &format!("{} font-weight:700;", dom::BUTTON), Some("Try again 💕"))?;

    // Celebration
    let celebrating = m.page("")?;
    celebration_hearts(m, &celebrating)?;
    let col = dom::child(doc, &celebrating, "div", "text-align:center; position:relative; z-index:10; animation:vc-bounce-in 0.6s ease-out both;", None)?;
    dom::img(doc, &col, &assets.cat_kiss, "Cat kiss", GIF)?;
    dom::img(doc, &col, &assets.celebration, "Celebration", "width:192px; height:192px; margin:0 auto 24px auto; display:block; object-fit:contain;")?;
    dom::child(doc, &col, "h1", dom::TITLE, Some("Yipeeee!!! 🎉"))?;
    dom::child(doc, &col, "p", "font-family:'Dancing Script', cursive; font-size:24px; color:#f43f5e; margin-bottom:32px;", Some("I knew it! I love you so much! 💖💖💖"))?;
    let flowers = dom::child(doc, &col, "button", &format!("{} animation-delay:0.5s;", dom::BUTTON), Some("🌹 These are for you 🌹"))?;

    let state = Rc::new(RefCell::new(Question::new(config.max_no_attempts)));
    let views = Rc::new(Views { asking, unsure, celebrating, yes: yes.clone(), no: no.clone() });
    views.show(&state.borrow());

    {
        let (state, views) = (state.clone(), views.clone());
        dom::on_click(&yes, move || {
            let mut q = state.borrow_mut();
            q.yes();
            debug!(no_clicks = q.no_clicks(), "valentine accepted");
            views.show(&q);
        })?;
    }
    {
        let (state, views) = (state.clone(), views.clone());
        dom::on_click(&no, move || {
            let mut q = state.borrow_mut();
            q.no();
            views.show(&q);
        })?;
    }
    {
        let (state, views) = (state.clone(), views.clone());
        let mut rng = DecorRng::new(m.rng.next_u32() as u64);
        dom::on_click(&again, move || {
            let mut q = state.borrow_mut();
            q.try_again(&mut rng);
            debug!(no_clicks = q.no_clicks(), "no button dodged");
            views.show(&q);
        })?;
    }
    dom::on_click(&flowers, move || on_flowers(()))
}

/// Hearts bobbing along the four edges of the celebration view.
fn celebration_hearts(m: &mut Mount<'_>, page: &HtmlElement) -> Result<()> {
    let layer = dom::child(m.doc, page, "div", "position:absolute; inset:0; pointer-events:none;", None)?;
    let mut placements: Vec<String> = Vec::with_capacity(20);
    for i in 0..6 {
        placements.push(format!("left:{:.1}%; top:{}%;", m.rng.range(0.0, 15.0), 10 + i * 15));
        placements.push(format!("right:{:.1}%; top:{}%;", m.rng.range(0.0, 15.0), 10 + i * 15));
    }
    for i in 0..4 {
        placements.push(format!("left:{}%; top:{:.1}%;", 20 + i * 20, m.rng.range(0.0, 10.0)));
        placements.push(format!("left:{}%; bottom:{:.1}%;", 20 + i * 20, m.rng.range(0.0, 10.0)));
    }
    for at in placements {
        let style = format!(
            "position:absolute; {at} animation:vc-float {:.2}s ease-in-out infinite; animation-delay:{:.2}s; font-size:{:.0}px;",
            m.rng.range(2.0, 4.0),
            m.rng.range(0.0, 2.0),
            m.rng.range(25.0, 50.0)
        );
        let glyph = m.rng.pick(HEART_EMOJIS);
        dom::child(m.doc, &layer, "div", &style, Some(glyph))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_loop_grows_yes_and_hides_no() {
        let mut rng = DecorRng::new(1);
        let mut q = Question::new(3);
        for n in 1..=3 {
            q.no();
            assert_eq!(q.view(), View::AreYouSure);
            q.try_again(&mut rng);
            assert_eq!(q.view(), View::Asking);
            assert_eq!(q.no_clicks(), n);
        }
        assert!(!q.no_visible());
        assert!((q.yes_scale() - 1.6).abs() < 1e-9);
        assert_eq!(q.yes_padding_px(), 34);
        assert_eq!(q.yes_font_px(), 27);
        // No button is gone; pressing it does nothing.
        q.no();
        assert_eq!(q.view(), View::Asking);
    }

    #[test]
    fn dodge_offset_within_bounds() {
        let mut rng = DecorRng::new(99);
        let mut q = Question::new(100);
        for _ in 0..50 {
            q.no();
            q.try_again(&mut rng);
            let (x, y) = q.no_offset();
            assert!((-100.0..100.0).contains(&x));
            assert!((-50.0..50.0).contains(&y));
        }
    }

    #[test]
    fn try_again_only_from_are_you_sure() {
        let mut rng = DecorRng::new(5);
        let mut q = Question::new(3);
        q.try_again(&mut rng);
        assert_eq!(q.no_clicks(), 0);
        q.yes();
        assert_eq!(q.view(), View::Celebrating);
    }

    #[test]
    fn initial_yes_style() {
        let q = Question::new(3);
        let s = q.yes_style();
        assert!(s.contains("transform:scale(1)"));
        assert!(s.contains("padding:16px 32px"));
        assert!(s.contains("font-size:18px"));
    }
}
