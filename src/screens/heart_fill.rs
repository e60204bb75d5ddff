//! Tap-to-fill heart with a secret code gate.
//!
//! Every tap adds `fill_step` percent (clamped at 100) and spawns a short-lived
//! emoji at the tap point. Reaching 100 opens the code popup after a short
//! delay; while it is open taps are ignored. Only the matching code completes
//! the screen.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, KeyboardEvent, MouseEvent};

use super::{Callback, Mount};
use crate::decor::{DecorRng, HEART_EMOJIS};
use crate::dom;
use crate::error::{CardError, Result};

const POPUP_DELAY_MS: i32 = 500;
const CODE_ERROR_MS: i32 = 2_000;
const EMOJI_LIFETIME_MS: i32 = 1_000;

/// Outcome of a single tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tap {
    /// Popup is open; the tap did nothing.
    Ignored,
    Filling,
    /// This tap brought the heart to 100%. Reported once.
    Filled,
}

#[derive(Debug, Clone)]
pub struct HeartFill {
    percent: u8,
    taps: u32,
    step: u8,
    filled_reported: bool,
    popup_open: bool,
}

impl HeartFill {
    pub fn new(step: u8) -> Self {
        Self { percent: 0, taps: 0, step: step.clamp(1, 100), filled_reported: false, popup_open: false }
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn taps(&self) -> u32 {
        self.taps
    }

    pub fn popup_open(&self) -> bool {
        self.popup_open
    }

    pub fn tap(&mut self) -> Tap {
        if self.popup_open {
            return Tap::Ignored;
        }
        self.taps += 1;
        self.percent = self.percent.saturating_add(self.step).min(100);
        if self.percent == 100 && !self.filled_reported {
            self.filled_reported = true;
            Tap::Filled
        } else {
            Tap::Filling
        }
    }

    pub fn open_popup(&mut self) {
        self.popup_open = true;
    }

    pub fn progress_label(&self) -> String {
        format!("{}% filled • {} taps", self.percent, self.taps)
    }
}

/// Case-insensitive comparison after trimming both sides.
pub fn code_matches(input: &str, secret: &str) -> bool {
    input.trim().to_lowercase() == secret.trim().to_lowercase()
}

const HEART_PATH: &str = "M50 88 C20 60, 5 40, 15 25 C25 10, 40 10, 50 25 C60 10, 75 10, 85 25 C95 40, 80 60, 50 88 Z";

fn heart_svg() -> String {
    format!(
        r#"<svg viewBox="0 0 100 100" style="width:288px; height:288px; filter:drop-shadow(0 10px 30px rgba(236,72,153,0.3));">
  <defs>
    <linearGradient id="vc-empty" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="hsl(350,30%,90%)"/><stop offset="100%" stop-color="hsl(350,30%,85%)"/>
    </linearGradient>
    <linearGradient id="vc-fill" x1="0%" y1="100%" x2="0%" y2="0%">
      <stop offset="0%" stop-color="hsl(350,90%,55%)"/><stop offset="50%" stop-color="hsl(350,85%,65%)"/><stop offset="100%" stop-color="hsl(340,90%,70%)"/>
    </linearGradient>
    <clipPath id="vc-heart-clip"><path d="{HEART_PATH}"/></clipPath>
  </defs>
  <path d="{HEART_PATH}" fill="url(#vc-empty)" stroke="hsl(350,50%,75%)" stroke-width="2"/>
  <g clip-path="url(#vc-heart-clip)"><rect id="vc-heart-level" x="0" y="100" width="100" height="0" fill="url(#vc-fill)" style="transition:all 0.1s;"/></g>
  <path d="{HEART_PATH}" fill="none" stroke="hsl(350,60%,65%)" stroke-width="3"/>
</svg>"#
    )
}

/// DOM handles touched after mount.
struct Parts {
    heart: Element,
    level: Element,
    bar: Element,
    label: Element,
    popup: web_sys::HtmlElement,
    input: HtmlInputElement,
    error: web_sys::HtmlElement,
}

impl Parts {
    fn show_progress(&self, st: &HeartFill) {
        let p = st.percent();
        self.level.set_attribute("y", &(100 - p as u32).to_string()).ok();
        self.level.set_attribute("height", &p.to_string()).ok();
        dom::set_style(
            &self.bar,
            &format!("height:100%; width:{p}%; border-radius:9999px; background:linear-gradient(90deg,#f43f5e,#ec4899); transition:width 0.15s;"),
        );
        self.label.set_text_content(Some(&st.progress_label()));
    }
}

pub fn mount(m: &mut Mount<'_>, on_complete: Callback) -> Result<()> {
    let page = m.page("")?;
    m.floating_hearts(&page, 12, 0.2)?;
    let doc = m.doc;

    dom::child(doc, &page, "h1", dom::TITLE, Some("Tap to fill"))?;
    dom::child(doc, &page, "p", &format!("{} margin:0 0 16px 0;", dom::MUTED), Some("Keep tapping! 💕"))?;
    dom::child(
        doc,
        &page,
        "p",
        "font-size:14px; font-style:italic; color:rgba(225,29,72,0.7); margin:0 0 24px 0;",
        Some(&format!("remember this: {}", m.config.secret_code)),
    )?;

    let heart = dom::child(doc, &page, "div", "position:relative; cursor:pointer; user-select:none; z-index:10;", None)?;
    heart.set_inner_html(&heart_svg());
    let level = doc
        .get_element_by_id("vc-heart-level")
        .ok_or_else(|| CardError::Dom("heart level rect missing".into()))?;

    let progress = dom::child(doc, &page, "div", "margin-top:32px; display:flex; flex-direction:column; align-items:center; gap:8px; z-index:10;", None)?;
    let track = dom::child(doc, &progress, "div", "width:192px; height:12px; background:#fde2e7; border-radius:9999px; overflow:hidden;", None)?;
    let bar = dom::child(doc, &track, "div", "", None)?;
    let label = dom::child(doc, &progress, "span", &format!("{} font-size:14px; font-weight:500;", dom::MUTED), None)?;

    // Secret code popup, hidden until the heart is full.
    let popup = dom::child(
        doc,
        &page,
        "div",
        "position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(255,245,247,0.9); backdrop-filter:blur(4px); z-index:20; animation:vc-bounce-in 0.5s ease-out both;",
        None,
    )?;
    dom::set_shown(&popup, false);
    let card = dom::child(doc, &popup, "div", "text-align:center; background:#fff; padding:32px; border-radius:18px; box-shadow:0 20px 40px rgba(0,0,0,0.12); max-width:360px; margin:0 16px;", None)?;
    dom::child(doc, &card, "span", "font-size:48px; display:block; margin-bottom:16px;", Some("💖"))?;
    dom::child(doc, &card, "h2", &format!("{} font-size:28px;", dom::TITLE), Some("Good job beautiful"))?;
    dom::child(doc, &card, "p", &format!("{} margin-bottom:24px;", dom::MUTED), Some("Enter the secret code to continue"))?;
    let input: HtmlInputElement = dom::child(
        doc,
        &card,
        "input",
        "width:100%; box-sizing:border-box; padding:12px 16px; border-radius:12px; border:2px solid rgba(244,63,94,0.3); text-align:center; font-size:18px; margin-bottom:16px; outline:none;",
        None,
    )?
    .dyn_into()
    .map_err(|_| CardError::Dom("code input is not an <input>".into()))?;
    input.set_type("text");
    input.set_placeholder("Secret code...");
    let error = dom::child(doc, &card, "p", "color:#dc2626; font-size:14px; margin-bottom:16px; animation:vc-bounce-in 0.4s ease-out both;", Some("Incorrect! Try again 💔"))?;
    dom::set_shown(&error, false);
    let submit = dom::child(doc, &card, "button", &format!("{} width:100%; padding:12px;", dom::BUTTON), Some("Enter"))?;

    let state = Rc::new(RefCell::new(HeartFill::new(m.config.fill_step)));
    let parts = Rc::new(Parts { heart: heart.clone().into(), level, bar: bar.into(), label: label.into(), popup, input, error });
    parts.show_progress(&state.borrow());

    // Taps
    {
        let state = state.clone();
        let parts = parts.clone();
        let mut rng = DecorRng::new(m.rng.next_u32() as u64);
        dom::listen(&heart, "click", move |evt| {
            let outcome = state.borrow_mut().tap();
            if outcome == Tap::Ignored {
                return;
            }
            parts.show_progress(&state.borrow());
            if let Some(me) = evt.dyn_ref::<MouseEvent>() {
                spawn_emoji(&parts.heart, me, rng.pick(HEART_EMOJIS));
            }
            if outcome == Tap::Filled {
                debug!(taps = state.borrow().taps(), "heart filled");
                let state = state.clone();
                let parts = parts.clone();
                dom::set_timeout(POPUP_DELAY_MS, move || {
                    state.borrow_mut().open_popup();
                    dom::set_shown(&parts.popup, true);
                    parts.input.focus().ok();
                });
            }
        })?;
    }

    // Code submission, by button or Enter.
    let check: Rc<dyn Fn()> = {
        let parts = parts.clone();
        let secret = m.config.secret_code.clone();
        Rc::new(move || {
            if code_matches(&parts.input.value(), &secret) {
                debug!("secret code accepted");
                on_complete(());
            } else {
                dom::set_shown(&parts.error, true);
                let parts = parts.clone();
                dom::set_timeout(CODE_ERROR_MS, move || dom::set_shown(&parts.error, false));
            }
        })
    };
    {
        let check = check.clone();
        dom::on_click(&submit, move || check())?;
    }
    dom::listen(&parts.input, "keydown", move |evt| {
        if evt.dyn_ref::<KeyboardEvent>().is_some_and(|k| k.key() == "Enter") {
            check();
        }
    })
}

fn spawn_emoji(container: &Element, evt: &MouseEvent, glyph: &str) {
    let Ok(doc) = dom::document() else { return };
    let rect = container.get_bounding_client_rect();
    let x = evt.client_x() as f64 - rect.left();
    let y = evt.client_y() as f64 - rect.top();
    let Ok(span) = dom::el(
        &doc,
        "span",
        &format!(
            "position:absolute; left:{:.0}px; top:{:.0}px; font-size:24px; pointer-events:none; animation:vc-float-up 1s ease-out forwards;",
            x - 12.0,
            y - 12.0
        ),
        Some(glyph),
    ) else {
        return;
    };
    if container.append_child(&span).is_ok() {
        dom::set_timeout(EMOJI_LIFETIME_MS, move || span.remove());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_in_steps_and_clamps() {
        let mut h = HeartFill::new(2);
        for _ in 0..49 {
            assert_eq!(h.tap(), Tap::Filling);
        }
        assert_eq!(h.percent(), 98);
        assert_eq!(h.tap(), Tap::Filled);
        assert_eq!(h.percent(), 100);
        // Taps before the popup opens still count, but never overflow.
        assert_eq!(h.tap(), Tap::Filling);
        assert_eq!(h.percent(), 100);
        assert_eq!(h.taps(), 51);
    }

    #[test]
    fn uneven_step_still_reaches_exactly_100() {
        let mut h = HeartFill::new(30);
        let outcomes: Vec<Tap> = (0..4).map(|_| h.tap()).collect();
        assert_eq!(outcomes.last(), Some(&Tap::Filled));
        assert_eq!(h.percent(), 100);
    }

    #[test]
    fn taps_ignored_while_popup_open() {
        let mut h = HeartFill::new(50);
        h.tap();
        h.tap();
        h.open_popup();
        assert_eq!(h.tap(), Tap::Ignored);
        assert_eq!(h.taps(), 2);
        assert_eq!(h.progress_label(), "100% filled • 2 taps");
    }

    #[test]
    fn code_is_case_and_space_insensitive() {
        assert!(code_matches("  I Love You ", "i love you"));
        assert!(code_matches("i love you", "I LOVE YOU"));
        assert!(!code_matches("i love u", "i love you"));
        assert!(!code_matches("", "i love you"));
    }

    #[test]
    fn svg_contains_level_rect() {
        let svg = heart_svg();
        assert!(svg.contains("id=\"vc-heart-level\""));
        assert_eq!(svg.matches(HEART_PATH).count(), 3);
    }
}
