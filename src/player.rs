//! Persistent background-music overlay.
//!
//! Mounted by the card once the music selection screen is behind us. It receives
//! the session's track and a `set_track` callback; picking from its list only
//! calls back, and the card answers with [`PlayerOverlay::sync`], which is the
//! single place audio is (re)started or stopped.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlAudioElement, HtmlElement, HtmlInputElement};

use crate::dom;
use crate::error::{CardError, Result};
use crate::screens::Callback;
use crate::tracks::{self, TRACKS, TrackId};

/// Overlay view state, independent of the DOM.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    track: Option<TrackId>,
    volume: u8,
    muted: bool,
    expanded: bool,
    list_open: bool,
}

impl PlayerState {
    pub fn new(track: Option<TrackId>, volume: u8) -> Self {
        Self { track, volume: volume.min(100), muted: false, expanded: false, list_open: false }
    }

    pub fn track(&self) -> Option<TrackId> {
        self.track
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn list_open(&self) -> bool {
        self.list_open
    }

    /// Adopt the session's track. Returns true when it actually changed.
    pub fn sync(&mut self, track: Option<TrackId>) -> bool {
        let changed = self.track != track;
        self.track = track;
        changed
    }

    /// Slider moved. Raising the volume above zero lifts a mute.
    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
        if self.volume > 0 && self.muted {
            self.muted = false;
        }
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn expand(&mut self) {
        self.expanded = true;
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
        self.list_open = false;
    }

    pub fn toggle_list(&mut self) {
        self.list_open = !self.list_open;
    }

    /// A list entry was picked: close the list and hand back what to emit.
    pub fn choose(&mut self, track: Option<TrackId>) -> Option<TrackId> {
        self.list_open = false;
        track
    }

    /// Volume as the media element expects it, 0.0..=1.0.
    pub fn effective_volume(&self) -> f64 {
        if self.muted { 0.0 } else { self.volume as f64 / 100.0 }
    }

    /// Value shown on the slider and its label.
    pub fn shown_volume(&self) -> u8 {
        if self.muted { 0 } else { self.volume }
    }

    /// Collapsed button pulses a note while something is audible.
    pub fn audible(&self) -> bool {
        self.track.is_some() && !self.muted && self.volume > 0
    }
}

struct Parts {
    collapsed: HtmlElement,
    note: HtmlElement,
    panel: HtmlElement,
    title: HtmlElement,
    chevron: HtmlElement,
    list: HtmlElement,
    entries: Vec<(Option<TrackId>, HtmlElement)>,
    volume_row: HtmlElement,
    mute: HtmlElement,
    slider: HtmlInputElement,
    pct: HtmlElement,
}

const ENTRY: &str = "display:block; width:100%; text-align:left; padding:8px 12px; border:none; border-radius:10px; font-size:14px; cursor:pointer; margin-bottom:4px;";

impl Parts {
    fn refresh(&self, st: &PlayerState) {
        dom::set_shown(&self.collapsed, !st.expanded());
        dom::set_shown(&self.note, st.audible());
        dom::set_shown(&self.panel, st.expanded());
        self.title.set_text_content(Some(tracks::label(st.track())));
        self.chevron
            .set_text_content(Some(if st.list_open() { "▴" } else { "▾" }));
        dom::set_shown(&self.list, st.list_open());
        for (id, entry) in &self.entries {
            let bg = if *id == st.track() {
                "background:rgba(244,63,94,0.2); color:#e11d48;"
            } else {
                "background:transparent; color:#3f1d2b;"
            };
            dom::set_style(entry, &format!("{ENTRY} {bg}"));
        }
        dom::set_shown(&self.volume_row, st.track().is_some());
        self.mute.set_text_content(Some(if st.muted() || st.volume() == 0 {
            "🔇"
        } else {
            "🔊"
        }));
        self.slider.set_value(&st.shown_volume().to_string());
        self.pct.set_text_content(Some(&format!("{}%", st.shown_volume())));
    }
}

pub struct PlayerOverlay {
    root: HtmlElement,
    state: Rc<RefCell<PlayerState>>,
    parts: Rc<Parts>,
    audio: Rc<RefCell<Option<HtmlAudioElement>>>,
    music_base: String,
}

impl PlayerOverlay {
    pub fn mount(
        doc: &Document,
        host: &HtmlElement,
        track: Option<TrackId>,
        volume: u8,
        music_base: &str,
        set_track: Callback<Option<TrackId>>,
    ) -> Result<Self> {
        let root = dom::child(doc, host, "div", "position:fixed; bottom:16px; right:16px; z-index:50;", None)?;
        root.set_id("vc-player");
        let shell = dom::child(
            doc,
            &root,
            "div",
            "background:rgba(255,255,255,0.95); backdrop-filter:blur(4px); border:1px solid rgba(244,63,94,0.2); border-radius:18px; box-shadow:0 10px 30px rgba(0,0,0,0.12); padding:12px;",
            None,
        )?;

        let collapsed = dom::child(doc, &shell, "button", "background:none; border:none; cursor:pointer; color:#f43f5e; font-size:20px; display:flex; align-items:center; gap:8px;", Some("🎵"))?;
        let note = dom::child(doc, &collapsed, "span", "font-size:12px; animation:vc-pulse 1.5s ease-in-out infinite;", Some("♪"))?;

        let panel = dom::child(doc, &shell, "div", "width:264px;", None)?;
        let header = dom::child(doc, &panel, "div", "display:flex; align-items:center; justify-content:space-between; margin-bottom:8px;", None)?;
        let picker = dom::child(doc, &header, "button", "background:none; border:none; cursor:pointer; display:flex; align-items:center; gap:8px; font-size:14px; font-weight:500;", None)?;
        dom::child(doc, &picker, "span", "color:#f43f5e;", Some("🎵"))?;
        let title = dom::child(doc, &picker, "span", "max-width:170px; overflow:hidden; text-overflow:ellipsis; white-space:nowrap;", None)?;
        let chevron = dom::child(doc, &picker, "span", dom::MUTED, None)?;
        let close = dom::child(doc, &header, "button", &format!("{} background:none; border:none; cursor:pointer; font-size:12px;", dom::MUTED), Some("✕"))?;

        let list = dom::child(doc, &panel, "div", "padding:8px 0; border-top:1px solid rgba(244,63,94,0.1);", None)?;
        let mut entries = Vec::with_capacity(TRACKS.len() + 1);
        for t in TRACKS {
            let entry = dom::child(doc, &list, "button", ENTRY, None)?;
            dom::child(doc, &entry, "p", "margin:0; font-weight:500;", Some(t.title))?;
            dom::child(doc, &entry, "p", &format!("{} margin:0; font-size:12px; text-align:left;", dom::MUTED), Some(t.artist))?;
            entries.push((Some(t.id), entry));
        }
        let silent = dom::child(doc, &list, "button", ENTRY, Some("No music"))?;
        entries.push((None, silent));

        let volume_row = dom::child(doc, &panel, "div", "display:flex; align-items:center; gap:12px;", None)?;
        let mute = dom::child(doc, &volume_row, "button", "background:none; border:none; cursor:pointer; font-size:18px;", None)?;
        let slider: HtmlInputElement = dom::child(doc, &volume_row, "input", "flex:1; accent-color:#f43f5e;", None)?
            .dyn_into()
            .map_err(|_| CardError::Dom("volume slider is not an <input>".into()))?;
        slider.set_type("range");
        slider.set_min("0");
        slider.set_max("100");
        slider.set_step("1");
        let pct = dom::child(doc, &volume_row, "span", &format!("{} font-size:12px; width:32px; text-align:right;", dom::MUTED), None)?;

        let parts = Rc::new(Parts {
            collapsed,
            note,
            panel,
            title,
            chevron,
            list,
            entries,
            volume_row,
            mute,
            slider,
            pct,
        });
        let state = Rc::new(RefCell::new(PlayerState::new(track, volume)));
        let overlay = Self {
            root,
            state,
            parts,
            audio: Rc::new(RefCell::new(None)),
            music_base: music_base.to_string(),
        };
        overlay.wire(&picker, &close, set_track)?;
        overlay.parts.refresh(&overlay.state.borrow());
        overlay.play(track);
        Ok(overlay)
    }

    fn wire(&self, picker: &HtmlElement, close: &HtmlElement, set_track: Callback<Option<TrackId>>) -> Result<()> {
        let parts = &self.parts;

        // Local-only interactions: mutate, then redraw.
        let local = |target: &HtmlElement, f: fn(&mut PlayerState)| -> Result<()> {
            let (state, parts, audio) = (self.state.clone(), self.parts.clone(), self.audio.clone());
            dom::on_click(target, move || {
                let mut st = state.borrow_mut();
                f(&mut st);
                parts.refresh(&st);
                apply_volume(&audio.borrow(), &st);
            })
        };
        local(&parts.collapsed, PlayerState::expand)?;
        local(close, PlayerState::collapse)?;
        local(picker, PlayerState::toggle_list)?;
        local(&parts.mute, PlayerState::toggle_mute)?;

        {
            let (state, parts, audio) = (self.state.clone(), self.parts.clone(), self.audio.clone());
            dom::listen(&self.parts.slider, "input", move |_| {
                let Ok(v) = parts.slider.value().parse::<u8>() else { return };
                let mut st = state.borrow_mut();
                st.set_volume(v);
                parts.refresh(&st);
                apply_volume(&audio.borrow(), &st);
            })?;
        }

        for (id, entry) in &parts.entries {
            let id = *id;
            let (state, parts, set_track) = (self.state.clone(), self.parts.clone(), set_track.clone());
            dom::on_click(entry, move || {
                let pick = {
                    let mut st = state.borrow_mut();
                    let pick = st.choose(id);
                    parts.refresh(&st);
                    pick
                };
                debug!(track = tracks::label(pick), "overlay track picked");
                set_track(pick);
            })?;
        }
        Ok(())
    }

    /// Follow the session's track; restarts audio only on an actual change.
    pub fn sync(&self, track: Option<TrackId>) {
        let changed = {
            let mut st = self.state.borrow_mut();
            let changed = st.sync(track);
            self.parts.refresh(&st);
            changed
        };
        if changed {
            self.play(track);
        }
    }

    pub fn unmount(self) {
        self.stop();
        self.root.remove();
    }

    fn stop(&self) {
        if let Some(old) = self.audio.borrow_mut().take() {
            old.pause().ok();
            old.set_src("");
        }
    }

    fn play(&self, track: Option<TrackId>) {
        self.stop();
        let Some(id) = track else { return };
        let url = id.url(&self.music_base);
        let audio = match HtmlAudioElement::new_with_src(&url) {
            Ok(a) => a,
            Err(err) => {
                warn!(?err, %url, "could not create audio element");
                return;
            }
        };
        audio.set_loop(true);
        apply_volume(&Some(audio.clone()), &self.state.borrow());
        match audio.play() {
            Ok(promise) => {
                let blocked = Closure::once(move |_err: JsValue| {
                    warn!("autoplay blocked - click anywhere to start music");
                });
                let _ = promise.catch(&blocked);
                blocked.forget();
            }
            Err(err) => warn!(?err, "audio play failed"),
        }
        debug!(track = %id, "audio started");
        *self.audio.borrow_mut() = Some(audio);
    }
}

fn apply_volume(audio: &Option<HtmlAudioElement>, st: &PlayerState) {
    if let Some(a) = audio {
        a.set_volume(st.effective_volume());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed_at_configured_volume() {
        let st = PlayerState::new(Some(TrackId::KissLand), 100);
        assert!(!st.expanded());
        assert!(!st.list_open());
        assert!(st.audible());
        assert!((st.effective_volume() - 1.0).abs() < 1e-9);
        assert_eq!(PlayerState::new(None, 250).volume(), 100);
    }

    #[test]
    fn mute_zeroes_output_and_slider_unmutes() {
        let mut st = PlayerState::new(Some(TrackId::Birds), 60);
        st.toggle_mute();
        assert_eq!(st.effective_volume(), 0.0);
        assert_eq!(st.shown_volume(), 0);
        assert!(!st.audible());
        st.set_volume(0);
        assert!(st.muted());
        st.set_volume(35);
        assert!(!st.muted());
        assert!((st.effective_volume() - 0.35).abs() < 1e-9);
    }

    #[test]
    fn choosing_closes_list_and_returns_pick() {
        let mut st = PlayerState::new(Some(TrackId::Montreal), 100);
        st.expand();
        st.toggle_list();
        assert!(st.list_open());
        assert_eq!(st.choose(None), None);
        assert!(!st.list_open());
        assert!(st.expanded());
        // The overlay's own track only moves when the session says so.
        assert_eq!(st.track(), Some(TrackId::Montreal));
        assert!(st.sync(None));
        assert!(!st.sync(None));
        assert!(!st.audible());
    }

    #[test]
    fn collapse_also_closes_list() {
        let mut st = PlayerState::new(None, 100);
        st.expand();
        st.toggle_list();
        st.collapse();
        assert!(!st.expanded());
        assert!(!st.list_open());
    }
}
