//! Card runtime: hosts the [`FlowController`] in the page and renders it.
//!
//! The controller lives in a thread-local cell. DOM handlers never touch it
//! directly; they call [`dispatch`], which applies one [`Transition`] and then
//! re-renders. Screens are re-mounted only when the screen actually changed;
//! the audio overlay is kept across screens and just re-synced.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};
use web_sys::{Document, HtmlElement};

use crate::config::CardConfig;
use crate::decor::DecorRng;
use crate::dom;
use crate::error::Result;
use crate::flow::{FlowController, Screen, Session, Transition};
use crate::player::PlayerOverlay;
use crate::screens::{self, Callback, Mount};

struct Card {
    flow: FlowController,
    config: Rc<CardConfig>,
    rng: DecorRng,
    doc: Document,
    root: HtmlElement,
    stage: HtmlElement,
    overlay: Option<PlayerOverlay>,
    /// Screen currently in the stage, if any.
    mounted: Option<Screen>,
}

thread_local! {
    static CARD: RefCell<Option<Card>> = const { RefCell::new(None) };
}

/// Mount the card into `#vc-root`, replacing any previous run.
pub fn start(config: CardConfig) -> Result<()> {
    config.validate()?;
    let doc = dom::document()?;
    dom::inject_styles(&doc)?;
    let root = dom::root(&doc)?;
    let stage = dom::child(&doc, &root, "div", "", None)?;
    stage.set_id("vc-stage");

    let previous = CARD.with(|cell| cell.borrow_mut().take());
    if let Some(old) = previous.and_then(|c| c.overlay) {
        old.unmount();
    }

    let rng = DecorRng::from_seed_or_entropy(config.decor_seed);
    let card = Card {
        flow: FlowController::new(),
        config: Rc::new(config),
        rng,
        doc,
        root,
        stage,
        overlay: None,
        mounted: None,
    };
    info!(screen = %card.flow.screen(), "card started");
    CARD.with(|cell| *cell.borrow_mut() = Some(card));
    render()
}

/// Apply one transition and re-render. Safe to call from any DOM handler that
/// holds no borrow of its own screen state.
pub fn dispatch(event: Transition) {
    let applied = CARD.with(|cell| {
        let mut guard = cell.borrow_mut();
        let card = guard.as_mut()?;
        card.flow.apply(event);
        Some(())
    });
    if applied.is_none() {
        debug!(?event, "transition before card start ignored");
        return;
    }
    if let Err(err) = render() {
        tracing::error!(%err, "render failed");
    }
}

/// Snapshot of the live session, if the card is running.
pub fn session() -> Option<Session> {
    CARD.with(|cell| cell.borrow().as_ref().map(|c| c.flow.session()))
}

fn render() -> Result<()> {
    CARD.with(|cell| {
        let mut guard = cell.borrow_mut();
        match guard.as_mut() {
            Some(card) => card.render(),
            None => Ok(()),
        }
    })
}

fn emit(event: Transition) -> Callback {
    Rc::new(move |()| dispatch(event))
}

impl Card {
    fn render(&mut self) -> Result<()> {
        let screen = self.flow.screen();
        if self.mounted != Some(screen) {
            self.mount_screen(screen)?;
            self.mounted = Some(screen);
        }
        self.render_overlay()
    }

    /// Presentation unit per screen, each handed exactly the callbacks it needs.
    fn mount_screen(&mut self, screen: Screen) -> Result<()> {
        self.stage.set_inner_html("");
        if let Some(w) = web_sys::window() {
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
        let mut m = Mount {
            doc: &self.doc,
            stage: &self.stage,
            config: &self.config,
            rng: &mut self.rng,
        };
        match screen {
            Screen::Welcome => screens::welcome::mount(&mut m, emit(Transition::Start)),
            Screen::MusicSelect => screens::music_select::mount(
                &mut m,
                Rc::new(|track| dispatch(Transition::TrackChosen(track))),
            ),
            Screen::HeartFill => screens::heart_fill::mount(&mut m, emit(Transition::HeartFilled)),
            Screen::Reasons => screens::reasons::mount(&mut m, emit(Transition::ReasonsRevealed)),
            Screen::Letter => screens::letter::mount(&mut m, emit(Transition::LetterRead)),
            Screen::Question => screens::question::mount(&mut m, emit(Transition::FlowersRequested)),
            Screen::Flowers => screens::flowers::mount(&mut m),
        }
    }

    fn render_overlay(&mut self) -> Result<()> {
        let track = self.flow.track();
        if !self.flow.overlay_visible() {
            if let Some(overlay) = self.overlay.take() {
                overlay.unmount();
            }
            return Ok(());
        }
        if let Some(overlay) = &self.overlay {
            overlay.sync(track);
        } else {
            let overlay = PlayerOverlay::mount(
                &self.doc,
                &self.root,
                track,
                self.config.default_volume,
                &self.config.music_base,
                Rc::new(|track| dispatch(Transition::OverlayTrackChanged(track))),
            )?;
            self.overlay = Some(overlay);
        }
        Ok(())
    }
}
