//! Page flow controller.
//!
//! Owns the current [`Screen`] and the only piece of state shared across screens,
//! the selected soundtrack. Screens never talk to each other; they emit
//! [`Transition`] events which [`FlowController::apply`] turns into `advance` /
//! `select_track` calls. Nothing in here touches the DOM, so the whole flow is
//! testable on the host.

use std::fmt;
use std::str::FromStr;

use tracing::{info, warn};

use crate::tracks::TrackId;

// --- Screens ----------------------------------------------------------------

/// One full-page view. Declaration order is the forward sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Screen {
    #[default]
    Welcome,
    MusicSelect,
    HeartFill,
    Reasons,
    Letter,
    Question,
    Flowers,
}

impl Screen {
    pub const ALL: [Screen; 7] = [
        Screen::Welcome,
        Screen::MusicSelect,
        Screen::HeartFill,
        Screen::Reasons,
        Screen::Letter,
        Screen::Question,
        Screen::Flowers,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::MusicSelect => "music",
            Screen::HeartFill => "heart",
            Screen::Reasons => "reasons",
            Screen::Letter => "letter",
            Screen::Question => "question",
            Screen::Flowers => "flowers",
        }
    }

    /// Successor in the fixed sequence; `None` for the terminal screen.
    pub fn next(self) -> Option<Screen> {
        Screen::ALL.get(self as usize + 1).copied()
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// The audio overlay is mounted on every screen after music selection.
    pub fn shows_overlay(self) -> bool {
        !matches!(self, Screen::Welcome | Screen::MusicSelect)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown screen '{0}'")]
pub struct UnknownScreen(pub String);

impl FromStr for Screen {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|sc| sc.as_str() == s)
            .ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

// --- Transitions --------------------------------------------------------------

/// Named events emitted by presentation units and the audio overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Welcome "Start" button.
    Start,
    /// Music selection completed, with a track or "no music".
    TrackChosen(Option<TrackId>),
    /// Secret code accepted on the heart screen.
    HeartFilled,
    /// Every reason card revealed and the letter button pressed.
    ReasonsRevealed,
    LetterRead,
    /// "These are for you" on the question screen.
    FlowersRequested,
    /// Track switched or cleared from the persistent overlay.
    OverlayTrackChanged(Option<TrackId>),
}

impl Transition {
    /// Screen the event moves to, if it moves at all.
    pub fn target(self) -> Option<Screen> {
        match self {
            Transition::Start => Some(Screen::MusicSelect),
            Transition::TrackChosen(_) => Some(Screen::HeartFill),
            Transition::HeartFilled => Some(Screen::Reasons),
            Transition::ReasonsRevealed => Some(Screen::Letter),
            Transition::LetterRead => Some(Screen::Question),
            Transition::FlowersRequested => Some(Screen::Flowers),
            Transition::OverlayTrackChanged(_) => None,
        }
    }
}

// --- Controller ---------------------------------------------------------------

/// Cross-screen state. Lives until a full reload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub screen: Screen,
    pub track: Option<TrackId>,
}

#[derive(Debug, Default)]
pub struct FlowController {
    session: Session,
}

impl FlowController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.session.screen
    }

    pub fn track(&self) -> Option<TrackId> {
        self.session.track
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn overlay_visible(&self) -> bool {
        self.session.screen.shows_overlay()
    }

    /// Move to `target`. Callers are trusted: an out-of-sequence target is
    /// logged but still applied.
    pub fn advance(&mut self, target: Screen) {
        let from = self.session.screen;
        if from.next() != Some(target) {
            warn!(%from, to = %target, "screen change outside the forward sequence");
        }
        info!(%from, to = %target, "screen change");
        self.session.screen = target;
    }

    /// Set or clear the soundtrack without touching the screen.
    pub fn select_track(&mut self, track: Option<TrackId>) {
        if self.session.track != track {
            info!(track = crate::tracks::label(track), "soundtrack change");
        }
        self.session.track = track;
    }

    /// Single transition function; returns the screen after the event.
    pub fn apply(&mut self, event: Transition) -> Screen {
        match event {
            Transition::TrackChosen(track) | Transition::OverlayTrackChanged(track) => {
                self.select_track(track);
            }
            _ => {}
        }
        if let Some(target) = event.target() {
            self.advance(target);
        }
        self.session.screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_welcome_without_track() {
        let fc = FlowController::new();
        assert_eq!(fc.screen(), Screen::Welcome);
        assert_eq!(fc.track(), None);
        assert!(!fc.overlay_visible());
    }

    #[test]
    fn sequence_is_linear_with_single_terminal() {
        let mut sc = Screen::Welcome;
        let mut seen = vec![sc];
        while let Some(n) = sc.next() {
            assert!(n > sc);
            sc = n;
            seen.push(sc);
        }
        assert_eq!(seen, Screen::ALL.to_vec());
        assert!(Screen::Flowers.is_terminal());
        assert_eq!(Screen::ALL.iter().filter(|s| s.is_terminal()).count(), 1);
    }

    #[test]
    fn overlay_predicate() {
        let shown: Vec<Screen> = Screen::ALL.into_iter().filter(|s| s.shows_overlay()).collect();
        assert_eq!(
            shown,
            vec![
                Screen::HeartFill,
                Screen::Reasons,
                Screen::Letter,
                Screen::Question,
                Screen::Flowers
            ]
        );
    }

    #[test]
    fn screen_names_round_trip_and_reject_unknown() {
        for s in Screen::ALL {
            assert_eq!(s.as_str().parse::<Screen>(), Ok(s));
        }
        assert!("valentine".parse::<Screen>().is_err());
    }

    #[test]
    fn advance_trusts_caller() {
        let mut fc = FlowController::new();
        fc.advance(Screen::Question);
        assert_eq!(fc.screen(), Screen::Question);
        fc.advance(Screen::Reasons);
        assert_eq!(fc.screen(), Screen::Reasons);
    }

    #[test]
    fn track_chosen_selects_and_advances_together() {
        let mut fc = FlowController::new();
        fc.apply(Transition::Start);
        let after = fc.apply(Transition::TrackChosen(Some(TrackId::Birds)));
        assert_eq!(after, Screen::HeartFill);
        assert_eq!(fc.track(), Some(TrackId::Birds));
    }

    #[test]
    fn overlay_change_keeps_screen() {
        let mut fc = FlowController::new();
        for ev in [
            Transition::Start,
            Transition::TrackChosen(Some(TrackId::Montreal)),
            Transition::HeartFilled,
        ] {
            fc.apply(ev);
        }
        assert_eq!(fc.apply(Transition::OverlayTrackChanged(None)), Screen::Reasons);
        assert_eq!(fc.track(), None);
        fc.apply(Transition::OverlayTrackChanged(Some(TrackId::SameOld)));
        assert_eq!(fc.screen(), Screen::Reasons);
        assert_eq!(fc.track(), Some(TrackId::SameOld));
    }

    #[test]
    fn every_forward_event_targets_the_successor_of_its_source() {
        let forward = [
            (Screen::Welcome, Transition::Start),
            (Screen::MusicSelect, Transition::TrackChosen(None)),
            (Screen::HeartFill, Transition::HeartFilled),
            (Screen::Reasons, Transition::ReasonsRevealed),
            (Screen::Letter, Transition::LetterRead),
            (Screen::Question, Transition::FlowersRequested),
        ];
        for (from, ev) in forward {
            assert_eq!(ev.target(), from.next(), "{ev:?}");
        }
        assert_eq!(Transition::OverlayTrackChanged(None).target(), None);
    }
}
