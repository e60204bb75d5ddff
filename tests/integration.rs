// Integration tests (native) for the `valentine-card` crate.
// These tests avoid wasm-specific functionality and exercise the page flow and
// screen state through the public API so they run under `cargo test` on the host.

use valentine_card::flow::{FlowController, Screen, Transition};
use valentine_card::screens::heart_fill::{HeartFill, Tap, code_matches};
use valentine_card::screens::question::{Question, View};
use valentine_card::screens::reasons::Reveal;
use valentine_card::{CardConfig, DecorRng, TrackId};

fn overlay_screens() -> Vec<Screen> {
    Screen::ALL.into_iter().filter(|s| s.shows_overlay()).collect()
}

#[test]
fn full_journey_with_kissland() {
    let mut fc = FlowController::new();
    assert_eq!(fc.screen(), Screen::Welcome);
    assert_eq!(fc.track(), None);

    assert_eq!(fc.apply(Transition::Start), Screen::MusicSelect);
    assert!(!fc.overlay_visible());

    let track: TrackId = "kissland".parse().unwrap();
    assert_eq!(fc.apply(Transition::TrackChosen(Some(track))), Screen::HeartFill);
    assert_eq!(fc.track(), Some(TrackId::KissLand));
    assert!(fc.overlay_visible());

    assert_eq!(fc.apply(Transition::HeartFilled), Screen::Reasons);
    assert_eq!(fc.apply(Transition::ReasonsRevealed), Screen::Letter);
    assert_eq!(fc.apply(Transition::LetterRead), Screen::Question);
    assert_eq!(fc.apply(Transition::FlowersRequested), Screen::Flowers);

    assert!(fc.screen().is_terminal());
    assert!(fc.overlay_visible());
    assert_eq!(fc.track(), Some(TrackId::KissLand));
}

#[test]
fn no_music_still_mounts_overlay() {
    let mut fc = FlowController::new();
    fc.apply(Transition::Start);
    assert_eq!(fc.apply(Transition::TrackChosen(None)), Screen::HeartFill);
    assert_eq!(fc.track(), None);
    assert!(fc.overlay_visible());
}

#[test]
fn composed_callbacks_only_move_forward() {
    let events = [
        Transition::Start,
        Transition::TrackChosen(Some(TrackId::Montreal)),
        Transition::OverlayTrackChanged(Some(TrackId::Birds)),
        Transition::HeartFilled,
        Transition::OverlayTrackChanged(None),
        Transition::ReasonsRevealed,
        Transition::LetterRead,
        Transition::OverlayTrackChanged(Some(TrackId::SameOld)),
        Transition::FlowersRequested,
    ];
    let mut fc = FlowController::new();
    let mut last = fc.screen();
    for ev in events {
        let now = fc.apply(ev);
        match ev.target() {
            Some(target) => {
                assert_eq!(now, target, "screen must equal the requested target");
                assert_eq!(last.next(), Some(now), "no skipping or regressing");
            }
            None => assert_eq!(now, last, "overlay changes keep the screen"),
        }
        assert_eq!(fc.overlay_visible(), overlay_screens().contains(&now));
        last = now;
    }
    assert_eq!(fc.track(), Some(TrackId::SameOld));
}

#[test]
fn js_queries_before_start() {
    assert_eq!(valentine_card::current_screen(), "welcome");
    assert_eq!(valentine_card::selected_track(), None);
}

#[test]
fn heart_gate_with_default_config() {
    let cfg = CardConfig::default();
    let mut heart = HeartFill::new(cfg.fill_step);
    let taps_needed = 100u32.div_ceil(cfg.fill_step as u32);
    let mut filled_at = None;
    for i in 1..=taps_needed {
        if heart.tap() == Tap::Filled {
            filled_at = Some(i);
        }
    }
    assert_eq!(filled_at, Some(taps_needed));
    heart.open_popup();
    assert_eq!(heart.tap(), Tap::Ignored);
    assert!(code_matches(" I love you\n", &cfg.secret_code));
}

#[test]
fn reasons_and_question_from_default_config() {
    let cfg = CardConfig::default();
    let mut reveal = Reveal::new(cfg.reasons.len());
    for i in (0..cfg.reasons.len()).rev() {
        assert!(reveal.reveal(i));
    }
    assert!(reveal.all_revealed());

    let mut rng = DecorRng::new(2024);
    let mut q = Question::new(cfg.max_no_attempts);
    while q.no_visible() {
        q.no();
        q.try_again(&mut rng);
    }
    assert_eq!(q.no_clicks(), cfg.max_no_attempts);
    q.yes();
    assert_eq!(q.view(), View::Celebrating);
}
