//! Card content and tuning knobs.
//!
//! Every field has a default matching the stock card, so a partial JSON object
//! (feature `serde_json`) only needs to name what it overrides.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};

/// A revealable "reason" card.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reason {
    pub title: String,
    pub content: String,
}

impl Reason {
    fn new(title: &str, content: &str) -> Self {
        Self { title: title.to_string(), content: content.to_string() }
    }
}

/// Image URLs used by the reasons and question screens.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Assets {
    pub cat_flower: String,
    pub cat_gun: String,
    pub cat_kiss: String,
    pub crying: String,
    pub celebration: String,
}

impl Default for Assets {
    fn default() -> Self {
        Self {
            cat_flower: "/assets/cat-flower.gif".into(),
            cat_gun: "/assets/cat-gun.gif".into(),
            cat_kiss: "/assets/cat-kiss.gif".into(),
            crying: "/assets/mort-crying.gif".into(),
            celebration: "/assets/celebration.png".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct CardConfig {
    pub greeting: String,
    pub subtitle: String,
    /// Compared case-insensitively after trimming.
    pub secret_code: String,
    /// Percent added to the heart per tap.
    pub fill_step: u8,
    /// Initial overlay volume, 0..=100.
    pub default_volume: u8,
    /// "No" presses before the button gives up and disappears.
    pub max_no_attempts: u32,
    pub music_base: String,
    pub reasons: Vec<Reason>,
    pub letter: Vec<String>,
    pub signature: String,
    pub assets: Assets,
    /// Fixed seed for decorative randomness; random when absent.
    pub decor_seed: Option<u64>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            greeting: "Hi my love".into(),
            subtitle: "I made this just for you".into(),
            secret_code: "i love you".into(),
            fill_step: 2,
            default_volume: 100,
            max_no_attempts: 3,
            music_base: "/music".into(),
            reasons: default_reasons(),
            letter: default_letter(),
            signature: "Forever yours".into(),
            assets: Assets::default(),
            decor_seed: None,
        }
    }
}

impl CardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.fill_step == 0 || self.fill_step > 100 {
            return Err(CardError::InvalidConfig(format!(
                "fill_step must be 1..=100, got {}",
                self.fill_step
            )));
        }
        if self.secret_code.trim().is_empty() {
            return Err(CardError::InvalidConfig("secret_code is empty".into()));
        }
        if self.default_volume > 100 {
            return Err(CardError::InvalidConfig(format!(
                "default_volume must be 0..=100, got {}",
                self.default_volume
            )));
        }
        if self.reasons.is_empty() {
            return Err(CardError::InvalidConfig("at least one reason is required".into()));
        }
        Ok(())
    }

    /// Parse and validate a JSON config object.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: CardConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

fn default_reasons() -> Vec<Reason> {
    vec![
        Reason::new(
            "Your Humor",
            "I really love how you can always lighten the mood just by being yourself. Even when I'm not feeling the best, you have this way of making me laugh and I'm so grateful for that.",
        ),
        Reason::new(
            "Your Heart",
            "You are so kind, so compassionate, and so loving for everyone around you. The way you listen, the way you make people feel seen and valued is one of the most beautiful things about you.",
        ),
        Reason::new(
            "Your Presence",
            "Being with you feels like home. Your energy, your warmth, and the way you make any moment feel so special, I feel so lucky every time we are together.",
        ),
        Reason::new(
            "Your Beauty",
            "You're so beautiful inside and out. We both know how stunning you are, but your mind and soul are just as beautiful. I'm so grateful that I get to see all of it. You truly are a beautiful girl and I love you so much.",
        ),
        Reason::new(
            "Our Future",
            "We've had our ups and downs, but I know we're meant to be. I can't wait to make all our dreams and plans come true.",
        ),
        Reason::new(
            "Your Stims",
            "All the little things that make you uniquely you. The stims, the random bursts of energy, all the tiktok time and all the gestures only you do. They're part of what makes you so special, and I love every bit of you.",
        ),
    ]
}

fn default_letter() -> Vec<String> {
    [
        "My love,",
        "Every day with you feels like a small gift I get to open again and again.",
        "Thank you for your patience, your laugh, and for choosing me every single day.",
        "Wherever we end up, I want to get there holding your hand.",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = CardConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.reasons.len(), 6);
        assert_eq!(cfg.secret_code, "i love you");
    }

    #[test]
    fn default_reasons_in_card_order() {
        let cfg = CardConfig::default();
        let titles: Vec<&str> = cfg.reasons.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Your Humor", "Your Heart", "Your Presence", "Your Beauty", "Our Future", "Your Stims"]
        );
        let beauty = &CardConfig::default().reasons[3];
        assert!(beauty.content.ends_with("You truly are a beautiful girl and I love you so much."));
    }

    #[test]
    fn rejects_bad_fill_step() {
        let mut cfg = CardConfig::default();
        cfg.fill_step = 0;
        assert!(matches!(cfg.validate(), Err(CardError::InvalidConfig(_))));
        cfg.fill_step = 101;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_blank_code_and_empty_reasons() {
        let mut cfg = CardConfig::default();
        cfg.secret_code = "   ".into();
        assert!(cfg.validate().is_err());
        let mut cfg = CardConfig::default();
        cfg.reasons.clear();
        assert!(cfg.validate().is_err());
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = CardConfig::from_json(r#"{"secret_code":"forever","decor_seed":7}"#).unwrap();
        assert_eq!(cfg.secret_code, "forever");
        assert_eq!(cfg.decor_seed, Some(7));
        assert_eq!(cfg.fill_step, 2);
        assert_eq!(cfg.assets, Assets::default());
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_errors_are_reported() {
        assert!(matches!(
            CardConfig::from_json("{not json"),
            Err(CardError::ConfigParse(_))
        ));
        assert!(matches!(
            CardConfig::from_json(r#"{"default_volume":150}"#),
            Err(CardError::InvalidConfig(_))
        ));
    }
}
