//! Decorative randomness: floating hearts, emoji picks, evasive button offsets.
//! None of this is semantic state; it only needs to look random. A fixed seed
//! makes the visuals reproducible.

pub const HEART_EMOJIS: &[&str] = &["💕", "💗", "💖", "❤️", "💓"];
pub const FLOWER_EMOJIS: &[&str] = &["🌹", "🌷", "🌸", "🌺", "💐", "🌻"];

/// Small 64-bit LCG (MMIX constants). Not crypto secure.
#[derive(Clone, Debug)]
pub struct DecorRng {
    state: u64,
}

impl DecorRng {
    pub fn new(seed: u64) -> Self {
        // Avoid the all-zero start producing a short visible pattern.
        Self { state: seed ^ 0x9E37_79B9_7F4A_7C15 }
    }

    /// Seed from the configured value, else from the browser RNG / clock.
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        Self::new(seed.unwrap_or_else(entropy_seed))
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Uniform in `[lo, hi)`.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.next_u32() as usize % len
    }

    pub fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items.get(self.index(items.len())).copied().unwrap_or("♥")
    }

    /// Background glyph placement anywhere on the page.
    pub fn floater(&mut self) -> Floater {
        Floater {
            left_pct: self.range(0.0, 100.0),
            top_pct: self.range(0.0, 100.0),
            delay_s: self.range(0.0, 3.0),
            size_px: self.range(20.0, 50.0),
        }
    }
}

/// Placement of one floating background glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Floater {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub size_px: f64,
}

impl Floater {
    pub fn style(&self, opacity: f64) -> String {
        format!(
            "position:absolute; left:{:.1}%; top:{:.1}%; animation:vc-float 3s ease-in-out infinite; animation-delay:{:.2}s; font-size:{:.0}px; opacity:{}; color:#e11d48; pointer-events:none;",
            self.left_pct, self.top_pct, self.delay_s, self.size_px, opacity
        )
    }
}

#[cfg(feature = "rng")]
fn entropy_seed() -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(err) => {
            tracing::debug!(%err, "browser rng unavailable, seeding decor from clock");
            clock_seed()
        }
    }
}

#[cfg(not(feature = "rng"))]
fn entropy_seed() -> u64 {
    clock_seed()
}

fn clock_seed() -> u64 {
    crate::dom::now_ms().to_bits()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_visuals() {
        let mut a = DecorRng::new(42);
        let mut b = DecorRng::new(42);
        for _ in 0..16 {
            assert_eq!(a.floater(), b.floater());
        }
    }

    #[test]
    fn ranges_are_respected() {
        let mut rng = DecorRng::new(7);
        for _ in 0..1_000 {
            let f = rng.floater();
            assert!((0.0..100.0).contains(&f.left_pct));
            assert!((0.0..100.0).contains(&f.top_pct));
            assert!((0.0..3.0).contains(&f.delay_s));
            assert!((20.0..50.0).contains(&f.size_px));
            let x = rng.range(-100.0, 100.0);
            assert!((-100.0..100.0).contains(&x));
        }
    }

    #[test]
    fn pick_stays_in_palette() {
        let mut rng = DecorRng::new(3);
        for _ in 0..100 {
            assert!(HEART_EMOJIS.contains(&rng.pick(HEART_EMOJIS)));
        }
        assert_eq!(rng.pick(&[]), "♥");
        assert_eq!(rng.index(0), 0);
    }
}
