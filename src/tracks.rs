//! Soundtrack catalog shared by the music selection screen and the audio overlay.

use std::fmt;
use std::str::FromStr;

/// Known background tracks. The set is closed; "no music" is modelled as
/// `Option::<TrackId>::None` wherever a track can be absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrackId {
    Montreal,
    KissLand,
    Birds,
    SameOld,
}

/// Display metadata for a track.
#[derive(Clone, Copy, Debug)]
pub struct Track {
    pub id: TrackId,
    pub title: &'static str,
    pub artist: &'static str,
}

/// Catalog in display order.
pub const TRACKS: &[Track] = &[
    Track { id: TrackId::Montreal, title: "Montreal", artist: "The Weeknd" },
    Track { id: TrackId::KissLand, title: "Kiss Land", artist: "The Weeknd" },
    Track { id: TrackId::Birds, title: "Birds Pt. 1", artist: "The Weeknd" },
    Track { id: TrackId::SameOld, title: "Same Old Song", artist: "The Weeknd" },
];

impl TrackId {
    /// Stable identifier used in URLs and the JS API.
    pub fn as_str(self) -> &'static str {
        match self {
            TrackId::Montreal => "montreal",
            TrackId::KissLand => "kissland",
            TrackId::Birds => "birds",
            TrackId::SameOld => "sameold",
        }
    }

    pub fn info(self) -> &'static Track {
        // Catalog order matches declaration order.
        &TRACKS[self as usize]
    }

    pub fn title(self) -> &'static str {
        self.info().title
    }

    /// Audio file location below `base` (e.g. `/music/kissland.mp3`).
    pub fn url(self, base: &str) -> String {
        format!("{}/{}.mp3", base.trim_end_matches('/'), self.as_str())
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown track id '{0}'")]
pub struct UnknownTrack(pub String);

impl FromStr for TrackId {
    type Err = UnknownTrack;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TRACKS
            .iter()
            .map(|t| t.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownTrack(s.to_string()))
    }
}

/// Title shown by the overlay for an optional track.
pub fn label(track: Option<TrackId>) -> &'static str {
    track.map(TrackId::title).unwrap_or("No music")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_ids() {
        for (i, t) in TRACKS.iter().enumerate() {
            assert_eq!(t.id as usize, i, "track '{}' out of place", t.title);
            assert_eq!(t.id.info().title, t.title);
        }
    }

    #[test]
    fn ids_parse_back() {
        for t in TRACKS {
            assert_eq!(t.id.as_str().parse::<TrackId>(), Ok(t.id));
        }
        assert_eq!(
            "thriller".parse::<TrackId>(),
            Err(UnknownTrack("thriller".into()))
        );
    }

    #[test]
    fn url_joins_base_without_double_slash() {
        assert_eq!(TrackId::KissLand.url("/music"), "/music/kissland.mp3");
        assert_eq!(TrackId::Birds.url("/music/"), "/music/birds.mp3");
    }

    #[test]
    fn label_for_none() {
        assert_eq!(label(None), "No music");
        assert_eq!(label(Some(TrackId::SameOld)), "Same Old Song");
    }
}
