use std::collections::HashMap;

use zbus::zvariant::{Array, OwnedValue};

/// Metadata key holding the list of contributing artists.
pub const ARTIST_KEY: &str = "xesam:artist";
/// Metadata key holding the track title.
pub const TITLE_KEY: &str = "xesam:title";

const ARTIST_SEPARATOR: &str = ", ";

/// The `Metadata` property as it arrives off the bus: key to variant,
/// shape by convention only.
pub type RawMetadata = HashMap<String, OwnedValue>;

/// Normalized record of what is currently playing. Fields are empty when
/// the player does not report them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackIdentity {
    pub artist: String,
    pub title: String,
}

impl TrackIdentity {
    /// Build an identity from a raw metadata map. Total: keys that are
    /// missing or not of the conventional shape yield empty fields.
    pub fn from_metadata(raw: &RawMetadata) -> Self {
        let artist = raw.get(ARTIST_KEY).map(join_artists).unwrap_or_default();
        let title = raw
            .get(TITLE_KEY)
            .and_then(|value| String::try_from(value.clone()).ok())
            .unwrap_or_default();

        Self { artist, title }
    }

    /// The line consumers read. The bracket layout and the four trailing
    /// spaces are a fixed contract with downstream display tools.
    pub fn display_line(&self) -> String {
        format!("< Artist: {} | Track: {} >    ", self.artist, self.title)
    }
}

// xesam:artist is an array of strings by convention. Anything else counts
// as absent; non-string entries inside an array are skipped.
fn join_artists(value: &OwnedValue) -> String {
    let Ok(array) = <&Array>::try_from(value) else {
        return String::new();
    };

    array
        .iter()
        .filter_map(|entry| {
            if let Ok(s) = entry.downcast_ref::<String>() {
                Some(s.clone())
            } else if let Ok(s) = entry.downcast_ref::<&str>() {
                Some(s.to_string())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join(ARTIST_SEPARATOR)
}
