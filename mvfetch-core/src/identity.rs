//! Song identity extraction from folder names.
//!
//! Song folders are named `"<Artist> - <Title> (<tag>)"`; the trailing
//! parenthetical is required but its content is ignored. Parsing is a pure
//! function over the folder name and never panics.

use once_cell::sync::Lazy;
use regex::Regex;

static SONG_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*) - (.*) \(.+\)").expect("song name pattern is valid"));

/// Artist and title derived from a song folder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongIdentity {
    pub artist: String,
    pub title: String,
}

/// Parses `"<Artist> - <Title> (<tag>)"` into a [`SongIdentity`].
///
/// Returns `None` when the name does not match the pattern or when either
/// part is empty after trimming.
#[must_use]
pub fn parse_song_name(name: &str) -> Option<SongIdentity> {
    let caps = SONG_NAME_RE.captures(name)?;
    let artist = caps[1].trim();
    let title = caps[2].trim();
    if artist.is_empty() || title.is_empty() {
        return None;
    }
    Some(SongIdentity {
        artist: artist.to_string(),
        title: title.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_name() {
        let id = parse_song_name("Daft Punk - One More Time (Guitar Hero III)").unwrap();
        assert_eq!(id.artist, "Daft Punk");
        assert_eq!(id.title, "One More Time");
    }

    #[test]
    fn trims_whitespace_around_parts() {
        let id = parse_song_name("  Queen  -  Bohemian Rhapsody  (1975)").unwrap();
        assert_eq!(id.artist, "Queen");
        assert_eq!(id.title, "Bohemian Rhapsody");
    }

    #[test]
    fn artist_keeps_embedded_separator() {
        // Greedy match: everything before the last " - " belongs to the artist.
        let id = parse_song_name("Earth - Wind - Fire (Best Of)").unwrap();
        assert_eq!(id.artist, "Earth - Wind");
        assert_eq!(id.title, "Fire");
    }

    #[test]
    fn rejects_names_without_parenthetical() {
        assert!(parse_song_name("Daft Punk - One More Time").is_none());
    }

    #[test]
    fn rejects_names_without_separator() {
        assert!(parse_song_name("not_a_valid_name").is_none());
        assert!(parse_song_name("").is_none());
    }

    #[test]
    fn rejects_empty_parts() {
        assert!(parse_song_name(" - Title (tag)").is_none());
        assert!(parse_song_name("Artist -  (tag)").is_none());
    }
}
