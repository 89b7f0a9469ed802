//! Wire types for the guessit API.
//!
//! Only the snake_case schema served by the POST endpoint is understood. The
//! older GET endpoint used camelCase keys (`episodeNumber`, `screenSize`,
//! `series`) and is not compatible with these types.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Request body sent to the guessit endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct GuessRequest<'a> {
    /// The filename to classify, forwarded untouched
    pub name: &'a str,
}

/// Kind of media the service recognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// A TV episode
    Episode,
    /// A movie
    Movie,
    /// Missing or unrecognized type
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MediaType::Unknown => "unknown",
            MediaType::Episode => "episode",
            MediaType::Movie => "movie",
        };
        f.write_str(s)
    }
}

/// Metadata guessed from a filename.
///
/// Every field is optional on the wire. A missing field is left at its zero
/// value (empty string, `0` or [`MediaType::Unknown`]), so zero means
/// "unknown" rather than a meaningful value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuessResponse {
    /// Episode or movie
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub media_type: MediaType,
    /// Movie title, or show name for episodes
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Episode number within the season
    #[serde(deserialize_with = "null_as_default")]
    pub episode: u32,
    /// Season number
    #[serde(deserialize_with = "null_as_default")]
    pub season: u32,
    /// Release year
    #[serde(deserialize_with = "null_as_default")]
    pub year: u32,
    /// Quality label such as "720p"
    #[serde(deserialize_with = "null_as_default")]
    pub screen_size: String,
    #[serde(deserialize_with = "null_as_default")]
    pub release_group: String,
    #[serde(deserialize_with = "null_as_default")]
    pub audio_codec: String,
    #[serde(deserialize_with = "null_as_default")]
    pub video_codec: String,
    /// Container extension, e.g. "mkv"
    #[serde(deserialize_with = "null_as_default")]
    pub container: String,
    #[serde(deserialize_with = "null_as_default")]
    pub format: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mimetype: String,
}

impl GuessResponse {
    /// Returns true if the service recognized a TV episode.
    pub fn is_episode(&self) -> bool {
        self.media_type == MediaType::Episode
    }

    /// Returns true if the service recognized a movie.
    pub fn is_movie(&self) -> bool {
        self.media_type == MediaType::Movie
    }
}

/// Decodes an explicit `null` like a missing key: as the zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
