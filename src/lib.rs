//! guessit_client - Client for the guessit filename-guessing service
//!
//! This library sends media filenames (movie or TV episode release names) to a
//! remote guessit endpoint and decodes the metadata the service infers from
//! them: title, season and episode numbers, quality, codecs, release group and
//! so on. All guessing happens on the server; this crate only speaks the
//! protocol.
//!
//! # Examples
//!
//! ```no_run
//! use guessit_client::{ErrorKind, GuessClient};
//! use std::time::Duration;
//!
//! let client = GuessClient::new("http://localhost:5000/").with_timeout(Duration::from_secs(5));
//!
//! match client.guess("Mr.Robot.S04E01.720p.AMZN.WEB-DL.DDP5.1.H.264-NTG.mkv") {
//!     Ok(guess) if guess.is_episode() => {
//!         println!("{} S{:02}E{:02}", guess.title, guess.season, guess.episode);
//!     }
//!     Ok(guess) => println!("{} ({})", guess.title, guess.media_type),
//!     Err(e) if e.kind() == ErrorKind::Transport => eprintln!("service unreachable: {}", e),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

mod client;
mod error;
mod response;

pub use client::{DEFAULT_TIMEOUT, GuessClient};
pub use error::{ErrorKind, GuessError};
pub use response::{GuessResponse, MediaType};
