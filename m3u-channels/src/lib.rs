//! # m3u-channels
//! A library for extracting channel lists from extended m3u playlists
//!
//! # Example
//! ```rust
//! let channels = m3u_channels::parse(r#"#EXTM3U
//! #EXTINF:-1 tvg-logo="http://example.com/a.png" group-title="News",A
//! http://example.com/A.m3u8"#).unwrap();
//!
//! assert_eq!(channels.len(), 1);
//! assert_eq!(channels[0].name, "A");
//! assert_eq!(channels[0].group.as_deref(), Some("News"));
//! ```
//!
//! Anything that does not look like a playlist is rejected up front:
//! ```rust
//! use m3u_channels::ParseError;
//!
//! assert_eq!(m3u_channels::parse("hello"), Err(ParseError::InvalidHeader));
//! ```

mod builder;
pub mod format;
mod parser;
pub use format::{Channel, Playlist};
pub use parser::*;
