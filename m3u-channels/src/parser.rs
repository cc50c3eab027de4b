use std::{error::Error, fmt::Display, mem};

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use smol_str::SmolStr;
use std::collections::BTreeMap;

use crate::format::{Channel, Playlist, attributes, directives};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    InvalidHeader,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::InvalidHeader => write!(f, "Missing {} header", directives::EXTM3U),
        }
    }
}
impl Error for ParseError {}

lazy_static! {
    static ref ATTRIBUTE_REGEX: Regex =
        Regex::new(r#"([^\s=",]+)="([^"]*)""#).expect("Regular expression error");
    /// `<duration><attribute segment>`, the segment being free text
    static ref DURATION_REGEX: Regex =
        Regex::new(r"(?s)^\s*(-?\d+(?:\.\d+)?)(.*)$").expect("Regular expression error");
}

type AttributeSetter = fn(&mut Channel, SmolStr);

fn set_logo(channel: &mut Channel, value: SmolStr) {
    channel.logo = Some(value);
}

fn set_group(channel: &mut Channel, value: SmolStr) {
    channel.group = Some(value);
}

const KNOWN_ATTRIBUTES: &[(&str, AttributeSetter)] = &[
    (attributes::LOGO, set_logo),
    (attributes::GROUP, set_group),
];

fn parse_attributes(input: impl AsRef<str>) -> BTreeMap<SmolStr, SmolStr> {
    let mut result = BTreeMap::new();
    for (_, [key, value]) in ATTRIBUTE_REGEX
        .captures_iter(input.as_ref())
        .map(|x| x.extract())
    {
        result.insert(key.into(), value.into());
    }

    result
}

/// Splits at the last comma outside double quotes.
fn split_at_name(value: &str) -> Option<(&str, &str)> {
    let mut quoted = false;
    let mut last_comma = None;
    for (index, c) in value.char_indices() {
        match c {
            '"' => quoted = !quoted,
            ',' if !quoted => last_comma = Some(index),
            _ => {}
        }
    }

    last_comma.map(|x| (&value[..x], &value[x + 1..]))
}

/// Builds the draft for a directive line. A line without a leading duration
/// or without a comma before the name yields a nameless draft.
fn parse_media_info(value: &str) -> Channel {
    let mut draft = Channel::new("", "");

    let Some((info, name)) = split_at_name(value) else {
        debug!("Missing name in {} line: {}", directives::EXTINF, value);
        return draft;
    };
    let Some(captures) = DURATION_REGEX.captures(info) else {
        debug!("Missing duration in {} line: {}", directives::EXTINF, value);
        return draft;
    };
    let (_, [_duration, attributes]) = captures.extract();

    draft.name = name.trim().into();
    for (key, value) in parse_attributes(attributes) {
        for (known, setter) in KNOWN_ATTRIBUTES {
            if key.as_str() == *known {
                setter(&mut draft, value.clone());
            }
        }
    }

    draft
}

#[derive(Debug, Default)]
enum EntryState {
    #[default]
    Idle,
    Pending(Channel),
}

/// Line-fed playlist parser.
///
/// Feed every line in order with [`Parser::feed_line`], then call
/// [`Parser::finish`]. [`parse`] and [`parse_playlist`] do this for a whole
/// text.
#[derive(Debug, Default)]
pub struct Parser {
    playlist: Playlist,
    state: EntryState,
    header_seen: bool,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed_line(&mut self, line: &str) -> Result<(), ParseError> {
        let line = line.trim();

        if !self.header_seen {
            return self.parse_m3u_header(line);
        }

        if let Some(value) = line.strip_prefix(directives::EXTINF) {
            // directive, supersedes any pending entry
            let draft = parse_media_info(value);
            if let EntryState::Pending(dropped) =
                mem::replace(&mut self.state, EntryState::Pending(draft))
            {
                debug!("Dropping entry without url: {:?}", dropped.name);
            }
        } else if line.is_empty() || line.starts_with(directives::COMMENT) {
            // blank or comment
        } else if let EntryState::Pending(mut draft) = mem::take(&mut self.state) {
            // url
            draft.url = line.into();
            if draft.name.is_empty() || draft.url.is_empty() {
                debug!("Dropping nameless entry: {}", draft.url);
            } else {
                self.playlist.channels.push(draft);
            }
        }

        Ok(())
    }

    pub fn finish(self) -> Result<Playlist, ParseError> {
        if !self.header_seen {
            return Err(ParseError::InvalidHeader);
        }

        if let EntryState::Pending(dropped) = self.state {
            debug!("Dropping unterminated entry: {:?}", dropped.name);
        }

        Ok(self.playlist)
    }

    fn parse_m3u_header(&mut self, line: &str) -> Result<(), ParseError> {
        if line.is_empty() {
            return Ok(());
        }

        let position = line
            .find(directives::EXTM3U)
            .ok_or(ParseError::InvalidHeader)?;
        let attributes = &line[position + directives::EXTM3U.len()..];

        self.playlist.attributes.extend(parse_attributes(attributes));
        self.header_seen = true;

        Ok(())
    }
}

/// Parses a whole playlist text, header attributes included.
pub fn parse_playlist(content: &str) -> Result<Playlist, ParseError> {
    let mut parser = Parser::new();
    for line in content.split('\n') {
        parser.feed_line(line)?;
    }

    parser.finish()
}

/// Parses a whole playlist text into its channels, in url-line order.
pub fn parse(content: &str) -> Result<Vec<Channel>, ParseError> {
    parse_playlist(content).map(|x| x.channels)
}
