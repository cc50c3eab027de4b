use std::fmt::Display;

use crate::format::{Channel, Playlist, attributes, directives};

impl Display for Playlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // header
        write!(f, "{}", directives::EXTM3U)?;
        for (key, value) in self.attributes.iter() {
            write!(f, " {}=\"{}\"", key, value)?;
        }
        writeln!(f)?;

        // channels
        for it in self.channels.iter() {
            it.fmt(f)?;
        }

        Ok(())
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // #EXTINF:-1 attributes...,name
        write!(f, "{}-1", directives::EXTINF)?;
        if let Some(logo) = &self.logo {
            write!(f, " {}=\"{}\"", attributes::LOGO, logo)?;
        }
        if let Some(group) = &self.group {
            write!(f, " {}=\"{}\"", attributes::GROUP, group)?;
        }
        writeln!(f, ",{}", self.name)?;

        writeln!(f, "{}", self.url)?;

        Ok(())
    }
}
