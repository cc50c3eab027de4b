mod channel;
mod playlist;
pub use channel::*;
pub use playlist::*;

pub mod directives {
    pub const EXTM3U: &str = "#EXTM3U";
    pub const EXTINF: &str = "#EXTINF:";
    pub const COMMENT: char = '#';
}

pub mod attributes {
    pub const LOGO: &str = "tvg-logo";
    pub const GROUP: &str = "group-title";
}
