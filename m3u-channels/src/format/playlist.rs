use smol_str::SmolStr;
use std::collections::BTreeMap;

use crate::format::Channel;

#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Playlist {
    /// Attributes declared on the `#EXTM3U` line
    pub attributes: BTreeMap<SmolStr, SmolStr>,
    /// Channels of this playlist
    pub channels: Vec<Channel>,
}
