use smol_str::SmolStr;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Channel {
    /// Fresh per parsed entry, only distinct within one parse result
    pub id: Uuid,
    /// Display name, never empty
    pub name: SmolStr,
    /// Value of `tvg-logo`
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub logo: Option<SmolStr>,
    /// Value of `group-title`
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub group: Option<SmolStr>,
    /// Playback locator, never empty
    pub url: SmolStr,
}

impl Channel {
    pub fn new(name: impl Into<SmolStr>, url: impl Into<SmolStr>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            logo: None,
            group: None,
            url: url.into(),
        }
    }
}
