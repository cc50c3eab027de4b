use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use m3u_channels::Channel;
use serde::{Deserialize, Serialize};

use crate::{AppStateRef, api_error_with_log, errors::ApiError};

const M3U_CONTENT_TYPE: &str = "audio/x-mpegurl";

#[derive(Deserialize)]
pub struct PlaylistQuery {
    pub locator: String,
}

#[derive(Serialize)]
pub struct ChannelsResponse {
    pub channels: Vec<Channel>,
}

pub async fn get_playlist(
    State(state): State<AppStateRef>,
    Query(query): Query<PlaylistQuery>,
) -> Result<Json<ChannelsResponse>, ApiError> {
    let channels = state
        .playlists
        .fetch_and_parse(&query.locator)
        .await
        .map_err(api_error_with_log!("Import playlist"))?;

    Ok(Json(ChannelsResponse { channels }))
}

/// Same import, served back as a normalized playlist.
pub async fn get_playlist_m3u(
    State(state): State<AppStateRef>,
    Query(query): Query<PlaylistQuery>,
) -> Result<Response, ApiError> {
    let playlist = state
        .playlists
        .fetch_playlist(&query.locator)
        .await
        .map_err(api_error_with_log!("Import playlist"))?;

    Ok(([(header::CONTENT_TYPE, M3U_CONTENT_TYPE)], playlist.to_string()).into_response())
}
