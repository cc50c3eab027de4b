use axum::{Json, extract::State};
use serde::Serialize;

use crate::AppStateRef;

#[derive(Serialize)]
pub struct SamplesResponse {
    pub samples: Vec<String>,
}

pub async fn get_samples(State(state): State<AppStateRef>) -> Json<SamplesResponse> {
    Json(SamplesResponse {
        samples: state.playlists.list_samples().await,
    })
}
