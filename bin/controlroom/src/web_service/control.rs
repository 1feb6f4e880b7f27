use axum::extract::{RawQuery, State};
use axum::Json;
use home::DeepLink;
use log::debug;
use serde::Deserialize;

use crate::web_service::ServiceError;
use crate::{Dispatcher, Origin, Outcome};

#[derive(Debug, Deserialize)]
pub struct DeepLinkRequest {
    #[serde(default)]
    pub uri: Option<String>,
}

/// `GET /control?device=office&command=on`
pub async fn control(
    State(dispatcher): State<Dispatcher>,
    RawQuery(query): RawQuery,
) -> Result<Json<Outcome>, ServiceError> {
    debug!("[control]: {:?}", query);

    let link = DeepLink::from_query(query.as_deref().unwrap_or_default())?;
    let outcome = dispatcher.deep_link(Some(&link), Origin::DeepLink)?;

    Ok(Json(outcome))
}

/// `POST /deeplink` with `{"uri": "controlroom://control?device=fan&command=off"}`
pub async fn deep_link(
    State(dispatcher): State<Dispatcher>,
    Json(request): Json<DeepLinkRequest>,
) -> Result<Json<Outcome>, ServiceError> {
    debug!("[deeplink]: {:?}", request.uri);

    let link = request.uri.as_deref().map(DeepLink::parse).transpose()?;
    let outcome = dispatcher.deep_link(link.as_ref(), Origin::DeepLink)?;

    Ok(Json(outcome))
}
