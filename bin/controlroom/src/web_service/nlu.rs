use axum::extract::State;
use axum::Json;
use log::debug;
use voice::NluResult;

use crate::web_service::ServiceError;
use crate::{Dispatcher, Outcome};

pub async fn nlu(
    State(dispatcher): State<Dispatcher>,
    Json(result): Json<NluResult>,
) -> Result<Json<Outcome>, ServiceError> {
    debug!("[nlu]: {:?}", result);

    Ok(Json(dispatcher.nlu_result(&result)?))
}
