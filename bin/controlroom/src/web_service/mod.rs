mod control;
mod nlu;
mod pong;
mod switches;

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use log::error;

use crate::{Dispatcher, Error};

#[derive(Debug)]
pub struct ServiceError(Error, uuid::Uuid);

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response<Body> {
        let status = match self.0 {
            Error::Link(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error!("ServiceError[{}]: {}", self.1, self.0);

        (status, self.0.to_string()).into_response()
    }
}

impl From<Error> for ServiceError {
    fn from(value: Error) -> Self {
        ServiceError(value, uuid::Uuid::new_v4())
    }
}

impl From<home::Error> for ServiceError {
    fn from(value: home::Error) -> Self {
        ServiceError(Error::Link(value), uuid::Uuid::new_v4())
    }
}

pub fn router(dispatcher: Dispatcher) -> Router {
    Router::new()
        .route("/", get(pong::pong).head(pong::pong))
        .route("/control", get(control::control))
        .route("/deeplink", post(control::deep_link))
        .route("/nlu", post(nlu::nlu))
        .route("/switches", get(switches::switches))
        .with_state(dispatcher)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use home::Aliases;

    use crate::speech::{self, SpeechTask};
    use crate::{switchboard, Dispatcher};

    /// A dispatcher with a running switchboard and a speech queue the test can
    /// drain.
    pub fn dispatcher() -> (Dispatcher, SpeechTask) {
        let (switchboard, switchboard_task) = switchboard::channel();
        let (speech, speech_task) = speech::channel();
        tokio::spawn(switchboard_task.run());

        let dispatcher = Dispatcher::new(Arc::new(Aliases::default()), switchboard, speech, true);
        (dispatcher, speech_task)
    }
}
