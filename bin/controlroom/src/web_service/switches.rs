use axum::extract::State;
use axum::Json;

use crate::switchboard::States;
use crate::web_service::ServiceError;
use crate::Dispatcher;

pub async fn switches(State(dispatcher): State<Dispatcher>) -> Result<Json<States>, ServiceError> {
    Ok(Json(dispatcher.switchboard().snapshot().await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_service::test_support;
    use home::DeviceId;
    use serde_json::json;

    #[tokio::test]
    async fn test_switches() {
        let (dispatcher, _speech) = test_support::dispatcher();

        dispatcher
            .switchboard()
            .apply(Some(DeviceId::OFFICE_FAN), Some(true))
            .unwrap();

        let Json(states) = switches(State(dispatcher)).await.unwrap();

        assert_eq!(
            serde_json::to_value(&states).unwrap(),
            json!({
                "fan/office": true,
                "light/kitchen": false,
                "light/office": false
            })
        );
    }
}
