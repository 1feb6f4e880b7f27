use controlroom::{channels, router, Config, Dispatcher, ErasedError};

use std::sync::Arc;

use log::info;
use tokio::net::TcpListener;
use tokio::task;

#[tokio::main]
async fn main() -> Result<(), ErasedError> {
    pretty_env_logger::init_timed();

    let config = Config::from_env()?;

    let (switchboard, switchboard_task) = channels::switchboard();
    let (speech, speech_task) = channels::speech();

    let dispatcher = Dispatcher::new(
        Arc::new(config.aliases),
        switchboard,
        speech,
        config.acknowledge_deep_links,
    );

    let listener = TcpListener::bind(config.address).await?;
    info!("Listening http://{}", config.address);

    let (web_handle, _, _) = tokio::try_join!(
        task::spawn(async move {
            axum::serve(listener, router(dispatcher))
                .with_graceful_shutdown(shutdown_signal())
                .await
        }),
        task::spawn(switchboard_task.run()),
        task::spawn(speech_task.run())
    )?;

    web_handle?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
