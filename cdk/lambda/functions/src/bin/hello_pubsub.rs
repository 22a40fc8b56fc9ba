//! Logs a greeting to a name carried in a Pub/Sub message.
//!
//! Malformed message data fails the invocation.

use lambda_runtime::{Error, LambdaEvent, service_fn};
use tracing::{Level, event};

use hello_functions::greeting::hello_pubsub;
use hello_functions::payload::PubSubMessage;

async fn function_handler(event: LambdaEvent<PubSubMessage>) -> Result<(), Error> {
    let (message, _context) = event.into_parts();
    let greeting = hello_pubsub(&message)?;
    event!(Level::INFO, "{}", greeting);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    lambda_runtime::run(service_fn(function_handler)).await
}
