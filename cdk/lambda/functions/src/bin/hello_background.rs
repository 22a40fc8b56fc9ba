//! Greets a name in an event payload.

use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::{Value, json};

use hello_functions::greeting::hello_background;
use hello_functions::payload::GreetingPayload;

async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let (payload, _context) = event.into_parts();
    let greeting = hello_background(GreetingPayload::from_event(payload));
    Ok(json!({ "message": greeting }))
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
