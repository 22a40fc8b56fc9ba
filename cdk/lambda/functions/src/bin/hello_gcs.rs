//! Logs the storage object that triggered an event.

use lambda_runtime::{Error, LambdaEvent, service_fn};
use tracing::{Level, event};

use hello_functions::greeting::hello_gcs;
use hello_functions::payload::StorageObject;

async fn function_handler(event: LambdaEvent<StorageObject>) -> Result<(), Error> {
    let (object, _context) = event.into_parts();
    event!(Level::INFO, "{}", hello_gcs(&object));
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
