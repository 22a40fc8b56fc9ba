//! Reports a failure to the error-tracking service and fails.
//!
//! # Environment variables
//!
//! - `ERROR_REPORTING_PROJECT_ID`: project that receives error reports.
//! - `ERROR_REPORTING_API_KEY`: API key for Error Reporting.
//! - `ERROR_REPORTING_SERVICE`: optional name of the reporting service.
//!
//! Errors are only logged if the project or the API key is not set.

use lambda_http::{Body, Error, Request, Response, service_fn};

use hello_functions::reporting::{AnyReporter, hello_error_1};

async fn function_handler(
    reporter: &AnyReporter,
    _event: Request,
) -> Result<Response<Body>, Error> {
    let reply = hello_error_1(reporter).await?;
    Ok(reply.into_response().map(Body::from))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    let reporter = AnyReporter::from_env();
    let reporter = &reporter;
    lambda_http::run(service_fn(|event: Request| async move {
        function_handler(reporter, event).await
    })).await
}
