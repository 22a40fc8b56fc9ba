//! Writes a failure to stdout, logs and stderr, then replies with 500.

use lambda_http::{Body, Error, Request, Response, service_fn};

use hello_functions::reporting::hello_error_2;

async fn function_handler(_event: Request) -> Result<Response<Body>, Error> {
    let reply = hello_error_2(std::io::stdout(), std::io::stderr());
    Ok(reply.into_response().map(Body::from))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    lambda_http::run(service_fn(function_handler)).await
}
