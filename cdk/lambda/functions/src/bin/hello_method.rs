//! Greets a `GET` request. Forbids a `PUT` request.

use lambda_http::{Body, Error, Request, Response, service_fn};

use hello_functions::method::hello_method;

async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    Ok(hello_method(event.method()).into_response().map(Body::from))
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
