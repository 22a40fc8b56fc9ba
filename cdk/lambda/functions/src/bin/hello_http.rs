//! Greets a name in a JSON request body.

use lambda_http::{Body, Error, Request, Response, service_fn};

use hello_functions::greeting::hello_http;
use hello_functions::reply::Reply;

async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    let greeting = hello_http(event.body());
    Ok(Reply::Text(greeting).into_response().map(Body::from))
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
