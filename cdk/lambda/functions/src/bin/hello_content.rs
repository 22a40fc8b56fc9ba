//! Greets a name in a request body parsed according to the `content-type`
//! header.
//!
//! An unknown content type fails the invocation.

use lambda_http::{Body, Error, Request, Response, service_fn};
use tracing::{Level, event};

use hello_functions::content::hello_content;
use hello_functions::reply::Reply;

async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    let request = event.map(|body| body.to_vec());
    let greeting = hello_content(&request).map_err(|e| {
        event!(Level::ERROR, "{}", e);
        e
    })?;
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
