use lambda_http::{Body, Error, Request, Response, service_fn};

use hello_functions::greeting::hello_get;
use hello_functions::reply::Reply;

async fn function_handler(_event: Request) -> Result<Response<Body>, Error> {
    Ok(Reply::Text(hello_get()).into_response().map(Body::from))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    lambda_http::run(service_fn(function_handler)).await
}
