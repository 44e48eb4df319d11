pub use movies_api::api::list_handler::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    movies_api::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
