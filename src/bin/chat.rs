pub use crm_functions::chat::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    crm_functions::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
