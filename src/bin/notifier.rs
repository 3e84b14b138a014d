// Lambda bootstrap entry point for the notifier function.

use lambda_runtime::{Error, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    crm_functions::setup_logging();

    run(service_fn(crm_functions::notifier::handler)).await
}
