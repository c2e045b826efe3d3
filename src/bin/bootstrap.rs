// Lambda bootstrap entry point for the quote notifier

use lambda_runtime::{Error, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    hilly_rizz::setup_logging();
    run(service_fn(hilly_rizz::api::handler)).await
}
