use portion_frontend::bootstrap::{self, BootstrapOptions};
use portion_frontend::logging;

fn main() {
    logging::init_logging();

    if let Err(e) = bootstrap::start(BootstrapOptions::default()) {
        tracing::error!(error = %e, "failed to start app");
    }
}
