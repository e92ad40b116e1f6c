use std::fmt::Debug;
use std::fmt::Display;

use not_a_newsletter::configuration::get_configuration;
use not_a_newsletter::startup::Application;
use not_a_newsletter::telemetry::get_subscriber;
use not_a_newsletter::telemetry::init_subscriber;
use tokio::task::JoinError;

fn report_exit(
    name: &str,
    outcome: Result<Result<(), impl Debug + Display>, JoinError>,
) {
    match outcome {
        Ok(Ok(())) => {
            tracing::info!("{name} exited gracefully")
        }

        Ok(Err(e)) => {
            tracing::error!(
                error.cause_chain=?e,
                error.message=%e,
                "{name} failed (inner)"
            )
        }

        Err(e) => {
            tracing::error!(
                error.cause_chain=?e,
                error.message=%e,
                "{name} failed (outer)"
            )
        }
    }
}

/// Initialise telemetry, load config, and start the server. Incomplete
/// configuration stops us here, before anything is bound.
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("not-a-newsletter", "info", std::io::stdout);
    init_subscriber(subscriber)?;

    let cfg = get_configuration()?;

    let server = Application::build(cfg).await?.run_until_stopped();
    report_exit("API", tokio::spawn(server).await);

    Ok(())
}
