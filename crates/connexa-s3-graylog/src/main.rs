#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

use std::env;
use std::io::Read;
use std::process::ExitCode;

use aws_config::BehaviorVersion;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use connexa_forwarder::{Forwarder, S3Event};

#[tokio::main]
async fn main() -> ExitCode {
    let log_level = env::var("LOG_LEVEL")
        .map(|val| val.to_lowercase())
        .unwrap_or("info".to_string());

    let env_filter = format!("hyper=off,rustls=off,{}", log_level);

    #[allow(clippy::expect_used)]
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_new(env_filter).expect("could not parse log level in configuration"),
        )
        .with_level(true)
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .with_file(false)
        .with_target(true)
        .without_time()
        .finish();

    #[allow(clippy::expect_used)]
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    debug!("Logging subsystem enabled");

    let raw_event = match read_event() {
        Ok(raw) => raw,
        Err(e) => {
            error!("Unable to read event payload: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let event: S3Event = match serde_json::from_str(&raw_event) {
        Ok(event) => event,
        Err(e) => {
            error!("Unable to parse event payload: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let forwarder = Forwarder::new(
        aws_sdk_s3::Client::new(&sdk_config),
        aws_sdk_secretsmanager::Client::new(&sdk_config),
    );

    match forwarder.handle(event).await {
        Ok(ack) => {
            println!("{ack}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error processing logs: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Reads the invocation event: a file path argument, or stdin when the
/// platform harness pipes the document in.
fn read_event() -> std::io::Result<String> {
    match env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}
