use std::process::ExitCode;

use log_generator::config::{GeneratorConfig, TICK_INTERVAL};
use log_generator::lifecycle::{signals, startup};
use log_generator::Scheduler;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = GeneratorConfig::default();

    let sink = match startup::initialize(&config) {
        Ok(sink) => sink,
        Err(e) => {
            eprintln!("failed to create logger: {e}");
            return ExitCode::FAILURE;
        }
    };

    let dispatch = sink.dispatch().clone();
    let _guard = tracing::dispatcher::set_default(&dispatch);

    tracing::info!(
        level = %config.sink.level,
        output = %config.sink.output,
        interval_ms = TICK_INTERVAL.as_millis() as u64,
        "log-generator v0.1.0 starting"
    );

    let mut emitter = startup::emitter(sink);
    let scheduler = Scheduler::new(TICK_INTERVAL);

    tokio::select! {
        res = scheduler.run(&mut emitter) => match res {
            Ok(never) => match never {},
            Err(e) => {
                tracing::error!(error = %e, "Emission failed");
                ExitCode::FAILURE
            }
        },
        signal = signals::terminate() => match signal {
            Ok(signal) => {
                tracing::info!(signal = signal.name(), "Received signal, exiting");
                signal.into()
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                ExitCode::FAILURE
            }
        },
    }
}
