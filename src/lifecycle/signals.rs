//! OS signal handling.
//!
//! # Responsibilities
//! - Wait for SIGINT or SIGTERM
//! - Report which one arrived so main can log it and exit with 128 + signo

use std::io;
use std::process::ExitCode;

/// Termination signal that ended the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Interrupt,
    Terminate,
}

impl Termination {
    pub fn name(&self) -> &'static str {
        match self {
            Termination::Interrupt => "SIGINT",
            Termination::Terminate => "SIGTERM",
        }
    }

    /// Shell convention for death by signal.
    pub fn exit_status(&self) -> u8 {
        match self {
            Termination::Interrupt => 128 + 2,
            Termination::Terminate => 128 + 15,
        }
    }
}

impl From<Termination> for ExitCode {
    fn from(signal: Termination) -> Self {
        ExitCode::from(signal.exit_status())
    }
}

/// Resolve once a termination signal arrives.
#[cfg(unix)]
pub async fn terminate() -> io::Result<Termination> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    tokio::select! {
        res = tokio::signal::ctrl_c() => res.map(|_| Termination::Interrupt),
        _ = sigterm.recv() => Ok(Termination::Terminate),
    }
}

/// Resolve once a termination signal arrives.
#[cfg(not(unix))]
pub async fn terminate() -> io::Result<Termination> {
    tokio::signal::ctrl_c().await.map(|_| Termination::Interrupt)
}
