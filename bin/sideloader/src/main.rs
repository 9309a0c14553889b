// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{env, error, process::ExitCode};

use sideloader_bridge::{BridgeConfig, Marshaller, NativeBackend, Result};
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_MESSAGE: &str = "Hello world from Rust";

fn logger_configuration() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

/// `err` followed by each of its sources, separated by `: `
fn error_chain(err: &dyn error::Error) -> String {
	let mut message = err.to_string();
	let mut source = err.source();
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	message
}

fn run(message: &str) -> Result<()> {
	let config = BridgeConfig::from_env()?;
	let backend = NativeBackend::load_from(&config)?;

	Marshaller::new(config.encoding).call(&backend, message)
}

fn main() -> ExitCode {
	logger_configuration();

	let message = env::args().nth(1).unwrap_or_else(|| DEFAULT_MESSAGE.to_string());

	match run(&message) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!("{}", error_chain(&err));
			ExitCode::FAILURE
		}
	}
}
