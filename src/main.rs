// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use log::info;
use numeric_input_fix::{FixConfig, run_to_stdout};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let summary = run_to_stdout(&FixConfig::default())?;
    info!(
        "{} fixed, {} unchanged, {} not found",
        summary.fixed(),
        summary.unchanged(),
        summary.missing()
    );

    Ok(())
}
