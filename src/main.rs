#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod fmt;
mod prelude;
mod quantity;
mod session;
mod share;
mod state;
mod storage;
mod tables;

use std::time::Instant;

use chrono::Local;
use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Output},
    core::projection::{project_fuel, project_generator},
    prelude::*,
    session::Session,
    state::Mode,
    storage::{FileStorage, Storage},
    tables::{
        build_comparison_table,
        build_costs_table,
        build_fuel_table,
        build_generator_table,
    },
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    debug!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let storage = FileStorage::open(&args.state_file)?;
    let mut session = Session::builder()
        .storage(storage)
        .base_url(args.share_url)
        .maybe_link(args.url)
        .boot();

    let output = args.command.run(&mut session, Local::now().date_naive());
    session.commit(Instant::now());
    if let Some(address) = session.address() {
        info!(%address, "Current address");
    }

    match output {
        Output::Estimate => render(&session),
        Output::Text(text) => println!("{text}"),
    }
    Ok(())
}

fn render<S: Storage>(session: &Session<S>) {
    let state = session.state();
    let costs = match state.mode {
        Mode::Fuel => {
            let projection = project_fuel(&state.fuel);
            println!("{}", build_fuel_table(&state.fuel, &projection, state.theme));
            projection.costs
        }
        Mode::Generator => {
            let projection = project_generator(&state.generator);
            println!("{}", build_generator_table(&state.generator, &projection, state.theme));
            projection.costs
        }
    };
    println!("{}", build_costs_table(&costs, state.theme));
    if let Some(comparison) = session.comparison(state.mode) {
        println!("{}", build_comparison_table(&comparison, state.theme));
    }
}
