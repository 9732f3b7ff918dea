use clap::Parser;

use crate::{api::Cors, state::StateHandler, util::args::Args};

mod api;
mod constants;
mod state;
mod util;

#[macro_use]
extern crate rocket;

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    let args = Args::parse();
    let state_handler = StateHandler::new(args.reading_source());

    // Rocket's logger only starts when igniting, so log after that
    let rocket = api::build(args.figment(), state_handler, Cors::new(args.cors_origin.clone()))
        .ignite()
        .await?;
    match args.seed {
        Some(seed) => log::info!("Simulating sensor readings with seed {seed} and noise ±{} cm", args.noise),
        None => log::info!("Simulating sensor readings with noise ±{} cm", args.noise),
    }
    log::info!("Use POST /api/simulate to generate new readings.");

    // launch().await will block until it receives a shutdown request (e.g. Ctrl+C)
    rocket.launch().await?;
    log::info!("Shutting down central node...");
    Ok(())
}
