use crate::prelude::*;
use clap::Parser;

mod auth;
mod error;
mod errors;
mod paradigms;
mod parity;
mod prelude;
mod prompt;
mod search;
mod stats;
mod users;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Small programming exercises: searching, programming paradigms, statistics, error handling, an in-memory users CRUD API and a login API"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "DRILLS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Linear and binary search over a list of integers
    Search(crate::search::SearchOptions),

    /// In-memory users CRUD API
    Users(crate::users::App),

    /// Square the even numbers of a list in three programming styles
    Paradigms(crate::paradigms::ParadigmsOptions),

    /// Tell whether a number is even or odd
    Parity(crate::parity::ParityOptions),

    /// Variance, covariance and Pearson correlation of two series
    Stats(crate::stats::StatsOptions),

    /// JWT and session login API with validation and HTML sanitizing
    Auth(crate::auth::App),

    /// Catch a synchronous and two asynchronous errors
    Errors(crate::errors::ErrorsOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Search(options) => crate::search::run(options, app.global).await,
        SubCommands::Users(sub_app) => crate::users::run(sub_app, app.global).await,
        SubCommands::Paradigms(options) => crate::paradigms::run(options, app.global).await,
        SubCommands::Parity(options) => crate::parity::run(options, app.global).await,
        SubCommands::Stats(options) => crate::stats::run(options, app.global).await,
        SubCommands::Auth(sub_app) => crate::auth::run(sub_app, app.global).await,
        SubCommands::Errors(options) => crate::errors::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
