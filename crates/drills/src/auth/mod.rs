mod cli;
mod routes;
mod server;
mod token;

pub use cli::App;

use crate::prelude::*;

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        cli::Commands::Serve(options) => server::run_server(options, global).await,
    }
}
