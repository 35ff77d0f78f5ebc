#[derive(Debug, clap::Parser)]
#[command(name = "users")]
#[command(about = "In-memory users CRUD API")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Start the HTTP API, seeded with the default users
    #[clap(name = "serve")]
    Serve(ServeOptions),

    /// Print the records the API starts with
    #[clap(name = "seed")]
    Seed(SeedOptions),
}

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "DRILLS_PORT", default_value = "5000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "DRILLS_HOST", default_value = "127.0.0.1")]
    pub host: String,
}

#[derive(Debug, clap::Args)]
pub struct SeedOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
