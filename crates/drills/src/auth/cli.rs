#[derive(Debug, clap::Parser)]
#[command(name = "auth")]
#[command(about = "JWT and session login API with input validation and HTML sanitizing")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Start the HTTP API
    #[clap(name = "serve")]
    Serve(ServeOptions),
}

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "DRILLS_AUTH_PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "DRILLS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Secret used to sign tokens
    #[arg(
        long,
        env = "DRILLS_AUTH_SECRET",
        default_value = "my_secret_key",
        hide_env_values = true
    )]
    pub secret: String,

    /// Token lifetime in seconds
    #[arg(long, env = "DRILLS_AUTH_TOKEN_TTL", default_value = "3600")]
    pub token_ttl: u64,

    /// Browser origin allowed to call the API with credentials
    #[arg(long, env = "DRILLS_CORS_ORIGIN", default_value = "http://localhost:5173")]
    pub cors_origin: String,
}
