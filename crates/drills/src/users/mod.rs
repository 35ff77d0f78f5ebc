mod cli;
mod routes;
mod server;

pub(crate) use server::shutdown_signal;

pub use cli::App;

use crate::prelude::{println, *};
use drills_core::users::{seed_users, User};
use serde_json::Value;

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        cli::Commands::Serve(options) => server::run_server(options, global).await,
        cli::Commands::Seed(options) => print_seed(options),
    }
}

fn print_seed(options: cli::SeedOptions) -> Result<()> {
    let users = seed_users();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&users)?);
        return Ok(());
    }

    let mut table = new_table();
    table.set_titles(prettytable::row!["ID", "Name", "Email"]);
    for user in &users {
        table.add_row(prettytable::row![
            field_text(user, "id"),
            field_text(user, "name"),
            field_text(user, "email")
        ]);
    }
    table.printstd();

    Ok(())
}

/// Strings print without their JSON quotes
fn field_text(user: &User, key: &str) -> String {
    match user.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(value) => value.to_string(),
        None => String::new(),
    }
}
