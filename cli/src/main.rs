//! `reservas`: operator command line for the reservation service.
//!
//! Talks to the same hosted tables as the browser client through the
//! `gateway` crate. Connection settings come from the environment (or a
//! `.env` file): `RESERVAS_URL`, `RESERVAS_ANON_KEY`, and optionally
//! `RESERVAS_SERVICE_KEY` for deleting auth users.

mod transport;


use clap::{ArgAction, Args, Parser, Subcommand};
use gateway::model::{NewProfile, NewResource, ReservationStatus, ResourceKind};
use gateway::{Gateway, GatewayConfig, GatewayError};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("invalid JSON output: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "reservas", about = "ReservaFácil operator CLI")]
struct Cli {
    /// Sign in as this user before running the command.
    #[arg(long, env = "RESERVAS_EMAIL", requires = "password")]
    email: Option<String>,

    #[arg(long, env = "RESERVAS_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register an account and give it an administrator profile.
    CreateAdmin {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "Admin")]
        name: String,
    },
    Resources(ResourcesCommand),
    Reservations(ReservationsCommand),
    Users(UsersCommand),
}

#[derive(Args, Debug)]
struct ResourcesCommand {
    #[command(subcommand)]
    command: ResourcesSubcommand,
}

#[derive(Subcommand, Debug)]
enum ResourcesSubcommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        /// `room` or `equipment`.
        #[arg(long, default_value = "room")]
        kind: ResourceKind,
        #[arg(long, default_value = "")]
        description: String,
    },
}

#[derive(Args, Debug)]
struct ReservationsCommand {
    #[command(subcommand)]
    command: ReservationsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ReservationsSubcommand {
    List,
    Confirm { id: String },
    Cancel { id: String },
}

#[derive(Args, Debug)]
struct UsersCommand {
    #[command(subcommand)]
    command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
enum UsersSubcommand {
    List,
    SetAdmin {
        id: String,
        #[arg(action = ArgAction::Set)]
        is_admin: bool,
    },
    /// Delete the profile, then the auth user (needs `RESERVAS_SERVICE_KEY`
    /// unless signed in as a user allowed to do so).
    Delete { id: String },
}

type Client = Gateway<ReqwestTransport>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GatewayConfig::from_env()?;
    let mut client = Gateway::new(config, ReqwestTransport::new());

    if let (Some(email), Some(password)) = (&cli.email, &cli.password) {
        let session = client.sign_in(email, password).await?;
        client = client.with_access_token(Some(session.access_token));
    }

    match cli.command {
        Command::CreateAdmin { email, password, name } => run_create_admin(&client, &email, &password, &name).await,
        Command::Resources(resources) => run_resources(&client, resources).await,
        Command::Reservations(reservations) => run_reservations(&client, reservations).await,
        Command::Users(users) => run_users(&client, users).await,
    }
}

async fn run_create_admin(client: &Client, email: &str, password: &str, name: &str) -> Result<(), CliError> {
    let outcome = client.sign_up(email, password).await?;
    // Write the profile as the new user when sign-up signed them in.
    let token = outcome.session.map(|session| session.access_token);
    let profile = NewProfile {
        id: outcome.user.id.clone(),
        name: name.to_owned(),
        email: Some(email.to_owned()),
        is_admin: true,
    };
    client
        .clone()
        .with_access_token(token.or_else(|| client.access_token().map(str::to_owned)))
        .create_profile(&profile)
        .await?;
    tracing::info!(user_id = %outcome.user.id, "admin user created");
    print_json(&json!({ "id": outcome.user.id, "email": email, "name": name, "is_admin": true }))
}

async fn run_resources(client: &Client, resources: ResourcesCommand) -> Result<(), CliError> {
    match resources.command {
        ResourcesSubcommand::List => print_json(&client.list_resources().await?),
        ResourcesSubcommand::Create { name, kind, description } => {
            client.create_resource(&NewResource { name, kind, description }).await?;
            print_ok()
        }
    }
}

async fn run_reservations(client: &Client, reservations: ReservationsCommand) -> Result<(), CliError> {
    match reservations.command {
        ReservationsSubcommand::List => print_json(&client.list_reservations().await?),
        ReservationsSubcommand::Confirm { id } => {
            client.set_reservation_status(&id, ReservationStatus::Confirmed).await?;
            print_ok()
        }
        ReservationsSubcommand::Cancel { id } => {
            client.set_reservation_status(&id, ReservationStatus::Cancelled).await?;
            print_ok()
        }
    }
}

async fn run_users(client: &Client, users: UsersCommand) -> Result<(), CliError> {
    match users.command {
        UsersSubcommand::List => print_json(&client.list_profiles().await?),
        UsersSubcommand::SetAdmin { id, is_admin } => {
            client.set_admin(&id, is_admin).await?;
            print_ok()
        }
        UsersSubcommand::Delete { id } => {
            client.delete_user(&id).await?;
            print_ok()
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

fn print_ok() -> Result<(), CliError> {
    print_json(&json!({ "ok": true }))
}
