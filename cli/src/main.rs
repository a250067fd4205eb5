mod client;
mod render;

use atlas::{Action, LoadTicket, MapState, Store, StoreError};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use crate::client::ApiClient;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("{0}")]
    Store(#[from] StoreError),
    #[error("server returned {status} {code}: {message}")]
    Server { status: u16, code: String, message: String },
    #[error("map {0} has no rooms")]
    EmptyMap(String),
    #[error("load of map {0} was superseded")]
    StaleLoad(String),
}

#[derive(Parser, Debug)]
#[command(name = "mapkeeper-cli", about = "Mapkeeper API CLI")]
struct Cli {
    #[arg(long, env = "MAPKEEPER_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the signed-in user.
    User,
    /// Print directories and their maps.
    Dirs {
        /// Defaults to the signed-in user.
        #[arg(long)]
        user_id: Option<String>,
    },
    Map(MapCommand),
}

#[derive(Args, Debug)]
struct MapCommand {
    #[command(subcommand)]
    command: MapSubcommand,
}

#[derive(Subcommand, Debug)]
enum MapSubcommand {
    /// Print the sidebar and a room.
    Show {
        map_id: String,
        /// Room to show instead of the active one.
        #[arg(long)]
        room: Option<String>,
    },
    /// Post a `{"type": ..., "payload": ...}` action.
    Dispatch {
        map_id: String,
        #[arg(long)]
        action: String,
    },
    /// Report invariant violations and dangling room links.
    Check { map_id: String },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let client = ApiClient::new(&cli.base_url);

    match cli.command {
        Command::User => run_user(&client).await,
        Command::Dirs { user_id } => run_dirs(&client, user_id).await,
        Command::Map(map) => match map.command {
            MapSubcommand::Show { map_id, room } => run_map_show(&client, &map_id, room).await,
            MapSubcommand::Dispatch { map_id, action } => run_map_dispatch(&client, &map_id, &action).await,
            MapSubcommand::Check { map_id } => run_map_check(&client, &map_id).await,
        },
    }
}

async fn run_user(client: &ApiClient) -> Result<(), CliError> {
    let user = client.user().await?;
    println!("{} ({})", user.name, user.id);
    Ok(())
}

async fn run_dirs(client: &ApiClient, user_id: Option<String>) -> Result<(), CliError> {
    let user_id = match user_id {
        Some(id) => id,
        None => client.user().await?.id,
    };
    for dir in client.directories(&user_id).await? {
        println!("{} ({})", dir.name, dir.id);
        for map in dir.maps {
            println!("  {} ({})", map.name, map.id);
        }
    }
    Ok(())
}

/// Fetch a map into a fresh store, fenced like any other load.
async fn load_store(client: &ApiClient, map_id: &str) -> Result<Store, CliError> {
    let mut store = Store::with_state(MapState::default());
    let ticket = store.begin_load();
    let data = client.map(map_id).await?;
    install(&mut store, ticket, data)?;
    Ok(store)
}

fn install(store: &mut Store, ticket: LoadTicket, data: MapState) -> Result<(), CliError> {
    let map_id = data.id.clone();
    if store.finish_load(ticket, data) { Ok(()) } else { Err(CliError::StaleLoad(map_id)) }
}

async fn run_map_show(client: &ApiClient, map_id: &str, room: Option<String>) -> Result<(), CliError> {
    let mut store = load_store(client, map_id).await?;
    if let Some(room_id) = room {
        atlas::lookup::room_by_id(&store.state().room_list, &room_id)?;
        store.dispatch(Action::SetActiveRoomId(room_id))?;
    }

    print!("{}", render::render_sidebar(store.state()));
    let active = store.active_room().ok_or_else(|| CliError::EmptyMap(map_id.to_owned()))?;
    println!();
    print!("{}", render::render_room(store.state(), active));
    Ok(())
}

async fn run_map_dispatch(client: &ApiClient, map_id: &str, raw: &str) -> Result<(), CliError> {
    let envelope: Value = serde_json::from_str(raw)?;
    let action = Action::from_wire(envelope)?;
    let state = client.dispatch(map_id, &action).await?;
    print!("{}", render::render_sidebar(&state));
    Ok(())
}

async fn run_map_check(client: &ApiClient, map_id: &str) -> Result<(), CliError> {
    let store = load_store(client, map_id).await?;
    print!("{}", render::render_check(store.state()));
    Ok(())
}
