use anyhow::Result;
use clap::{Parser, Subcommand};
use gridlore::query::{self, AgentCard, GuardianCard};
use gridlore::{Config, EntityKind, EntityStore, Record, Table};
use serde::Serialize;
use serde_json::json;

#[derive(Parser, Debug)]
#[command(name = "gridlore")]
#[command(about = "Query the Grid agents and Guardians dataset")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Index cards for every record of a kind, in declaration order
    List {
        kind: EntityKind,
        /// Order agents by layer precedence instead of declaration order
        #[arg(long)]
        by_layer: bool,
    },
    /// Full record
    Show { kind: EntityKind, id: String },
    /// Related records of the same kind
    Related { kind: EntityKind, id: String },
    /// Previous and next records in declaration order
    Neighbors { kind: EntityKind, id: String },
    /// Record, related records and neighbors in one payload
    Detail { kind: EntityKind, id: String },
    /// Agents grouped by layer
    Layers,
    /// Dangling relation ids per kind
    Validate,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", config.gridlore.log_level.as_str())
    ).init();
    log::debug!("Configuration: {}", config.describe_source());

    let store = EntityStore::load(&config.validation)?;
    log::debug!("Loaded {} agents and {} guardians", store.agents().len(), store.guardians().len());

    match args.command {
        Command::List { kind, by_layer } => list(&store, &config, kind, by_layer),
        Command::Show { kind, id } => print_json(&store.by_id(kind, &id)?),
        Command::Related { kind, id } => {
            let record = store.by_id(kind, &id)?;
            print_json(&store.related_of(record))
        }
        Command::Neighbors { kind, id } => match kind {
            EntityKind::Agent => print_neighbors(store.agents(), &id),
            EntityKind::Guardian => print_neighbors(store.guardians(), &id),
        },
        Command::Detail { kind, id } => match kind {
            EntityKind::Agent => print_json(&query::detail(store.agents(), &id)?),
            EntityKind::Guardian => print_json(&query::detail(store.guardians(), &id)?),
        },
        Command::Layers => {
            let groups: Vec<_> = query::group_by_layer(store.agents(), &config.precedence())
                .into_iter()
                .map(|(layer, agents)| {
                    json!({
                        "layer": layer,
                        "agents": agents.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
                    })
                })
                .collect();
            print_json(&groups)
        }
        Command::Validate => {
            let agents = query::dangling_references(store.agents());
            let guardians = query::dangling_references(store.guardians());
            print_json(&json!({
                "agents": agents.iter().map(|(from, to)| json!({"id": from, "missing": to})).collect::<Vec<_>>(),
                "guardians": guardians.iter().map(|(from, to)| json!({"id": from, "missing": to})).collect::<Vec<_>>(),
            }))
        }
    }
}

fn list(store: &EntityStore, config: &Config, kind: EntityKind, by_layer: bool) -> Result<()> {
    match kind {
        EntityKind::Agent => {
            let agents = if by_layer {
                query::order_by_layer(store.agents(), &config.precedence())
            } else {
                store.agents().iter().collect()
            };
            let cards: Vec<_> = agents
                .into_iter()
                .map(|a| AgentCard::new(a, config.cards.preview_len))
                .collect();
            print_json(&cards)
        }
        EntityKind::Guardian => {
            if by_layer {
                anyhow::bail!("--by-layer applies to agents only");
            }
            let cards: Vec<GuardianCard> = store.guardians().iter().map(GuardianCard::from).collect();
            print_json(&cards)
        }
    }
}

fn print_neighbors<T: Record + Serialize>(table: &Table<T>, id: &str) -> Result<()> {
    // neighbors() answers "none" for an unknown id; the CLI reports it instead.
    table.by_id(id)?;
    print_json(&query::neighbors(table, id))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
