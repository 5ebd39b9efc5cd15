use clap::{Parser, ValueEnum};
use db_infra::config::db::{DbKind, RuntimeEnv};
use db_infra::{build_pool, orchestrate_migration};
use migration::MigrationCommand;
use tracing::{error, info};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
    /// Apply pending migrations, then load the Vail Inn sample data
    Seed,
}

impl Command {
    fn migration(self) -> MigrationCommand {
        match self {
            Command::Up | Command::Seed => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Env {
    Prod,
    Test,
}

/// In-memory SQLite is not offered: the database would vanish when the
/// command exits.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Hotel database migration tool")]
struct Args {
    #[arg(value_enum)]
    command: Command,

    /// Runtime environment
    #[arg(short, long, value_enum, default_value = "test")]
    env: Env,

    /// Database type
    #[arg(short, long, value_enum, default_value = "postgres")]
    db: Db,
}

async fn run(args: Args) -> Result<(), String> {
    let env = match args.env {
        Env::Prod => RuntimeEnv::Prod,
        Env::Test => RuntimeEnv::Test,
    };
    let db_kind = match args.db {
        Db::Postgres => DbKind::Postgres,
        Db::SqliteFile => DbKind::SqliteFile,
    };

    orchestrate_migration(env, db_kind, args.command.migration())
        .await
        .map_err(|e| format!("Migration failed: {e}"))?;

    if let Command::Seed = args.command {
        let pool = build_pool(env, db_kind)
            .await
            .map_err(|e| format!("Seed failed to connect: {e}"))?;
        let written = hotel_backend::seed::seed_if_empty(&pool)
            .await
            .map_err(|e| format!("Seed failed: {e}"))?;
        info!(written, "seed complete");
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,db_infra=info,hotel_backend=info,sqlx=warn")
        .init();

    let args = Args::parse();

    if let Err(message) = run(args).await {
        error!("{message}");
        std::process::exit(1);
    }
}
