use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use podium_conference::config::ConferenceConfig;
use podium_conference::infra::db::DbUserRepository;
use podium_conference::router::build_router;
use podium_conference::state::AppState;
use podium_conference::usecase::auth::{RegisterInput, RegisterUseCase};
use podium_conference_migration::Migrator;
use podium_core::tracing::init_tracing;
use podium_domain::role::Role;
use podium_session::cookie::CookieSettings;

#[derive(Parser)]
#[command(name = "conference", about = "Conference scheduling web application")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply pending migrations and serve HTTP (default).
    Serve,
    /// Create an account, e.g. the first administrator.
    CreateUser {
        #[arg(long)]
        name: String,
        #[arg(long)]
        password: String,
        #[arg(long, value_enum, default_value_t = RoleArg::Presenter)]
        role: RoleArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Presenter,
    Administrator,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Presenter => Role::Presenter,
            RoleArg::Administrator => Role::Administrator,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ConferenceConfig::from_env()?;
    init_tracing(config.log_format);

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .context("failed to apply migrations")?;
    }

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let secret = config
                .session_secret
                .as_deref()
                .context("SESSION_SECRET must be set")?;
            let cookies = CookieSettings {
                domain: config.cookie_domain.clone(),
                secure: config.cookie_secure,
            };
            let router = build_router(AppState::new(db, secret, cookies));

            let http_addr = format!("0.0.0.0:{}", config.conference_port);
            let listener = tokio::net::TcpListener::bind(&http_addr)
                .await
                .with_context(|| format!("failed to bind {http_addr}"))?;
            info!("conference service listening on {http_addr}");
            axum::serve(listener, router).await.context("server error")?;
        }
        Command::CreateUser {
            name,
            password,
            role,
        } => {
            let role = Role::from(role);
            let usecase = RegisterUseCase {
                repo: DbUserRepository { db },
            };
            let user = usecase
                .execute(RegisterInput {
                    name,
                    password,
                    role,
                })
                .await
                .context("failed to create user")?;
            info!(user_id = user.id, role = role.name(), "user created");
        }
    }
    Ok(())
}
