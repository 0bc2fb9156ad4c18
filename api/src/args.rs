use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use storefront_core::domain::common::{
    CatalogConfig, DatabaseConfig, StoreBackend, StorefrontConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "storefront-api", about = "Read-only product catalog API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:4200"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 5000)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Public base URL that relative picture paths are resolved against.
    #[arg(long = "api-url", env = "API_URL", default_value = "http://localhost:5000/")]
    pub api_url: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct DatabaseArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "storefront")]
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Store {
    Postgres,
    Memory,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CatalogArgs {
    #[arg(long = "store", env = "CATALOG_STORE", value_enum, default_value_t = Store::Postgres)]
    pub store: Store,

    /// JSON catalog snapshot, read when the memory store is selected.
    #[arg(
        long = "seed-file",
        env = "CATALOG_SEED_FILE",
        default_value = "seed/catalog.json"
    )]
    pub seed_file: PathBuf,

    #[arg(long = "default-page-size", env = "DEFAULT_PAGE_SIZE", default_value_t = 6)]
    pub default_page_size: u64,

    #[arg(long = "max-page-size", env = "MAX_PAGE_SIZE", default_value_t = 50)]
    pub max_page_size: u64,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for StorefrontConfig {
    fn from(args: Args) -> Self {
        let store = match args.catalog.store {
            Store::Postgres => StoreBackend::Postgres,
            Store::Memory => StoreBackend::Memory {
                seed_file: args.catalog.seed_file,
            },
        };

        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            store,
            catalog: CatalogConfig::with_page_sizes(
                args.catalog.default_page_size,
                args.catalog.max_page_size,
            ),
        }
    }
}
