pub mod postgres;

pub use postgres::bot_config::PostgresBotConfigRepository;
pub use postgres::player::PostgresPlayerRepository;
