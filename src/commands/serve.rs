//! Serve command - expose every operation over HTTP

use todobox::adapters::sqlite::SqliteTodoStore;
use todobox::config::Config;
use todobox::domain::services::TodoService;
use todobox::server;

use super::open_store;

/// Open the database once and serve requests against it until interrupted
pub fn serve(config: &Config) -> anyhow::Result<()> {
    let conn = open_store(&config.database.path)?;
    let service = TodoService::new(SqliteTodoStore::new(&conn));
    let addr = config.server.bind_address();

    println!("Serving todobox on http://{addr}");
    println!("Database: {}", config.database.path.display());
    println!();
    println!("Press Ctrl+C to stop");

    server::tiny_http::serve(&service, &addr)
}
