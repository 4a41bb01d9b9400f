//! Bookshelf — interactive entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config
//!   3. Init logger at the configured level
//!   4. Open the store and build the library (seed + stored books)
//!   5. Run the menu on stdin/stdout until exit or EOF

use std::io;

use tracing::info;

use bookshelf::config;
use bookshelf::error::AppError;
use bookshelf::library::Library;
use bookshelf::logger;
use bookshelf::shell::Shell;
use bookshelf::storage::{BookStore, JsonFileStore, MemoryStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let config = config::load()?;
    logger::init(&config.log_level, config.log_file.as_deref())?;

    info!(
        library_path = %config.library.path.display(),
        seed = config.library.seed,
        persist = config.library.persist,
        strict_input = config.library.strict_input,
        "config loaded"
    );

    let store: Box<dyn BookStore> = if config.library.persist {
        Box::new(JsonFileStore::new(config.library.path.clone()))
    } else {
        Box::new(MemoryStore::new())
    };
    let library = Library::bootstrap(store.as_ref(), config.library.seed)?;

    let mut shell = Shell::new(library, store.as_ref(), io::stdin().lock(), io::stdout().lock())
        .strict_input(config.library.strict_input);
    let end = shell.run()?;

    info!(?end, "session finished");
    Ok(())
}
