use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;
use std::sync::mpsc::channel;

use docseek::App;
use docseek::config::{self, Config};
use docseek::error::DocseekError;
use docseek::query::worker::spawn_worker;
use docseek::query::{DocumentIndex, load_documents, load_documents_from_reader};
use docseek::search::{Dispatch, Document, SearchIntent, SearchStore};

/// Interactive document search
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive search over a collection of documents"
)]
struct Args {
    /// Documents file, a JSON array or one JSON document per line (if not provided, reads from stdin)
    documents: Option<PathBuf>,

    /// Query to run on startup
    #[arg(short, long)]
    query: Option<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/docseek-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/docseek-debug.log")
            .expect("Failed to open /tmp/docseek-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== DOCSEEK DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Parsed first so --help and --version print nothing else
    let args = Args::parse();

    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        log::warn!("{}", warning);
        eprintln!("docseek: {}", warning);
    }

    // Before the terminal is taken over, so errors land on stderr
    let documents = read_documents(args.documents.as_deref())?;
    log::debug!("Loaded {} documents", documents.len());

    let terminal = init_terminal()?;
    let result = run(terminal, documents, args.query, &config_result.config);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== DOCSEEK DEBUG SESSION ENDED ===");

    Ok(())
}

fn read_documents(path: Option<&std::path::Path>) -> Result<Vec<Document>, DocseekError> {
    match path {
        Some(path) => load_documents(path),
        None => load_documents_from_reader(std::io::stdin().lock()),
    }
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    documents: Vec<Document>,
    initial_query: Option<String>,
    config: &Config,
) -> Result<()> {
    let (request_tx, request_rx) = channel();
    let (response_tx, response_rx) = channel();

    let (mut store, dispatcher) = SearchStore::new(
        initial_query.clone().unwrap_or_default(),
        request_tx,
        response_rx,
    );

    // Spawned after init_terminal so its panic hook chains to the terminal restore
    let index = DocumentIndex::new(documents, &config.search);
    spawn_worker(Box::new(index), request_rx, response_tx);

    let mut app = App::new(store.snapshot(), dispatcher.clone(), config);
    app.attach(&mut store);

    if let Some(query) = initial_query {
        dispatcher.dispatch(SearchIntent::Query(query));
    }

    loop {
        // Apply worker results before render
        store.poll();
        app.poll_snapshots();

        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
