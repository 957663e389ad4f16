//! listings CLI
//!
//! One-shot subcommands plus an interactive shell that keeps a session open.
//! `sort` (column-click toggling) and `reset` only exist inside the shell,
//! since both act on state that a one-shot run throws away.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use listings::form::FormInput;
use listings::query::{Direction, SortState, MAX_PRICE_KEY, MIN_PRICE_KEY, NO_MATCHES};
use listings::record::Field;
use listings::session::Submission;
use listings::store::StoreObserver;
use listings::{table, AreaListing, Config, Record, Result, RoomListing, Schema, Session};

/// listings
#[derive(Parser, Debug)]
#[command(name = "listings")]
#[command(about = "Maintain a small list of real-estate listings")]
#[command(version)]
struct Args {
    /// JSON data file
    #[arg(short, long, default_value = "properties.json")]
    data: PathBuf,

    /// Record schema: rooms (bedrooms/bathrooms) or area (total_sqft/bath/bhk)
    #[arg(short, long, default_value = "rooms")]
    schema: String,

    /// Price model file (area schema only)
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Write the data file on a single line
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(flatten)]
    Action(Action),

    /// Interactive shell (one session: reset and sort toggles apply)
    Shell,
}

#[derive(Subcommand, Debug, Clone)]
enum Action {
    /// Show every listing
    List {
        /// Column to sort by
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,
    },

    /// Show one listing by exact name
    Show {
        name: String,
    },

    /// Add a listing
    Add {
        /// Listing name (required)
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Update the first listing with this exact name
    Update {
        name: String,

        /// New name
        #[arg(long)]
        rename: Option<String>,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Remove every listing with this exact name
    Remove {
        name: String,
    },

    /// Search listings (all given conditions must match)
    Search {
        /// Name (case-insensitive)
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: FieldArgs,

        /// Minimum price (inclusive)
        #[arg(long)]
        min_price: Option<String>,

        /// Maximum price (inclusive)
        #[arg(long)]
        max_price: Option<String>,
    },

    /// Rewrite the data file
    Save,
}

/// Per-field values, passed through as raw text so validation can report them.
/// An empty value clears the field on update.
#[derive(ClapArgs, Debug, Clone, Default)]
struct FieldArgs {
    #[arg(long)]
    bedrooms: Option<String>,

    #[arg(long)]
    bathrooms: Option<String>,

    #[arg(long)]
    total_sqft: Option<String>,

    #[arg(long)]
    bath: Option<String>,

    #[arg(long)]
    bhk: Option<String>,

    #[arg(long)]
    price: Option<String>,
}

impl FieldArgs {
    fn fill(&self, form: &mut FormInput) {
        let pairs = [
            ("bedrooms", &self.bedrooms),
            ("bathrooms", &self.bathrooms),
            ("total_sqft", &self.total_sqft),
            ("bath", &self.bath),
            ("bhk", &self.bhk),
            ("price", &self.price),
        ];
        for (key, value) in pairs {
            if let Some(value) = value {
                form.insert(key, value.as_str());
            }
        }
    }
}

/// A line typed into the shell
#[derive(Parser, Debug)]
#[command(name = "listings", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    #[command(flatten)]
    Action(Action),

    /// Click a column header: same column flips, new column ascends
    Sort {
        column: String,
    },

    /// Discard this session's changes (the data file is not touched)
    Reset,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Redraws the table after every store change (shell only)
struct TablePrinter;

impl<R: Record> StoreObserver<R> for TablePrinter {
    fn refresh(&mut self, rows: &[&R], sort: &SortState<R::Field>) {
        print!("{}", table::render(rows, sort));
        let _ = io::stdout().flush();
    }
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,listings=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let schema: Schema = match args.schema.parse() {
        Ok(schema) => schema,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(2);
        }
    };

    // Build config from args
    let mut builder = Config::builder()
        .data_file(&args.data)
        .schema(schema)
        .pretty(!args.compact);
    if let Some(model) = &args.model {
        builder = builder.model_file(model);
    }
    let config = builder.build();

    tracing::debug!("listings v{}", listings::VERSION);

    let result = match schema {
        Schema::Rooms => run::<RoomListing>(&config, args.command),
        Schema::Area => run::<AreaListing>(&config, args.command),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run<R: Record>(config: &Config, command: Commands) -> Result<()> {
    let mut session = Session::<R>::open(config)?;

    if let Some(estimator) = session.estimator() {
        if !estimator.is_available() {
            println!("Warning: Prediction model not found or loaded.");
        }
    }

    match command {
        Commands::Action(action) => execute(&mut session, action, false),
        Commands::Shell => shell(&mut session),
    }
}

fn shell<R: Record>(session: &mut Session<R>) -> Result<()> {
    println!(
        "listings {} ({} schema). Type 'help' for commands, 'quit' to leave.",
        listings::VERSION,
        R::SCHEMA
    );
    session.store_mut().set_observer(TablePrinter);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let words = match split_words(&line) {
            Ok(words) if words.is_empty() => continue,
            Ok(words) => words,
            Err(msg) => {
                println!("{}", msg);
                continue;
            }
        };

        let parsed = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                // Help and usage errors both render through clap
                let _ = e.print();
                continue;
            }
        };

        // The observer redraws after sort and reset
        let result = match parsed.command {
            ShellCommand::Quit => break,
            ShellCommand::Action(action) => execute(session, action, true),
            ShellCommand::Sort { column } => session.click_column(&column).map(|_| ()),
            ShellCommand::Reset => {
                session.reset();
                Ok(())
            }
        };
        if let Err(e) = result {
            if e.is_user_error() {
                println!("Warning: {}", e);
            } else {
                tracing::error!("{}", e);
            }
        }
    }
    Ok(())
}

/// Run one action. In the shell the observer already redraws after changes.
fn execute<R: Record>(session: &mut Session<R>, action: Action, interactive: bool) -> Result<()> {
    match action {
        Action::List { sort, desc } => {
            let sorted = sort.is_some();
            if let Some(column) = sort {
                let field = R::Field::from_key(&column)?;
                let direction = if desc {
                    Direction::Descending
                } else {
                    Direction::Ascending
                };
                session.store_mut().sort(field, direction);
            }
            // The observer has already redrawn a sorted shell table
            if !(interactive && sorted) {
                print_view(session);
            }
        }

        Action::Show { name } => match session.store().lookup(&name) {
            Some((_, record)) => {
                print!("{}", table::render(&[record], session.store().sort_state()));
            }
            None => println!("No listing named '{}'.", name),
        },

        Action::Add { name, fields } => {
            let mut form = FormInput::new();
            if let Some(name) = name {
                form.insert("name", name);
            }
            fields.fill(&mut form);

            let submission = session.submit_add(&form)?;
            report(&submission);
            if !interactive {
                println!("Added '{}'.", form.text("name").unwrap_or_default());
            }
        }

        Action::Update { name, rename, fields } => {
            let mut form = FormInput::new();
            if let Some(rename) = rename {
                form.insert("name", rename);
            }
            fields.fill(&mut form);

            match session.submit_update(&name, &form)? {
                Some(submission) => {
                    report(&submission);
                    if !interactive {
                        println!("Updated '{}'.", name);
                    }
                }
                None => println!("No listing named '{}'.", name),
            }
        }

        Action::Remove { name } => {
            let removed = session.remove(&name)?;
            if removed == 0 {
                println!("No listing named '{}'.", name);
            } else if !interactive {
                println!("Removed {} listing(s) named '{}'.", removed, name);
            }
        }

        Action::Search {
            name,
            fields,
            min_price,
            max_price,
        } => {
            let mut form = FormInput::new();
            if let Some(name) = name {
                form.insert("name", name);
            }
            fields.fill(&mut form);
            if let Some(min) = min_price {
                form.insert(MIN_PRICE_KEY, min);
            }
            if let Some(max) = max_price {
                form.insert(MAX_PRICE_KEY, max);
            }

            let rows = session.submit_search(&form)?;
            if rows.is_empty() {
                println!("{}", NO_MATCHES);
            } else {
                print!("{}", table::render(&rows, session.store().sort_state()));
            }
        }

        Action::Save => {
            session.save()?;
            println!("Saved {} listing(s).", session.store().len());
        }
    }
    Ok(())
}

fn print_view<R: Record>(session: &Session<R>) {
    let store = session.store();
    print!("{}", table::render(&store.view(), store.sort_state()));
}

fn report(submission: &Submission) {
    if let Some(price) = submission.estimated_price {
        println!("Estimated price: {:.2}", price);
    }
    if let Some(warning) = &submission.warning {
        println!("Warning: {}", warning);
    }
}

/// Split a shell line into words, honoring single and double quotes
fn split_words(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("Unterminated quote.".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
