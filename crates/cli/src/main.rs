use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jokebot")]
#[command(about = "Jokebot CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version
    Version,

    /// Chat with the joke bot (interactive). The bot greets after your first message and loops until /exit.
    Chat {
        /// Optional session id to use instead of a generated one.
        #[arg(long, value_name = "ID")]
        session: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Version) => {
            println!("jokebot {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Chat { session }) => {
            if let Err(e) = run_chat(session).await {
                log::error!("chat failed: {}", e);
                std::process::exit(1);
            }
        }
        None => {
            println!("Run with --help for usage");
        }
    }
}

async fn run_chat(session: Option<String>) -> anyhow::Result<()> {
    use std::io::{self, Write};

    let store = lib::session::SessionStore::new();
    let session_id = match session {
        Some(id) => store.get_or_create(id).await,
        None => store.create().await,
    };
    log::info!("chat session {}", session_id);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.eq_ignore_ascii_case("/exit") || input.eq_ignore_ascii_case("/quit") {
            break;
        }

        match lib::host::run_turn(&store, &session_id, input).await {
            Ok(posts) => {
                for post in posts {
                    println!("< {}", post.trim());
                }
            }
            Err(e) => {
                eprintln!("chat error: {}", e);
            }
        }
    }

    Ok(())
}
