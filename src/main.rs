use tracing_subscriber::EnvFilter;

use assistant_bot::config::Config;

fn main() {
    let mut config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--prompt" | "-p" => match args.next() {
                Some(p) => config.prompt = p,
                None => {
                    eprintln!("Error: --prompt requires a value");
                    std::process::exit(1);
                }
            },
            "--help" | "-h" => {
                println!("Assistant bot - in-memory contact book");
                println!();
                println!("Usage: assistant-bot [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -p, --prompt <TEXT>    Input prompt (default: \">>> \")");
                println!("  -h, --help             Show this help");
                println!();
                println!("Environment: BOT_LOG_LEVEL, BOT_PROMPT, BOT_LOOKAHEAD_DAYS");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    // Logs go to stderr; stdout is the conversation.
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    assistant_bot::cli::run(config);
}
