// console-rs/src/main.rs
// sandevistan-console - send one console action to the prompt dispatcher

use clap::{Arg, ArgAction, Command};
use config_rs::EnvConfigProvider;
use console::{ConsoleAction, ConsoleState, DispatcherClient, LogEffects};

fn text_arg() -> Arg {
    Arg::new("text")
        .num_args(0..)
        .trailing_var_arg(true)
        .help("Contents of the input field")
}

fn cli() -> Command {
    Command::new("sandevistan-console")
        .version(env!("CARGO_PKG_VERSION"))
        .about("SANDEVISTAN core console")
        .subcommand_required(true)
        .arg(
            Arg::new("url")
                .long("url")
                .global(true)
                .help("Dispatcher endpoint (overrides CONSOLE_DISPATCHER_URL)"),
        )
        .arg(
            Arg::new("mute")
                .long("mute")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Start with audio muted"),
        )
        .subcommand(
            Command::new("query")
                .about(ConsoleAction::TransmitQuery.label())
                .arg(text_arg()),
        )
        .subcommand(
            Command::new("decode")
                .about(ConsoleAction::DecodeTransmission.label())
                .arg(text_arg()),
        )
        .subcommand(Command::new("status").about(ConsoleAction::SystemStatus.label()))
        .subcommand(Command::new("glimpse").about(ConsoleAction::DatascapeGlimpse.label()))
}

#[tokio::main]
async fn main() {
    config_rs::load_dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = cli().get_matches();

    let Some((name, args)) = matches.subcommand() else {
        eprintln!("No command given. Use --help for usage.");
        std::process::exit(2);
    };

    // Global options are propagated into the subcommand's matches.
    let client = match args.get_one::<String>("url") {
        Some(url) => DispatcherClient::new(url.clone()),
        None => DispatcherClient::from_provider(&EnvConfigProvider::new()),
    };
    log::info!("Dispatcher endpoint: {}", client.endpoint());

    let (action, input) = match (name, args) {
        ("query", args) => (ConsoleAction::TransmitQuery, joined_text(args)),
        ("decode", args) => (ConsoleAction::DecodeTransmission, joined_text(args)),
        ("status", _) => (ConsoleAction::SystemStatus, String::new()),
        ("glimpse", _) => (ConsoleAction::DatascapeGlimpse, String::new()),
        _ => {
            eprintln!("Unknown command. Use --help for usage.");
            std::process::exit(2);
        }
    };

    let mut state = ConsoleState::new(LogEffects);
    if args.get_flag("mute") {
        state.toggle_mute();
    }
    state.access_core();

    let outcome = state.submit(&client, action, &input).await;

    println!("{}", state.output());

    if !outcome.is_success() {
        log::debug!("Submission ended with {:?}", outcome);
        std::process::exit(1);
    }
}

fn joined_text(args: &clap::ArgMatches) -> String {
    args.get_many::<String>("text")
        .map(|words| words.cloned().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}
