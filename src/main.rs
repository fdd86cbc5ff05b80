mod core;
mod tests;
mod ui;

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::counter::{Counter, CounterConfig};
use crate::ui::login::LoginForm;
use crate::ui::screen::CounterScreen;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    screen: Screen,
}

#[derive(Subcommand, Debug)]
enum Screen {
    /// Interactive counter with increment/decrement controls
    Counter {
        #[arg(short, long, default_value_t = 0)]
        initial: i64,
        #[arg(short, long, default_value_t = 1)]
        step: i64,
    },
    /// Login form that prints the submission as JSON
    Login,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_command_line_args();

    let _guard = init_tracing()?;

    match args.screen {
        Screen::Counter { initial, step } => run_counter_screen(initial, step)?,
        Screen::Login => run_login_form()?,
    }

    Ok(())
}

fn parse_command_line_args() -> Args {
    Args::parse()
}

fn init_tracing() -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))?;

    let file_appender = tracing_appender::rolling::daily("./logs", "trace.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name, non_blocking);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(bunyan_formatting_layer)
        .try_init()?;

    // The guard has to outlive main or buffered log lines never hit the file.
    Ok(guard)
}

fn run_counter_screen(initial: i64, step: i64) -> Result<(), Box<dyn std::error::Error>> {
    let counter = Counter::with_config(CounterConfig { initial_count: initial, step });
    let mut screen = CounterScreen::new(counter);

    println!("{}", screen.readout());
    println!("Controls: increment, decrement (quit to exit)");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") {
            break;
        }
        match screen.press(input) {
            Ok(()) => println!("{}", screen.readout()),
            Err(e) => eprintln!("{}", e),
        }
    }

    Ok(())
}

fn run_login_form() -> Result<(), Box<dyn std::error::Error>> {
    let mut form = LoginForm::new(|submission| match serde_json::to_string(&submission) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to encode submission: {}", e),
    });

    form.type_into("Username", read_field("Username")?.trim())?;
    form.type_into("Password", read_field("Password")?.trim())?;
    form.press("Submit")?;

    Ok(())
}

fn read_field(prompt: &str) -> Result<String, io::Error> {
    print!("{}: ", prompt);
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value)
}
