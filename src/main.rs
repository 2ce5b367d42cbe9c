use std::process;

use tracing::error;
use tracing_subscriber::EnvFilter;

use recognizer::action::Action;
use recognizer::registry::CommandRegistry;
use recognizer::settings::Settings;

pub fn main() {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };
    // logs go to stderr so stdout only ever carries the action
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&settings.log).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("No command given");
        process::exit(1);
    }
    let sentence = args.join(" ");

    let registry = match CommandRegistry::builtin() {
        Ok(registry) => registry,
        Err(e) => {
            error!(%e, "built-in commands are misconfigured");
            eprintln!("{e}");
            process::exit(2);
        }
    };
    let recognition = match registry.recognize_at(&sentence, settings.reference_time()) {
        Ok(Some(recognition)) => recognition,
        Ok(None) => {
            eprintln!("'{sentence}' is not a valid command.");
            process::exit(1);
        }
        Err(e) => {
            error!(%e, "recognition failed");
            eprintln!("{e}");
            process::exit(2);
        }
    };
    match Action::from_recognition(recognition).to_json(settings.pretty) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    }
}
