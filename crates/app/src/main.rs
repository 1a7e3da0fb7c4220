use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{BASE_URL_ENV, DirectoryConfig, DirectoryService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiBase { raw: String, reason: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiBase { raw, reason } => {
                write!(f, "invalid --api-base value {raw}: {reason}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    directory: Arc<DirectoryService>,
}

impl UiApp for DesktopApp {
    fn directory(&self) -> Arc<DirectoryService> {
        Arc::clone(&self.directory)
    }
}

struct Args {
    config: DirectoryConfig,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-base <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-base {}", services::DEFAULT_BASE_URL);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {BASE_URL_ENV}, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = DirectoryConfig::from_env()?;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-base" => {
                    let value = require_value(args, "--api-base")?;
                    config = DirectoryConfig::new(&value).map_err(|err| {
                        ArgsError::InvalidApiBase {
                            raw: value.clone(),
                            reason: err.to_string(),
                        }
                    })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg).into()),
            }
        }

        Ok(Self { config })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).inspect_err(|_| print_usage())?;

    log::info!("using directory api at {}", parsed.config.base_url());
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        directory: Arc::new(DirectoryService::http(parsed.config)),
    });
    let context = build_app_context(&app);

    // Some tao setups default to an always-on-top window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Team Directory")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
