use clap::Parser;
use std::env;
use std::path::PathBuf;
use std::process;
use tracing::{debug, error};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use webppl_pkg::{read, stringify};

/// Resolve a WebPPL package and print its bundler expression.
#[derive(Parser, Debug)]
#[command(name = "webppl-pkg", version)]
struct CliArgs {
    /// Package name, or a path to a package directory
    name_or_path: String,

    /// Directory to search for packages; repeatable, searched in order.
    /// Defaults to ~/.webppl when omitted.
    #[arg(long = "search-path", value_name = "DIR")]
    search_paths: Vec<PathBuf>,

    /// Log each resolution step to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    debug!("arguments: {:?}", args);

    let search_paths = if args.search_paths.is_empty() {
        None
    } else {
        Some(args.search_paths.as_slice())
    };

    let descriptor = match read(&args.name_or_path, search_paths, args.verbose) {
        Ok(descriptor) => descriptor,
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    };

    match stringify(&descriptor.to_value(), None) {
        Ok(expression) => println!("{expression}"),
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    let mut filter = EnvFilter::from_default_env();
    if env::var("RUST_LOG").is_err() {
        filter = filter.add_directive(
            format!("webppl_pkg={default_level}")
                .parse()
                .expect("static directive"),
        );
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
