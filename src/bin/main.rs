use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use catrec_rs::recommender::{FilterKind, Recommender};

#[derive(Parser, Debug)]
#[command(name = "catrec-server")]
#[command(about = "Category registry and movie recommendation server", long_about = None)]
struct Args {
    #[arg(short, long, global = true, default_value = "catrec-server.yaml")]
    config: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Print recommendations for a movie title
    Recommend {
        title: Option<String>,
        #[arg(long, value_enum, default_value_t = FilterKind::ContentBased)]
        filter: FilterKind,
    },
}

fn init_logging(debug: bool, json: bool) {
    let default_filter = if debug {
        "catrec_rs=debug,tower_http=debug"
    } else {
        "catrec_rs=info,tower_http=info"
    };

    let fmt_layer = if json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    init_logging(args.debug, args.log_json);

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            if let Err(e) = catrec_rs::run(&args.config, args.debug).await {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Command::Recommend { title, filter } => {
            let recommender = Recommender::new(filter.build());
            for movie in recommender.recommend_movies(title.as_deref()) {
                println!("{}", movie);
            }
        }
    }
}
