//! classify-cli: command-line access to the classification API.
//!
//! Usage:
//!   classify-cli predict <model-id> <image-url>... [--min-value F] [--max-concepts N]
//!   classify-cli models [--page N] [--per-page N]
//!   classify-cli model <model-id>...
//!   classify-cli concepts [--page N] [--per-page N]
//!   classify-cli search <name-pattern>
//!   classify-cli inputs [--page N] [--per-page N]

use anyhow::{bail, Context, Result};
use classify_lib_rust::{ApiClient, ApiResponse, Output};
use futures::future::join_all;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "predict" => cmd_predict(&args[2..]).await,
        "models" => cmd_models(&args[2..]).await,
        "model" => cmd_model(&args[2..]).await,
        "concepts" => cmd_concepts(&args[2..]).await,
        "search" => cmd_search(&args[2..]).await,
        "inputs" => cmd_inputs(&args[2..]).await,
        "version" | "--version" | "-V" => {
            cmd_version();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"classify-cli: classification API command-line tool

USAGE:
    classify-cli <COMMAND> [OPTIONS]

COMMANDS:
    predict <model-id> <image-url>...   Classify images with a model
        --min-value <F>                 Drop concepts scoring below F (0.0..=1.0)
        --max-concepts <N>              Return at most N concepts per image
    models [--page N] [--per-page N]    List models
    model <model-id>...                 Show models (fetched concurrently)
    concepts [--page N] [--per-page N]  List concepts of the application
    search <name-pattern>               Search concepts by name (`*` wildcard)
    inputs [--page N] [--per-page N]    List inputs of the application
    version                             Show version information
    help                                Show this help message

ENVIRONMENT:
    CLASSIFY_API_KEY                    API key (required)
    CLASSIFY_BASE_URL                   API base URL
    CLASSIFY_HTTP_TIMEOUT_SECS          Request timeout
    RUST_LOG                            Log filter (default: warn)"#
    );
}

fn cmd_version() {
    println!("classify-cli {}", env!("CARGO_PKG_VERSION"));
}

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_flag<T: std::str::FromStr>(args: &[String], name: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    flag_value(args, name)
        .map(|v| v.parse::<T>().with_context(|| format!("invalid value for {name}: {v}")))
        .transpose()
}

/// Positional arguments, skipping flags and their values.
fn positionals(args: &[String]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg.starts_with("--") {
            iter.next();
        } else {
            out.push(arg.as_str());
        }
    }
    out
}

fn client() -> Result<ApiClient> {
    ApiClient::from_env().context("failed to configure client")
}

fn print_response<T: Serialize>(response: ApiResponse<T>) -> Result<()> {
    match response.get() {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(result)?);
            Ok(())
        }
        Err(e) => {
            if let Some(body) = response.raw_body() {
                eprintln!("{body}");
            }
            bail!("{} (status {})", e, response.status())
        }
    }
}

fn print_predictions(response: ApiResponse<Vec<Output>>) -> Result<()> {
    let outputs = match response.get() {
        Ok(outputs) => outputs,
        Err(e) => bail!("{} (status {})", e, response.status()),
    };
    for output in outputs {
        let source = output
            .input
            .as_ref()
            .and_then(|i| i.image())
            .and_then(|img| img.url.as_deref())
            .unwrap_or("<inline image>");
        println!("{source}");
        for concept in output.concepts() {
            println!("  {:<24} {:.4}", concept.label(), concept.value.unwrap_or(0.0));
        }
    }
    Ok(())
}

async fn cmd_predict(args: &[String]) -> Result<()> {
    let pos = positionals(args);
    let Some((model_id, urls)) = pos.split_first() else {
        bail!("usage: classify-cli predict <model-id> <image-url>...");
    };
    let client = client()?;
    let mut builder = client.predict(*model_id);
    for url in urls {
        builder = builder.with_image_url(*url);
    }
    if let Some(v) = parse_flag::<f32>(args, "--min-value")? {
        builder = builder.with_min_value(v);
    }
    if let Some(n) = parse_flag::<u32>(args, "--max-concepts")? {
        builder = builder.with_max_concepts(n);
    }
    print_predictions(builder.build()?.execute().await)
}

async fn cmd_models(args: &[String]) -> Result<()> {
    let client = client()?;
    let mut builder = client.get_models();
    if let Some(p) = parse_flag::<u32>(args, "--page")? {
        builder = builder.page(p);
    }
    if let Some(n) = parse_flag::<u32>(args, "--per-page")? {
        builder = builder.per_page(n);
    }
    print_response(builder.build()?.execute().await)
}

async fn cmd_model(args: &[String]) -> Result<()> {
    let ids = positionals(args);
    if ids.is_empty() {
        bail!("usage: classify-cli model <model-id>...");
    }
    let client = client()?;
    let requests = ids
        .iter()
        .map(|id| client.get_model(id))
        .collect::<classify_lib_rust::Result<Vec<_>>>()?;
    let responses = join_all(requests.iter().map(|r| r.execute())).await;

    let mut failed = 0;
    for (id, response) in ids.iter().zip(responses) {
        if let Err(e) = print_response(response) {
            eprintln!("{id}: {e:#}");
            failed += 1;
        }
    }
    if failed > 0 {
        bail!("{failed} of {} model lookups failed", ids.len());
    }
    Ok(())
}

async fn cmd_concepts(args: &[String]) -> Result<()> {
    let client = client()?;
    let mut builder = client.get_concepts();
    if let Some(p) = parse_flag::<u32>(args, "--page")? {
        builder = builder.page(p);
    }
    if let Some(n) = parse_flag::<u32>(args, "--per-page")? {
        builder = builder.per_page(n);
    }
    print_response(builder.build()?.execute().await)
}

async fn cmd_search(args: &[String]) -> Result<()> {
    let Some(pattern) = positionals(args).first().copied() else {
        bail!("usage: classify-cli search <name-pattern>");
    };
    let client = client()?;
    print_response(client.search_concepts(pattern).build()?.execute().await)
}

async fn cmd_inputs(args: &[String]) -> Result<()> {
    let client = client()?;
    let mut builder = client.get_inputs();
    if let Some(p) = parse_flag::<u32>(args, "--page")? {
        builder = builder.page(p);
    }
    if let Some(n) = parse_flag::<u32>(args, "--per-page")? {
        builder = builder.per_page(n);
    }
    print_response(builder.build()?.execute().await)
}
