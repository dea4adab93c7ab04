#![allow(missing_docs)]
//! Serve an OpenAPI document file with ReDoc.
//!
//! ```text
//! redoc-mount --spec openapi.yml [--options redoc.json] [--path docs] [-h 127.0.0.1] [-p 8080]
//! ```
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail, ensure};
use axum::Router;
use redoc_mount::{ApiDocument, RouterExt};
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().pretty().init();

    let args = AppArgs::parse().context("parsing arguments")?;
    let document = load_document(&args.spec).await?;
    let options = match &args.options {
        Some(path) => load_options(path).await?,
        None => Value::Null,
    };

    let app = Router::new()
        .redoc(&args.path, document, &options)
        .context("mounting ReDoc")?
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from((args.host, args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("opening {addr}"))?;
    info!("Serving ReDoc on http://{addr}/{}", args.path.trim_start_matches('/'));

    axum::serve(listener, app.into_make_service())
        .await
        .context("starting server")?;

    info!("Bye!");
    Ok(())
}

#[derive(Debug)]
struct AppArgs {
    spec: PathBuf,
    options: Option<PathBuf>,
    path: String,
    host: IpAddr,
    port: u16,
}

impl AppArgs {
    fn parse() -> Result<Self> {
        Self::from_arguments(pico_args::Arguments::from_env())
    }

    fn from_arguments(mut pargs: pico_args::Arguments) -> Result<Self> {
        let spec = pargs
            .value_from_str("--spec")
            .context("parsing spec argument")?;

        let options = pargs
            .opt_value_from_str("--options")
            .context("parsing options argument")?;

        let path = pargs
            .opt_value_from_str("--path")
            .context("parsing path argument")?;

        let host = pargs
            .opt_value_from_str(["-h", "--host"])
            .context("parsing host argument")?;

        let port = pargs
            .opt_value_from_str(["-p", "--port"])
            .context("parsing port argument")?;

        let result = Self {
            spec,
            options,
            path: path.unwrap_or_else(|| "docs".to_string()),
            host: host.unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            port: port.unwrap_or(8080),
        };

        let remaining = pargs.finish();
        if !remaining.is_empty() {
            warn!(?remaining, "Warning: unused arguments left");
        }
        Ok(result)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn of(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        match ext {
            "json" => Ok(Self::Json),
            "yml" | "yaml" => Ok(Self::Yaml),
            _ => bail!("unsupported file extension for {}", path.display()),
        }
    }
}

async fn read_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))
}

async fn load_document(path: &Path) -> Result<ApiDocument> {
    let contents = read_file(path).await?;
    let document = match Format::of(path)? {
        Format::Json => ApiDocument::from_json_str(&contents),
        Format::Yaml => ApiDocument::from_yaml_str(&contents),
    };
    document.with_context(|| format!("parsing API document {}", path.display()))
}

async fn load_options(path: &Path) -> Result<Value> {
    let contents = read_file(path).await?;
    parse_options(&contents, Format::of(path)?)
        .with_context(|| format!("parsing options {}", path.display()))
}

/// Reads an options mapping; `null` means no options.
fn parse_options(contents: &str, format: Format) -> Result<Value> {
    let options: Value = match format {
        Format::Json => serde_json::from_str(contents).context("invalid JSON")?,
        Format::Yaml => serde_saphyr::from_str(contents).context("invalid YAML")?,
    };
    ensure!(
        options.is_object() || options.is_null(),
        "options must be a mapping of option names to values"
    );
    Ok(options)
}
