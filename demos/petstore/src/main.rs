#![allow(missing_docs)]
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use anyhow::{Context, Result};
use tracing::{info, warn};

use petstore::run;

/// The sample application listens on port 8000.
const DEFAULT_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8000));

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().pretty().init();

    let addr = listen_addr(pico_args::Arguments::from_env()).context("parsing arguments")?;
    run(addr).await?;

    info!("Bye!");
    Ok(())
}

/// `[-l | --listen <ip:port>]`
fn listen_addr(mut pargs: pico_args::Arguments) -> Result<SocketAddr> {
    let addr = pargs
        .opt_value_from_str(["-l", "--listen"])
        .context("parsing listen argument")?
        .unwrap_or(DEFAULT_ADDR);

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        warn!(?remaining, "ignoring unknown arguments");
    }
    Ok(addr)
}
