use std::env;

use rpc_status::{measure_rpc, HttpRpcProber};

/// Probe a single endpoint once and print the classified result as JSON.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let mut args = env::args().skip(1);
    let Some(url) = args.next() else {
        eprintln!("usage: probe <rpc-url> [network-id]");
        std::process::exit(2);
    };
    let network_id = args.next().unwrap_or_else(|| "evm--1".to_string());

    let prober = HttpRpcProber::new(3_000);
    let measured = measure_rpc(&prober, &network_id, &url, false).await;

    println!(
        "{}",
        serde_json::to_string_pretty(&measured).expect("measured result serializes")
    );
}
