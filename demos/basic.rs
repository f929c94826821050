// demos/basic.rs

//! Connects to a Redis server with ReJSON loaded and runs a few commands.
//!
//! Usage: `cargo run --example basic [path/to/client.toml]`

use anyhow::Result;
use rejson::{
    ClientConfig, ClientSelector, Connection, GetOptions, Handler, POP_ARR_LAST, ReJson,
    SetCondition,
};
use serde_json::json;
use std::env;
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .compact()
        .init();

    let config = match env::args().nth(1) {
        Some(path) => ClientConfig::from_file(&path)?,
        None => ClientConfig::default(),
    };

    let handler = Handler::new();
    handler.set_resp_client(Connection::connect(&config).await?);
    info!(client = %handler.client_name(), "connected to {}", config.addr());

    let student = json!({
        "name": "Leonard Cohen",
        "last_seen": 1478476800,
        "loggedOut": true,
        "grades": [90, 85]
    });

    let res = handler
        .json_set("student", ".", &student, SetCondition::None)
        .await?;
    info!("JSON.SET -> {:?}", res);

    let res = handler
        .json_get("student", ".", &GetOptions::new().indent("  ").newline("\n"))
        .await?;
    let fetched: serde_json::Value = res.into_json()?;
    info!("JSON.GET -> {}", fetched);

    let res = handler
        .json_arr_append("student", ".grades", &[json!(77)])
        .await?;
    info!("JSON.ARRAPPEND -> {:?}", res);

    let res = handler
        .json_arr_pop("student", ".grades", POP_ARR_LAST)
        .await?;
    info!("JSON.ARRPOP -> {:?}", res);

    let res = handler.json_del("student", ".").await?;
    info!("JSON.DEL -> {:?}", res);

    handler.set_client_inactive();
    Ok(())
}
