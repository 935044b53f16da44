#![allow(dead_code)]

use std::net::{Ipv4Addr, SocketAddr};

use registrar::AppState;
use registrar::api::create_router;
use registrar::config::settings::ServerConfig;
use registrar::server::serve;
use tokio::net::TcpListener;

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Serve `state` on an ephemeral localhost port for the rest of the test.
pub async fn spawn_app(state: AppState) -> anyhow::Result<TestApp> {
    let router = create_router(state, &ServerConfig::default());
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = serve(listener, router, std::future::pending()).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp {
        base_url: format!("http://{}", addr),
        client: reqwest::Client::new(),
    })
}
