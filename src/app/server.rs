use crate::adapters::NominatimClient;
use crate::api::{router::router, AppState};
use crate::core::{ConfigProvider, Geocoder};
use crate::utils::error::Result;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Bound listener plus the router it serves.
pub struct Server {
    listener: TcpListener,
    router: axum::Router,
}

impl Server {
    /// Builds the Nominatim adapter from `config` and binds the listen address.
    pub async fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let geocoder = NominatimClient::new(
            config.geocoder_endpoint(),
            config.user_agent(),
            config.request_timeout(),
        )?;
        tracing::info!(
            "Using geocoder {} (timeout {:?})",
            geocoder.endpoint(),
            config.request_timeout()
        );
        Self::bind(config.listen_addr(), Arc::new(geocoder)).await
    }

    pub async fn bind(addr: &str, geocoder: Arc<dyn Geocoder>) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let router = router(AppState::new(geocoder));
        Ok(Self { listener, router })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Ok(addr) = self.listener.local_addr() {
            tracing::info!("Listening on {}", addr);
        }
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("Server stopped");
        Ok(())
    }
}
