use std::error::Error;
use std::future::IntoFuture;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::time::{Duration, interval};

use crate::config::AppConfig;
use crate::storage::MessageStore;

use super::routes::build_router;
use super::transport::bind_listener;

pub struct BoardServer {
    store: Arc<MessageStore>,
    listener: TcpListener,
    stats_interval: Option<Duration>,
}

impl BoardServer {
    pub async fn bind(config: &AppConfig, store: Arc<MessageStore>) -> io::Result<Self> {
        let listener = bind_listener(&config.listen_addr).await?;
        let stats_interval = match config.stats_interval_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        Ok(Self {
            store,
            listener,
            stats_interval,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve requests until the listener fails or the future is dropped.
    pub async fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let router = build_router(Arc::clone(&self.store));
        let server = axum::serve(self.listener, router).into_future();
        tokio::pin!(server);

        let Some(period) = self.stats_interval else {
            server.await?;
            return Ok(());
        };

        let mut stats_interval = interval(period);
        // The first tick completes immediately.
        stats_interval.tick().await;
        loop {
            tokio::select! {
                result = &mut server => {
                    result?;
                    return Ok(());
                }
                _ = stats_interval.tick() => {
                    log::info!("Statistics: {} messages", self.store.len());
                }
            }
        }
    }
}
