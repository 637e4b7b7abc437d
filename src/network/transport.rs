use std::io;

use tokio::net::TcpListener;

/// Bind the HTTP listener. `addr` may use port 0 to pick a free port.
pub async fn bind_listener(addr: &str) -> io::Result<TcpListener> {
    let listener = TcpListener::bind(addr).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);
    Ok(listener)
}
