use anyhow::{Context, Result};
use listenfd::ListenFd;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

use mailgate_types::GatewayConfig;

const LISTEN_BACKLOG: i32 = 1024;

/// Listener for the gateway: an fd handed over by systemd if there is one,
/// otherwise a fresh socket on the configured address.
pub async fn create_listener(config: &GatewayConfig) -> Result<TcpListener> {
    if let Some(listener) = inherited_listener()? {
        return Ok(listener);
    }

    let addr: SocketAddr = config
        .socket_addr()
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", config.socket_addr()))?;
    bind_reuseport(addr)
}

fn inherited_listener() -> Result<Option<TcpListener>> {
    let Some(std_listener) = ListenFd::from_env().take_tcp_listener(0)? else {
        return Ok(None);
    };

    std_listener.set_nonblocking(true)?;
    let listener = TcpListener::from_std(std_listener)?;
    info!("🔌 Using socket inherited from systemd ({})", listener.local_addr()?);
    Ok(Some(listener))
}

/// SO_REUSEPORT lets a new gateway process bind while the old one drains.
fn bind_reuseport(addr: SocketAddr) -> Result<TcpListener> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into()).with_context(|| format!("Failed to bind {}", addr))?;
    socket.listen(LISTEN_BACKLOG)?;

    info!("🔌 Bound {} with SO_REUSEPORT", addr);
    Ok(TcpListener::from_std(socket.into())?)
}

/// Resolves on Ctrl+C or SIGTERM. A handler that fails to install is logged
/// and then never fires, so the other signal still stops the server.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Ctrl+C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        () = ctrl_c => info!("🛑 Ctrl+C received"),
        () = sigterm() => info!("🛑 SIGTERM received"),
    }

    info!("⏳ Draining in-flight upstream calls before exit");
}

#[cfg(unix)]
async fn sigterm() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        },
        Err(e) => {
            warn!("SIGTERM handler unavailable: {}", e);
            std::future::pending::<()>().await;
        },
    }
}

#[cfg(not(unix))]
async fn sigterm() {
    std::future::pending::<()>().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_reuseport_on_ephemeral_port() {
        let listener = bind_reuseport("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_ne!(addr.port(), 0);
    }

    #[tokio::test]
    async fn test_create_listener_rejects_bad_address() {
        let config = mailgate_types::GatewayConfig {
            bind_address: "not-an-ip".to_string(),
            ..mailgate_types::GatewayConfig::default()
        };
        assert!(create_listener(&config).await.is_err());
    }
}
