use db::ScoreStore;
use hyper::{server::conn::http1, service::service_fn};
use hyper_util::rt::TokioIo;
use std::{
    convert::Infallible,
    env,
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};
use tokio::{net::TcpListener, runtime::Runtime, signal};

const DEFAULT_PORT: u16 = 8080;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse environment variables
    let port = match env::var("PORT") {
        Ok(port) => port.parse()?,
        _ => DEFAULT_PORT,
    };

    let runtime = Runtime::new()?;
    let addr: SocketAddr = (Ipv4Addr::UNSPECIFIED, port).into();
    runtime.block_on(serve(addr))?;

    log::info!("Server has shut down.");
    Ok(())
}

async fn serve(addr: SocketAddr) -> anyhow::Result<()> {
    // One store for the lifetime of the process
    let store = Arc::new(ScoreStore::new());
    let listener = TcpListener::bind(addr).await?;
    log::info!("Listening on {addr}.");

    let mut stop = core::pin::pin!(signal::ctrl_c());
    loop {
        let (stream, peer) = tokio::select! {
            biased;
            res = &mut stop => {
                res?;
                log::info!("Received interrupt. Stopping...");
                return Ok(());
            }
            res = listener.accept() => match res {
                Ok(pair) => pair,
                Err(err) => {
                    log::error!("Failed to accept connection: {err}.");
                    continue;
                }
            },
        };

        let outer = store.clone();
        tokio::spawn(async move {
            let service = service_fn(move |req| {
                let inner = outer.clone();
                async move { Ok::<_, Infallible>(api::try_respond(req, &*inner).await) }
            });
            if let Err(err) = http1::Builder::new().serve_connection(TokioIo::new(stream), service).await {
                log::error!("Connection with {peer} failed: {err}.");
            }
        });
    }
}
