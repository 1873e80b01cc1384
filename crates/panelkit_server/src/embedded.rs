//! In-process page server used by the GUI to fetch modal fragments.
//!
//! The GUI owns an [`EmbeddedServer`] for its whole lifetime and points its
//! fetch worker at [`EmbeddedServer::url`]. Dropping the handle stops serving.

use crate::{resolve_bind_address, serve_router, AppError, AppState};
use std::{
    io::ErrorKind,
    net::SocketAddr,
    sync::mpsc,
    thread::{self, JoinHandle},
};
use tokio::{net::TcpListener, runtime::Runtime, sync::oneshot};
use tracing::{debug, info, warn};

/// Address report sent from the server thread once the socket is bound.
type Ready = Result<(SocketAddr, bool), String>;

/// Page server running on a dedicated thread and runtime.
pub struct EmbeddedServer {
    stop_tx: Option<oneshot::Sender<()>>,
    worker: Option<JoinHandle<()>>,
    addr: SocketAddr,
    used_fallback: bool,
}

fn page_runtime() -> Result<Runtime, String> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("panelkit-page-io")
        .enable_all()
        .build()
        .map_err(|err| format!("page server runtime: {}", err))
}

/// Bind `requested`, retrying on an ephemeral port of the same interface when
/// the port is taken. The flag reports whether the retry was needed.
fn bind_page_socket(rt: &Runtime, requested: SocketAddr) -> Result<(TcpListener, bool), String> {
    match rt.block_on(TcpListener::bind(requested)) {
        Ok(listener) => Ok((listener, false)),
        Err(err) if err.kind() == ErrorKind::AddrInUse => {
            warn!(%requested, "page port busy; serving fragments on an ephemeral port");
            rt.block_on(TcpListener::bind(SocketAddr::new(requested.ip(), 0)))
                .map(|listener| (listener, true))
                .map_err(|err| format!("bind {}: {}", requested.ip(), err))
        }
        Err(err) => Err(format!("bind {}: {}", requested, err)),
    }
}

fn run_page_server(
    state: AppState,
    allow_public: bool,
    ready_tx: mpsc::Sender<Ready>,
    stop_rx: oneshot::Receiver<()>,
) {
    let rt = match page_runtime() {
        Ok(rt) => rt,
        Err(message) => {
            let _ = ready_tx.send(Err(message));
            return;
        }
    };
    let requested = resolve_bind_address(&state.config, allow_public);
    let (listener, used_fallback) = match bind_page_socket(&rt, requested) {
        Ok(bound) => bound,
        Err(message) => {
            let _ = ready_tx.send(Err(message));
            return;
        }
    };
    let addr = listener.local_addr().unwrap_or(requested);
    info!(%addr, fallback = used_fallback, page = %state.page_route(), "serving page fragments");
    let _ = ready_tx.send(Ok((addr, used_fallback)));

    let stopped = async {
        let _ = stop_rx.await;
    };
    match rt.block_on(serve_router(listener, state, allow_public, stopped)) {
        Ok(()) => debug!(%addr, "page server stopped"),
        Err(err) => warn!(%addr, "page server failed: {}", err),
    }
}

impl EmbeddedServer {
    /// Start serving `state`'s web root and block until the socket is bound.
    ///
    /// The address comes from [`resolve_bind_address`]; a busy port falls
    /// back to an ephemeral one (see [`EmbeddedServer::used_fallback`]).
    ///
    /// # Errors
    /// [`AppError::Server`] when the thread, runtime or socket cannot be set up.
    pub fn start(state: AppState, allow_public: bool) -> Result<Self, AppError> {
        let (stop_tx, stop_rx) = oneshot::channel();
        let (ready_tx, ready_rx) = mpsc::channel();

        let worker = thread::Builder::new()
            .name("panelkit-embedded-server".into())
            .spawn(move || run_page_server(state, allow_public, ready_tx, stop_rx))
            .map_err(|err| AppError::Server(format!("page server thread: {}", err)))?;

        let mut server = Self {
            stop_tx: Some(stop_tx),
            worker: Some(worker),
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            used_fallback: false,
        };
        match ready_rx.recv() {
            Ok(Ok((addr, used_fallback))) => {
                server.addr = addr;
                server.used_fallback = used_fallback;
                Ok(server)
            }
            // Dropping `server` stops and joins the thread.
            Ok(Err(message)) => Err(AppError::Server(message)),
            Err(_) => Err(AppError::Server(
                "page server thread exited before binding".to_string(),
            )),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// True when the configured port was taken and an ephemeral one is used.
    pub fn used_fallback(&self) -> bool {
        self.used_fallback
    }

    /// Absolute URL of `path` on this server, e.g. `url("page.html")`.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}/{}", self.addr, path.trim_start_matches('/'))
    }
}

impl Drop for EmbeddedServer {
    fn drop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
