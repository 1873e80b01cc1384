//! Background worker thread for blocking page fetches.

use crate::backend::{CoreCmd, CoreEvent};
use crossbeam_channel::{unbounded, Receiver, Sender};
use reqwest::blocking::Client;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Handle for sending commands to, and receiving events from, the backend worker.
pub struct BackendHandle {
    pub cmd_tx: Sender<CoreCmd>,
    pub evt_rx: Receiver<CoreEvent>,
}

impl BackendHandle {
    /// Build a handle around caller-owned channels so UI tests can drive the
    /// app without a worker thread.
    #[cfg(test)]
    pub(crate) fn from_test_channels(cmd_tx: Sender<CoreCmd>, evt_rx: Receiver<CoreEvent>) -> Self {
        Self { cmd_tx, evt_rx }
    }
}

fn fetch_page(client: &Client, url: &str) -> Result<String, String> {
    let response = client
        .get(url)
        .send()
        .map_err(|err| format!("request failed: {}", err))?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("HTTP {}", status));
    }
    response
        .text()
        .map_err(|err| format!("failed to read response body: {}", err))
}

fn handle_command(client: Option<&Client>, cmd: CoreCmd, evt_tx: &Sender<CoreEvent>) {
    match cmd {
        CoreCmd::FetchPage { url } => {
            let started = Instant::now();
            let result = match client {
                Some(client) => fetch_page(client, &url),
                None => Err("HTTP client unavailable".to_string()),
            };
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
            let event = match result {
                Ok(html) => {
                    debug!(url = %url, bytes = html.len(), elapsed_ms, "page fetched");
                    CoreEvent::PageLoaded { url, html }
                }
                Err(message) => {
                    warn!(url = %url, error = %message, elapsed_ms, "page fetch failed");
                    CoreEvent::PageFailed { url, message }
                }
            };
            let _ = evt_tx.send(event);
        }
    }
}

/// Spawn the backend worker thread that performs blocking HTTP fetches.
///
/// All network I/O stays off the UI thread; the worker replies with
/// [`CoreEvent`] values that are polled each frame. The worker exits once
/// every command sender has been dropped.
///
/// # Returns
/// A [`BackendHandle`] containing the command sender and event receiver.
///
/// # Panics
/// Panics if the worker thread cannot be spawned.
pub fn spawn_backend(fetch_timeout: Duration) -> BackendHandle {
    let (cmd_tx, cmd_rx) = unbounded::<CoreCmd>();
    let (evt_tx, evt_rx) = unbounded();

    thread::Builder::new()
        .name("panelkit-gui-backend".to_string())
        .spawn(move || {
            let client = match Client::builder().timeout(fetch_timeout).build() {
                Ok(client) => Some(client),
                Err(err) => {
                    error!("failed to build HTTP client: {}", err);
                    None
                }
            };
            info!(timeout_ms = fetch_timeout.as_millis() as u64, "backend worker started");
            for cmd in cmd_rx.iter() {
                handle_command(client.as_ref(), cmd, &evt_tx);
            }
            info!("backend worker stopped");
        })
        .expect("spawn backend worker");

    BackendHandle { cmd_tx, evt_rx }
}
