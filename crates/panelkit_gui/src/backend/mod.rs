//! Backend worker wiring for the GUI.
//!
//! This module exposes the command/event protocol plus the worker spawn helper
//! used by the egui UI thread.

mod protocol;
mod worker;

pub use protocol::{CoreCmd, CoreEvent};
pub use worker::{spawn_backend, BackendHandle};

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::time::Duration;

    fn recv_event(rx: &crossbeam_channel::Receiver<CoreEvent>) -> CoreEvent {
        rx.recv_timeout(Duration::from_secs(5))
            .expect("expected backend event")
    }

    fn closed_port_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);
        format!("http://{}/page.html", addr)
    }

    #[test]
    fn backend_reports_connection_failure() {
        let backend = spawn_backend(Duration::from_secs(2));
        let url = closed_port_url();
        backend
            .cmd_tx
            .send(CoreCmd::FetchPage { url: url.clone() })
            .expect("send fetch");

        match recv_event(&backend.evt_rx) {
            CoreEvent::PageFailed { url: failed, message } => {
                assert_eq!(failed, url);
                assert!(message.starts_with("request failed"), "{}", message);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn backend_answers_commands_in_order() {
        let backend = spawn_backend(Duration::from_secs(2));
        let first = closed_port_url();
        let second = format!("{}?again", first);
        for url in [&first, &second] {
            backend
                .cmd_tx
                .send(CoreCmd::FetchPage { url: url.clone() })
                .expect("send fetch");
        }

        assert_eq!(recv_event(&backend.evt_rx).url(), first);
        assert_eq!(recv_event(&backend.evt_rx).url(), second);
    }

    #[test]
    fn events_collapse_into_results() {
        let loaded = CoreEvent::PageLoaded {
            url: "http://x/page.html".to_string(),
            html: "<p>hi</p>".to_string(),
        };
        assert_eq!(
            loaded.into_result(),
            ("http://x/page.html".to_string(), Ok("<p>hi</p>".to_string()))
        );

        let failed = CoreEvent::PageFailed {
            url: "http://x/page.html".to_string(),
            message: "HTTP 404 Not Found".to_string(),
        };
        assert_eq!(
            failed.into_result(),
            (
                "http://x/page.html".to_string(),
                Err("HTTP 404 Not Found".to_string())
            )
        );
    }
}
