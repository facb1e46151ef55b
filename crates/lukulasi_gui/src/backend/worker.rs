//! Background worker thread for blocking translation lookups.

use crate::backend::{CoreCmd, CoreEvent};
use crossbeam_channel::{unbounded, Receiver, Sender};
use lukulasi_core::TranslationService;
use std::thread;
use tracing::error;

/// Handle for sending commands to, and receiving events from, the backend worker.
pub struct BackendHandle {
    pub cmd_tx: Sender<CoreCmd>,
    pub evt_rx: Receiver<CoreEvent>,
}

/// Spawn the worker thread that performs blocking translation I/O.
///
/// All network access stays off the UI thread; the worker replies with
/// [`CoreEvent`] values that are polled each frame. The thread exits when the
/// command sender is dropped.
///
/// # Returns
/// A [`BackendHandle`] containing the command sender and event receiver.
///
/// # Panics
/// Panics if the worker thread cannot be spawned.
pub fn spawn_backend(service: TranslationService) -> BackendHandle {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded::<CoreEvent>();

    thread::Builder::new()
        .name("lukulasi-translate".to_string())
        .spawn(move || {
            for cmd in cmd_rx.iter() {
                match cmd {
                    CoreCmd::Translate { request } => {
                        let result =
                            service.translate(&request.text, request.source, request.target);
                        let event = match result {
                            Ok(text) => CoreEvent::Translated {
                                request_id: request.id,
                                text,
                            },
                            Err(err) => {
                                error!(request_id = request.id, "backend translate failed: {}", err);
                                CoreEvent::TranslateFailed {
                                    request_id: request.id,
                                    cause: err.to_string(),
                                }
                            }
                        };
                        let _ = evt_tx.send(event);
                    }
                }
            }
        })
        .expect("spawn translate thread");

    BackendHandle { cmd_tx, evt_rx }
}
