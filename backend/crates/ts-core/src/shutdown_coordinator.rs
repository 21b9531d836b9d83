use crate::ShutdownGuard;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::broadcast;

/// Cancellation fan-out for the server and every simulation loop.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    shutdown_tx: broadcast::Sender<()>,
    triggered: Arc<AtomicBool>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self {
            shutdown_tx,
            triggered: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Trigger shutdown. Safe to call more than once.
    pub fn shutdown(&self) {
        if self.triggered.swap(true, Ordering::SeqCst) {
            return;
        }
        log::info!("Shutdown signal received, notifying all subsystems");
        let _ = self.shutdown_tx.send(());
    }

    pub fn is_shutdown(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }

    pub fn subscribe_guard(&self) -> ShutdownGuard {
        ShutdownGuard::new(self)
    }

    pub(crate) fn triggered_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.triggered)
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
