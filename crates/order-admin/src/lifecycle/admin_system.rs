use crate::auth::Session;
use crate::board::{self, OrderBoard};
use crate::notify::{Confirmation, Notifier};
use crate::store::OrderStore;
use std::sync::Arc;
use tracing::{error, info};

/// Running admin panel: the board plus the actor task behind it.
pub struct AdminSystem {
    pub board: OrderBoard,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl AdminSystem {
    /// Spawns the order mirror and returns a board bound to it. The mirror starts empty.
    pub fn start(
        session: Session,
        store: Arc<dyn OrderStore>,
        notifier: Arc<dyn Notifier>,
        confirmation: Arc<dyn Confirmation>,
    ) -> Self {
        let (mirror_actor, mirror_client) = board::new_mirror();
        let mirror_handle = tokio::spawn(mirror_actor.run());

        let board = OrderBoard::new(session, mirror_client, store, notifier, confirmation);
        info!(operator = %board.session().operator(), "Admin system started");

        Self {
            board,
            handles: vec![mirror_handle],
        }
    }

    /// Closes the mirror and waits for its task. The mirror's contents are discarded.
    ///
    /// Returns an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down admin system...");

        drop(self.board);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Admin system shutdown complete.");
        Ok(())
    }
}
