//! Demo entry point: `order-admin <email> <password> [filter]`.
//!
//! Signs in, loads the orders and logs the rows admitted by `filter` (default `All`).
//! Project settings come from `config.toml`; the API token and admin credentials come from
//! the environment (`SANITY_API_TOKEN`, `ORDER_ADMIN_EMAIL`, `ORDER_ADMIN_PASSWORD`).

use mirror_framework::tracing::setup_tracing;
use order_admin::auth::{ConfiguredCredentials, Session};
use order_admin::board::BoardError;
use order_admin::config::{load_config, Secrets};
use order_admin::lifecycle::AdminSystem;
use order_admin::model::StatusFilter;
use order_admin::notify::{AutoConfirm, TracingNotifier};
use order_admin::store::SanityStore;
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let mut args = std::env::args().skip(1);
    let (Some(email), Some(password)) = (args.next(), args.next()) else {
        return Err("usage: order-admin <email> <password> [filter]".to_string());
    };
    let filter = args
        .next()
        .map(StatusFilter::from)
        .unwrap_or_default();

    let config = load_config().map_err(|e| e.to_string())?;
    let secrets = Secrets::from_env().map_err(|e| e.to_string())?;

    let policy = ConfiguredCredentials::from(secrets.admin);
    let session = Session::login(&policy, &email, &password).map_err(|e| e.to_string())?;

    let store = SanityStore::new(&config.sanity, secrets.api_token).map_err(|e| e.to_string())?;
    let system = AdminSystem::start(
        session,
        Arc::new(store),
        Arc::new(TracingNotifier),
        // The demo never deletes; refuse anything destructive.
        Arc::new(AutoConfirm(false)),
    );

    let span = tracing::info_span!("order_listing", filter = %filter.label());
    let listing = async {
        system.board.load().await?;
        system.board.set_filter(filter.clone()).await?;
        Ok::<_, BoardError>(system.board.rows().await?)
    }
    .instrument(span)
    .await;

    match listing {
        Ok(rows) => {
            info!(count = rows.len(), "Orders listed");
            for row in rows {
                info!(
                    id = %row.id,
                    name = %row.name,
                    placed_on = %row.placed_on,
                    total = %row.total,
                    status = row.status.as_ref().map(|s| s.label()).unwrap_or("-"),
                    "Order"
                );
            }
        }
        Err(e) => error!(error = %e, "Listing orders failed"),
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
