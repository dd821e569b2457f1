//! Interrupt handling
//!
//! Ctrl-C cancels a [`CancellationToken`] instead of killing the process, so
//! the running command can stop and report [`KafkaCliError::Interrupted`].
//!
//! [`KafkaCliError::Interrupted`]: crate::error::KafkaCliError::Interrupted

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::error::Result;

/// Cancels `cancel` on the first interrupt.
///
/// On Unix the SIGINT listener is registered before this returns, so an
/// interrupt arriving right after the call is never lost.
///
/// # Errors
///
/// Returns `KafkaCliError::Io` if the signal listener cannot be registered.
pub fn cancel_on_interrupt(cancel: CancellationToken) -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut interrupt = signal(SignalKind::interrupt())?;
        tokio::spawn(async move {
            if interrupt.recv().await.is_some() {
                info!("Interrupt received, shutting down");
                cancel.cancel();
            }
        });
    }

    #[cfg(not(unix))]
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, shutting down");
            cancel.cancel();
        }
    });

    Ok(())
}
