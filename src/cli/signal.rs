//! Stop a launched task when the user interrupts the follow

use crate::infrastructure::aws::EcsApi;
use crate::infrastructure::constants::STOP_REASON;
use std::future::Future;
use std::io;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// SIGINT/SIGTERM listener whose handlers are registered when it is armed,
/// not when it is first awaited.
pub struct ShutdownSignal {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
    #[cfg(windows)]
    ctrl_c: tokio::signal::windows::CtrlC,
}

impl ShutdownSignal {
    /// Must be called from within a tokio runtime.
    #[cfg(unix)]
    pub fn arm() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};
        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    #[cfg(windows)]
    pub fn arm() -> io::Result<Self> {
        Ok(Self {
            ctrl_c: tokio::signal::windows::ctrl_c()?,
        })
    }

    /// Resolves on the first delivered signal
    #[cfg(unix)]
    pub async fn recv(mut self) {
        tokio::select! {
            _ = self.interrupt.recv() => {},
            _ = self.terminate.recv() => {},
        }
    }

    #[cfg(windows)]
    pub async fn recv(mut self) {
        self.ctrl_c.recv().await;
    }
}

/// Wait for `signal`, then issue one stop-task request for `task_arn`.
///
/// The stop result is not reported back to anyone.
pub async fn stop_on<F>(signal: F, client: &dyn EcsApi, cluster: &str, task_arn: &str)
where
    F: Future<Output = ()>,
{
    signal.await;
    tracing::info!(task = %task_arn, "received shutdown signal, stopping task");

    if let Err(e) = client.stop_task(cluster, task_arn, STOP_REASON).await {
        tracing::debug!("stop-task on shutdown failed: {}", e);
    }
}

/// Arm the shutdown handlers, then spawn a listener that stops `task_arn`
/// on the first signal and exits the process with status 0.
pub fn spawn_stop_on_signal(
    client: Arc<dyn EcsApi>,
    cluster: String,
    task_arn: String,
) -> io::Result<JoinHandle<()>> {
    let signal = ShutdownSignal::arm()?;

    Ok(tokio::spawn(async move {
        stop_on(signal.recv(), client.as_ref(), &cluster, &task_arn).await;
        std::process::exit(0);
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_arm_inside_runtime() {
        assert!(ShutdownSignal::arm().is_ok());
    }
}
