//! gui/update/util.rs
use iced::futures::channel::oneshot;

/// Run `work` on a named worker thread and await its answer.
///
/// Errors are plain strings, ready for the status line or the messages panel.
pub(crate) async fn spawn_blocking<T>(work: impl FnOnce() -> T + Send + 'static) -> Result<T, String>
where
    T: Send + 'static,
{
    let (answer, reply) = oneshot::channel::<T>();

    std::thread::Builder::new()
        .name("fuzer-worker".into())
        .spawn(move || {
            let _ = answer.send(work());
        })
        .map_err(|e| format!("Cannot start worker: {e}"))?;

    reply
        .await
        .map_err(|_| "Worker stopped before finishing.".to_string())
}
