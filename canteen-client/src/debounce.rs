//! Trailing-edge debouncer

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Runs a callback with the latest value once no new value has arrived for
/// `wait`. Every call restarts the wait; intermediate values are dropped.
///
/// Must be created inside a tokio runtime. Dropping the debouncer flushes a
/// pending value immediately.
#[derive(Debug)]
pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<T>,
    task: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(wait: Duration, mut callback: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();

        let task = tokio::spawn(async move {
            while let Some(mut latest) = rx.recv().await {
                loop {
                    match tokio::time::timeout(wait, rx.recv()).await {
                        Ok(Some(next)) => latest = next,
                        Ok(None) => {
                            callback(latest);
                            return;
                        }
                        Err(_) => {
                            callback(latest);
                            break;
                        }
                    }
                }
            }
        });

        Self { tx, task }
    }

    pub fn call(&self, value: T) {
        if self.tx.send(value).is_err() {
            tracing::warn!("Debouncer task is gone, value dropped");
        }
    }

    /// Whether the background task has ended
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::time::sleep;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl FnMut(String) + Send + 'static) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        (calls, move |v| sink.lock().unwrap().push(v))
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_calls_collapse_to_last() {
        let (calls, callback) = recorder();
        let debouncer = Debouncer::new(Duration::from_millis(300), callback);

        debouncer.call("c".to_string());
        debouncer.call("ch".to_string());
        debouncer.call("chi".to_string());

        sleep(Duration::from_millis(299)).await;
        assert!(calls.lock().unwrap().is_empty());

        sleep(Duration::from_millis(10)).await;
        assert_eq!(*calls.lock().unwrap(), vec!["chi".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_quiet_window_fires_once() {
        let (calls, callback) = recorder();
        let debouncer = Debouncer::new(Duration::from_millis(300), callback);

        debouncer.call("veg".to_string());
        sleep(Duration::from_millis(200)).await;
        debouncer.call("vega".to_string());
        sleep(Duration::from_millis(200)).await;
        // 400ms since the first call but only 200ms of quiet
        assert!(calls.lock().unwrap().is_empty());

        sleep(Duration::from_millis(150)).await;
        debouncer.call("tea".to_string());
        sleep(Duration::from_millis(400)).await;

        assert_eq!(
            *calls.lock().unwrap(),
            vec!["vega".to_string(), "tea".to_string()]
        );
        assert!(!debouncer.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_flushes_pending_value() {
        let (calls, callback) = recorder();
        let debouncer = Debouncer::new(Duration::from_millis(300), callback);
        debouncer.call("last".to_string());
        drop(debouncer);

        sleep(Duration::from_millis(1)).await;
        assert_eq!(*calls.lock().unwrap(), vec!["last".to_string()]);
    }
}
