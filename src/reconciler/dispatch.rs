use super::command::{Command, Outcome};
use crate::registry::FileRegistry;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::debug;

/// Runs commands off the UI thread and hands outcomes back over a channel.
pub struct Dispatcher {
    runtime: Runtime,
    registry: Arc<dyn FileRegistry>,
    sender: Sender<Outcome>,
    receiver: Receiver<Outcome>,
}

impl Dispatcher {
    pub fn new(registry: Arc<dyn FileRegistry>) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("filebox-io")
            .enable_all()
            .build()?;
        let (sender, receiver) = channel();
        Ok(Self {
            runtime,
            registry,
            sender,
            receiver,
        })
    }

    /// Spawns `command`; `on_done` runs after its outcome is queued.
    pub fn dispatch<F>(&self, command: Command, on_done: F)
    where
        F: FnOnce() + Send + 'static,
    {
        debug!("Dispatching {:?}", command.key());
        let registry = Arc::clone(&self.registry);
        let sender = self.sender.clone();

        self.runtime.spawn(async move {
            let outcome = command.execute(registry.as_ref()).await;
            // receiver is gone only while the app shuts down
            let _ = sender.send(outcome);
            on_done();
        });
    }

    pub fn try_recv(&self) -> Option<Outcome> {
        self.receiver.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{
        DeleteError, FileDescriptor, ListError, LocalFile, UploadError,
    };
    use reqwest::StatusCode;
    use std::time::Duration;

    struct StaticRegistry;

    #[async_trait::async_trait]
    impl FileRegistry for StaticRegistry {
        async fn list_files(&self) -> Result<Vec<FileDescriptor>, ListError> {
            Ok(vec![FileDescriptor {
                filename: "a.txt".to_string(),
                url: "http://x/a.txt".to_string(),
            }])
        }

        async fn upload_file(&self, _file: &LocalFile) -> Result<(), UploadError> {
            Ok(())
        }

        async fn delete_file(&self, _filename: &str) -> Result<(), DeleteError> {
            Err(DeleteError::Status(StatusCode::FORBIDDEN))
        }
    }

    fn wait_for(dispatcher: &Dispatcher, command: Command) -> Outcome {
        let (done_tx, done_rx) = channel();
        dispatcher.dispatch(command, move || {
            let _ = done_tx.send(());
        });
        done_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        dispatcher.try_recv().unwrap()
    }

    #[test]
    fn test_outcomes_come_back_on_channel() {
        let dispatcher = Dispatcher::new(Arc::new(StaticRegistry)).unwrap();
        assert!(dispatcher.try_recv().is_none());

        match wait_for(&dispatcher, Command::List) {
            Outcome::Listed(Ok(files)) => assert_eq!(files[0].filename, "a.txt"),
            other => panic!("unexpected outcome: {:?}", other),
        }

        match wait_for(&dispatcher, Command::Delete("a.txt".to_string())) {
            Outcome::Deleted { filename, result } => {
                assert_eq!(filename, "a.txt");
                assert!(matches!(result, Err(DeleteError::Status(StatusCode::FORBIDDEN))));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
