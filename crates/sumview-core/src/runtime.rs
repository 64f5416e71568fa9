use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use anyhow::Result;
use tokio::runtime::Runtime;
use tracing::{debug, error, info};

use crate::api::BackendClient;
use crate::config::CoreConfig;
use crate::models::{Thread, ThreadRecord, ThreadSummary};

/// Commands the UI sends to the backend worker
#[derive(Debug)]
pub enum BackendCommand {
    FetchThreads,
    Summarize { thread: Thread },
    Shutdown,
}

/// Which request a failure belongs to. Fetch failures leave the store empty;
/// summarize failures leave the target thread's summary untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    FetchThreads,
    Summarize { thread_id: String },
}

/// Results flowing back from the worker, drained by the UI tick
#[derive(Debug)]
pub enum DataChange {
    ThreadsLoaded(Vec<ThreadRecord>),
    SummaryReady {
        thread_id: String,
        summary: ThreadSummary,
    },
    RequestFailed {
        kind: RequestKind,
        error: String,
    },
}

#[derive(Clone)]
pub struct CoreHandle {
    command_tx: Sender<BackendCommand>,
}

impl CoreHandle {
    pub fn send(&self, command: BackendCommand) -> Result<(), mpsc::SendError<BackendCommand>> {
        self.command_tx.send(command)
    }
}

/// Owns the worker thread that performs all backend HTTP. The UI thread never
/// blocks on the network: commands go in over a channel, `DataChange`s come
/// back over another.
pub struct CoreRuntime {
    handle: CoreHandle,
    data_rx: Option<Receiver<DataChange>>,
    worker_handle: Option<JoinHandle<()>>,
}

impl CoreRuntime {
    pub fn new(config: CoreConfig) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel::<BackendCommand>();
        let (data_tx, data_rx) = mpsc::channel::<DataChange>();

        let worker = BackendWorker::new(BackendClient::new(config.api_base), data_tx, command_rx);
        let worker_handle = std::thread::spawn(move || {
            worker.run();
        });

        Ok(Self {
            handle: CoreHandle { command_tx },
            data_rx: Some(data_rx),
            worker_handle: Some(worker_handle),
        })
    }

    pub fn handle(&self) -> CoreHandle {
        self.handle.clone()
    }

    pub fn take_data_rx(&mut self) -> Option<Receiver<DataChange>> {
        self.data_rx.take()
    }

    pub fn shutdown(&mut self) {
        let _ = self.handle.send(BackendCommand::Shutdown);
        if let Some(worker_handle) = self.worker_handle.take() {
            let _ = worker_handle.join();
        }
    }
}

struct BackendWorker {
    client: BackendClient,
    data_tx: Sender<DataChange>,
    command_rx: Receiver<BackendCommand>,
}

impl BackendWorker {
    fn new(
        client: BackendClient,
        data_tx: Sender<DataChange>,
        command_rx: Receiver<BackendCommand>,
    ) -> Self {
        Self {
            client,
            data_tx,
            command_rx,
        }
    }

    fn run(self) {
        let rt = Runtime::new().expect("Failed to create runtime");
        debug!("backend worker thread started");

        // Commands are processed in channel order; concurrent summarize
        // requests for one thread resolve latest-response-wins downstream.
        while let Ok(cmd) = self.command_rx.recv() {
            match cmd {
                BackendCommand::FetchThreads => {
                    debug!("worker: fetching threads");
                    match rt.block_on(self.client.fetch_threads()) {
                        Ok(records) => {
                            info!(count = records.len(), "thread collection loaded");
                            let _ = self.data_tx.send(DataChange::ThreadsLoaded(records));
                        }
                        Err(e) => {
                            error!("failed to fetch threads: {}", e);
                            let error = rt.block_on(self.diagnose(&e));
                            let _ = self.data_tx.send(DataChange::RequestFailed {
                                kind: RequestKind::FetchThreads,
                                error,
                            });
                        }
                    }
                }
                BackendCommand::Summarize { thread } => {
                    let thread_id = thread.thread_id.clone();
                    debug!(thread_id = %thread_id, "worker: summarizing thread");
                    match rt.block_on(self.client.summarize(&thread)) {
                        Ok(summary) => {
                            info!(thread_id = %thread_id, "summary ready");
                            let _ = self.data_tx.send(DataChange::SummaryReady {
                                thread_id,
                                summary,
                            });
                        }
                        Err(e) => {
                            error!(thread_id = %thread_id, "failed to summarize: {}", e);
                            let error = rt.block_on(self.diagnose(&e));
                            let _ = self.data_tx.send(DataChange::RequestFailed {
                                kind: RequestKind::Summarize { thread_id },
                                error,
                            });
                        }
                    }
                }
                BackendCommand::Shutdown => {
                    debug!("backend worker shutting down");
                    break;
                }
            }
        }
    }

    /// Turn a request failure into the message the status bar shows. A failed
    /// health probe confirms the base cause is "backend not running" rather
    /// than one broken endpoint.
    async fn diagnose(&self, err: &crate::api::ApiError) -> String {
        let message = err.user_message(self.client.base_url());
        if self.client.health().await.is_err() {
            return message;
        }
        format!("{} (backend is up: the request itself failed)", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_shuts_down_cleanly_without_requests() {
        let mut runtime = CoreRuntime::new(CoreConfig::default()).unwrap();
        assert!(runtime.take_data_rx().is_some());
        assert!(runtime.take_data_rx().is_none());
        runtime.shutdown();
    }

    #[test]
    fn test_fetch_failure_reports_fetch_kind() {
        // Port 1 is reserved and unbound; the connect fails fast.
        let mut runtime =
            CoreRuntime::new(CoreConfig::new("http://127.0.0.1:1")).unwrap();
        let data_rx = runtime.take_data_rx().unwrap();
        runtime.handle().send(BackendCommand::FetchThreads).unwrap();

        let change = data_rx
            .recv_timeout(std::time::Duration::from_secs(30))
            .unwrap();
        match change {
            DataChange::RequestFailed { kind, error } => {
                assert_eq!(kind, RequestKind::FetchThreads);
                assert!(error.contains("127.0.0.1:1"), "unexpected error: {error}");
            }
            other => panic!("expected RequestFailed, got {other:?}"),
        }
        runtime.shutdown();
    }
}
