//! Network actor - runs API calls in the Tokio async runtime

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse, Operation};
use crate::network::api::CandidatesApi;

/// Network actor that executes candidate API commands.
///
/// Every command runs in its own task; nothing is deduplicated or cancelled
/// here. The app layer decides which responses still matter.
pub struct NetworkActor<A: CandidatesApi + ?Sized + 'static> {
    api: Arc<A>,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl<A: CandidatesApi + ?Sized + 'static> NetworkActor<A> {
    pub fn new(api: Arc<A>, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            api,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::SearchCandidates { id, query }) => {
                            let api = self.api.clone();
                            let response_tx = self.response_tx.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, page = query.page, "Searching candidates");
                                let start = Instant::now();
                                let result = api.search_candidates(&query).await;
                                let time_ms = start.elapsed().as_millis() as u64;

                                let response = match result {
                                    Ok(page) => {
                                        tracing::info!(
                                            id,
                                            count = page.content.len(),
                                            total_pages = page.total_pages,
                                            time_ms,
                                            "Page loaded"
                                        );
                                        NetworkResponse::PageLoaded { id, page, time_ms }
                                    }
                                    Err(e) => {
                                        tracing::error!(id, error = %e, "Error fetching candidates");
                                        NetworkResponse::Error {
                                            id,
                                            operation: Operation::Search,
                                            message: e.to_string(),
                                            time_ms,
                                        }
                                    }
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::CreateCandidate { id, candidate }) => {
                            let api = self.api.clone();
                            let response_tx = self.response_tx.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, email = %candidate.email, "Creating candidate");
                                let start = Instant::now();
                                let result = api.create_candidate(&candidate).await;
                                let time_ms = start.elapsed().as_millis() as u64;

                                let response = match result {
                                    Ok(created) => {
                                        tracing::info!(
                                            id,
                                            candidate = %created.id,
                                            time_ms,
                                            "Created candidate"
                                        );
                                        NetworkResponse::CandidateCreated {
                                            id,
                                            candidate: created,
                                            time_ms,
                                        }
                                    }
                                    Err(e) => {
                                        tracing::error!(id, error = %e, "Error creating candidate");
                                        NetworkResponse::Error {
                                            id,
                                            operation: Operation::Create,
                                            message: e.to_string(),
                                            time_ms,
                                        }
                                    }
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Filters, NewCandidate, PageQuery};
    use crate::network::fake::{candidate, FakeCandidatesApi};

    fn spawn(api: FakeCandidatesApi) -> (
        Arc<FakeCandidatesApi>,
        mpsc::UnboundedSender<NetworkCommand>,
        mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        let api = Arc::new(api);
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, resp_rx) = mpsc::unbounded_channel();
        tokio::spawn(NetworkActor::new(api.clone(), resp_tx).run(cmd_rx));
        (api, cmd_tx, resp_rx)
    }

    #[tokio::test]
    async fn test_search_returns_page_with_same_id() {
        let fake = FakeCandidatesApi::with_candidates(vec![candidate("Ada", 0)]);
        let (_api, cmd_tx, mut resp_rx) = spawn(fake);

        cmd_tx
            .send(NetworkCommand::SearchCandidates {
                id: 7,
                query: PageQuery::newest_first(0, Filters::default()),
            })
            .unwrap();

        match resp_rx.recv().await.unwrap() {
            NetworkResponse::PageLoaded { id, page, .. } => {
                assert_eq!(id, 7);
                assert_eq!(page.content.len(), 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_failure_is_reported_as_create_error() {
        let api = FakeCandidatesApi::default();
        api.fail_creates(true);
        let (api, cmd_tx, mut resp_rx) = spawn(api);

        cmd_tx
            .send(NetworkCommand::CreateCandidate {
                id: 3,
                candidate: NewCandidate::sample(),
            })
            .unwrap();

        match resp_rx.recv().await.unwrap() {
            NetworkResponse::Error { id, operation, .. } => {
                assert_eq!(id, 3);
                assert_eq!(operation, Operation::Create);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(api.created().is_empty());
    }

    #[tokio::test]
    async fn test_shutdown_stops_the_actor() {
        let (_api, cmd_tx, mut resp_rx) = spawn(FakeCandidatesApi::default());
        cmd_tx.send(NetworkCommand::Shutdown).unwrap();

        // The actor drops its sender when it exits
        assert!(resp_rx.recv().await.is_none());
    }
}
