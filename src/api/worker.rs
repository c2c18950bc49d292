//! API worker thread
//!
//! Runs requests on a single-threaded tokio runtime inside a background
//! thread so the UI never blocks on the network. Every request becomes its own
//! task: any number of suggestion fetches may be in flight next to a
//! completion, and their results come back in whatever order the network
//! delivers them. Staleness is the receiver's concern, not the worker's.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use super::ApiError;
use super::client::ApiClient;
use super::types::{CompletionRequest, Message, PromptSuggestion};

/// Requests sent from the UI thread to the worker
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    /// Fetch prompt suggestions for a draft
    Suggest {
        query: String,
        top_k: u32,
        /// Monotonic id, only used for logging
        request_id: u64,
    },
    StartConversation { title: Option<String> },
    LoadMessages { conversation_id: i64 },
    Complete(CompletionRequest),
}

/// Responses delivered back to the UI thread
#[derive(Debug)]
pub enum ApiResponse {
    Suggestions {
        /// Draft text the fetch was issued for
        query: String,
        request_id: u64,
        result: Result<Vec<PromptSuggestion>, ApiError>,
    },
    ConversationStarted(Result<i64, ApiError>),
    Messages {
        conversation_id: i64,
        result: Result<Vec<Message>, ApiError>,
    },
    Completion(Result<String, ApiError>),
}

/// UI-side ends of the worker channels
pub struct ApiHandle {
    request_tx: UnboundedSender<ApiRequest>,
    response_rx: Receiver<ApiResponse>,
}

impl ApiHandle {
    /// Build a handle around existing channel ends
    pub fn from_channels(
        request_tx: UnboundedSender<ApiRequest>,
        response_rx: Receiver<ApiResponse>,
    ) -> Self {
        Self {
            request_tx,
            response_rx,
        }
    }

    /// Queue a request; false if the worker has gone away
    pub fn send(&self, request: ApiRequest) -> bool {
        match self.request_tx.send(request) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("API worker unavailable, dropping {:?}", e.0);
                false
            }
        }
    }

    /// Next finished response, if any, without blocking
    pub fn try_recv(&self) -> Option<ApiResponse> {
        match self.response_rx.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => None,
        }
    }
}

/// Spawn the API worker thread for `client`
pub fn spawn_worker(client: ApiClient) -> ApiHandle {
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();

    std::thread::spawn(move || {
        worker_loop(client, request_rx, response_tx);
    });

    ApiHandle::from_channels(request_tx, response_rx)
}

/// Main worker loop - processes requests until the request channel is closed
fn worker_loop(
    client: ApiClient,
    mut request_rx: UnboundedReceiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::warn!("Failed to start API runtime: {}", e);
            fail_all(&mut request_rx, &response_tx, &e.to_string());
            return;
        }
    };

    let client = Arc::new(client);
    runtime.block_on(async move {
        while let Some(request) = request_rx.recv().await {
            let client = Arc::clone(&client);
            let response_tx = response_tx.clone();
            tokio::spawn(async move {
                let response = handle_request(&client, request).await;
                if response_tx.send(response).is_err() {
                    log::debug!("UI disconnected, dropping API response");
                }
            });
        }
    });

    log::debug!("API worker thread shutting down");
}

/// Run one request to completion and wrap the result for the UI
async fn handle_request(client: &ApiClient, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::Suggest {
            query,
            top_k,
            request_id,
        } => {
            log::debug!("Suggest request {} for {:?}", request_id, query);
            let result = client.suggest(&query, top_k).await;
            ApiResponse::Suggestions {
                query,
                request_id,
                result,
            }
        }
        ApiRequest::StartConversation { title } => {
            ApiResponse::ConversationStarted(client.start_conversation(title.as_deref()).await)
        }
        ApiRequest::LoadMessages { conversation_id } => ApiResponse::Messages {
            conversation_id,
            result: client.messages(conversation_id).await,
        },
        ApiRequest::Complete(request) => {
            log::debug!("Completion request with model {}", request.model.as_str());
            ApiResponse::Completion(client.complete(&request).await)
        }
    }
}

/// Answer every request with an error when the runtime could not start
fn fail_all(
    request_rx: &mut UnboundedReceiver<ApiRequest>,
    response_tx: &Sender<ApiResponse>,
    reason: &str,
) {
    while let Some(request) = request_rx.blocking_recv() {
        let err = || ApiError::NotConfigured(format!("API runtime unavailable: {}", reason));
        let response = match request {
            ApiRequest::Suggest {
                query, request_id, ..
            } => ApiResponse::Suggestions {
                query,
                request_id,
                result: Err(err()),
            },
            ApiRequest::StartConversation { .. } => ApiResponse::ConversationStarted(Err(err())),
            ApiRequest::LoadMessages { conversation_id } => ApiResponse::Messages {
                conversation_id,
                result: Err(err()),
            },
            ApiRequest::Complete(_) => ApiResponse::Completion(Err(err())),
        };
        if response_tx.send(response).is_err() {
            return;
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
