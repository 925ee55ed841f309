//! Sequential refinement use case
//!
//! The providers work in series instead of in parallel: the first seat
//! drafts an answer, and each later seat analyzes and tightens the current
//! draft in a single call.

use crate::ports::completion::{CompletionGateway, CompletionRequest, GatewayError};
use crate::use_cases::shared::{is_cancelled, wait_cancelled};
use panel_domain::{
    PromptTemplate, ProviderId, Question, RefineReport, RefineStep, parse_refinement,
};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Errors that can end a refinement run
#[derive(Error, Debug)]
pub enum RunRefineError {
    #[error("Sequential refinement requires at least 2 seats")]
    NotEnoughSeats,

    /// The opening draft failed. With no text to refine the run cannot
    /// continue; later failures only cost their own pass.
    #[error("Draft from {provider} failed: {reason}")]
    DraftFailed { provider: ProviderId, reason: String },

    #[error("Cancelled")]
    Cancelled,
}

/// Input for the RunRefine use case
#[derive(Debug, Clone)]
pub struct RunRefineInput {
    /// The question to pose.
    pub question: Question,
    /// Seats in chain order: the first drafts, the rest refine.
    pub seats: Vec<ProviderId>,
}

impl RunRefineInput {
    pub fn new(question: Question, seats: Vec<ProviderId>) -> Self {
        Self { question, seats }
    }
}

/// Use case for running a sequential refinement chain
pub struct RunRefineUseCase<G: CompletionGateway + 'static> {
    gateway: Arc<G>,
    cancellation: Option<CancellationToken>,
}

impl<G: CompletionGateway + 'static> RunRefineUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            cancellation: None,
        }
    }

    /// Attach a cancellation token. Once cancelled, the run returns
    /// [`RunRefineError::Cancelled`] at the next opportunity.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub async fn execute(&self, input: RunRefineInput) -> Result<RefineReport, RunRefineError> {
        if input.seats.len() < 2 {
            return Err(RunRefineError::NotEnoughSeats);
        }
        if is_cancelled(&self.cancellation) {
            return Err(RunRefineError::Cancelled);
        }

        let question = input.question.content();
        let drafter = &input.seats[0];

        info!("Starting refinement chain with {} seats", input.seats.len());

        let draft_request = CompletionRequest::new(PromptTemplate::panel_query(question))
            .with_system(PromptTemplate::panel_system());
        let draft = match self.call(drafter, draft_request).await? {
            Ok(text) => text,
            Err(e) => {
                return Err(RunRefineError::DraftFailed {
                    provider: drafter.clone(),
                    reason: e.to_string(),
                });
            }
        };

        let mut current = draft;
        let mut steps = vec![RefineStep::draft(drafter.clone(), current.clone())];

        for refiner in &input.seats[1..] {
            let request =
                CompletionRequest::new(PromptTemplate::refine_prompt(question, &current))
                    .with_system(PromptTemplate::refine_system());

            match self.call(refiner, request).await? {
                Ok(response) => {
                    let (analysis, text) = parse_refinement(&response);
                    info!("Seat {} refined the draft", refiner);
                    steps.push(RefineStep::refined(refiner.clone(), analysis, text.clone()));
                    current = text;
                }
                Err(e) => {
                    // A failed refiner costs its own pass, not the chain.
                    warn!("Seat {} refinement failed: {}", refiner, e);
                    steps.push(RefineStep::failed(
                        refiner.clone(),
                        current.clone(),
                        e.to_string(),
                    ));
                }
            }
        }

        Ok(RefineReport::new(question, steps))
    }

    /// One provider call, raced against cancellation.
    async fn call(
        &self,
        provider: &ProviderId,
        request: CompletionRequest,
    ) -> Result<Result<String, GatewayError>, RunRefineError> {
        tokio::select! {
            _ = wait_cancelled(&self.cancellation) => Err(RunRefineError::Cancelled),
            result = self.gateway.complete(provider, request) => Ok(result),
        }
    }
}
