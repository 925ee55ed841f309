//! Run Panel use case
//!
//! Orchestrates the full panel flow: independent fan-out, optional
//! cross-critique, and adjudication into one final answer.

use crate::ports::completion::{CompletionGateway, CompletionRequest, GatewayError};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::shared::{is_cancelled, wait_cancelled};
use futures::future;
use panel_domain::{
    Critique, PanelReport, PanelResult, Phase, PromptTemplate, ProviderAnswer, ProviderId,
    Question, SynthesizedAnswer,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can end a panel run
///
/// Individual seat failures are not errors; they are absorbed into the
/// per-seat record. Only run-level outcomes appear here.
#[derive(Error, Debug)]
pub enum RunPanelError {
    #[error("No panel seats configured")]
    NoSeats,

    #[error("No panel answers available: every seat failed")]
    NoPanelAnswers,

    /// The panel answered but the adjudicator did not. Carries the full
    /// per-seat record so callers can fall back to the raw answers.
    #[error("Synthesis unavailable: {reason}")]
    SynthesisUnavailable { panel: PanelResult, reason: String },

    #[error("Cancelled")]
    Cancelled,
}

/// Input for the RunPanel use case
#[derive(Debug, Clone)]
pub struct RunPanelInput {
    /// The question to pose.
    pub question: Question,
    /// Panel seats, in the order answers must be reported.
    pub seats: Vec<ProviderId>,
    /// Provider that synthesizes the final answer. `None` picks the first
    /// seat, in order, that produced an answer.
    pub adjudicator: Option<ProviderId>,
    /// Whether to run the cross-critique round before synthesis.
    pub enable_critique: bool,
}

impl RunPanelInput {
    pub fn new(question: Question, seats: Vec<ProviderId>) -> Self {
        Self {
            question,
            seats,
            adjudicator: None,
            enable_critique: false,
        }
    }

    pub fn with_adjudicator(mut self, adjudicator: ProviderId) -> Self {
        self.adjudicator = Some(adjudicator);
        self
    }

    pub fn with_critique(mut self, enable: bool) -> Self {
        self.enable_critique = enable;
        self
    }
}

/// Use case for running a full panel consultation
pub struct RunPanelUseCase<G: CompletionGateway + 'static> {
    gateway: Arc<G>,
    cancellation: Option<CancellationToken>,
}

impl<G: CompletionGateway + 'static> RunPanelUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            cancellation: None,
        }
    }

    /// Attach a cancellation token. Once cancelled, the run returns
    /// [`RunPanelError::Cancelled`] at the next opportunity and abandons
    /// in-flight provider calls.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunPanelInput) -> Result<PanelReport, RunPanelError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunPanelInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<PanelReport, RunPanelError> {
        if input.seats.is_empty() {
            return Err(RunPanelError::NoSeats);
        }
        if is_cancelled(&self.cancellation) {
            return Err(RunPanelError::Cancelled);
        }

        info!("Starting panel with {} seats", input.seats.len());

        // Phase 1: independent fan-out
        let answers = self.phase_panel(&input, progress).await?;

        if answers.all_failed() {
            return Err(RunPanelError::NoPanelAnswers);
        }

        // Phase 2: cross-critique (optional; pointless with one answer)
        let critiques = if input.enable_critique && answers.answered().count() > 1 {
            self.phase_critique(&input, &answers, progress).await?
        } else {
            debug!("Skipping cross-critique phase");
            vec![]
        };

        // Phase 3: adjudication
        let synthesis = self
            .phase_synthesis(&input, &answers, &critiques, progress)
            .await?;

        Ok(PanelReport::new(
            input.question.content(),
            input.seats.clone(),
            answers,
            critiques,
            synthesis,
        ))
    }

    /// Phase 1: pose the question to every seat in parallel.
    ///
    /// Exactly one entry per seat comes back, in seat order, no matter which
    /// calls failed or in what order they finished.
    async fn phase_panel(
        &self,
        input: &RunPanelInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<PanelResult, RunPanelError> {
        info!("Phase 1: Panel fan-out");
        progress.on_phase_start(&Phase::Panel, input.seats.len());

        let mut join_set = JoinSet::new();

        for (slot, provider) in input.seats.iter().enumerate() {
            let gateway = Arc::clone(&self.gateway);
            let provider = provider.clone();
            let question = input.question.content().to_string();

            join_set.spawn(async move {
                let result = Self::query_seat(&gateway, &provider, &question).await;
                (slot, provider, result)
            });
        }

        // Indexed slots keep seat order while completion order stays free.
        let mut slots: Vec<Option<ProviderAnswer>> = vec![None; input.seats.len()];

        loop {
            let joined = tokio::select! {
                _ = wait_cancelled(&self.cancellation) => {
                    // Dropping the JoinSet aborts the in-flight calls.
                    return Err(RunPanelError::Cancelled);
                }
                joined = join_set.join_next() => joined,
            };

            let Some(result) = joined else { break };

            match result {
                Ok((slot, provider, Ok(text))) => {
                    info!("Seat {} answered", provider);
                    progress.on_task_complete(&Phase::Panel, &provider, true);
                    slots[slot] = Some(ProviderAnswer::answered(provider, text));
                }
                Ok((slot, provider, Err(e))) => {
                    warn!("Seat {} failed: {}", provider, e);
                    progress.on_task_complete(&Phase::Panel, &provider, false);
                    slots[slot] = Some(ProviderAnswer::failed(provider, e.to_string()));
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                }
            }
        }

        progress.on_phase_complete(&Phase::Panel);

        // A join error is the only way a slot stays empty.
        let answers = slots
            .into_iter()
            .zip(&input.seats)
            .map(|(slot, seat)| {
                slot.unwrap_or_else(|| {
                    ProviderAnswer::failed(seat.clone(), "task aborted before completion")
                })
            })
            .collect();

        Ok(PanelResult::new(answers))
    }

    /// Phase 2: each answering seat critiques the other answers.
    ///
    /// A failed critique only costs that critique; the run continues.
    async fn phase_critique(
        &self,
        input: &RunPanelInput,
        answers: &PanelResult,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<Critique>, RunPanelError> {
        info!("Phase 2: Cross-critique");
        progress.on_phase_start(&Phase::Critique, answers.answered().count());

        let question = input.question.content();
        let critique_futures = answers.answered().map(|answer| {
            let critic = answer.provider.clone();
            async move {
                let request = CompletionRequest::new(PromptTemplate::critique_prompt(
                    question, &critic, answers,
                ))
                .with_system(PromptTemplate::critique_system());

                match self.gateway.complete(&critic, request).await {
                    Ok(content) => {
                        progress.on_task_complete(&Phase::Critique, &critic, true);
                        Some(Critique::new(critic, content))
                    }
                    Err(e) => {
                        warn!("Seat {} critique failed: {}", critic, e);
                        progress.on_task_complete(&Phase::Critique, &critic, false);
                        None
                    }
                }
            }
        });

        // join_all keeps results in seat order.
        let critiques = tokio::select! {
            _ = wait_cancelled(&self.cancellation) => {
                return Err(RunPanelError::Cancelled);
            }
            results = future::join_all(critique_futures) => {
                results.into_iter().flatten().collect()
            }
        };

        progress.on_phase_complete(&Phase::Critique);
        Ok(critiques)
    }

    /// Phase 3: the adjudicator reads the whole record and synthesizes.
    async fn phase_synthesis(
        &self,
        input: &RunPanelInput,
        answers: &PanelResult,
        critiques: &[Critique],
        progress: &dyn ProgressNotifier,
    ) -> Result<SynthesizedAnswer, RunPanelError> {
        info!("Phase 3: Synthesis");
        progress.on_phase_start(&Phase::Synthesis, 1);

        if is_cancelled(&self.cancellation) {
            return Err(RunPanelError::Cancelled);
        }

        let adjudicator = match &input.adjudicator {
            Some(provider) => provider.clone(),
            None => answers
                .first_answered()
                .map(|a| a.provider.clone())
                .ok_or(RunPanelError::NoPanelAnswers)?,
        };

        let request = CompletionRequest::new(PromptTemplate::synthesis_prompt(
            input.question.content(),
            answers,
            critiques,
        ))
        .with_system(PromptTemplate::synthesis_system());

        let result = tokio::select! {
            _ = wait_cancelled(&self.cancellation) => {
                return Err(RunPanelError::Cancelled);
            }
            result = self.gateway.complete(&adjudicator, request) => result,
        };

        match result {
            Ok(text) => {
                progress.on_task_complete(&Phase::Synthesis, &adjudicator, true);
                progress.on_phase_complete(&Phase::Synthesis);
                Ok(SynthesizedAnswer::new(adjudicator, text))
            }
            Err(e) => {
                warn!("Adjudicator {} failed: {}", adjudicator, e);
                progress.on_task_complete(&Phase::Synthesis, &adjudicator, false);
                Err(RunPanelError::SynthesisUnavailable {
                    panel: answers.clone(),
                    reason: format!("{}: {}", adjudicator, e),
                })
            }
        }
    }

    /// Pose the question to a single seat.
    async fn query_seat(
        gateway: &G,
        provider: &ProviderId,
        question: &str,
    ) -> Result<String, GatewayError> {
        let request = CompletionRequest::new(PromptTemplate::panel_query(question))
            .with_system(PromptTemplate::panel_system());
        gateway.complete(provider, request).await
    }
}
