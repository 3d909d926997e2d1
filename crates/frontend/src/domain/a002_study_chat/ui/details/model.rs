//! Assistant Chat Details - Model
//!
//! The simulated responder is the single seam the view model calls; a real
//! chat service can replace it without touching the view.

use contracts::domain::a002_study_chat::reply::{templated_reply, ASSISTANT_REPLY_DELAY_MS};
use gloo_timers::future::TimeoutFuture;

/// Produce the assistant's reply after the fixed thinking delay.
pub async fn simulated_response(material_title: &str, question: &str) -> String {
    TimeoutFuture::new(ASSISTANT_REPLY_DELAY_MS).await;
    templated_reply(material_title, question)
}
