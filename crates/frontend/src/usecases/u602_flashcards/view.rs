use contracts::enums::ContentKind;
use contracts::usecases::u600_generate_content::GenerationResult;
use leptos::prelude::*;

use crate::shared::components::{PageHeader, ResultActions};
use crate::usecases::u600_generate_content::GenerationPanel;

/// Parse `Q:`/`A:` line pairs into cards.
///
/// Returns `None` when the content does not follow the pair format; the page
/// then falls back to raw text.
fn parse_cards(content: &str) -> Option<Vec<(String, String)>> {
    let mut cards = Vec::new();
    let mut question: Option<String> = None;

    for line in content.lines() {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if let Some(q) = text.strip_prefix("Q:") {
            question = Some(q.trim().to_string());
        } else if let Some(a) = text.strip_prefix("A:") {
            let q = question.take()?;
            cards.push((q, a.trim().to_string()));
        } else {
            return None;
        }
    }

    if cards.is_empty() {
        None
    } else {
        Some(cards)
    }
}

#[component]
pub fn FlashcardsPage() -> impl IntoView {
    let render_result = Callback::new(|result: GenerationResult| {
        let cards = parse_cards(&result.content);
        view! {
            <div style="display: flex; flex-direction: column; gap: 12px;">
                <ResultActions result=result.clone() />
                {match cards {
                    Some(cards) => view! {
                        <div
                            class="flashcard-grid"
                            style="display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 12px;"
                        >
                            {cards.into_iter().map(|(question, answer)| view! {
                                <div
                                    class="flashcard"
                                    style="border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; padding: 14px;"
                                >
                                    <div style="font-weight: bold; margin-bottom: 8px;">{question}</div>
                                    <div style="color: var(--colorNeutralForeground3);">{answer}</div>
                                </div>
                            }).collect_view()}
                        </div>
                    }.into_any(),
                    None => view! {
                        <div style="white-space: pre-wrap; line-height: 1.6;">{result.content.clone()}</div>
                    }.into_any(),
                }}
            </div>
        }
        .into_any()
    });

    view! {
        <div style="padding: 20px;">
            <PageHeader
                title="Flashcards"
                subtitle="Turn a document into question/answer cards"
            >
                <></>
            </PageHeader>
            <GenerationPanel kind=ContentKind::Flashcards render_result=render_result />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_question_answer_pairs() {
        let cards = parse_cards("Q: What is RNA?\nA: Ribonucleic acid\n\nQ: Where?\nA: Cells").unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].0, "What is RNA?");
        assert_eq!(cards[0].1, "Ribonucleic acid");
    }

    #[test]
    fn prose_falls_back_to_none() {
        assert!(parse_cards("Here are your flashcards.").is_none());
    }

    #[test]
    fn answer_without_question_falls_back() {
        assert!(parse_cards("A: orphan answer").is_none());
    }
}
