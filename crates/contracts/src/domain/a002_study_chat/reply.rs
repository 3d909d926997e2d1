//! Templated assistant replies for the simulated chat path.
//!
//! There is no language-model call behind the chat widget; the assistant turn
//! is rendered from the material context after a fixed delay. A real service
//! can replace the call site without touching the widget.

/// Simulated "thinking" delay before the assistant turn appears
pub const ASSISTANT_REPLY_DELAY_MS: u32 = 900;

/// Render the canned assistant turn for a question about one material.
pub fn templated_reply(material_title: &str, question: &str) -> String {
    let topic = question.trim();
    if topic.is_empty() {
        return format!(
            "I can answer questions about \"{}\". What would you like to know?",
            material_title
        );
    }
    format!(
        "Looking at \"{}\": here is what I found about \"{}\". \
         The material covers this in its key sections; try generating a \
         summary or flashcards from it for a structured view.",
        material_title, topic
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_references_material_title() {
        let reply = templated_reply("Organic Chemistry II", "alkenes");
        assert!(reply.contains("Organic Chemistry II"));
        assert!(reply.contains("alkenes"));
    }

    #[test]
    fn blank_question_still_references_title() {
        let reply = templated_reply("History 101", "   ");
        assert!(reply.contains("History 101"));
    }
}
