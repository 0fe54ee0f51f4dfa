use crate::directory::DirectoryStats;

const GREETING_REPLY: &str = "Bonjour ! Comment puis-je vous aider ?";
const FALLBACK_REPLY: &str = "Désolé, je ne comprends pas. Essayez de poser une question sur les projets, les entreprises ou les domaines.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

/// Keyword reply over the loaded totals. The first matching keyword wins, in
/// the order projects, companies, domains, greeting.
pub fn reply(stats: &DirectoryStats, message: &str) -> String {
    let message = message.to_lowercase();

    if message.contains("projets") {
        format!("Il y a {} projets au total.", stats.total_projects)
    } else if message.contains("entreprises") {
        format!("Il y a {} entreprises au total.", stats.total_companies)
    } else if message.contains("domaines") {
        let domains = stats
            .projects_by_domain
            .iter()
            .map(|(domain, _)| domain.as_str())
            .collect::<Vec<_>>();
        format!(
            "Les domaines de recherche disponibles sont : {}.",
            domains.join(", ")
        )
    } else if message.contains("bonjour") || message.contains("salut") {
        GREETING_REPLY.to_owned()
    } else {
        FALLBACK_REPLY.to_owned()
    }
}

/// Conversation history of the assistant window.
#[derive(Clone, Debug, Default)]
pub struct Assistant {
    messages: Vec<ChatMessage>,
}

impl Assistant {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Records the user's message and the reply. Blank input is ignored.
    pub fn send(&mut self, stats: &DirectoryStats, input: &str) -> bool {
        let input = input.trim();
        if input.is_empty() {
            return false;
        }

        let answer = reply(stats, input);
        tracing::debug!(question = input, "assistant replied");
        self.messages.push(ChatMessage {
            speaker: Speaker::User,
            text: input.to_owned(),
        });
        self.messages.push(ChatMessage {
            speaker: Speaker::Assistant,
            text: answer,
        });
        true
    }
}
