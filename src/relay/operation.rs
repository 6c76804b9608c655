use crate::config::UpstreamConfig;
use crate::providers::openrouter::{ChatCompletionRequest, Message};

const ASK_TEMPERATURE: f32 = 0.7;
const ASK_MAX_TOKENS: u32 = 500;

const HUMANIZE_TEMPERATURE: f32 = 0.75;
const HUMANIZE_MIN_TOKENS: u32 = 50;
const HUMANIZE_TOKEN_MARGIN: u32 = 100;

const HUMANIZE_SYSTEM_PROMPT: &str = "Você é um assistente especialista em reescrever textos para soarem mais naturais e humanos. Seu objetivo é tornar a comunicação menos formal e mais calorosa, mantendo o significado original. Evite jargões excessivos e prefira uma linguagem coloquial e amigável.";

/// The two relay entry points. Each variant fixes its prompt shape, sampling
/// temperature, output budget and post-processing; everything else is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Ask,
    Humanize,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Ask => "ask",
            Operation::Humanize => "humanize",
        }
    }

    /// JSON field the input arrives in.
    pub fn input_field(self) -> &'static str {
        match self {
            Operation::Ask => "question",
            Operation::Humanize => "text",
        }
    }

    pub fn title(self, cfg: &UpstreamConfig) -> &str {
        match self {
            Operation::Ask => &cfg.ask_title,
            Operation::Humanize => &cfg.humanize_title,
        }
    }

    pub fn temperature(self) -> f32 {
        match self {
            Operation::Ask => ASK_TEMPERATURE,
            Operation::Humanize => HUMANIZE_TEMPERATURE,
        }
    }

    pub fn max_tokens(self, input: &str) -> u32 {
        match self {
            Operation::Ask => ASK_MAX_TOKENS,
            Operation::Humanize => humanize_token_budget(input),
        }
    }

    pub fn messages(self, input: &str) -> Vec<Message> {
        match self {
            Operation::Ask => vec![Message::user(input)],
            Operation::Humanize => vec![
                Message::system(HUMANIZE_SYSTEM_PROMPT),
                Message::user(format!(
                    "Por favor, humanize o seguinte texto:\n\n\"{}\"",
                    input
                )),
            ],
        }
    }

    pub fn build_request(self, model: &str, input: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: model.to_string(),
            messages: self.messages(input),
            temperature: self.temperature(),
            max_tokens: self.max_tokens(input),
        }
    }

    pub fn finish(self, content: &str) -> String {
        match self {
            Operation::Ask => content.to_string(),
            Operation::Humanize => clean_rewrite(content),
        }
    }
}

/// `max(50, len + 100)` where `len` counts UTF-16 code units, the unit the
/// browser client measures text in. Saturates on absurdly long input.
pub fn humanize_token_budget(text: &str) -> u32 {
    let len = u32::try_from(text.encode_utf16().count()).unwrap_or(u32::MAX);
    len.saturating_add(HUMANIZE_TOKEN_MARGIN)
        .max(HUMANIZE_MIN_TOKENS)
}

/// Trims and drops one wrapping double quote on each side; the model tends to
/// echo the quotes from the prompt template.
pub fn clean_rewrite(content: &str) -> String {
    let trimmed = content.trim();
    let unquoted = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let unquoted = unquoted.strip_suffix('"').unwrap_or(unquoted);
    unquoted.trim().to_string()
}
