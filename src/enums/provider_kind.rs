use std::fmt;

/// The chat-completion backends the factory knows how to build.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ProviderKind {
    OpenAI,
    AzureOpenAI,
    Ollama,
    GitHubModels,
    /// A tag nobody recognized. The factory builds an OpenAI client for it.
    Unknown,
}

impl ProviderKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "openai" => ProviderKind::OpenAI,
            "azureopenai" => ProviderKind::AzureOpenAI,
            "ollama" => ProviderKind::Ollama,
            "githubmodels" => ProviderKind::GitHubModels,
            _ => ProviderKind::Unknown,
        }
    }

    pub fn requires_api_key(self) -> bool {
        !matches!(self, ProviderKind::Ollama)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProviderKind::OpenAI => "OpenAI",
            ProviderKind::AzureOpenAI => "AzureOpenAI",
            ProviderKind::Ollama => "Ollama",
            ProviderKind::GitHubModels => "GitHubModels",
            ProviderKind::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_case_insensitively() {
        assert_eq!(ProviderKind::from_tag("AzureOpenAI"), ProviderKind::AzureOpenAI);
        assert_eq!(ProviderKind::from_tag("OLLAMA"), ProviderKind::Ollama);
        assert_eq!(ProviderKind::from_tag("githubmodels"), ProviderKind::GitHubModels);
        assert_eq!(ProviderKind::from_tag("OpenAI"), ProviderKind::OpenAI);
    }

    #[test]
    fn unrecognized_tag_is_unknown() {
        assert_eq!(ProviderKind::from_tag("anthropic"), ProviderKind::Unknown);
        assert_eq!(ProviderKind::from_tag(""), ProviderKind::Unknown);
    }
}
