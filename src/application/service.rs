//! Pattern service: input file in, keyword and pattern lines out.

use std::fs;
use std::path::Path;

use tracing::{info, instrument};

use crate::application::{ApplicationResult, IoResultExt, ProblemInput};
use crate::config::Settings;
use crate::domain::{derive_pattern, Derivation, Grammar, SynthesisOptions, Trie};

/// Keyword line announcing a pattern production.
pub const PATTERN_KEYWORD: &str = "regex";

/// The two output lines for a derivation.
pub fn render_output(derivation: &Derivation) -> String {
    format!("{}\n{}\n", PATTERN_KEYWORD, derivation.pattern)
}

#[derive(Debug, Clone)]
pub struct PatternService {
    settings: Settings,
}

impl PatternService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn options(&self) -> SynthesisOptions {
        SynthesisOptions {
            wildcard: self.settings.wildcard,
            grammar: Grammar::new(self.settings.escape),
        }
    }

    pub fn derive(&self, input: &ProblemInput) -> Derivation {
        derive_pattern(&input.accepted, &input.rejected, self.options())
    }

    /// Prefix tree of the accepted words, for inspection.
    pub fn tree(&self, input: &ProblemInput) -> Trie {
        Trie::from_words(&input.accepted)
    }

    /// Loads `input_path`, derives the pattern and writes both lines to `output_path`.
    #[instrument(level = "debug", skip(self))]
    pub fn generate(&self, input_path: &Path, output_path: &Path) -> ApplicationResult<Derivation> {
        let input = ProblemInput::load(input_path)?;
        let derivation = self.derive(&input);
        self.write_output(&derivation, output_path)?;
        Ok(derivation)
    }

    #[instrument(level = "debug", skip(self, derivation))]
    pub fn write_output(&self, derivation: &Derivation, output_path: &Path) -> ApplicationResult<()> {
        fs::write(output_path, render_output(derivation))
            .with_path_context("write output", output_path)?;
        info!("pattern written to {}", output_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WildcardPolicy;

    #[test]
    fn test_render_output_has_keyword_line() {
        let service = PatternService::new(Settings::default());
        let input = ProblemInput::new(vec!["a".into()], vec![]);
        assert_eq!(render_output(&service.derive(&input)), "regex\na\n");
    }

    #[test]
    fn test_options_follow_settings() {
        let settings = Settings {
            escape: false,
            wildcard: WildcardPolicy::Reachable,
            ..Settings::default()
        };
        let options = PatternService::new(settings).options();
        assert_eq!(options.wildcard, WildcardPolicy::Reachable);
        assert!(!options.grammar.escape);
    }
}
