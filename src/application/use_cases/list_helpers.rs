use std::sync::Arc;

use crate::domain::{Choice, PromptCatalog};

/// Lists the invokable prompt helpers as labeled choices.
pub struct ListHelpersUseCase {
    catalog: Arc<PromptCatalog>,
}

impl ListHelpersUseCase {
    pub fn new(catalog: Arc<PromptCatalog>) -> Self {
        Self { catalog }
    }

    /// One choice per registered helper, sorted case-insensitively by title.
    /// The sort is stable, so equal keys keep registration order.
    pub fn execute(&self) -> Vec<Choice> {
        let mut choices: Vec<Choice> = self
            .catalog
            .templates()
            .iter()
            .map(|t| Choice::new(t.name()))
            .collect();

        choices.sort_by_key(|c| c.title.to_lowercase());
        choices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::PromptTemplate;

    fn catalog(names: &[&'static str]) -> Arc<PromptCatalog> {
        Arc::new(PromptCatalog::new(
            names.iter().map(|n| PromptTemplate::new(n, "x")).collect(),
        ))
    }

    #[test]
    fn one_choice_per_helper_with_matching_fields() {
        let use_case = ListHelpersUseCase::new(catalog(&["b", "a", "c"]));
        let choices = use_case.execute();

        assert_eq!(choices.len(), 3);
        for choice in &choices {
            assert_eq!(choice.title, choice.value);
        }
    }

    #[test]
    fn sorted_case_insensitively() {
        // Byte order would put "ExplainCode" first; case-insensitive order
        // interleaves it among the lowercase names.
        let use_case = ListHelpersUseCase::new(catalog(&[
            "summarizeText",
            "ExplainCode",
            "actAsLinuxTerminal",
        ]));
        let titles: Vec<_> = use_case.execute().into_iter().map(|c| c.title).collect();

        assert_eq!(titles, vec!["actAsLinuxTerminal", "ExplainCode", "summarizeText"]);
    }

    #[test]
    fn ordering_is_pairwise_nondecreasing() {
        let use_case = ListHelpersUseCase::new(Arc::new(PromptCatalog::standard()));
        let choices = use_case.execute();

        for pair in choices.windows(2) {
            assert!(pair[0].title.to_lowercase() <= pair[1].title.to_lowercase());
        }
    }

    #[test]
    fn equal_keys_keep_registration_order() {
        let use_case = ListHelpersUseCase::new(catalog(&["Dup", "dup", "aaa"]));
        let titles: Vec<_> = use_case.execute().into_iter().map(|c| c.title).collect();

        assert_eq!(titles, vec!["aaa", "Dup", "dup"]);
    }
}
