use serde::{Deserialize, Serialize};

/// A labeled option presented to callers discovering the helper catalog.
///
/// `title` and `value` are always the helper name; the split mirrors the
/// prompt-picker UIs these listings feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub title: String,
    pub value: String,
}

impl Choice {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            title: name.clone(),
            value: name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_value_match_name() {
        let choice = Choice::new("actAsLinuxTerminal");
        assert_eq!(choice.title, "actAsLinuxTerminal");
        assert_eq!(choice.value, "actAsLinuxTerminal");
    }
}
