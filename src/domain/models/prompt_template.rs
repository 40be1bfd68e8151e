/// A named prompt helper: an instruction wrapped around the caller's text.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    name: &'static str,
    instruction: &'static str,
}

impl PromptTemplate {
    pub const fn new(name: &'static str, instruction: &'static str) -> Self {
        Self { name, instruction }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn instruction(&self) -> &'static str {
        self.instruction
    }

    /// Prefix the instruction to the user's text, producing the prompt that
    /// actually goes to the model.
    pub fn render(&self, prompt: &str) -> String {
        format!("{}\n\n{}", self.instruction, prompt)
    }
}

/// The closed set of invokable prompt helpers.
///
/// Helper selection is allow-listed: a request can only invoke a name that was
/// registered here, never an arbitrary member. Registration order is preserved
/// so listings can break sorting ties deterministically.
pub struct PromptCatalog {
    templates: Vec<PromptTemplate>,
}

impl PromptCatalog {
    pub fn new(templates: Vec<PromptTemplate>) -> Self {
        Self { templates }
    }

    /// The stock persona helpers shipped with the service.
    pub fn standard() -> Self {
        Self::new(vec![
            PromptTemplate::new(
                "actAsLinuxTerminal",
                "I want you to act as a Linux terminal. I will type commands and you will reply \
                 with what the terminal should show. Reply only with the terminal output inside \
                 one unique code block, and nothing else. Do not write explanations.",
            ),
            PromptTemplate::new(
                "actAsEnglishTranslator",
                "I want you to act as an English translator, spelling corrector and improver. I \
                 will speak to you in any language and you will detect the language, translate it \
                 and answer in corrected, improved English. Keep the meaning the same.",
            ),
            PromptTemplate::new(
                "actAsInterviewer",
                "I want you to act as an interviewer. I will be the candidate and you will ask me \
                 interview questions for the position described below. Ask the questions one by \
                 one and wait for my answers. Do not write all the questions at once.",
            ),
            PromptTemplate::new(
                "actAsTravelGuide",
                "I want you to act as a travel guide. I will write you my location and you will \
                 suggest places to visit near me, including places of a similar type to ones I \
                 mention.",
            ),
            PromptTemplate::new(
                "actAsStoryteller",
                "I want you to act as a storyteller. You will come up with an entertaining story \
                 that is engaging, imaginative and captivating for the audience, based on the \
                 theme I give you.",
            ),
            PromptTemplate::new(
                "actAsMotivationalCoach",
                "I want you to act as a motivational coach. I will give you some information \
                 about my goals and challenges, and it will be your job to come up with \
                 strategies that help me achieve them.",
            ),
            PromptTemplate::new(
                "actAsJavaScriptConsole",
                "I want you to act as a JavaScript console. I will type commands and you will \
                 reply with what the console should show. Reply only with the console output \
                 inside one unique code block. Do not write explanations.",
            ),
            PromptTemplate::new(
                "actAsExcelSheet",
                "I want you to act as a text-based Excel sheet. You will reply with a ten-row \
                 sheet with row numbers and columns A to L. I will write formulas and values and \
                 you will reply only with the resulting table as text.",
            ),
            PromptTemplate::new(
                "ExplainCode",
                "Explain the following code. Describe what it does, walk through the important \
                 parts, and point out anything surprising or error-prone.",
            ),
            PromptTemplate::new(
                "summarizeText",
                "Summarize the following text in a few short sentences, keeping the key facts \
                 and dropping filler.",
            ),
            PromptTemplate::new(
                "actAsEtymologist",
                "I want you to act as an etymologist. I will give you a word and you will \
                 research its origin, tracing it back to its roots and explaining how its \
                 meaning has changed over time.",
            ),
            PromptTemplate::new(
                "actAsPlagiarismChecker",
                "I want you to act as a plagiarism checker. I will give you a sentence and you \
                 will reply only with whether it is likely to pass a plagiarism check, in the \
                 language of the sentence, and nothing else.",
            ),
        ])
    }

    pub fn get(&self, name: &str) -> Option<&PromptTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Templates in registration order.
    pub fn templates(&self) -> &[PromptTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
