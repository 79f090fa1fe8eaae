//! Composite prompt for the synthesis step

use crate::team::identity::AgentIdentity;
use crate::team::outcome::AgentOutcomeSet;

/// Stand-in text for a specialist that produced no output
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response";

const CLOSING_INSTRUCTION: &str =
    "\nSynthesize these insights into a cohesive final recommendation.\n";

/// Templates for prompts built at runtime
pub struct PromptTemplate;

impl PromptTemplate {
    /// User prompt for the team leader.
    ///
    /// Embeds the original feelings verbatim, then one section per specialist
    /// in fixed order. A specialist without output (failed, empty or absent)
    /// gets [`NO_RESPONSE_PLACEHOLDER`].
    pub fn synthesis_prompt(feelings: &str, outcomes: &AgentOutcomeSet) -> String {
        let mut prompt = format!(
            r#"
Original User Input:
"{}"

Agent Responses:
"#,
            feelings
        );

        for identity in AgentIdentity::ALL {
            let outcome = outcomes.get(identity);
            let name = outcome
                .map(|o| o.name.as_str())
                .unwrap_or_else(|| identity.display_name());
            let output = outcome
                .and_then(|o| o.usable_output())
                .unwrap_or(NO_RESPONSE_PLACEHOLDER);

            prompt.push_str(&format!("\n**{}:**\n{}\n", name, output));
        }

        prompt.push_str(CLOSING_INSTRUCTION);
        prompt
    }
}
