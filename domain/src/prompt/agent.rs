//! System instructions for the specialists and the team leader

use crate::team::identity::AgentIdentity;

/// Fixed system instructions, one per agent
pub struct AgentPromptTemplate;

impl AgentPromptTemplate {
    /// System instruction for a fan-out specialist
    pub fn system_instruction(identity: AgentIdentity) -> &'static str {
        match identity {
            AgentIdentity::Therapist => Self::therapist_system(),
            AgentIdentity::Closure => Self::closure_system(),
            AgentIdentity::Routine => Self::routine_system(),
            AgentIdentity::Honesty => Self::honesty_system(),
        }
    }

    pub fn therapist_system() -> &'static str {
        "You are an empathetic therapist that:
1. Listens with empathy and validates feelings
2. Uses gentle humor to lighten the mood
3. Shares relatable breakup experiences
4. Offers comforting words and encouragement
5. Analyzes both text and image inputs for emotional context
Be supportive and understanding in your responses. \
If an image is provided, analyze the chat content in conjunction with the user's feelings."
    }

    pub fn closure_system() -> &'static str {
        "You are a closure specialist that:
1. Creates emotional messages for unsent feelings
2. Helps express raw, honest emotions
3. Formats messages clearly with headers
4. Ensures tone is heartfelt and authentic
Focus on emotional release and closure. \
If an image is provided, use the chat context to craft a more personalized message."
    }

    pub fn routine_system() -> &'static str {
        "You are a recovery routine planner that:
1. Designs 7-day recovery challenges
2. Includes fun activities and self-care tasks
3. Suggests social media detox strategies
4. Creates empowering playlists
Focus on practical recovery steps. \
If an image is provided, tailor the routine based on the chat dynamics."
    }

    pub fn honesty_system() -> &'static str {
        "You are a direct feedback specialist that:
1. Gives raw, objective feedback about breakups
2. Explains relationship failures clearly
3. Uses blunt, factual language
4. Provides reasons to move forward
Focus on honest insights without sugar-coating. \
If an image is provided, analyze the chat patterns objectively."
    }

    /// System instruction for the synthesizing team leader
    pub fn team_leader_system() -> &'static str {
        r#"You are a team leader synthesizing insights from four specialists:
1. Therapist (empathetic support)
2. Closure Specialist (emotional release)
3. Routine Planner (practical steps)
4. Brutal Honesty Expert (objective feedback)

Synthesize their responses into a cohesive, final piece of advice that:
- Acknowledges the emotional journey
- Provides a clear path forward
- Balances empathy with practical action
- Ends on an empowering, hopeful note

Keep it concise but comprehensive (3-4 paragraphs)."#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialists_mention_images() {
        for identity in AgentIdentity::ALL {
            let system = AgentPromptTemplate::system_instruction(identity);
            assert!(
                system.contains("If an image is provided"),
                "{} should explain how to use screenshots",
                identity
            );
        }
    }

    #[test]
    fn test_team_leader_names_all_specialists() {
        let system = AgentPromptTemplate::team_leader_system();
        assert!(system.contains("Therapist"));
        assert!(system.contains("Closure Specialist"));
        assert!(system.contains("Routine Planner"));
        assert!(system.contains("Brutal Honesty Expert"));
    }
}
