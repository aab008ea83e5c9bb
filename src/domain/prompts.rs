//! Prompt templates for meeting analysis
//!
//! The analysis prompt and the parser form a contract: the prompt asks for
//! exactly the four section headers the parser searches for, in canonical
//! order, with "None identified" as the empty-category sentinel. Treat the
//! wording as versioned; changing the header tokens breaks parsing.

/// Placeholder replaced with the transcript body when rendering
pub const TRANSCRIPT_PLACEHOLDER: &str = "{transcript}";

/// System instruction sent with every analysis request
pub const SYSTEM_PROMPT: &str = "You are an expert meeting assistant who specializes in Indian business contexts. You understand Indian English accents, Hinglish, and Indian names perfectly. You provide accurate, well-formatted meeting summaries.";

/// Analysis prompt, v1. Tuned for Indian English / Hinglish meetings.
pub const ANALYSIS_PROMPT: &str = r#"You are an expert meeting assistant specialized in analyzing Indian business meetings. You understand Indian English, Hinglish (Hindi-English mix), and Indian names perfectly.

TRANSCRIPT:
{transcript}

Analyze this meeting transcript and provide:

1. SUMMARY: Write a concise 3-4 sentence summary of the key discussion points and outcomes.

2. ACTION ITEMS: Extract all tasks, action items, or to-dos mentioned. Format each as:
   - [Person's Name]: [Specific task/action] - [Deadline/timeframe if mentioned]

   Examples:
   - Rajesh: Complete the project report by Friday
   - Priya: Schedule follow-up meeting with client next week
   - Team: Review the proposal and provide feedback

3. PARTICIPANTS: List all participant names mentioned in the conversation. Common Indian names include Rajesh, Priya, Amit, Sneha, Arjun, Rohan, Neha, Vikram, Ananya, etc.

4. KEY DECISIONS: List any important decisions, conclusions, or agreements reached during the meeting.

IMPORTANT NOTES:
- Understand that "ji" is a respectful suffix (e.g., "Amit ji" = "Mr. Amit")
- Recognize Hindi words mixed in English (Hinglish)
- Be accurate with Indian names and their various spellings
- If no specific items found in a category, write "None identified"

Format your response EXACTLY like this:

SUMMARY:
[Your 3-4 sentence summary here]

ACTION ITEMS:
- [Action item 1]
- [Action item 2]
(or write "None identified" if no action items)

PARTICIPANTS:
- [Name 1]
- [Name 2]
(or write "None identified" if no clear participants)

KEY DECISIONS:
- [Decision 1]
- [Decision 2]
(or write "None identified" if no key decisions)"#;

/// Prompt for a one-sentence summary, used by the smoke-test path
pub const QUICK_SUMMARY_PROMPT: &str =
    "Summarize this meeting in one sentence:\n\n{transcript}";

/// Render a prompt template by substituting the transcript body
pub fn render(template: &str, transcript: &str) -> String {
    template.replace(TRANSCRIPT_PLACEHOLDER, transcript)
}
