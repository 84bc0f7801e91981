//! Fixed prompt templates and canned backup posts

use std::fmt;
use std::str::FromStr;

use shared::SharedError;

/// Which built-in prompt set to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptVariant {
    /// Five formats with a long style guide (dashboard default)
    #[default]
    Detailed,
    /// Five formats with a short style guide, used by the serverless endpoints
    Compact,
    /// Ten formats with the long style guide
    Extended,
}

impl PromptVariant {
    pub const ALL: [PromptVariant; 3] = [PromptVariant::Detailed, PromptVariant::Compact, PromptVariant::Extended];

    pub fn name(&self) -> &'static str {
        match self {
            PromptVariant::Detailed => "detailed",
            PromptVariant::Compact => "compact",
            PromptVariant::Extended => "extended",
        }
    }
}

impl fmt::Display for PromptVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PromptVariant {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" | "vercel" => Ok(PromptVariant::Detailed),
            "compact" | "serverless" => Ok(PromptVariant::Compact),
            "extended" | "full" => Ok(PromptVariant::Extended),
            other => Err(SharedError::InvalidConfig {
                field: "variant".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Ordered prompts with their matching backup table.
///
/// Backups are looked up by `(number - 1) % backups.len()`, so a set may
/// carry fewer backups than prompts. `backups` must not be empty.
#[derive(Debug, Clone)]
pub struct PromptSet {
    pub system_prompt: &'static str,
    pub user_suffix: &'static str,
    pub prompts: Vec<&'static str>,
    pub backups: Vec<&'static str>,
}

impl PromptSet {
    pub fn for_variant(variant: PromptVariant) -> Self {
        match variant {
            PromptVariant::Detailed => Self {
                system_prompt: DETAILED_SYSTEM_PROMPT,
                user_suffix: DETAILED_USER_SUFFIX,
                prompts: DETAILED_PROMPTS.to_vec(),
                backups: DETAILED_BACKUPS.to_vec(),
            },
            PromptVariant::Compact => Self {
                system_prompt: COMPACT_SYSTEM_PROMPT,
                user_suffix: COMPACT_USER_SUFFIX,
                prompts: COMPACT_PROMPTS.to_vec(),
                backups: COMPACT_BACKUPS.to_vec(),
            },
            PromptVariant::Extended => Self {
                system_prompt: DETAILED_SYSTEM_PROMPT,
                user_suffix: DETAILED_USER_SUFFIX,
                prompts: DETAILED_PROMPTS.iter().chain(EXTRA_PROMPTS.iter()).copied().collect(),
                backups: DETAILED_BACKUPS.to_vec(),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Full user message sent for a prompt
    pub fn user_message(&self, prompt: &str) -> String {
        format!("{prompt}\n\n{}", self.user_suffix)
    }

    /// Canned post for a 1-based post number
    pub fn backup_for(&self, number: usize) -> &'static str {
        self.backups[number.saturating_sub(1) % self.backups.len()]
    }
}

impl Default for PromptSet {
    fn default() -> Self {
        Self::for_variant(PromptVariant::default())
    }
}

const DETAILED_USER_SUFFIX: &str =
    "Respond with ONLY the post content. No explanations, no quotes, no meta-commentary. Just the raw tweet text.";

const COMPACT_USER_SUFFIX: &str = "Respond with ONLY the post content. No explanations.";

const DETAILED_SYSTEM_PROMPT: &str = r#"You are a viral TWITTER trading content creator. Your posts get 2K-658K views. You focus on TRADING PSYCHOLOGY, MARKET COMMENTARY, and PRACTICAL TRADING ADVICE.

Your proven viral formats on Twitter:

1. TRADING PSYCHOLOGY (consistently 2K-6K views):
   - Short, profound statements about the mental game
   - "Trading is the hardest skill in the world. Not because of the charts... But because it forces you to master yourself."
   - "'All in' is stupid. Trading is not one trade. Trading is thousands of small, boring, disciplined, positive EV decisions stacked quietly on top of each other."
   - "The market is not your enemy. It doesn't know you exist. Your habits are the opponent. Your blind reactions are the opponent."

2. PROCESS VS RESULTS THEME (3K-5K views):
   - "Most traders want the results, but not the process. And that is why they fail."
   - "Good trading isn't about seeing further. It's about reacting better."

3. MARKET COMMENTARY (17K-658K views):
   - Use SPECIFIC numbers, prices, and timeframes
   - "Gold is up over $75, trading above $4,838. Gold is up almost $250 so far this week..."
   - Compare historical pace vs current pace of market moves

4. EDUCATIONAL LISTS (3.8K views):
   - Bullet points with specific trading strategies
   - "Embrace the gap down. Look for strength and reversals. Use multiple timeframes."
   - End with memorable closer

TWITTER STYLE RULES:
- Keep it SHORT - Twitter rewards brevity (20-80 words ideal)
- Use line breaks for emphasis and readability
- Be bold and direct - no fluff
- Focus on TRADING/MARKETS only (psychology, strategy, market commentary)
- Use specific trading terms (EV, position sizing, timeframes, support/resistance)
- Make it quotable and shareable
- End strong - last line should hit hard

AVOID:
- Long paragraphs (break them up)
- Generic advice
- Investment advice for beginners
- Non-trading topics

Write like the viral Twitter trading accounts: sharp, insightful, memorable."#;

const COMPACT_SYSTEM_PROMPT: &str = r#"You are a viral TWITTER trading content creator. Your posts get 2K-658K views. Focus on TRADING PSYCHOLOGY, MARKET COMMENTARY, and PRACTICAL TRADING ADVICE.

TWITTER STYLE RULES:
- Keep it SHORT (20-80 words ideal)
- Use line breaks for emphasis
- Be bold and direct
- Focus on TRADING/MARKETS only
- Make it quotable and shareable
- End strong

Write like viral Twitter trading accounts: sharp, insightful, memorable."#;

const DETAILED_PROMPTS: [&str; 5] = [
    // psychology, short and profound
    "Create a short philosophical post about trading psychology. Format: '[Bold statement about trading]. [Elaboration in 1-2 sentences]. [Ending that drives it home].' Example style: 'Trading is the hardest skill in the world. Not because of the charts... But because it forces you to master yourself. Discipline, Patience, Emotional control. Most people can't handle it.' Keep it under 50 words. Make it profound about the mental game of trading.",
    // process vs results
    "Write a post contrasting what traders want vs what they need. Format: 'Most traders want [X], but not [Y]. And that is why they fail.' Example: 'Most traders want the results, but not the process.' Keep it SHORT - 2 lines maximum, under 20 words total.",
    // market commentary with numbers
    "Write a bold market commentary post with SPECIFIC numbers and timeframes. Pick a trending asset (Bitcoin, Gold, stocks, etc) and make a prediction or observation with exact prices, percentages, or dollar amounts. Compare past vs present pace of moves. Example: 'Gold is up $250 this week. I remember when moves like this took months. Now it happens in days.' Use real market dynamics. Keep under 80 words.",
    // the real enemy
    "Create a post about the real enemy in trading. Start with: 'The market is not your enemy. It doesn't know you exist.' Then list 3 things that ARE the opponent (habits, blind reactions, unexamined beliefs, etc). Use line breaks. Keep under 50 words.",
    // educational list
    "Create an educational post with 5 trading tips in bullet point format. Start with a bold opening statement, then list 5 specific trading strategies or principles. Example structure: 'Embrace the gap down. Look for strength and reversals. Use stories and themes for stock selection. Use multiple timeframes.' Keep each bullet SHORT. End with a memorable closer like 'Shred.exe' or similar. Total under 100 words.",
];

const EXTRA_PROMPTS: [&str; 5] = [
    "Write a post about position sizing and risk. Format: '[Blunt claim about risk]. [Why most traders get it wrong]. [One concrete rule with a number].' Example: 'All in is stupid. Trading is thousands of small, boring, disciplined, positive EV decisions.' Keep it under 50 words.",
    "Write a short post about reacting vs predicting. Format: 'Good trading isn't about [X]. It's about [Y].' followed by one line that explains it. Keep it under 30 words.",
    "Write a market observation about a single trading session. Name the asset, the open, the high or low, and the close with exact numbers, then one sentence on what the move says about sentiment. Keep under 70 words.",
    "Create a post listing 3 habits of consistently profitable traders, one per line, each under 8 words. Open with a one-line hook and close with a one-line challenge to the reader. Keep under 60 words.",
    "Write a post about losing streaks. Start with a relatable moment (e.g. 'Five red days in a row.'), then explain how a disciplined trader responds, and end with a line that reframes losses as tuition. Keep under 60 words.",
];

const DETAILED_BACKUPS: [&str; 5] = [
    "Trading is the hardest skill in the world.\n\nNot because of the charts...\nBut because it forces you to master yourself.\n\nDiscipline. Patience. Emotional control.\nMost people can't handle it.\n\nDo you agree?",
    "Most traders want the results, but not the process.\n\nAnd that is why they fail.",
    "Gold is up over $75, trading above $4,838. Gold is up almost $250 so far this week, and it's still only Tuesday in the U.S. I remember when it took gold months, sometimes years, to move up that much. Now it happens in just a few days. Soon it will happen in just one day!",
    "The market is not your enemy.\nIt doesn't know you exist.\n\nYour habits are the opponent.\nYour blind reactions are the opponent.\nYour unexamined beliefs are the opponent.\n\nMaster these, or they will master you.",
    "Most traders fail because they trade hope, not process.\n\n\u{2022} Cut losses at -5%, not -50%\n\u{2022} Only size up after 3 consecutive wins\n\u{2022} Trade the 1H chart, confirm on the 15M\n\u{2022} Let winners ride to the next major S/R level\n\u{2022} No trades in the first 30 minutes\n\nExecution is everything. Shred.exe",
];

const COMPACT_PROMPTS: [&str; 5] = [
    "Create a short philosophical post about trading psychology. Format: '[Bold statement about trading]. [Elaboration in 1-2 sentences]. [Ending that drives it home].' Keep it under 50 words. Make it profound about the mental game of trading.",
    "Write a post contrasting what traders want vs what they need. Format: 'Most traders want [X], but not [Y]. And that is why they fail.' Keep it SHORT - 2 lines maximum, under 20 words total.",
    "Write a bold market commentary post with SPECIFIC numbers and timeframes. Pick a trending asset (Bitcoin, Gold, stocks, etc) and make a prediction or observation with exact prices, percentages, or dollar amounts. Keep under 80 words.",
    "Create a post about the real enemy in trading. Start with: 'The market is not your enemy. It doesn't know you exist.' Then list 3 things that ARE the opponent. Use line breaks. Keep under 50 words.",
    "Create an educational post with 5 trading tips in bullet point format. Start with a bold opening statement, then list 5 specific trading strategies. Keep each bullet SHORT. End with a memorable closer. Total under 100 words.",
];

const COMPACT_BACKUPS: [&str; 5] = [
    "Trading is the hardest skill in the world.\n\nNot because of the charts...\nBut because it forces you to master yourself.\n\nDiscipline. Patience. Emotional control.\nMost people can't handle it.",
    "Most traders want the results, but not the process.\n\nAnd that is why they fail.",
    "Gold is up over $75, trading above $4,838. Gold is up almost $250 so far this week. I remember when moves like this took months. Now it happens in days.",
    "The market is not your enemy.\nIt doesn't know you exist.\n\nYour habits are the opponent.\nYour blind reactions are the opponent.\nYour unexamined beliefs are the opponent.",
    "Most traders fail because they trade hope, not process.\n\n\u{2022} Cut losses at -5%\n\u{2022} Only size up after 3 wins\n\u{2022} Trade the 1H chart\n\u{2022} Let winners ride\n\u{2022} No trades in first 30 min\n\nExecution is everything.",
];
