//! Keyword-matched planner replies. A deterministic rule table, not a
//! model: the first keyword found in the lowercased message picks a
//! fixed markdown template.

const CAR_REPLY: &str = "### 🚗 Car Decision\n\n\
Buying a car increases fixed monthly expenses.\n\n\
**Recommendation:**\n\
- Keep EMI under 40% of income\n\
- Maintain 30% savings rate\n\
- Avoid reducing emergency fund";

const LOAN_REPLY: &str = "### 💳 Loan Analysis\n\n\
Taking a loan adds long-term liability.\n\n\
**Recommendation:**\n\
- Maintain 6 months emergency savings\n\
- Avoid multiple EMIs\n\
- Compare interest rates carefully";

const JOB_REPLY: &str = "### 💼 Job Switch Advice\n\n\
Switching jobs may increase income but also lifestyle costs.\n\n\
**Recommendation:**\n\
- Compare net savings difference\n\
- Consider relocation expenses\n\
- Evaluate long-term growth";

const DEFAULT_REPLY: &str = "### 📊 Financial Guidance\n\n\
This decision affects long-term stability.\n\n\
**Recommendation:**\n\
Run a simulation before making a major financial move.";

/// Pick the reply template for a free-form planner question.
pub fn reply(message: &str) -> &'static str {
    let lower = message.to_lowercase();

    if lower.contains("car") {
        CAR_REPLY
    } else if lower.contains("loan") {
        LOAN_REPLY
    } else if lower.contains("job") {
        JOB_REPLY
    } else {
        DEFAULT_REPLY
    }
}
