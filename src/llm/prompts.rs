use crate::schema::UserRole;

pub const SUMMARY_FALLBACK: &str = "Analysis suspended. Registry synchronization required.";

pub const EMPTY_PORTFOLIO_SUMMARY: &str =
    "No active property files found in your registry profile.";

pub const SUMMARY_TASK: &str = r#"
TASK: Provide a 3-sentence high-level executive summary.
Focus on financial health, upcoming milestones, and collection status.
STRICT RULE: NO BOLDING, NO STARS, NO MARKDOWN STYLING.
Tone: Senior Financial Auditor.
"#;

const ADMIN_BRIEF: &str = r#"
- You are the Global Portfolio Supervisor.
- You have full access to ALL property files and transactions.
- You can perform global audits, identify collection trends, and list defaults across all clients.
- Always include Owner Names in your tables.
"#;

const CLIENT_BRIEF: &str = r#"
- You are a Private Ledger Auditor.
- You only see the user's personal property files.
- Focus on explaining installments, upcoming due dates, and payment history.
"#;

const ADMIN_COLUMNS: &str = "| OWNER | FILE ID | SIZE | DUE DATE | OVERDUE (PKR) |";
const CLIENT_COLUMNS: &str = "| DESCRIPTION | DUE DATE | PAYABLE (PKR) | PAID (PKR) | BALANCE (PKR) |";

pub fn summary_prompt(user_name: &str, role: UserRole, context_json: &str) -> String {
    format!(
        "Analyze this real estate portfolio for {} ({}).\nREGISTRY DATA: {}\n{}",
        user_name, role, context_json, SUMMARY_TASK
    )
}

pub fn chat_system_instruction(role: UserRole, context_schema: &str, context_json: &str) -> String {
    let (brief, columns) = match role {
        UserRole::Admin => (ADMIN_BRIEF, ADMIN_COLUMNS),
        UserRole::Client => (CLIENT_BRIEF, CLIENT_COLUMNS),
    };

    format!(
        "You are the DIN Properties Secure Registry Assistant.\n\
         CURRENT USER ROLE: {role}\n\
         {brief}\n\
         STRICT FORMATTING:\n\
         1. Use ALL CAPS for headers.\n\
         2. NO STARS (**) or BOLDING.\n\
         3. Use Markdown Tables for financial data.\n\
         4. Table columns: {columns}\n\n\
         DATA SCHEMA: {context_schema}\n\
         DATA CONTEXT: {context_json}\n"
    )
}
