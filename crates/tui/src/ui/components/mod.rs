pub mod accounts;
pub mod card;
pub mod forms;
pub mod hints;
pub mod money;
pub mod toast;
pub mod transactions;
pub mod upload_prompt;
