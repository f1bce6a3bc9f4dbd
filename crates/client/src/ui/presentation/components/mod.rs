//! Form cards and the notification overlay

mod create_account_card;
mod delete_account_card;
mod notification_host;

pub use create_account_card::CreateAccountCard;
pub use delete_account_card::DeleteAccountCard;
pub use notification_host::NotificationHost;
