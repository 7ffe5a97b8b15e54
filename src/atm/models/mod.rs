mod account;
mod transaction_record;

pub use account::Account;
pub use transaction_record::TransactionRecord;
