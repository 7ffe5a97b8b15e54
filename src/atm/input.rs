use crate::services::Atm;
use crate::Result;
use crate::UserRequest;

use csv::StringRecord;
use serde::Deserialize;

use thiserror::Error;

/// Header every session script must carry, in any order
pub const SCRIPT_COLUMNS: [&str; 4] = ["command", "account", "password", "amount"];

/// Represents a script row that a CSV record would deserialize into
#[derive(Deserialize, Debug, Clone)]
pub struct InputEvent {
    pub command: String,
    pub account: Option<i32>,
    pub password: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input event: account number missing from view: {0:?}")]
    NoAccountNumber(InputEvent),

    #[error("Error parsing input event: amount value missing from {1}: {0:?}")]
    NoAmount(InputEvent, UserRequest),

    #[error("Script header is missing the `{0}` column")]
    MissingColumn(&'static str),
}

/// Fails on the first expected column the header does not name
pub fn check_headers(headers: &StringRecord) -> Result {
    for column in SCRIPT_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            Err(InputParseError::MissingColumn(column))?
        }
    }

    Ok(())
}

/// Typed script command, forcing correct handling through the type-system
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Open { password: String },
    View { account: i32, password: String },
    Request { request: UserRequest, amount: f64 },
}

impl InputEvent {
    pub fn parse_command(self) -> Result<SessionCommand> {
        let command = match self.command.to_lowercase().as_str() {
            "open" => SessionCommand::Open {
                password: self.password.unwrap_or_default(),
            },
            "view" => {
                let account = self
                    .account
                    .ok_or_else(|| InputParseError::NoAccountNumber(self.clone()))?;

                SessionCommand::View {
                    account,
                    password: self.password.unwrap_or_default(),
                }
            }
            "deposit" => self.parse_amount_request(UserRequest::Deposit)?,
            "withdraw" => self.parse_amount_request(UserRequest::Withdraw)?,
            "balance" => SessionCommand::Request {
                request: UserRequest::Balance,
                amount: self.amount.unwrap_or_default(),
            },
            "transactions" => SessionCommand::Request {
                request: UserRequest::Transactions,
                amount: self.amount.unwrap_or_default(),
            },
            other => {
                log::debug!("Unrecognized command {other:?}, treating as an invalid request");

                SessionCommand::Request {
                    request: UserRequest::Invalid,
                    amount: self.amount.unwrap_or_default(),
                }
            }
        };

        Ok(command)
    }

    fn parse_amount_request(&self, request: UserRequest) -> Result<SessionCommand> {
        let amount = self
            .amount
            .ok_or_else(|| InputParseError::NoAmount(self.clone(), request))?;

        Ok(SessionCommand::Request { request, amount })
    }
}

impl SessionCommand {
    pub fn apply(self, atm: &mut Atm) {
        match self {
            SessionCommand::Open { password } => {
                let account = atm.bank_mut().add_account();
                account.set_password(password);
            }
            SessionCommand::View { account, password } => atm.view_account(account, &password),
            SessionCommand::Request { request, amount } => atm.fill_user_request(request, amount),
        }
    }
}
