use std::fmt;

/// Operation selector for `Atm::fill_user_request`, also used as the tag of each
/// entry in an account's transaction log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRequest {
    Invalid = 0,
    Balance = 1,
    Deposit = 2,
    Withdraw = 3,
    Transactions = 4,
}

impl UserRequest {
    pub fn label(&self) -> &'static str {
        return match self {
            Self::Invalid => "REQUEST_INVALID",
            Self::Balance => "REQUEST_BALANCE",
            Self::Deposit => "REQUEST_DEPOSIT",
            Self::Withdraw => "REQUEST_WITHDRAW",
            Self::Transactions => "REQUEST_TRANSACTIONS",
        };
    }
}

/// Unknown codes collapse into `Invalid`, which the ATM ignores
impl From<u8> for UserRequest {
    fn from(code: u8) -> Self {
        return match code {
            1 => Self::Balance,
            2 => Self::Deposit,
            3 => Self::Withdraw,
            4 => Self::Transactions,
            _ => Self::Invalid,
        };
    }
}

impl fmt::Display for UserRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.label());
    }
}
