use crate::UserRequest;

/// A single entry in an account's append-only operation log
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionRecord {
    pub request: UserRequest,
    pub amount: f64,
}

impl TransactionRecord {
    pub fn new(request: UserRequest, amount: f64) -> Self {
        return Self { request, amount };
    }
}
