use std::fmt;

/// Stable handle to an account owned by a `Bank`: the account's index in the bank's storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountNumber(pub i32);

impl AccountNumber {
    /// Index into the bank's storage, or None for negative numbers
    pub fn index(&self) -> Option<usize> {
        return usize::try_from(self.0).ok();
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index() {
        assert_eq!(AccountNumber(0).index(), Some(0));
        assert_eq!(AccountNumber(7).index(), Some(7));
        assert_eq!(AccountNumber(-1).index(), None);
    }
}
