// ============================================================
// Error taxonomy — every failure the ledger can signal
// ============================================================

/// Failures raised by the ledger. Each variant maps to the static
/// message the contract signals (user error, status 4).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FundMeError {
    /// USD value of the attached EGLD is below `MINIMUM_USD`.
    InsufficientAmount,
    /// Caller of a withdrawal endpoint is not the bound owner.
    NotOwner,
    /// Outbound EGLD transfer to the owner was rejected. Signalled by the VM,
    /// which fails the withdrawal transaction and reverts its storage writes;
    /// contract code never raises it.
    TransferFailed,
    /// `getFunder` index is past the end of the funders list.
    IndexOutOfRange,
    /// Price feed reported a zero or negative answer.
    InvalidPrice,
}

impl FundMeError {
    pub const fn message(self) -> &'static str {
        match self {
            FundMeError::InsufficientAmount => "FundMe__InsufficientAmount",
            FundMeError::NotOwner => "FundMe__NotOwner",
            FundMeError::TransferFailed => "FundMe__TransferFailed",
            FundMeError::IndexOutOfRange => "FundMe__IndexOutOfRange",
            FundMeError::InvalidPrice => "FundMe__InvalidPrice",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_distinct_and_prefixed() {
        let all = [
            FundMeError::InsufficientAmount,
            FundMeError::NotOwner,
            FundMeError::TransferFailed,
            FundMeError::IndexOutOfRange,
            FundMeError::InvalidPrice,
        ];
        for (i, a) in all.iter().enumerate() {
            assert!(a.message().starts_with("FundMe__"));
            for b in &all[i + 1..] {
                assert_ne!(a.message(), b.message());
            }
        }
    }
}
