use crate::Chips;
use std::time::Duration;

/// A blind raise due `elapsed` after the game started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub elapsed: Duration,
    pub amount: Chips,
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Blind is now {}", self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announces_amount() {
        let alert = Alert {
            elapsed: Duration::from_secs(600),
            amount: 200,
        };
        assert_eq!(alert.to_string(), "Blind is now 200");
    }
}
