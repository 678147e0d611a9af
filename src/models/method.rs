/// Payment instrument a transaction went through.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Method {
    Cash,
    Debit,
    Credit,
    Savings,
    Other(String),
}

impl Method {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            Self::Cash => "Cash",
            Self::Debit => "Debit",
            Self::Credit => "Credit",
            Self::Savings => "Savings",
            Self::Other(raw) => raw,
        }
    }

    pub(crate) fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "cash" => Self::Cash,
            "debit" => Self::Debit,
            "credit" => Self::Credit,
            "savings" => Self::Savings,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// Liabilities never count toward a liquid balance.
    pub(crate) fn is_credit(&self) -> bool {
        matches!(self, Self::Credit)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
