use crate::Error;

/// Which abstract choices a decision node may offer.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Policy {
    /// fold and check/call only
    FC,
    /// fold, check/call, pot-fraction bets and all-in
    #[default]
    FCPA,
}

impl TryFrom<&str> for Policy {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fc" => Ok(Self::FC),
            "fcpa" => Ok(Self::FCPA),
            other => Err(Error::Config(format!("bettingAbstraction: {} not supported", other))),
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::FC => write!(f, "fc"),
            Self::FCPA => write!(f, "fcpa"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_policies() {
        assert!(Policy::try_from("FCPA").unwrap() == Policy::FCPA);
        assert!(Policy::try_from("fc").unwrap() == Policy::FC);
        assert!(matches!(Policy::try_from("fchpa"), Err(Error::Config(_))));
    }
}
