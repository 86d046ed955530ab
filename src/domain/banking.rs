//! The closed set of banking knowledge domains

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A topical partition of banking knowledge.
///
/// The set is closed: unknown domain strings are rejected at
/// deserialization, so orchestration code never sees an invalid variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum BankingDomain {
    DistributionFinance,
    ChannelFinance,
    GlobalTradeFinance,
    RiskManagement,
    Compliance,
    CustomerService,
}

impl BankingDomain {
    /// Every registered domain, in declaration order
    pub fn all() -> &'static [BankingDomain] {
        &[
            Self::DistributionFinance,
            Self::ChannelFinance,
            Self::GlobalTradeFinance,
            Self::RiskManagement,
            Self::Compliance,
            Self::CustomerService,
        ]
    }

    /// Wire-format identifier (snake_case)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DistributionFinance => "distribution_finance",
            Self::ChannelFinance => "channel_finance",
            Self::GlobalTradeFinance => "global_trade_finance",
            Self::RiskManagement => "risk_management",
            Self::Compliance => "compliance",
            Self::CustomerService => "customer_service",
        }
    }

    /// Human-readable name, used when labelling per-domain answers
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::DistributionFinance => "Distribution Finance",
            Self::ChannelFinance => "Channel Finance",
            Self::GlobalTradeFinance => "Global Trade Finance",
            Self::RiskManagement => "Risk Management",
            Self::Compliance => "Compliance",
            Self::CustomerService => "Customer Service",
        }
    }

    /// Short description for the domain listing endpoint
    pub fn description(&self) -> &'static str {
        match self {
            Self::DistributionFinance => "Supply chain and distribution financing solutions",
            Self::ChannelFinance => "Channel partner and dealer financing",
            Self::GlobalTradeFinance => "International trade and export/import financing",
            Self::RiskManagement => "Credit, market, and operational risk management",
            Self::Compliance => "Regulatory compliance and AML/KYC",
            Self::CustomerService => "Customer relationship and service optimization",
        }
    }
}

impl FromStr for BankingDomain {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "distribution_finance" => Ok(Self::DistributionFinance),
            "channel_finance" => Ok(Self::ChannelFinance),
            "global_trade_finance" => Ok(Self::GlobalTradeFinance),
            "risk_management" => Ok(Self::RiskManagement),
            "compliance" => Ok(Self::Compliance),
            "customer_service" => Ok(Self::CustomerService),
            other => Err(DomainError::unknown_domain(other)),
        }
    }
}

impl TryFrom<String> for BankingDomain {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for BankingDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
