use tracing::{error, info};

use super::ValidationError;
use crate::api::{GenerationError, TextGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskTolerance {
    pub const ALL: [RiskTolerance; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn label(&self) -> &'static str {
        match self {
            RiskTolerance::Low => "Low (Conservative)",
            RiskTolerance::Medium => "Medium (Balanced)",
            RiskTolerance::High => "High (Aggressive)",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            RiskTolerance::Low => RiskTolerance::Medium,
            RiskTolerance::Medium => RiskTolerance::High,
            RiskTolerance::High => RiskTolerance::Low,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            RiskTolerance::Low => RiskTolerance::High,
            RiskTolerance::Medium => RiskTolerance::Low,
            RiskTolerance::High => RiskTolerance::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Diversification {
    Low,
    #[default]
    Medium,
    High,
}

impl Diversification {
    pub const ALL: [Diversification; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn label(&self) -> &'static str {
        match self {
            Diversification::Low => "Low (Focused Portfolio)",
            Diversification::Medium => "Medium (Balanced)",
            Diversification::High => "High (Wide Diversification)",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Diversification::Low => Diversification::Medium,
            Diversification::Medium => Diversification::High,
            Diversification::High => Diversification::Low,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Diversification::Low => Diversification::High,
            Diversification::Medium => Diversification::Low,
            Diversification::High => Diversification::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvestmentDuration {
    ShortTerm,
    MidTerm,
    #[default]
    LongTerm,
}

impl InvestmentDuration {
    pub const ALL: [InvestmentDuration; 3] = [Self::ShortTerm, Self::MidTerm, Self::LongTerm];

    pub fn label(&self) -> &'static str {
        match self {
            InvestmentDuration::ShortTerm => "Short-term (1-3 years)",
            InvestmentDuration::MidTerm => "Mid-term (3-7 years)",
            InvestmentDuration::LongTerm => "Long-term (7+ years)",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            InvestmentDuration::ShortTerm => InvestmentDuration::MidTerm,
            InvestmentDuration::MidTerm => InvestmentDuration::LongTerm,
            InvestmentDuration::LongTerm => InvestmentDuration::ShortTerm,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            InvestmentDuration::ShortTerm => InvestmentDuration::LongTerm,
            InvestmentDuration::MidTerm => InvestmentDuration::ShortTerm,
            InvestmentDuration::LongTerm => InvestmentDuration::MidTerm,
        }
    }
}

/// Amount in rupees, never below `InvestmentAmount::MIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct InvestmentAmount(u64);

impl InvestmentAmount {
    pub const MIN: u64 = 1_000;
    pub const STEP: u64 = 5_000;
    pub const DEFAULT: u64 = 50_000;

    pub fn new(amount: u64) -> Result<Self, ValidationError> {
        if amount < Self::MIN {
            return Err(ValidationError::AmountBelowMinimum { min: Self::MIN });
        }
        Ok(Self(amount))
    }

    /// Accepts digits with optional `,` or `_` grouping.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let digits: String = input
            .trim()
            .chars()
            .filter(|c| *c != ',' && *c != '_')
            .collect();
        let amount = digits
            .parse::<u64>()
            .map_err(|_| ValidationError::InvalidAmount(input.trim().to_string()))?;
        Self::new(amount)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn increment(&self) -> Self {
        Self(self.0.saturating_add(Self::STEP))
    }

    pub fn decrement(&self) -> Self {
        Self(self.0.saturating_sub(Self::STEP).max(Self::MIN))
    }
}

impl Default for InvestmentAmount {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioRequest {
    pub risk_tolerance: RiskTolerance,
    pub diversification: Diversification,
    /// Preferred stocks or sectors; `None` when left blank.
    pub preferred_stocks: Option<String>,
    /// Preferred investment types (crypto, ETFs, ...); `None` when left blank.
    pub preferred_assets: Option<String>,
    pub duration: InvestmentDuration,
    pub amount: InvestmentAmount,
}

impl PortfolioRequest {
    /// Whitespace-only text counts as blank; other text is kept verbatim.
    pub fn new(
        risk_tolerance: RiskTolerance,
        diversification: Diversification,
        preferred_stocks: &str,
        preferred_assets: &str,
        duration: InvestmentDuration,
        amount: InvestmentAmount,
    ) -> Self {
        Self {
            risk_tolerance,
            diversification,
            preferred_stocks: non_blank(preferred_stocks),
            preferred_assets: non_blank(preferred_assets),
            duration,
            amount,
        }
    }
}

fn non_blank(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Single generation call for a recommendation prompt. The text comes back
/// exactly as the model produced it.
pub async fn recommend(
    generator: &dyn TextGenerator,
    prompt: &str,
) -> Result<String, GenerationError> {
    info!("requesting portfolio recommendation");
    generator
        .generate(prompt)
        .await
        .inspect_err(|e| error!("portfolio recommendation failed: {}", e))
}
