use std::sync::Arc;

use super::{App, InputMode, StatusMessage};
use crate::pipeline::{
    portfolio_prompt, recommend, Diversification, InvestmentAmount, InvestmentDuration,
    PortfolioRequest, RiskTolerance,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortfolioField {
    #[default]
    RiskTolerance,
    Diversification,
    PreferredStocks,
    PreferredAssets,
    Duration,
    Amount,
    Submit,
}

impl PortfolioField {
    pub const ALL: [PortfolioField; 7] = [
        PortfolioField::RiskTolerance,
        PortfolioField::Diversification,
        PortfolioField::PreferredStocks,
        PortfolioField::PreferredAssets,
        PortfolioField::Duration,
        PortfolioField::Amount,
        PortfolioField::Submit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PortfolioField::RiskTolerance => "Risk Tolerance",
            PortfolioField::Diversification => "Diversification Preference",
            PortfolioField::PreferredStocks => "Preferred Stocks/Sectors (Optional)",
            PortfolioField::PreferredAssets => "Preferred Investment Types (Optional)",
            PortfolioField::Duration => "Investment Duration",
            PortfolioField::Amount => "Amount to Invest (₹)",
            PortfolioField::Submit => "Get Portfolio Recommendations 🚀",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            PortfolioField::PreferredStocks => "Example: Tesla, Tech sector, S&P 500",
            PortfolioField::PreferredAssets => "Example: Crypto, ETFs, Real Estate",
            _ => "",
        }
    }

    /// Fields edited through the input buffer rather than cycled.
    pub fn is_editable(&self) -> bool {
        matches!(
            self,
            PortfolioField::PreferredStocks
                | PortfolioField::PreferredAssets
                | PortfolioField::Amount
        )
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> PortfolioField {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> PortfolioField {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioForm {
    pub risk_tolerance: RiskTolerance,
    pub diversification: Diversification,
    pub preferred_stocks: String,
    pub preferred_assets: String,
    pub duration: InvestmentDuration,
    pub amount: InvestmentAmount,
    pub focus: PortfolioField,
}

impl PortfolioForm {
    pub fn to_request(&self) -> PortfolioRequest {
        PortfolioRequest::new(
            self.risk_tolerance,
            self.diversification,
            &self.preferred_stocks,
            &self.preferred_assets,
            self.duration,
            self.amount,
        )
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Step the focused selector or amount. Text fields are unaffected.
    pub fn adjust(&mut self, forward: bool) {
        match self.focus {
            PortfolioField::RiskTolerance => {
                self.risk_tolerance = if forward {
                    self.risk_tolerance.next()
                } else {
                    self.risk_tolerance.prev()
                };
            }
            PortfolioField::Diversification => {
                self.diversification = if forward {
                    self.diversification.next()
                } else {
                    self.diversification.prev()
                };
            }
            PortfolioField::Duration => {
                self.duration = if forward {
                    self.duration.next()
                } else {
                    self.duration.prev()
                };
            }
            PortfolioField::Amount => {
                self.amount = if forward {
                    self.amount.increment()
                } else {
                    self.amount.decrement()
                };
            }
            PortfolioField::PreferredStocks
            | PortfolioField::PreferredAssets
            | PortfolioField::Submit => {}
        }
    }

    pub fn value_of(&self, field: PortfolioField) -> String {
        match field {
            PortfolioField::RiskTolerance => self.risk_tolerance.label().to_string(),
            PortfolioField::Diversification => self.diversification.label().to_string(),
            PortfolioField::PreferredStocks => self.preferred_stocks.clone(),
            PortfolioField::PreferredAssets => self.preferred_assets.clone(),
            PortfolioField::Duration => self.duration.label().to_string(),
            PortfolioField::Amount => self.amount.value().to_string(),
            PortfolioField::Submit => String::new(),
        }
    }
}

impl App {
    pub fn adjust_portfolio_field(&mut self, forward: bool) {
        self.portfolio_form.adjust(forward);
    }

    /// Enter on the focused field. Returns true when a recommendation request
    /// has been staged and `execute_recommendation` should follow.
    pub fn activate_portfolio_field(&mut self) -> bool {
        let focus = self.portfolio_form.focus;
        if focus == PortfolioField::Submit {
            self.prepare_recommendation();
            return true;
        }
        if focus.is_editable() {
            self.input_buffer = self.portfolio_form.value_of(focus);
            self.input_mode = InputMode::FieldEdit;
        } else {
            self.portfolio_form.adjust(true);
        }
        false
    }

    pub fn confirm_field_edit(&mut self) {
        let value = std::mem::take(&mut self.input_buffer);
        match self.portfolio_form.focus {
            PortfolioField::PreferredStocks => self.portfolio_form.preferred_stocks = value,
            PortfolioField::PreferredAssets => self.portfolio_form.preferred_assets = value,
            PortfolioField::Amount => match InvestmentAmount::parse(&value) {
                Ok(amount) => self.portfolio_form.amount = amount,
                Err(e) => self.status = Some(StatusMessage::warning(e.to_string())),
            },
            _ => {}
        }
        self.input_mode = InputMode::Normal;
    }

    pub fn cancel_field_edit(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    pub fn prepare_recommendation(&mut self) {
        let prompt = portfolio_prompt(&self.portfolio_form.to_request());
        self.pending_prompt = Some(prompt);
        self.recommendation = None;
        self.recommendation_scroll = 0;
        self.loading = true;
        self.status = Some(StatusMessage::info("Generating portfolio recommendation..."));
    }

    /// One generation call. Failures become an error status and leave no
    /// partial recommendation behind.
    pub async fn execute_recommendation(&mut self) {
        let Some(prompt) = self.pending_prompt.take() else {
            self.loading = false;
            return;
        };
        let generator = Arc::clone(&self.generator);
        match recommend(generator.as_ref(), &prompt).await {
            Ok(text) => {
                self.recommendation = Some(text);
                self.status = Some(StatusMessage::success(
                    "Your AI-powered portfolio recommendation is ready.",
                ));
            }
            Err(e) => {
                self.recommendation = None;
                self.status = Some(StatusMessage::error(format!("Error: {}", e)));
            }
        }
        self.loading = false;
    }

    pub async fn submit_portfolio(&mut self) {
        self.prepare_recommendation();
        self.execute_recommendation().await;
    }

    pub fn scroll_recommendation_up(&mut self) {
        self.recommendation_scroll = self.recommendation_scroll.saturating_sub(1);
    }

    pub fn scroll_recommendation_down(&mut self) {
        if self.recommendation.is_some() {
            self.recommendation_scroll += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_wraps_around() {
        assert_eq!(PortfolioField::Submit.next(), PortfolioField::RiskTolerance);
        assert_eq!(PortfolioField::RiskTolerance.prev(), PortfolioField::Submit);
    }

    #[test]
    fn adjust_ignores_text_fields() {
        let mut form = PortfolioForm {
            focus: PortfolioField::PreferredStocks,
            ..PortfolioForm::default()
        };
        let before = form.clone();
        form.adjust(true);
        assert_eq!(form, before);
    }

    #[test]
    fn adjust_amount_steps() {
        let mut form = PortfolioForm {
            focus: PortfolioField::Amount,
            ..PortfolioForm::default()
        };
        form.adjust(true);
        assert_eq!(form.amount.value(), 55_000);
        form.adjust(false);
        form.adjust(false);
        assert_eq!(form.amount.value(), 45_000);
    }
}
