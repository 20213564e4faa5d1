use super::portfolio::PortfolioRequest;
use crate::api::Article;

pub const NO_PREFERENCE: &str = "No specific preference";

/// Summarization prompt for one article. Missing fields render empty.
pub fn article_prompt(article: &Article) -> String {
    format!(
        "Summarize the following article in 2-3 sentences:\n\
         Title: {title}\n\
         Description: {description}\n\
         Content: {content}\n",
        title = article.title,
        description = article.description.as_deref().unwrap_or(""),
        content = article.content.as_deref().unwrap_or(""),
    )
}

pub fn portfolio_prompt(request: &PortfolioRequest) -> String {
    let stocks = request.preferred_stocks.as_deref().unwrap_or(NO_PREFERENCE);
    let assets = request.preferred_assets.as_deref().unwrap_or(NO_PREFERENCE);
    let amount = request.amount.value();

    format!(
        "Act as a professional financial advisor with expertise in portfolio management.\n\
         Provide an optimized investment portfolio recommendation based on:\n\
         - Risk Tolerance: {risk}\n\
         - Diversification Preference: {diversification}\n\
         - Preferred Stocks or Sectors: {stocks}\n\
         - Preferred Investment Types (Crypto, ETFs, Real Estate, etc.): {assets}\n\
         - Investment Duration: {duration}\n\
         - Total Investment Amount: ₹{amount}\n\
         \n\
         Your response should include:\n\
         - Suggested asset allocation (stocks, bonds, crypto, etc.)\n\
         - Percentage allocations for each category\n\
         - Expected return estimation for the given risk tolerance\n\
         - Example investment options with potential risk/reward\n\
         - A breakdown of how the investment amount ₹{amount} should be allocated across different asset classes\n\
         - Justification behind each allocation\n",
        risk = request.risk_tolerance.label(),
        diversification = request.diversification.label(),
        duration = request.duration.label(),
    )
}
