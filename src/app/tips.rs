pub const INVESTMENT_TIPS: [&str; 5] = [
    "Diversify across asset classes to reduce risk.",
    "Invest for the long term rather than short-term speculation.",
    "Understand your risk tolerance before investing.",
    "Regularly review and rebalance your portfolio.",
    "Avoid emotional investing; stick to a strategy.",
];
