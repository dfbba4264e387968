/// All user-facing strings of the text report in one place
pub struct ReportText {
    pub title: &'static str,
    pub live_price_label: &'static str,
    pub disclaimer: &'static str,
    pub prediction_heading: &'static str,
    pub invalid_format_heading: &'static str,
    pub invalid_format_hint: &'static str,
    pub out_of_range_heading: &'static str,
    pub series_heading: &'static str,
    pub ticks_heading: &'static str,
    pub footer: &'static str,
}

pub const REPORT_TEXT: ReportText = ReportText {
    title: "₿ Bitcoin Power-Law Price Predictor",
    live_price_label: "Live Price",
    disclaimer: "⚠️ Not financial advice, just for fun!",
    prediction_heading: "🎯 Prediction Result",
    invalid_format_heading: "⚠️ Invalid Date Format",
    invalid_format_hint: "Please enter a date in the format YYYY-MM-DD",
    out_of_range_heading: "⚠️ Date Out of Range",
    series_heading: "📈 Series",
    ticks_heading: "Log-log axis ticks",
    footer: "Not for financial advice! Data from local history files",
};
