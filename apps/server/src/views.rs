//! Plain-text summary views and the server-rendered HTML page.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use rust_decimal::{Decimal, RoundingStrategy};
use tradebook_core::activities::Activity;
use tradebook_core::constants::DISPLAY_DECIMAL_PRECISION;

use crate::actions::ActionKind;

const PAGE_TITLE: &str = "Simple Account Management";

/// Two decimal places, half away from zero, sign kept.
pub fn format_decimal(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    format!("{:.*}", DISPLAY_DECIMAL_PRECISION as usize, rounded)
}

/// `$8800.00`, `$-12.50`
pub fn format_currency(value: Decimal) -> String {
    format!("${}", format_decimal(value))
}

pub fn balance_view(balance: Decimal) -> String {
    format_currency(balance)
}

pub fn holdings_view(holdings: &BTreeMap<String, i64>) -> String {
    if holdings.is_empty() {
        return "No holdings".to_string();
    }
    holdings
        .iter()
        .map(|(symbol, quantity)| format!("{}: {}", symbol, quantity))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn profit_loss_view(profit_loss: Decimal) -> String {
    format!("Profit/Loss: {}", format_currency(profit_loss))
}

/// One history line: `Deposit: 500` or `Buy: 10 AAPL @ 170.00`.
pub fn describe_activity(activity: &Activity) -> String {
    let label = activity.activity_type.label();
    if activity.activity_type.is_trade() {
        format!(
            "{}: {} {} @ {}",
            label,
            activity.qty(),
            activity.symbol.as_deref().unwrap_or_default(),
            format_decimal(activity.price())
        )
    } else {
        format!("{}: {}", label, activity.amt())
    }
}

pub fn transactions_view(transactions: &[Activity]) -> String {
    if transactions.is_empty() {
        return "No transactions".to_string();
    }
    transactions
        .iter()
        .map(describe_activity)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Everything the page shows, read from the ledger after the last action.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub balance: Decimal,
    pub holdings: BTreeMap<String, i64>,
    pub profit_loss: Decimal,
    pub transactions: Vec<Activity>,
    /// Status line of the action that produced this render, if any.
    pub status: Option<(ActionKind, String)>,
}

impl PageView {
    fn status_for(&self, kind: ActionKind) -> &str {
        match &self.status {
            Some((k, status)) if *k == kind => status,
            _ => "",
        }
    }
}

pub fn render_page(view: &PageView) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n",
        title = PAGE_TITLE
    );

    html.push_str("<section id=\"account-actions\">\n<h2>Account Actions</h2>\n");
    for (kind, amount_label, button, status_label) in [
        (ActionKind::Deposit, "Deposit Amount", "Deposit", "Deposit Status"),
        (ActionKind::Withdraw, "Withdraw Amount", "Withdraw", "Withdrawal Status"),
    ] {
        render_cash_form(&mut html, view, kind, amount_label, button, status_label);
    }
    for (kind, side, button, status_label) in [
        (ActionKind::Buy, "Buy", "Buy Shares", "Buy Status"),
        (ActionKind::Sell, "Sell", "Sell Shares", "Sell Status"),
    ] {
        render_trade_form(&mut html, view, kind, side, button, status_label);
    }
    html.push_str("</section>\n");

    html.push_str("<section id=\"account-summary\">\n<h2>Account Summary</h2>\n");
    render_field(&mut html, "balance", "Current Balance", &balance_view(view.balance));
    render_field(&mut html, "holdings", "Holdings", &holdings_view(&view.holdings));
    render_field(
        &mut html,
        "profit-loss",
        "Profit/Loss",
        &profit_loss_view(view.profit_loss),
    );
    render_field(
        &mut html,
        "transactions",
        "Transactions",
        &transactions_view(&view.transactions),
    );
    html.push_str("</section>\n</body>\n</html>\n");
    html
}

fn render_cash_form(
    html: &mut String,
    view: &PageView,
    kind: ActionKind,
    amount_label: &str,
    button: &str,
    status_label: &str,
) {
    let action = kind.as_str();
    let _ = write!(
        html,
        "<form method=\"post\" action=\"/actions/{action}\">\n\
         <label>{amount_label} <input name=\"amount\" type=\"text\"></label>\n\
         <button type=\"submit\">{button}</button>\n</form>\n",
    );
    render_field(
        html,
        &format!("{}-status", action),
        status_label,
        view.status_for(kind),
    );
}

fn render_trade_form(
    html: &mut String,
    view: &PageView,
    kind: ActionKind,
    side: &str,
    button: &str,
    status_label: &str,
) {
    let action = kind.as_str();
    let _ = write!(
        html,
        "<form method=\"post\" action=\"/actions/{action}\">\n\
         <label>{side} Symbol (e.g., AAPL) <input name=\"symbol\" type=\"text\"></label>\n\
         <label>{side} Quantity <input name=\"quantity\" type=\"text\"></label>\n\
         <button type=\"submit\">{button}</button>\n</form>\n",
    );
    render_field(
        html,
        &format!("{}-status", action),
        status_label,
        view.status_for(kind),
    );
}

fn render_field(html: &mut String, id: &str, label: &str, value: &str) {
    let _ = write!(
        html,
        "<label for=\"{id}\">{label}</label>\n<pre id=\"{id}\">{}</pre>\n",
        escape_html(value)
    );
}
