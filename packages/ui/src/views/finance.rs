//! Finance tracker: ledger totals, charts, transactions, savings goals and
//! static reports. Everything lives in component state and resets on reload.

use dioxus::prelude::*;
use farm::finance::{
    format_money, GoalDraft, KindFilter, SavingsPlan, TransactionDraft, TransactionFilter,
    EXPENSE_BREAKDOWN, INCOME_BY_SOURCE, MONTHLY_CASH_FLOW, MONTHLY_EXPENSES, MONTHLY_INCOME, MONTHS,
};
use farm::{group_thousands, Ledger, Transaction, TransactionKind};

use crate::charts::{BarChart, DoughnutChart, LineChart, Series, Slice, PALETTE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Overview,
    Transactions,
    Savings,
    Reports,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Overview, Tab::Transactions, Tab::Savings, Tab::Reports];

    fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Transactions => "Transactions",
            Tab::Savings => "Savings Goals",
            Tab::Reports => "Reports",
        }
    }
}

fn dollars(value: f64) -> String {
    format!("${}", group_thousands(value.round() as i64))
}

#[component]
pub fn FinanceTracker() -> Element {
    let ledger = use_signal(Ledger::sample);
    let plan = use_signal(SavingsPlan::sample);
    let mut tab = use_signal(|| Tab::Overview);

    let (income, expenses, profit) = {
        let l = ledger.read();
        (l.total_income(), l.total_expenses(), l.net_profit())
    };
    let profit_class = if profit.is_sign_negative() {
        "summary-amount negative"
    } else {
        "summary-amount positive"
    };

    rsx! {
        div {
            class: "finance-tracker-container",
            div {
                class: "container",
                div {
                    class: "page-header",
                    h1 { "Finance Tracker" }
                    p { "Track your farm's income, expenses, and savings goals" }
                }

                div {
                    class: "finance-summary",
                    div {
                        class: "summary-card income",
                        div { class: "summary-icon", "💰" }
                        div {
                            class: "summary-content",
                            h3 { "Total Income" }
                            p { class: "summary-amount", {format_money(income)} }
                        }
                    }
                    div {
                        class: "summary-card expenses",
                        div { class: "summary-icon", "📉" }
                        div {
                            class: "summary-content",
                            h3 { "Total Expenses" }
                            p { class: "summary-amount", {format_money(expenses)} }
                        }
                    }
                    div {
                        class: "summary-card profit",
                        div { class: "summary-icon", "📊" }
                        div {
                            class: "summary-content",
                            h3 { "Net Profit" }
                            p { class: profit_class, {format_money(profit)} }
                        }
                    }
                }

                div {
                    class: "finance-tabs",
                    for t in Tab::ALL {
                        button {
                            key: "{t.label()}",
                            class: if tab() == t { "tab-button active" } else { "tab-button" },
                            onclick: move |_| tab.set(t),
                            {t.label()}
                        }
                    }
                }

                div {
                    class: "tab-content",
                    {match tab() {
                        Tab::Overview => rsx! { OverviewTab { ledger } },
                        Tab::Transactions => rsx! { TransactionsTab { ledger } },
                        Tab::Savings => rsx! { SavingsTab { plan } },
                        Tab::Reports => rsx! { ReportsTab {} },
                    }}
                }
            }
        }
    }
}

#[component]
fn HealthMetric(title: &'static str, percent: i64) -> Element {
    let width = percent.clamp(0, 100);
    rsx! {
        div {
            class: "health-metric",
            h4 { "{title}" }
            div {
                class: "progress-bar",
                div { class: "progress-fill", style: "width: {width}%" }
            }
            p { "{percent}%" }
        }
    }
}

#[component]
fn OverviewTab(ledger: Signal<Ledger>) -> Element {
    let (margin, ratio) = {
        let l = ledger.read();
        (l.profit_margin(), l.expense_ratio())
    };

    rsx! {
        div {
            class: "overview-tab",
            div {
                class: "charts-grid",
                div {
                    class: "chart-card",
                    h3 { "Monthly Income & Expenses" }
                    LineChart {
                        labels: MONTHS.to_vec(),
                        series: vec![
                            Series::new("Income", &MONTHLY_INCOME, PALETTE[2]),
                            Series::new("Expenses", &MONTHLY_EXPENSES, PALETTE[1]),
                        ],
                    }
                }
                div {
                    class: "chart-card",
                    h3 { "Expense Breakdown" }
                    BarChart { slices: Slice::from_pairs(&EXPENSE_BREAKDOWN), color: PALETTE[3] }
                }
                div {
                    class: "chart-card",
                    h3 { "Income by Source" }
                    DoughnutChart { slices: Slice::from_pairs(&INCOME_BY_SOURCE) }
                }
                div {
                    class: "chart-card",
                    h3 { "Financial Health" }
                    div {
                        class: "financial-health",
                        HealthMetric { title: "Profit Margin", percent: margin }
                        HealthMetric { title: "Expense Ratio", percent: ratio }
                        HealthMetric { title: "Savings Rate", percent: 25 }
                        div {
                            class: "health-tips",
                            h4 { "Tips to Improve" }
                            ul {
                                li { "Consider bulk purchases of fertilizer to reduce costs" }
                                li { "Explore government subsidies for sustainable farming" }
                                li { "Track market prices to optimize selling times" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TransactionsTab(ledger: Signal<Ledger>) -> Element {
    let mut ledger = ledger;
    let mut draft = use_signal(|| TransactionDraft::new(farm::clock::today()));
    let mut filter = use_signal(TransactionFilter::default);
    let mut error = use_signal(|| Option::<String>::None);

    let rows: Vec<Transaction> = ledger.read().filtered(&filter()).into_iter().cloned().collect();
    let income_form = draft.read().kind == TransactionKind::Income;

    let add_transaction = move |evt: FormEvent| {
        evt.prevent_default();
        let added = ledger.write().add(&draft.peek()).map(|_| ());
        match added {
            Ok(()) => {
                error.set(None);
                draft.set(TransactionDraft::new(farm::clock::today()));
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        div {
            class: "transactions-tab",
            div {
                class: "add-transaction-form",
                h3 { "Add New Transaction" }
                if let Some(msg) = error() {
                    p { class: "form-error", "{msg}" }
                }
                form {
                    onsubmit: add_transaction,
                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { r#for: "type", "Type" }
                            select {
                                id: "type",
                                value: draft.read().kind.as_str(),
                                onchange: move |e| draft.write().kind = TransactionKind::from_form(&e.value()),
                                option { value: "income", "Income" }
                                option { value: "expense", "Expense" }
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "category", "Category" }
                            input {
                                id: "category",
                                r#type: "text",
                                placeholder: if income_form { "e.g., Crop Sales" } else { "e.g., Fertilizer" },
                                value: "{draft.read().category}",
                                oninput: move |e| draft.write().category = e.value(),
                            }
                        }
                    }
                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { r#for: "amount", "Amount ($)" }
                            input {
                                id: "amount",
                                r#type: "number",
                                min: "0",
                                step: "0.01",
                                placeholder: "0.00",
                                value: "{draft.read().amount}",
                                oninput: move |e| draft.write().amount = e.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "date", "Date" }
                            input {
                                id: "date",
                                r#type: "date",
                                value: "{draft.read().date}",
                                oninput: move |e| draft.write().date = e.value(),
                            }
                        }
                    }
                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { r#for: "source", "Source/Vendor" }
                            input {
                                id: "source",
                                r#type: "text",
                                placeholder: if income_form { "e.g., Farmers Market" } else { "e.g., Farm Supply Store" },
                                value: "{draft.read().source}",
                                oninput: move |e| draft.write().source = e.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            button { r#type: "submit", class: "btn btn-primary", "Add Transaction" }
                        }
                    }
                }
            }

            div {
                class: "transactions-list",
                h3 { "Recent Transactions" }
                div {
                    class: "transactions-filters",
                    select {
                        onchange: move |e| filter.write().kind = KindFilter::from_form(&e.value()),
                        option { value: "all", "All Transactions" }
                        option { value: "income", "Income Only" }
                        option { value: "expense", "Expenses Only" }
                    }
                    input {
                        r#type: "month",
                        onchange: move |e| filter.write().month = TransactionFilter::parse_month(&e.value()),
                    }
                }
                table {
                    class: "transactions-table",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Type" }
                            th { "Category" }
                            th { "Source/Vendor" }
                            th { "Amount" }
                        }
                    }
                    tbody {
                        for tx in rows {
                            tr {
                                key: "{tx.id}",
                                class: tx.kind.as_str(),
                                td { {tx.date.format("%m/%d/%Y").to_string()} }
                                td {
                                    class: "transaction-type",
                                    span { class: "type-badge {tx.kind.as_str()}", {tx.kind.label()} }
                                }
                                td { "{tx.category}" }
                                td { "{tx.source}" }
                                td { class: "amount", {tx.signed_amount()} }
                            }
                        }
                    }
                }
            }
        }
    }
}

const SAVINGS_TIPS: [(&str, &str, &str); 3] = [
    ("💡", "Set Aside Revenue", "Automatically save 10-15% of each sale to build your emergency fund and savings goals."),
    ("📊", "Track Market Prices", "Monitor price trends to sell crops at peak prices, maximizing your income potential."),
    ("🧮", "Bulk Purchasing", "Coordinate with nearby farmers to make bulk purchases of supplies at discounted rates."),
];

#[component]
fn SavingsTab(plan: Signal<SavingsPlan>) -> Element {
    let mut plan = plan;
    let mut draft = use_signal(GoalDraft::default);
    let mut error = use_signal(|| Option::<String>::None);
    let today = farm::clock::today();
    let goals = plan.read().goals().to_vec();

    let add_goal = move |evt: FormEvent| {
        evt.prevent_default();
        let added = plan.write().add(&draft.peek()).map(|_| ());
        match added {
            Ok(()) => {
                error.set(None);
                draft.set(GoalDraft::default());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        div {
            class: "savings-tab",
            div {
                class: "savings-container",
                div {
                    class: "add-goal-form",
                    h3 { "Add New Savings Goal" }
                    if let Some(msg) = error() {
                        p { class: "form-error", "{msg}" }
                    }
                    form {
                        onsubmit: add_goal,
                        div {
                            class: "form-row",
                            div {
                                class: "form-group",
                                label { r#for: "goal-name", "Goal Name" }
                                input {
                                    id: "goal-name",
                                    r#type: "text",
                                    placeholder: "e.g., New Tractor",
                                    value: "{draft.read().name}",
                                    oninput: move |e| draft.write().name = e.value(),
                                }
                            }
                            div {
                                class: "form-group",
                                label { r#for: "target", "Target Amount ($)" }
                                input {
                                    id: "target",
                                    r#type: "number",
                                    min: "1",
                                    placeholder: "0.00",
                                    value: "{draft.read().target}",
                                    oninput: move |e| draft.write().target = e.value(),
                                }
                            }
                        }
                        div {
                            class: "form-row",
                            div {
                                class: "form-group",
                                label { r#for: "current", "Current Savings ($)" }
                                input {
                                    id: "current",
                                    r#type: "number",
                                    min: "0",
                                    placeholder: "0.00",
                                    value: "{draft.read().current}",
                                    oninput: move |e| draft.write().current = e.value(),
                                }
                            }
                            div {
                                class: "form-group",
                                label { r#for: "deadline", "Target Date" }
                                input {
                                    id: "deadline",
                                    r#type: "date",
                                    value: "{draft.read().deadline}",
                                    oninput: move |e| draft.write().deadline = e.value(),
                                }
                            }
                        }
                        button { r#type: "submit", class: "btn btn-primary", "Add Goal" }
                    }
                }

                div {
                    class: "savings-goals-list",
                    h3 { "Your Savings Goals" }
                    div {
                        class: "goals-grid",
                        for goal in goals {
                            div {
                                key: "{goal.id}",
                                class: "goal-card",
                                div {
                                    class: "goal-header",
                                    h4 { "{goal.name}" }
                                    div { class: "days-left", {goal.deadline_label(today)} }
                                }
                                div {
                                    class: "goal-amounts",
                                    div { class: "saved-amount", {format_money(goal.current)} }
                                    div { class: "target-amount", "of " {format_money(goal.target)} }
                                }
                                div {
                                    class: "goal-progress",
                                    div {
                                        class: "progress-bar",
                                        div { class: "progress-fill", style: "width: {goal.progress_percent()}%" }
                                    }
                                    div { class: "progress-percentage", "{goal.progress_percent()}%" }
                                }
                                div {
                                    class: "goal-actions",
                                    button { class: "btn btn-secondary btn-sm", "Update Progress" }
                                    button { class: "btn btn-outline btn-sm", "Edit" }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "savings-tips",
                h3 { "Savings Tips" }
                div {
                    class: "tips-grid",
                    for (icon, title, body) in SAVINGS_TIPS {
                        div {
                            key: "{title}",
                            class: "tip-card",
                            div { class: "tip-icon", "{icon}" }
                            h4 { "{title}" }
                            p { "{body}" }
                        }
                    }
                }
            }
        }
    }
}

const RATIOS: [(&str, &str, &str, &str); 4] = [
    ("Profit Margin", "Net Profit / Total Income", "66%", "positive"),
    ("Return on Investment", "Net Profit / Total Investment", "34%", "positive"),
    ("Debt-to-Income", "Total Debt / Annual Income", "45%", "warning"),
    ("Current Ratio", "Current Assets / Current Liabilities", "2.3", "positive"),
];

const TAX_SUMMARY: [(&str, f64); 4] = [
    ("Total Taxable Income", 6800.0),
    ("Deductible Expenses", 2305.0),
    ("Estimated Tax Liability", 900.0),
    ("Available Tax Credits", 250.0),
];

const CASH_FLOW_SUMMARY: [(&str, &str, &str); 3] = [
    ("Starting Balance:", "$2,500", ""),
    ("Ending Balance:", "$5,500", ""),
    ("Net Change:", "+$3,000", "positive"),
];

#[component]
fn ReportsTab() -> Element {
    let total_income: f64 = INCOME_BY_SOURCE.iter().map(|(_, v)| v).sum();
    let total_expenses: f64 = EXPENSE_BREAKDOWN.iter().map(|(_, v)| v).sum();
    let cash_flow: Vec<Slice> = MONTHS
        .iter()
        .zip(MONTHLY_CASH_FLOW)
        .map(|(m, v)| Slice {
            label: m.to_string(),
            value: v,
        })
        .collect();

    rsx! {
        div {
            class: "reports-tab",
            div {
                class: "reports-header",
                h3 { "Financial Reports" }
                div {
                    class: "report-period-select",
                    select {
                        option { value: "2025", "2025" }
                        option { value: "2024", "2024" }
                    }
                    select {
                        option { value: "all", "All Months" }
                        option { value: "q1", "Q1 (Jan-Mar)" }
                        option { value: "q2", "Q2 (Apr-Jun)" }
                        option { value: "q3", "Q3 (Jul-Sep)" }
                        option { value: "q4", "Q4 (Oct-Dec)" }
                    }
                }
            }

            div {
                class: "reports-grid",
                div {
                    class: "report-card",
                    h4 { "Income Statement" }
                    table {
                        class: "report-table",
                        thead {
                            tr {
                                th { "Category" }
                                th { "Amount" }
                            }
                        }
                        tbody {
                            tr { class: "section-header", td { colspan: "2", "Income" } }
                            for (label, value) in INCOME_BY_SOURCE {
                                tr {
                                    key: "income-{label}",
                                    td { "{label}" }
                                    td { {dollars(value)} }
                                }
                            }
                            tr {
                                class: "total-row",
                                td { "Total Income" }
                                td { {dollars(total_income)} }
                            }
                            tr { class: "section-header", td { colspan: "2", "Expenses" } }
                            for (label, value) in EXPENSE_BREAKDOWN {
                                tr {
                                    key: "expense-{label}",
                                    td { "{label}" }
                                    td { {dollars(value)} }
                                }
                            }
                            tr {
                                class: "total-row",
                                td { "Total Expenses" }
                                td { {dollars(total_expenses)} }
                            }
                            tr {
                                class: "net-profit",
                                td { "Net Profit" }
                                td { {dollars(total_income - total_expenses)} }
                            }
                        }
                    }
                    div {
                        class: "report-actions",
                        button { class: "btn btn-primary btn-sm", "Download PDF" }
                        button { class: "btn btn-secondary btn-sm", "Export CSV" }
                    }
                }

                div {
                    class: "report-card",
                    h4 { "Cash Flow" }
                    BarChart { slices: cash_flow, color: PALETTE[0] }
                    div {
                        class: "report-summary",
                        for (label, value, tone) in CASH_FLOW_SUMMARY {
                            div {
                                key: "{label}",
                                class: "summary-item {tone}",
                                span { "{label}" }
                                span { "{value}" }
                            }
                        }
                    }
                }

                div {
                    class: "report-card",
                    h4 { "Tax Summary" }
                    div {
                        class: "tax-summary",
                        for (label, value) in TAX_SUMMARY {
                            div {
                                key: "{label}",
                                class: "tax-category",
                                h5 { "{label}" }
                                p { {dollars(value)} }
                            }
                        }
                    }
                    div {
                        class: "tax-notes",
                        p {
                            strong { "Note:" }
                            " This is an estimate. Consult with a tax professional for accurate tax planning."
                        }
                    }
                    div {
                        class: "report-actions",
                        button { class: "btn btn-primary btn-sm", "Download Tax Report" }
                    }
                }

                div {
                    class: "report-card",
                    h4 { "Financial Ratios" }
                    div {
                        class: "ratios-list",
                        for (name, formula, value, tone) in RATIOS {
                            div {
                                key: "{name}",
                                class: "ratio-item",
                                div {
                                    class: "ratio-info",
                                    h5 { "{name}" }
                                    p { "{formula}" }
                                }
                                div { class: "ratio-value {tone}", "{value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_totals() {
        let income: f64 = INCOME_BY_SOURCE.iter().map(|(_, v)| v).sum();
        let expenses: f64 = EXPENSE_BREAKDOWN.iter().map(|(_, v)| v).sum();
        assert_eq!(dollars(income), "$6,800");
        assert_eq!(dollars(expenses), "$2,305");
        assert_eq!(dollars(income - expenses), "$4,495");
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<&str> = Tab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Overview", "Transactions", "Savings Goals", "Reports"]);
    }
}
