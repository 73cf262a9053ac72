// aqua-client/examples/customer_board.rs
// Fetch the board collections and print the customer table.

use aqua_client::{ClientConfig, Session};
use shared::view::{QuickRange, RecordQuery, RowFilter, RowSort, SaleSummary, local_today};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    let search = args.get(1).cloned().unwrap_or_default();
    let filter = RowFilter::parse(args.get(2).map_or("all", |s| s.as_str()));
    let sort = RowSort::parse(args.get(3).map_or("jars", |s| s.as_str()));

    let base_url =
        std::env::var("AQUA_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());

    let mut session = Session::new(&ClientConfig::new(&base_url));
    session.refresh_all().await?;

    let (rows, summary) = session.store().customer_board(&search, filter, sort);

    println!("{:<24} {:>8} {:>10} {:>12}", "Name", "Jar Due", "Due", "Last Buy");
    for row in &rows {
        let last_buy = row
            .last_buy_date
            .map_or_else(|| "-".to_string(), |d| d.format("%d %b").to_string());
        let marker = if row.is_profiled { "*" } else { " " };
        println!(
            "{marker}{:<23} {:>8} {:>10.2} {:>12}",
            row.name, row.current_due_jars, row.total_due, last_buy
        );
    }

    println!(
        "\n{} customers ({} active, {} walk-in), due {:.2}, jar due {}",
        summary.total_customers,
        summary.active_count,
        summary.walkin_count,
        summary.total_due,
        summary.total_jar_due
    );

    let today_sales = session
        .store()
        .filtered_sales(&RecordQuery::quick(QuickRange::Today), local_today());
    let sales = SaleSummary::from_sales(&today_sales);
    println!(
        "Today: {} sales, {:.2} billed, {:.2} due, {} jars out",
        sales.count, sales.total_amount, sales.total_due, sales.total_jars
    );

    Ok(())
}
