use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use tanggalmerah_core::{Config, HolidayApiClient, HolidayIndex, LeavePlanner};

#[derive(Args)]
pub struct PlanArgs {
    /// Target year (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,
    /// Only recommend leave starting in this month
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,
    /// Maximum leave days to spend on one bridge
    #[arg(long)]
    max_leave: Option<u32>,
    /// Minimum total days off for a bridge to be listed
    #[arg(long)]
    min_off: Option<u32>,
    /// Treat cuti bersama days as workdays
    #[arg(long)]
    cuti_workday: bool,
    /// Only consider bridges starting on or after this date (defaults to today)
    #[arg(long)]
    from: Option<NaiveDate>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let today = args.from.unwrap_or_else(|| Local::now().date_naive());
    let year = args.year.unwrap_or_else(|| today.year());

    let mut policy = config.policy();
    if args.cuti_workday {
        policy.observe_cuti = false;
    }
    if let Some(max_leave) = args.max_leave {
        policy.max_bridge_length = max_leave;
    }
    if let Some(min_off) = args.min_off {
        policy.min_total_off = min_off;
    }
    policy.month_filter = args.month.map(|m| m - 1);

    let client = HolidayApiClient::with_base_url(&config.api.base_url);
    let holidays = super::runtime()?.block_on(client.fetch_year_or_empty(year));
    let index: HolidayIndex = holidays.into_iter().collect();

    let recommendations = LeavePlanner::with_policy(policy).plan(year, &index, today);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }

    if recommendations.is_empty() {
        println!("no future opportunities found for {year}");
        return Ok(());
    }

    for rec in &recommendations {
        println!(
            "take leave {} - {}  ({} day(s), {} days off, {}x)",
            rec.leave_start, rec.leave_end, rec.cost, rec.reward, rec.efficiency
        );
        println!(
            "    vacation {} - {}  {}",
            rec.vacation_start, rec.vacation_end, rec.description
        );
    }
    Ok(())
}
