use clap::Subcommand;
use tanggalmerah_core::{Config, HolidayApiClient};

#[derive(Subcommand)]
pub enum HolidaysAction {
    /// List holidays for a year
    List {
        /// Target year
        year: i32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: HolidaysAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        HolidaysAction::List { year, json } => {
            let config = Config::load_or_default();
            let client = HolidayApiClient::with_base_url(&config.api.base_url);
            let holidays = super::runtime()?.block_on(client.fetch_year(year))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&holidays)?);
            } else if holidays.is_empty() {
                println!("no holidays published for {year}");
            } else {
                for holiday in &holidays {
                    println!("{}  {}  [{}]", holiday.date, holiday.name, holiday.kind.label());
                }
            }
        }
    }
    Ok(())
}
