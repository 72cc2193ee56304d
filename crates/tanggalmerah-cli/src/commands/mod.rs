pub mod config;
pub mod holidays;
pub mod plan;

/// Build the single-threaded runtime the fetch commands block on.
pub fn runtime() -> Result<tokio::runtime::Runtime, Box<dyn std::error::Error>> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
