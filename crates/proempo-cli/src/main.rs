#![forbid(unsafe_code)]

//! Pro Empo CLI
//!
//! One-shot command-line front end for the ROI projection calculator. Raw
//! flag values go through the same normalization as the web inputs, so
//! malformed numbers degrade to zero instead of failing.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use proempo_core::{
    HotelOperatingProfile, ImprovementCoefficients, Projection, calculator,
};

/// Pro Empo ROI projection
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Total number of available rooms
    #[arg(long)]
    rooms: String,

    /// Average occupancy rate, percent
    #[arg(long)]
    occupancy: String,

    /// Average daily rate (ADR), USD
    #[arg(long)]
    adr: String,

    /// Monthly operational costs, USD
    #[arg(long = "monthly-cost")]
    monthly_cost: String,

    /// Path to a JSON file overriding the improvement coefficients
    #[arg(long, env = "PROEMPO_COEFFICIENTS")]
    coefficients: Option<PathBuf>,

    /// Emit the projection as JSON instead of a report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let coefficients = match &args.coefficients {
        Some(path) => ImprovementCoefficients::from_json_file(path)
            .with_context(|| format!("failed to load coefficients from {}", path.display()))?,
        None => ImprovementCoefficients::default(),
    };

    let profile = HotelOperatingProfile::from_raw(
        &args.rooms,
        &args.occupancy,
        &args.adr,
        &args.monthly_cost,
    );
    tracing::debug!(?profile, "normalized operating profile");

    let projection = calculator::project(&profile, &coefficients);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
        return Ok(());
    }

    match projection {
        Projection::Computed(figures) => {
            println!("ROI projection for a {}-room property", profile.room_count);
            println!();
            println!(
                "  Current annual revenue      {}",
                format_usd(figures.current_annual_revenue)
            );
            println!(
                "  Projected annual revenue    {}",
                format_usd(figures.projected_annual_revenue)
            );
            println!(
                "  Annual operational savings  {}",
                format_usd(figures.annual_operational_savings)
            );
            println!(
                "  Total annual benefit        {}",
                format_usd(figures.annual_benefit)
            );
            println!(
                "  Implementation cost         {}",
                format_usd(figures.implementation_cost)
            );
            println!("  Return on investment        {}%", figures.roi_percent);
            println!("  Payback period              {} months", figures.payback_months);
        }
        Projection::NotComputable { reason } => {
            println!("Projection not computable: {reason}.");
        }
        // Handle future variants (non_exhaustive)
        #[allow(unreachable_patterns)]
        _ => println!("Projection unavailable."),
    }

    Ok(())
}

/// Formats a whole USD amount with thousands separators.
fn format_usd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}${grouped}")
}
