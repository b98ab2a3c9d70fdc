//! Plain-text rendering of screens.

use colored::{ColoredString, Colorize};

use casetrack_application::{AnalyticsState, DetailMode, DetailState, FilterOptions, FormOptions};
use casetrack_core::model::{
    Complainant, Fir, FirStatus, Officer, PoliceStation, Profile, display_timestamp,
};

fn status_badge(status: FirStatus) -> ColoredString {
    let label = format!("{:<13}", status.as_ref());
    match status {
        FirStatus::Pending => label.yellow(),
        FirStatus::Investigation => label.bright_blue(),
        FirStatus::Solved => label.green(),
        FirStatus::Closed => label.bright_black(),
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}

pub fn heading(title: &str) {
    println!();
    println!("{}", title.bright_magenta().bold());
}

pub fn loading() {
    println!("{}", "Loading...".bright_black());
}

pub fn firs(firs: &[Fir]) {
    if firs.is_empty() {
        println!("{}", "No FIRs found".bright_black());
        return;
    }
    for fir in firs {
        let station = fir.station.as_ref().map(|s| s.name.as_str());
        let crime = fir.crime_type.as_ref().map(|c| c.name.as_str());
        println!(
            "{:<12} {} {:<16} {:<16} {}",
            fir.fir_id.bright_cyan(),
            status_badge(fir.status),
            or_dash(crime),
            or_dash(station),
            display_timestamp(fir.created_at.as_deref()),
        );
        if !fir.description.is_empty() {
            println!("             {}", fir.description.bright_black());
        }
    }
}

pub fn officers(officers: &[Officer]) {
    if officers.is_empty() {
        println!("{}", "No officers found".bright_black());
        return;
    }
    for officer in officers {
        let station = officer.station.as_ref().map(|s| s.name.as_str());
        println!(
            "{:<10} {:<24} {:<14} {:<12} {}",
            officer.officer_id.bright_cyan(),
            officer.name,
            or_dash(officer.badge_no.as_deref()),
            or_dash(officer.officer_rank.as_deref()),
            or_dash(station),
        );
    }
}

pub fn stations(stations: &[PoliceStation]) {
    if stations.is_empty() {
        println!("{}", "No stations found".bright_black());
        return;
    }
    for station in stations {
        println!(
            "{:<10} {:<24} {:<16} {:<16} {}",
            station.station_id.bright_cyan(),
            station.name,
            or_dash(station.district.as_deref()),
            or_dash(station.city.as_deref()),
            or_dash(station.province.as_deref()),
        );
    }
}

pub fn complainants(complainants: &[Complainant]) {
    if complainants.is_empty() {
        println!("{}", "No complainants found".bright_black());
        return;
    }
    for c in complainants {
        println!(
            "{:<10} {:<24} {:<16} {:<18} {}",
            c.complainant_id.bright_cyan(),
            c.name,
            or_dash(c.cnic.as_deref()),
            or_dash(c.phone.as_deref()),
            or_dash(c.email.as_deref()),
        );
    }
}

pub fn detail(state: &DetailState, mode: DetailMode) {
    let detail = match state {
        DetailState::Loading => return loading(),
        DetailState::Empty => {
            println!("{}", "FIR not available. Type 'retry' to try again.".yellow());
            return;
        }
        DetailState::Loaded(detail) => detail,
    };

    let fir = &detail.fir;
    println!("{} {}", fir.fir_id.bright_cyan().bold(), status_badge(fir.status));
    println!("  {}", fir.description);
    println!("  Location:    {}", or_dash(fir.location.as_deref()));
    println!(
        "  Officer:     {}",
        or_dash(fir.officer.as_ref().map(|o| o.name.as_str()))
    );
    println!(
        "  Complainant: {}",
        or_dash(fir.complainant.as_ref().map(|c| c.name.as_str()))
    );
    println!(
        "  Station:     {}",
        or_dash(fir.station.as_ref().map(|s| s.name.as_str()))
    );
    println!("  Filed:       {}", display_timestamp(fir.created_at.as_deref()));

    println!("{}", "Evidence".bold());
    for e in &detail.evidence {
        println!("  {:<8} {:<10} {}", e.evidence_id, e.evidence_type, e.file_url);
    }
    println!("{}", "Suspects".bold());
    for s in &detail.suspects {
        let verified = if s.is_verified {
            "verified".green()
        } else {
            "unverified".yellow()
        };
        println!(
            "  {:<8} {:<20} {:<16} {}",
            s.suspect_id,
            s.name,
            or_dash(s.cnic.as_deref()),
            verified
        );
    }
    println!("{}", "Arrests".bold());
    for a in &detail.arrests {
        println!(
            "  {:<8} {:<20} by {:<16} {}",
            a.arrest_id,
            or_dash(a.suspect.as_ref().map(|s| s.name.as_str())),
            or_dash(a.officer.as_ref().map(|o| o.name.as_str())),
            display_timestamp(a.created_at.as_deref()),
        );
    }
    println!("{}", "History".bold());
    for h in &detail.history {
        println!(
            "  {} {:<13} {}",
            display_timestamp(h.created_at.as_deref()),
            or_dash(h.status.as_deref()),
            h.description
        );
    }

    if mode == DetailMode::Manage {
        println!(
            "{}",
            "status <s> | delete | add-evidence | add-suspect | verify <id> | add-arrest | add-history"
                .bright_black()
        );
    }
}

pub fn analytics(state: &AnalyticsState) {
    match state {
        AnalyticsState::Loading => loading(),
        AnalyticsState::Failed(message) => println!("{}", message.red()),
        AnalyticsState::Ready(data) => {
            for (dataset, rows) in data {
                println!("{} ({} rows)", dataset.as_ref().bold(), rows.len());
                for row in rows {
                    let cells: Vec<String> = row.iter().map(|(k, v)| format!("{k}={v}")).collect();
                    println!("  {}", cells.join("  "));
                }
            }
        }
    }
}

pub fn profile(profile: &Profile) {
    println!("{}", profile.name.bold());
    println!("  Email:   {}", or_dash(profile.email.as_deref()));
    println!("  CNIC:    {}", or_dash(profile.cnic.as_deref()));
    println!("  Phone:   {}", or_dash(profile.phone.as_deref()));
    if profile.badge_no.is_some() {
        println!("  Badge:   {}", or_dash(profile.badge_no.as_deref()));
        println!("  Rank:    {}", or_dash(profile.officer_rank.as_deref()));
        println!(
            "  Station: {}",
            or_dash(profile.station.as_ref().map(|s| s.name.as_str()))
        );
    }
    println!("  Joined:  {}", display_timestamp(profile.created_at.as_deref()));
}

pub fn options(options: &FormOptions) {
    let stations: Vec<String> = options
        .stations
        .iter()
        .map(|s| format!("{}={}", s.station_id, s.name))
        .collect();
    let types: Vec<String> = options
        .crime_types
        .iter()
        .map(|t| format!("{}={}", t.type_id, t.name))
        .collect();
    println!("  Stations:    {}", stations.join(", ").bright_black());
    println!("  Crime types: {}", types.join(", ").bright_black());
}

/// Ids accepted by `filter`, as `id=name` pairs.
pub fn filter_options(options: &FilterOptions) {
    let stations: Vec<String> = options
        .stations
        .iter()
        .map(|s| format!("{}={}", s.station_id, s.name))
        .collect();
    let types: Vec<String> = options
        .crime_types
        .iter()
        .map(|t| format!("{}={}", t.type_id, t.name))
        .collect();
    let officers: Vec<String> = options
        .officers
        .iter()
        .map(|o| format!("{}={}", o.officer_id, o.name))
        .collect();
    println!("  station: {}", stations.join(", ").bright_black());
    println!("  type:    {}", types.join(", ").bright_black());
    println!("  officer: {}", officers.join(", ").bright_black());
}

pub fn not_found(home: &str) {
    println!("{}", "404 - page not found".red());
    println!("{}", format!("Back to dashboard: open {home}").bright_black());
}
