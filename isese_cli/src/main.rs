use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use isese_core::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "isese")]
#[command(about = "Traditional Yorùbá liturgical calendar", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's liturgical day (default)
    Today {
        /// Resolve this Gregorian date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List all 13 months
    Months,

    /// Show one month by name or by 0-based index
    Month {
        /// Month name, exact match
        #[arg(required_unless_present = "index")]
        name: Option<String>,

        /// 0-based month index
        #[arg(long, conflicts_with = "name", allow_negative_numbers = true)]
        index: Option<i64>,
    },

    /// Show one day of a month
    Day {
        /// Month name, exact match
        month: String,

        /// Day number (1-28)
        #[arg(allow_negative_numbers = true)]
        day: i64,
    },

    /// Show the next few liturgical days
    Upcoming {
        /// Start from this Gregorian date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Number of days to show
        #[arg(long, default_value_t = 7)]
        count: u16,
    },

    /// Export the whole calendar to a file
    Export {
        /// Output format (json, csv)
        #[arg(long, default_value = "json")]
        format: ExportFormat,

        /// Destination file
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return exit_code(&e);
        }
    };

    // Initialize logging
    isese_core::logging::init_with_level(&config.logging.level);

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {:?}", e);
            eprintln!("error: {}", e);
            exit_code(&e)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn exit_code(error: &Error) -> ExitCode {
    match error.class() {
        ErrorClass::NotFound => ExitCode::from(3),
        ErrorClass::BadRequest => ExitCode::from(2),
        ErrorClass::Internal => ExitCode::from(1),
    }
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    // Build once before serving any query; table defects abort here
    let calendar = isese_core::builder::init(config.calendar.anchor_year)?;
    let json = cli.json || config.display.format == OutputFormat::Json;

    match cli.command.unwrap_or(Commands::Today { date: None }) {
        Commands::Today { date } => {
            let view = match date {
                Some(date) => calendar.on_date(date)?,
                None if config.calendar.use_utc => calendar.on_date(Utc::now().date_naive())?,
                None => calendar.today()?,
            };
            if json {
                print_json(&view)
            } else {
                display_day(&view);
                Ok(())
            }
        }

        Commands::Months => {
            if json {
                print_json(calendar)
            } else {
                display_months(calendar);
                Ok(())
            }
        }

        Commands::Month { name, index } => {
            let month = match (name, index) {
                (_, Some(index)) => calendar.month_by_index(index)?,
                (Some(name), None) => calendar.month_by_name(&name)?,
                (None, None) => {
                    return Err(Error::Config("month name or --index is required".into()))
                }
            };
            if json {
                print_json(month)
            } else {
                display_month(month);
                Ok(())
            }
        }

        Commands::Day { month, day } => {
            let view = calendar.day(&month, day)?;
            if json {
                print_json(&view)
            } else {
                display_day(&view);
                Ok(())
            }
        }

        Commands::Upcoming { date, count } => {
            let start = date.unwrap_or_else(|| today_date(config));
            let views = upcoming(start, usize::from(count))
                .into_iter()
                .map(|(date, _)| calendar.on_date(date))
                .collect::<Result<Vec<_>>>()?;
            if json {
                print_json(&views)
            } else {
                display_upcoming(&views);
                Ok(())
            }
        }

        Commands::Export { format, output } => {
            export_to(calendar, format, &output)?;
            println!("✓ Exported calendar to {}", output.display());
            Ok(())
        }
    }
}

fn today_date(config: &Config) -> NaiveDate {
    if config.calendar.use_utc {
        Utc::now().date_naive()
    } else {
        Local::now().date_naive()
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn display_day(view: &DayView) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {} · {}", view.date_label, view.patron_day_name);
    println!("╰─────────────────────────────────────────╯");
    println!();
    if let Some(date) = view.gregorian_date {
        println!("  Gregorian: {}", date.format("%A, %-d %B %Y"));
    }
    println!("  Patron:    {}", view.patron);
    println!("  Theme:     {}", view.theme);
    println!("  Color:     {}", view.color);
    println!("  Moon:      {}", view.day.moon_phase);
    println!();
    println!("  → {}", view.day.activity);
    println!("  Offerings: {}", view.day.offerings.join(", "));
    println!("  Taboos:    {}", view.taboos.join(", "));

    if let Some(ref prayer) = view.day.prayer {
        println!();
        println!("  🙏 {}", prayer);
    }

    println!();
}

fn display_month(month: &CalendarMonth) {
    println!("\n{} ({})", month.name, month.patron);
    println!("  Theme:  {}", month.theme);
    println!("  Color:  {}", month.color);
    println!("  Taboos: {}", month.taboos.join(", "));
    println!();

    for day in &month.days {
        let marker = if day.prayer.is_some() { "*" } else { " " };
        println!(
            "  {}{:>2}  {:<22} {:<16} {}",
            marker,
            day.day_number,
            day.label,
            day.moon_phase.display_name(),
            day.activity
        );
    }
    println!();
}

fn display_months(calendar: &Calendar) {
    println!("\nLiturgical year {} (13 × 28 days)\n", calendar.year);
    for (index, month) in calendar.months.iter().enumerate() {
        println!(
            "  {:>2}  {:<10} {:<12} {}",
            index,
            month.name,
            month.patron.name(),
            month.theme
        );
    }
    println!();
}

fn display_upcoming(views: &[DayView]) {
    for view in views {
        let date = view
            .gregorian_date
            .map(|d| d.to_string())
            .unwrap_or_default();
        println!(
            "  {}  {:<12} {:<16} {}",
            date,
            view.date_label,
            view.day.moon_phase.display_name(),
            view.patron
        );
    }
}
