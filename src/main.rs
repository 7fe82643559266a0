//! hangout - plan a hangout from the command line
//!
//! Usage:
//!   hangout generate --from 2025-03-10 --to 2025-03-12 --daily-start 09:00 --daily-end 12:00 --duration 1
//!   hangout generate --from 2025-03-10 --to 2025-03-10 --whole-day --json
//!   hangout submit --title "Board games" --from 2025-03-10 --to 2025-03-10 --whole-day

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use hangout_client::{submit_hangout, ClientConfig, HttpCalendarApi};
use hangout_core::{
    generate_time_slots, models::generation::QuickSlotForm, proposal::HangoutProposal,
    slot_list::TimeSlotList, timezone::parse_timezone, TimeSlot,
};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "hangout")]
#[command(about = "Propose time slots for a hangout and publish them as a calendar")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate candidate time slots and print them
    Generate {
        #[command(flatten)]
        slots: SlotArgs,

        /// Print the slots as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate slots and submit them with the hangout details
    Submit {
        #[command(flatten)]
        slots: SlotArgs,

        #[command(flatten)]
        details: DetailArgs,

        /// IANA timezone the slots are entered in (overrides HANGOUT_TIMEZONE)
        #[arg(long, value_name = "TZ")]
        timezone: Option<String>,
    },
}

#[derive(Args, Clone, Default)]
struct SlotArgs {
    /// First day of the range (YYYY-MM-DD)
    #[arg(long = "from", value_name = "DATE")]
    start_date: String,

    /// Last day of the range, inclusive (YYYY-MM-DD)
    #[arg(long = "to", value_name = "DATE")]
    end_date: String,

    /// Start of the daily window (HH:MM)
    #[arg(long, value_name = "TIME", default_value = "")]
    daily_start: String,

    /// End of the daily window (HH:MM)
    #[arg(long, value_name = "TIME", default_value = "")]
    daily_end: String,

    /// Slot length in hours, fractions allowed
    #[arg(long, value_name = "HOURS", default_value = "")]
    duration: String,

    /// Place slots back to back instead of every half slot
    #[arg(long = "no-overlap")]
    no_overlap: bool,

    /// One slot per day covering the whole day
    #[arg(long)]
    whole_day: bool,
}

impl SlotArgs {
    fn to_form(&self) -> QuickSlotForm {
        let mut form = QuickSlotForm {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            daily_start_time: self.daily_start.clone(),
            daily_end_time: self.daily_end.clone(),
            duration: self.duration.clone(),
            is_overlapping: !self.no_overlap,
            ..QuickSlotForm::default()
        };
        if self.whole_day {
            form.set_whole_day(true);
        }
        form
    }

    fn generate(&self) -> Result<Vec<TimeSlot>> {
        let spec = self.to_form().parse()?;
        Ok(generate_time_slots(&spec)?)
    }
}

#[derive(Args, Clone, Default)]
struct DetailArgs {
    /// Title of the hangout (defaults to "Hangout")
    #[arg(long, default_value = "")]
    title: String,

    /// Password protecting the calendar
    #[arg(long, env = "HANGOUT_PASSWORD", default_value = "", hide_env_values = true)]
    password: String,

    /// Free-form description
    #[arg(long, default_value = "")]
    description: String,

    /// Where the hangout takes place
    #[arg(long, default_value = "")]
    location: String,

    /// Stop accepting responses after this date or date-time
    #[arg(long, value_name = "DATETIME", default_value = "")]
    accept_until: String,
}

impl From<DetailArgs> for HangoutProposal {
    fn from(args: DetailArgs) -> Self {
        Self {
            title: args.title,
            password: args.password,
            description: args.description,
            location: args.location,
            accept_responses_until: args.accept_until,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env()?;

    // Initialize logging, keeping stdout for command output
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Generate { slots, json } => {
            let slots = slots.generate()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&slots)?);
            } else {
                print_slots(&slots);
            }
        }
        Commands::Submit {
            slots,
            details,
            timezone,
        } => {
            if let Some(name) = timezone {
                config.timezone = parse_timezone(&name).wrap_err("Invalid --timezone value")?;
            }
            let timezone = config.timezone;

            let slots: TimeSlotList = slots.generate()?.into();
            let proposal = HangoutProposal::from(details);
            let api = HttpCalendarApi::new(config)?;

            info!("Submitting {} time slots in {}", slots.len(), timezone);
            let submission = submit_hangout(&api, &proposal, &slots, timezone).await?;

            println!(
                "Created calendar {} with {} time slots",
                submission.calendar_id, submission.slot_count
            );
        }
    }

    Ok(())
}

fn print_slots(slots: &[TimeSlot]) {
    if slots.is_empty() {
        println!("No time slots");
        return;
    }

    for slot in slots {
        println!(
            "{}  {}-{}",
            slot.day().format("%a %Y-%m-%d"),
            slot.start_time().format("%H:%M"),
            slot.end_time().format("%H:%M"),
        );
    }
    println!("{} time slots", slots.len());
}
