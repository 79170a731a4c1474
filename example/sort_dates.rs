use clap::Parser;
use fuzzy_era::{EventDate, parse_event_date, probe_event_date};
use std::process;

/// Sort event dates such as "15 Mar 44 BCE" or "< 1 CE" chronologically
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Event dates to sort
    #[arg(value_name = "DATE", required = true)]
    dates: Vec<String>,

    /// Show the sort value next to each date
    #[arg(short, long)]
    keys: bool,

    /// Skip entries that do not look like dates instead of failing
    #[arg(short, long)]
    skip_invalid: bool,
}

fn main() {
    let args = Args::parse();

    let mut events: Vec<EventDate> = Vec::with_capacity(args.dates.len());
    for text in &args.dates {
        if args.skip_invalid && !probe_event_date(text) {
            eprintln!("Skipping '{}': not a date", text);
            continue;
        }
        match parse_event_date(text) {
            Ok(event) => events.push(event),
            Err(err) => {
                eprintln!("Error parsing '{}': {}", text, err);
                process::exit(1);
            }
        }
    }

    // Stable, so equal sort values keep their command line order.
    events.sort_by(EventDate::cmp_chronological);

    for event in &events {
        if args.keys {
            println!("{:>12}  {}", event.sort_value(), event);
        } else {
            println!("{}", event);
        }
    }
}
