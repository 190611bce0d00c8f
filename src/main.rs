use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use timekit::config::Config;
use timekit::datetime::{self, Delay, Period, LOCAL_DATETIME_FORMAT};
use timekit::{deadline, shell};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    timekit::logging::init(&config.logging)?;
    log::info!("timekit diagnostics starting");

    let now = Local::now();
    println!("period boundaries for {}", now.format(LOCAL_DATETIME_FORMAT));
    let periods = [
        ("day", Period::Day),
        ("week", Period::Week),
        ("ten-day", Period::TenDay),
        ("month", Period::Month),
        ("year", Period::Year),
        ("all", Period::All),
    ];
    for (label, period) in periods {
        println!("  {}\t{}", label, datetime::period_start(period, now));
    }

    let threshold = chrono::Duration::seconds(config.humanize.threshold_seconds as i64);
    let recent = now.format(LOCAL_DATETIME_FORMAT).to_string();
    for sample in ["2021-02-27 01:04:23", recent.as_str()] {
        match datetime::humanize_delay(sample, threshold)? {
            Delay::Phrase(phrase) => println!("{}\t{}", sample, phrase),
            Delay::WithinThreshold => println!("{}\twithin threshold", sample),
        }
    }

    for tool in ["sh", "git", "fc-list"] {
        println!("{}\tavailable: {}", tool, shell::is_tool_available(tool));
    }

    let guarded = deadline::with_deadline(
        "diagnostic_sleep",
        Duration::from_secs(2),
        async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            "ok"
        },
        deadline::log_overrun,
    )
    .await;
    println!("guarded call result: {:?}", guarded);

    log::info!("timekit diagnostics finished");
    Ok(())
}
