use std::io;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use log::debug;
use opensnow_scraping::api::SnowClient;
use opensnow_scraping::config::SiteConfig;
use opensnow_scraping::report::write_report;
use opensnow_scraping::resort_parser::parse_page;
use opensnow_scraping::schema::Region;
use opensnow_scraping::schema::Variant;

/// Prints the snowfall forecasts (and reports) of every resort in a state listed on OpenSnow.
#[derive(Parser)]
#[command(args_override_self = true)]
struct Opts {
    /// Select a state that you want info for
    #[arg(short = 's', value_name = "STATE")]
    state: Region,
    #[arg(short, long, value_enum, default_value_t)]
    mode: Variant,
    /// Everything after the flags is ignored.
    #[arg(trailing_var_arg = true, hide = true)]
    rest: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    pretty_env_logger::init();

    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(e) => {
            println!("{}", e.render());
            return Ok(ExitCode::from(usage_status(e.kind())));
        }
    };

    if !opts.rest.is_empty() {
        debug!("Ignoring trailing arguments {:?}", opts.rest);
    }
    if opts.mode == Variant::Tiered {
        println!("{}", opts.state);
    }
    let client = SnowClient::new(SiteConfig::default())?;
    let content = client
        .fetch_region_page(&opts.state, &mut io::stdout())
        .await?;
    let tables = parse_page(content.as_deref(), &opts.mode.fields())?;
    write_report(&mut io::stdout().lock(), &tables, opts.mode.into())?;
    Ok(ExitCode::SUCCESS)
}

fn usage_status(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use opensnow_scraping::schema::Variant;

    use super::{usage_status, Opts};

    fn status(args: &[&str]) -> u8 {
        usage_status(Opts::try_parse_from(args).err().unwrap().kind())
    }

    #[test]
    fn test_parse_state() {
        let opts = Opts::try_parse_from(["opensnow-scraping", "-s", "utah"]).unwrap();
        assert_eq!(opts.state.to_string(), "utah");
        assert_eq!(opts.mode, Variant::Dual);
        let opts =
            Opts::try_parse_from(["opensnow-scraping", "-s", "utah", "--mode", "tiered"]).unwrap();
        assert_eq!(opts.mode, Variant::Tiered);
    }

    #[test]
    fn test_repeated_state_and_trailing_arguments() {
        let opts =
            Opts::try_parse_from(["opensnow-scraping", "-s", "utah", "-s", "idaho"]).unwrap();
        assert_eq!(opts.state.to_string(), "idaho");
        let opts =
            Opts::try_parse_from(["opensnow-scraping", "-s", "utah", "extra", "-x"]).unwrap();
        assert_eq!(opts.state.to_string(), "utah");
        assert_eq!(opts.rest, ["extra", "-x"]);
    }

    #[test]
    fn test_usage_status() {
        assert_eq!(status(&["opensnow-scraping", "-h"]), 0);
        assert_eq!(status(&["opensnow-scraping"]), 1);
        assert_eq!(status(&["opensnow-scraping", "-x"]), 1);
        assert_eq!(status(&["opensnow-scraping", "-s"]), 1);
        assert_eq!(status(&["opensnow-scraping", "-s", "utah", "-x"]), 1);
    }
}
