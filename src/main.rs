extern crate chrono;
extern crate flexi_logger;
extern crate getopts;
extern crate reqwest;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod result;
mod schedule;
mod slack;
mod stations;
mod status;

fn print_usage(program: &str, opts: &getopts::Options) {
    let brief = format!("Usage: {} --slack-webhook URL --station CODE [--station CODE ...]", program);
    print!("{}", opts.usage(&brief));
}

fn run(webhook_url: &str, station_codes: &[String], debug: bool) -> result::MetroResult<()> {
    let directory = stations::Directory::new();

    // One fetch per run, shared across every requested station.
    let stops = schedule::load_schedule()?;
    info!("Loaded {} scheduled stops", stops.len());

    for code in station_codes {
        let station = code.to_uppercase();
        let message = status::process_station(&station, &stops, &directory, true);
        slack::deliver(&message, webhook_url, debug)?;
        info!("Posted status for {}", station);
    }

    return Ok(());
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut opts = getopts::Options::new();
    opts.optopt("w", "slack-webhook", "The URL of the slack webhook.", "URL");
    opts.optmulti("s", "station", "Station to check times on. Repeatable.", "CODE");
    opts.optflag("d", "debug", "Print debug info.");
    opts.optflag("h", "help", "Print this help.");

    let matches = opts.parse(&args[1..]).expect("parse opts");

    if matches.opt_present("help") {
        print_usage(&args[0], &opts);
        return;
    }

    let debug = matches.opt_present("debug");
    let _logger = flexi_logger::Logger::try_with_env_or_str(if debug { "debug" } else { "info" })
        .expect("logger spec")
        .start()
        .expect("logger start");

    let webhook_url = match matches.opt_str("slack-webhook") {
        Some(url) => url,
        None => {
            print_usage(&args[0], &opts);
            std::process::exit(1);
        },
    };

    let station_codes = matches.opt_strs("station");
    if station_codes.is_empty() {
        print_usage(&args[0], &opts);
        std::process::exit(1);
    }

    match run(&webhook_url, &station_codes, debug) {
        Ok(_) => {},
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        },
    }
}
