use std::io;
use std::mem::size_of;
use std::os::raw::{c_char, c_float, c_int};

use hchain::{measure_heads, Levels, Report, ReportConfig};

type Test = hchain::Chain![c_int, c_float, c_char];

fn main() {
    let _ = dotenv::dotenv();
    let _ = pretty_env_logger::try_init_timed();

    let config = ReportConfig::from_env().unwrap_or_else(|reason| {
        log::warn!("{}. Falling back to the default config", reason);
        Default::default()
    });
    log::debug!("report style: {}", config.style);

    let test = Test::default();
    let heads = measure_heads(&test);
    debug_assert_eq!(
        heads,
        Test::levels().iter().map(|level| level.size_of_head).collect::<Vec<_>>()
    );
    log::debug!(
        "layout of {}: heads {:?}, {} bytes in total",
        std::any::type_name::<Test>(),
        heads,
        size_of::<Test>()
    );

    if let Err(reason) = Report::new(&config).write::<Test, _>(io::stdout().lock()) {
        match std::error::Error::source(&reason) {
            Some(cause) => log::error!("{} << {}", reason, cause),
            None => log::error!("{}", reason),
        }
    }
}
