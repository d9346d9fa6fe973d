use std::env;
use std::ffi::OsStr;
use std::io;
use std::path::PathBuf;

use anyhow::Context as _;
use log::{error, info};
use seahorse::{App, Context, Flag, FlagType};

use month_hours::input::Config;
use month_hours::time::{Date, Month, Year};
use month_hours::OpenHolidaysApi;

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    if let Err(e) = run() {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

mod seahorse_exts {
    use core::fmt;
    use std::path::PathBuf;

    use log::error;
    use seahorse::Context;

    /// Logs the error and exits, because seahorse actions can not fail.
    pub fn exit_on_error<E: fmt::Debug>(result: Result<(), E>) {
        if let Err(e) = result {
            error!("{:?}", e);
            ::std::process::exit(1);
        }
    }

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn optional_string_flag(&self, name: &str) -> Option<String> {
            self.context().string_flag(name).ok()
        }

        fn optional_path_flag(&self, name: &str) -> Option<PathBuf> {
            self.optional_string_flag(name).map(PathBuf::from)
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{exit_on_error, ContextExt};

/// The current date in the local time zone, or in UTC if the offset is unknown.
fn today() -> anyhow::Result<Date> {
    let now = ::time::OffsetDateTime::now_local()
        .unwrap_or_else(|_| ::time::OffsetDateTime::now_utc());

    let year = usize::try_from(now.year()).context("the current year is negative")?;
    let month = Month::try_from(u8::from(now.month()) as usize)?;

    Ok(Date::new(Year::new(year), month, now.day() as usize)?)
}

fn build_config(path: Option<PathBuf>, today: Date) -> anyhow::Result<Config> {
    let builder = match path {
        Some(path) => Config::try_from_toml_file(path)?,
        None => {
            info!("no config file given, using the defaults");
            Config::default_for(today)
        }
    };

    let config = builder.build()?;

    info!("finished building config");

    Ok(config)
}

fn report(context: &Context) -> anyhow::Result<()> {
    let today = match context.optional_string_flag("date") {
        Some(date) => date
            .parse::<Date>()
            .with_context(|| format!("invalid value for flag \"date\": \"{}\"", date))?,
        None => today()?,
    };
    info!("today is {}", today);

    let config = build_config(context.optional_path_flag("config"), today)?;
    let source = OpenHolidaysApi::from(&config);

    month_hours::run(
        &config,
        &source,
        today,
        io::stdin().lock(),
        io::stdout().lock(),
    )?;

    Ok(())
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", args[0]))
        .flag(
            Flag::new("config", FlagType::String)
                .description("[optional] Path to the config file. Default: a 4-day week in CZ"),
        )
        .flag(Flag::new("date", FlagType::String).description(
            "[optional] The day to calculate the report for (YYYY-MM-DD). Default: today",
        ))
        .action(|context: &Context| exit_on_error(report(context)));

    app.run(args);

    Ok(())
}
