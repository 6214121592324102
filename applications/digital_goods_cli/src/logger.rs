//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use log::LevelFilter;

/// Logs go to stderr so that they never interleave with the tables and messages printed to stdout.
pub fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fn should_skip(target: &str) -> bool {
        const SKIP: [&str; 4] = ["hyper::", "h2::", "tower::", "reqwest::"];
        SKIP.iter().any(|s| target.starts_with(s))
    }

    let colors = fern::colors::ColoredLevelConfig::new()
        .info(fern::colors::Color::Green)
        .warn(fern::colors::Color::Yellow)
        .error(fern::colors::Color::Red);
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{}] {} {}",
                humantime::format_rfc3339_seconds(std::time::SystemTime::now()),
                record.target(),
                colors.color(record.level()),
                message
            ))
        })
        .filter(|metadata| !should_skip(metadata.target()))
        .level(level)
        .chain(std::io::stderr())
        .apply()
}
