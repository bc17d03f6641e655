use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::run_log::read_errors;
use crate::ui::messages::success;
use ansi_term::Colour;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Errors { last } = cmd else {
        return Ok(());
    };

    let lines = read_errors(&cfg.paths().error_log(), *last)?;
    if lines.is_empty() {
        success("No errors logged.");
        return Ok(());
    }

    println!("📜 Error log:\n");
    for line in lines {
        match line.split_once(" - ") {
            Some((stamp, msg)) => println!("{} - {}", Colour::Red.paint(stamp), msg),
            None => println!("{line}"),
        }
    }
    Ok(())
}
