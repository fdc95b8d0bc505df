use colored::*;

pub fn success(msg: &str) {
    tracing::info!("{} {}", "[ok]".green().bold(), msg);
}

pub fn error(msg: &str) {
    tracing::info!("{} {}", "[error]".red().bold(), msg.red());
}

pub fn info(msg: &str) {
    tracing::info!("{}", msg);
}
