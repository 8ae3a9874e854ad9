use cmdnotify::config::Config;
use cmdnotify::privilege::Privileges;
use cmdnotify::{app, log};

#[tokio::main]
async fn main() {
    log::init();
    let config = Config::load();

    match app::run(std::env::args_os(), &config, Privileges::current()).await {
        Ok(status) => std::process::exit(status),
        Err(e) => {
            tracing::error!(error = %e, "preflight failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
