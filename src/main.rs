use wtime::commands::Cli;
use wtime::libs::logging;
use wtime::msg_error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();

    if let Err(e) = Cli::menu().await {
        msg_error!(format!("{:#}", e));
        std::process::exit(1);
    }
}
