mod config;
mod presentation;
mod tictactoe;

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(2);
        }
    };

    let mut user_interface = presentation::input::Stdio::new(config.format);
    let session = presentation::start(&mut user_interface, config.show_help).await;
    log::info!(
        "leaving after {} turns, outcome {:?}",
        session.game().turn_count(),
        session.game().outcome()
    );
}
