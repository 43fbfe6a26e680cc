use application::ChatService;
use clap::Parser;
use infrastructure::{ClientConfig, HttpTransport};
use presentation::cli::{Cli, CliApp};
use shared::telemetry::init_tracing;
use shared::types::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    Cli::parse();
    init_tracing();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            println!("Error: {err}");
            std::process::exit(1);
        }
    };

    let transport = HttpTransport::from_config(&config);
    let service = ChatService::new(transport, config.generation, config.persona);
    let mut app = CliApp::new(service);

    let stdin = std::io::stdin();
    app.run(stdin.lock(), std::io::stdout()).await
}
