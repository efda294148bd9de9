use clap::Parser;

use utilkit_cli::Cli;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match utilkit_cli::run(&cli) {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
