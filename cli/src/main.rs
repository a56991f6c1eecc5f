mod commands;
mod terminal;

use commands::{CommandLine, Commands, backup, check_vpn, destroy, restart, start, stop};
use deckhand_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        stack_dir: commands.stack_dir,
        vpn_container: commands.vpn_container,
    };

    match commands.command {
        Commands::Start => {
            print::header("starting the stack");
            start::start(&cfg).await
        }
        Commands::Stop => {
            print::header("stopping the stack");
            stop::stop(&cfg).await
        }
        Commands::Restart => {
            print::header("restarting the stack");
            restart::restart(&cfg).await
        }
        Commands::Destroy => {
            print::header("destroying the stack");
            destroy::destroy(&cfg).await
        }
        Commands::Backup { destination } => {
            print::header("backing up the stack");
            backup::backup(&cfg, destination)
        }
        Commands::CheckVpn => {
            print::header("checking vpn egress");
            check_vpn::check_vpn(&cfg).await
        }
    }
}
