use colored::*;
use deckhand_common::config::Config;
use deckhand_common::error::StackError;
use deckhand_common::fail;
use deckhand_common::model::VpnReport;
use deckhand_core::orchestrator::ComposeCli;
use deckhand_core::probe::{ContainerProbe, DirectProbe};
use deckhand_core::vpn;

use crate::terminal::{colors, print};

pub async fn check_vpn(cfg: &Config) -> anyhow::Result<()> {
    let orchestrator = ComposeCli::new(cfg);
    let local = DirectProbe::new()?;
    let proxied = ContainerProbe::new(&orchestrator, cfg.vpn_container.clone());

    let report = match vpn::verify(&local, &proxied).await {
        Ok(report) => report,
        Err(err) => {
            if matches!(err, StackError::EgressNotMasked { .. }) {
                fail!(
                    "traffic from '{}' would leave over the local connection",
                    cfg.vpn_container
                );
                fail!("stop the stack before routing anything through it");
            }
            return Err(err.into());
        }
    };

    render(&report);
    Ok(())
}

fn render(report: &VpnReport) {
    print::set_key_width(&["Local IP", "Local country", "Proxied IP", "Proxied country"]);

    print::aligned_line("Local IP", report.local.ip.color(colors::IPV4_ADDR));
    print::aligned_line("Local country", country(&report.local_country));
    print::aligned_line("Proxied IP", report.proxied.ip.color(colors::IPV4_ADDR));
    print::aligned_line("Proxied country", country(&report.proxied_country));

    let masked: ColoredString = "is masked".bold().green();
    let verdict: String = format!("VPN Check Complete: proxied egress {}", masked);

    print::fat_separator();
    print::centerln(&verdict);
}

fn country(lookup: &Option<String>) -> ColoredString {
    match lookup {
        Some(country) => country.normal(),
        None => "unknown".dimmed(),
    }
}
