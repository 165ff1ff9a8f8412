use crate::{
    libs::{
        config::{parse_cap_arg, Config},
        dashboard::{check_weekly_target, CapacityStatus, Dashboard, Priority},
        messages::Message,
        store::RecordStore,
        view::View,
    },
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Weekly target in hours; overrides the configured target
    #[arg(short, long, value_parser = parse_cap_arg)]
    cap: Option<f64>,
}

pub fn cmd(args: DashboardArgs) -> Result<()> {
    let store = RecordStore::open()?;
    let cap = match args.cap {
        Some(cap) => Some(cap),
        None => Config::read()?.weekly_cap,
    };

    let stats = Dashboard::compute(store.list());
    msg_print!(Message::DashboardHeader, true);
    View::dashboard(&stats);

    if let Some(status) = check_weekly_target(cap, stats.total_duration) {
        let message = match status {
            CapacityStatus::Remaining(hours) => Message::HoursRemaining(hours),
            CapacityStatus::Exceeded(hours) => Message::TargetExceeded(hours),
        };
        match status.priority() {
            Priority::Polite => msg_info!(message),
            Priority::Assertive => msg_warning!(message),
        }
    }

    Ok(())
}
