use log::info;

use crate::{coin::Coin, container::ContainerKind, vending_machine::VendingMachine};

pub fn print_statistics(machine: &VendingMachine) {
    info!("{}", statistics_line(machine));
}

pub fn statistics_line(machine: &VendingMachine) -> String {
    let mut statistics = format!(
        "[STATISTICS] Balance={} | Voltage={} | Coins=",
        machine.get_balance(),
        machine.get_voltage()
    );
    add_coins_to_statistics_string(machine, &mut statistics);
    statistics.push_str("| Container=(remaining, consumed) |");
    add_containers_to_statistics_string(machine, &mut statistics);
    statistics
}

fn add_coins_to_statistics_string(machine: &VendingMachine, statistics: &mut String) {
    for coin in Coin::ALL {
        statistics.push_str(&format!("{}:{} ", coin.token(), machine.coins_of(coin)));
    }
}

fn add_containers_to_statistics_string(machine: &VendingMachine, statistics: &mut String) {
    for kind in ContainerKind::ALL {
        if let Some(container) = machine.container(kind) {
            statistics.push_str(&format!(
                " {}=({},{}) ",
                kind.name(),
                container.remaining,
                container.consumed
            ));
        }
    }
}
