pub mod coin;
pub mod constants;
pub mod container;
pub mod drink;
pub mod errors;
pub mod order;
pub mod orders_reader;
pub mod statistics;
pub mod vending_machine;

use std::{env, process};

use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

use crate::{
    constants::DEFAULT_ORDERS_FILE,
    drink::Drink,
    errors::VendingMachineError,
    order::Order,
    orders_reader::read_orders,
    statistics::print_statistics,
    vending_machine::VendingMachine,
};

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("Could not start the logger: {}", err);
    }

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ORDERS_FILE.to_string());

    if let Err(err) = run(&path) {
        error!("Vending machine stopped: {:?}", err);
        process::exit(1);
    }
}

fn run(path: &str) -> Result<(), VendingMachineError> {
    let orders = read_orders(path)?;
    let mut machine = VendingMachine::new();
    for order in orders {
        serve_order(&mut machine, order);
        print_statistics(&machine);
    }
    Ok(())
}

fn serve_order(machine: &mut VendingMachine, order: Order) {
    info!("[ORDER {}] Inserting {:?}", order.id, order.coins);
    for coin in &order.coins {
        machine.add_coin(coin);
    }
    for drink in order.drinks {
        let cup = match drink {
            Drink::Coffee => machine.get_coffee(),
            Drink::Tea => machine.get_tea(),
        };
        match cup {
            Some(cup) => info!("[ORDER {}] Served a cup of {}", order.id, cup.content()),
            None => info!("[ORDER {}] Could not serve {:?}", order.id, drink),
        }
    }
    machine.get_change();
}
