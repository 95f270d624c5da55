//! Lector del archivo de pedidos
use log::{debug, error, info};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{drink::Drink, errors::VendingMachineError, order::Order};

#[derive(Deserialize, Debug)]
struct JsonOrder {
    #[serde(default)]
    coins: Vec<String>,
    #[serde(default)]
    drinks: Vec<Drink>,
}

#[derive(Deserialize)]
struct OrdersConfiguration {
    orders: Vec<JsonOrder>,
}

fn read_orders_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<JsonOrder>, VendingMachineError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let orders_config: OrdersConfiguration = serde_json::from_reader(reader)?;
    Ok(orders_config.orders)
}

fn to_orders(json_orders: Vec<JsonOrder>) -> Vec<Order> {
    let orders: Vec<Order> = json_orders
        .into_iter()
        .enumerate()
        .map(|(id, order)| {
            debug!("[READER] Added order {}", id);
            Order::new(id, order.coins, order.drinks)
        })
        .collect();
    info!("[READER] Read {} orders", orders.len());
    orders
}

/// Lee los pedidos del archivo y les asigna ids consecutivos desde 0.
pub fn read_orders<P: AsRef<Path>>(path: P) -> Result<Vec<Order>, VendingMachineError> {
    match read_orders_from_file(path) {
        Ok(json_orders) => Ok(to_orders(json_orders)),
        Err(err) => {
            error!("[READER] Could not read the orders: {:?}", err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use super::*;

    fn write_orders_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.json", name, std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn should_read_orders_with_sequential_ids() {
        let path = write_orders_file(
            "orders-ok",
            r#"{ "orders": [
                { "coins": ["1lv", "3lv"], "drinks": ["coffee", "tea"] },
                { "coins": ["10st"] },
                { "drinks": ["tea"] }
            ] }"#,
        );
        let orders = read_orders(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(3, orders.len());
        assert_eq!(
            Order::new(
                0,
                vec!["1lv".to_string(), "3lv".to_string()],
                vec![Drink::Coffee, Drink::Tea]
            ),
            orders[0]
        );
        assert_eq!(Order::new(1, vec!["10st".to_string()], Vec::new()), orders[1]);
        assert_eq!(Order::new(2, Vec::new(), vec![Drink::Tea]), orders[2]);
    }

    #[test]
    fn should_fail_when_the_file_does_not_exist() {
        let result = read_orders("this-file-does-not-exist.json");
        assert_eq!(
            true,
            matches!(result, Err(VendingMachineError::FileReaderError))
        );
    }

    #[test]
    fn should_fail_with_an_unknown_drink() {
        let path = write_orders_file(
            "orders-bad-drink",
            r#"{ "orders": [ { "coins": ["1lv"], "drinks": ["milk"] } ] }"#,
        );
        let result = read_orders(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(
            true,
            matches!(result, Err(VendingMachineError::InvalidOrdersFile))
        );
    }
}
