use crate::drink::Drink;

/// Pedido de un cliente: las monedas que inserta y las bebidas que pide, en ese orden.
#[derive(Debug, PartialEq)]
pub struct Order {
    pub id: usize,
    pub coins: Vec<String>,
    pub drinks: Vec<Drink>,
}

impl Order {
    pub fn new(id: usize, coins: Vec<String>, drinks: Vec<Drink>) -> Order {
        Order { id, coins, drinks }
    }
}
