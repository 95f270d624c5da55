//! Maquina expendedora. Acepta monedas y despacha cafe o te.
use std::collections::HashMap;

use log::{debug, info};

use crate::{
    coin::Coin,
    constants::{COFFEE_STORAGE, TEA_STORAGE, VOLTAGE, WASTE_STORAGE, WATER_STORAGE},
    container::{Container, ContainerKind},
    drink::{Cup, Drink},
};

/// Motivo por el que no se despacho una bebida
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    InsufficientBalance { balance: u64, price: u64 },
    NotEnough(ContainerKind),
}

/// Estado de la maquina: monedas guardadas, saldo y contenedores.
pub struct VendingMachine {
    coins: HashMap<Coin, u64>,
    balance: u64,
    containers: HashMap<ContainerKind, Container>,
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl VendingMachine {
    pub fn new() -> VendingMachine {
        let coins = Coin::ALL.iter().map(|coin| (*coin, 0)).collect();

        let mut containers = HashMap::new();
        containers.insert(ContainerKind::Water, Container::new(WATER_STORAGE));
        containers.insert(ContainerKind::Coffee, Container::new(COFFEE_STORAGE));
        containers.insert(ContainerKind::Tea, Container::new(TEA_STORAGE));
        containers.insert(ContainerKind::Waste, Container::new(WASTE_STORAGE));

        VendingMachine {
            coins,
            balance: 0,
            containers,
        }
    }

    /// Guarda la moneda y suma su valor al saldo. Los tokens que no son monedas se ignoran.
    pub fn add_coin(&mut self, token: &str) {
        let coin = match Coin::from_token(token) {
            Some(coin) => coin,
            None => {
                debug!("[MACHINE] Ignored unknown coin {:?}", token);
                return;
            }
        };
        *self.coins.entry(coin).or_insert(0) += 1;
        self.balance += coin.value();
        debug!(
            "[MACHINE] Accepted {}, balance is {}",
            coin.token(),
            self.balance
        );
    }

    pub fn get_coffee(&mut self) -> Option<Cup> {
        self.dispense(Drink::Coffee).ok()
    }

    pub fn get_tea(&mut self) -> Option<Cup> {
        self.dispense(Drink::Tea).ok()
    }

    /// Prepara la bebida si hay saldo, ingrediente y agua suficientes.
    /// Se verifica todo antes de tocar el estado: o se descuenta todo o no cambia nada.
    pub fn dispense(&mut self, drink: Drink) -> Result<Cup, Rejection> {
        let recipe = drink.recipe();

        if let Err(rejection) = self.check_resources(drink) {
            info!("[MACHINE] Rejected {:?}: {:?}", drink, rejection);
            return Err(rejection);
        }

        self.balance -= recipe.price;
        self.container_mut(recipe.ingredient)
            .take(recipe.ingredient_quantity);
        self.container_mut(ContainerKind::Water).take(recipe.water);
        self.container_mut(ContainerKind::Waste)
            .deposit(recipe.waste);

        info!(
            "[MACHINE] Dispensed {:?}, balance is {}",
            drink, self.balance
        );
        Ok(Cup::new(drink))
    }

    fn check_resources(&self, drink: Drink) -> Result<(), Rejection> {
        let recipe = drink.recipe();
        if self.balance < recipe.price {
            return Err(Rejection::InsufficientBalance {
                balance: self.balance,
                price: recipe.price,
            });
        }
        // Alcanza con que quede algo del ingrediente
        if self.volume(recipe.ingredient) <= 0.0 {
            return Err(Rejection::NotEnough(recipe.ingredient));
        }
        if self.volume(ContainerKind::Water) < recipe.water {
            return Err(Rejection::NotEnough(ContainerKind::Water));
        }
        Ok(())
    }

    /// Esta maquina no da vuelto: el saldo queda para la proxima bebida.
    pub fn get_change(&self) {
        debug!(
            "[MACHINE] Change requested, keeping balance of {}",
            self.balance
        );
    }

    pub fn get_voltage(&self) -> u32 {
        VOLTAGE
    }

    pub fn get_volume_by_container(&self, name: &str) -> f64 {
        match ContainerKind::from_name(name) {
            Some(kind) => self.volume(kind),
            None => 0.0,
        }
    }

    pub fn get_number_of_coins(&self, token: &str) -> u64 {
        Coin::from_token(token)
            .map(|coin| self.coins_of(coin))
            .unwrap_or(0)
    }

    pub fn get_balance(&self) -> u64 {
        self.balance
    }

    pub fn coins_of(&self, coin: Coin) -> u64 {
        self.coins.get(&coin).copied().unwrap_or(0)
    }

    pub fn volume(&self, kind: ContainerKind) -> f64 {
        self.containers
            .get(&kind)
            .map(|container| container.remaining)
            .unwrap_or(0.0)
    }

    pub fn container(&self, kind: ContainerKind) -> Option<&Container> {
        self.containers.get(&kind)
    }

    fn container_mut(&mut self, kind: ContainerKind) -> &mut Container {
        self.containers
            .entry(kind)
            .or_insert_with(|| Container::new(0.0))
    }
}
