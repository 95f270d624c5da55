//! Bebidas que prepara la maquina
use serde::Deserialize;

use crate::{
    constants::{COFFEE_PER_CUP, COFFEE_PRICE, TEA_PER_CUP, TEA_PRICE, WATER_PER_CUP},
    container::ContainerKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Drink {
    Coffee,
    Tea,
}

/// Lo que hace falta para preparar una bebida y lo que deja en los residuos
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub price: u64,
    pub ingredient: ContainerKind,
    pub ingredient_quantity: f64,
    pub water: f64,
    pub waste: f64,
}

impl Drink {
    pub fn recipe(&self) -> Recipe {
        match self {
            Drink::Coffee => Recipe {
                price: COFFEE_PRICE,
                ingredient: ContainerKind::Coffee,
                ingredient_quantity: COFFEE_PER_CUP,
                water: WATER_PER_CUP,
                waste: COFFEE_PER_CUP,
            },
            Drink::Tea => Recipe {
                price: TEA_PRICE,
                ingredient: ContainerKind::Tea,
                ingredient_quantity: TEA_PER_CUP,
                water: WATER_PER_CUP,
                waste: TEA_PER_CUP,
            },
        }
    }
}

/// Vaso servido. Solo se crea cuando la maquina despacha una bebida.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cup {
    drink: Drink,
}

impl Cup {
    pub(crate) fn new(drink: Drink) -> Cup {
        Cup { drink }
    }

    pub fn drink(&self) -> Drink {
        self.drink
    }

    pub fn content(&self) -> &'static str {
        match self.drink {
            Drink::Coffee => "coffee",
            Drink::Tea => "tea",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_label_cups_by_content() {
        assert_eq!("coffee", Cup::new(Drink::Coffee).content());
        assert_eq!("tea", Cup::new(Drink::Tea).content());
    }

    #[test]
    fn should_use_the_matching_ingredient_in_each_recipe() {
        let coffee = Drink::Coffee.recipe();
        assert_eq!(20, coffee.price);
        assert_eq!(ContainerKind::Coffee, coffee.ingredient);
        assert_eq!(10.0, coffee.ingredient_quantity);
        assert_eq!(200.0, coffee.water);
        assert_eq!(10.0, coffee.waste);

        let tea = Drink::Tea.recipe();
        assert_eq!(10, tea.price);
        assert_eq!(ContainerKind::Tea, tea.ingredient);
        assert_eq!(5.0, tea.ingredient_quantity);
        assert_eq!(200.0, tea.water);
        assert_eq!(5.0, tea.waste);
    }

    #[test]
    fn should_deserialize_lowercase_drink_names() {
        let drinks: Vec<Drink> = serde_json::from_str(r#"["coffee", "tea"]"#).unwrap();
        assert_eq!(vec![Drink::Coffee, Drink::Tea], drinks);
        assert_eq!(true, serde_json::from_str::<Drink>(r#""milk""#).is_err());
    }
}
