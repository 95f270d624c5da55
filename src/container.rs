//! Contenedores de la maquina

/// Nombre de cada contenedor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Water,
    Coffee,
    Tea,
    Waste,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 4] = [
        ContainerKind::Water,
        ContainerKind::Coffee,
        ContainerKind::Tea,
        ContainerKind::Waste,
    ];

    pub fn from_name(name: &str) -> Option<ContainerKind> {
        match name {
            "water" => Some(ContainerKind::Water),
            "coffee" => Some(ContainerKind::Coffee),
            "tea" => Some(ContainerKind::Tea),
            "waste" => Some(ContainerKind::Waste),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ContainerKind::Water => "water",
            ContainerKind::Coffee => "coffee",
            ContainerKind::Tea => "tea",
            ContainerKind::Waste => "waste",
        }
    }
}

/// Cantidad que queda en un contenedor y cuanto se movio de el.
/// Para los ingredientes `consumed` es lo que se uso; para los residuos es lo que se deposito.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub remaining: f64,
    pub consumed: f64,
}

impl Container {
    pub fn new(initial_capacity: f64) -> Container {
        Container {
            remaining: initial_capacity,
            consumed: 0.0,
        }
    }

    pub fn take(&mut self, quantity: f64) {
        self.remaining -= quantity;
        self.consumed += quantity;
    }

    pub fn deposit(&mut self, quantity: f64) {
        self.remaining += quantity;
        self.consumed += quantity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_a_container_with_nothing_consumed() {
        let container = Container::new(100.0);
        assert_eq!(100.0, container.remaining);
        assert_eq!(0.0, container.consumed);
    }

    #[test]
    fn should_take_from_a_container() {
        let mut container = Container::new(100.0);
        container.take(10.0);
        assert_eq!(90.0, container.remaining);
        assert_eq!(10.0, container.consumed);
    }

    #[test]
    fn should_deposit_into_a_container() {
        let mut container = Container::new(0.0);
        container.deposit(5.0);
        container.deposit(10.0);
        assert_eq!(15.0, container.remaining);
        assert_eq!(15.0, container.consumed);
    }

    #[test]
    fn should_map_names_to_kinds() {
        for kind in ContainerKind::ALL {
            assert_eq!(Some(kind), ContainerKind::from_name(kind.name()));
        }
        assert_eq!(None, ContainerKind::from_name("milk"));
    }
}
