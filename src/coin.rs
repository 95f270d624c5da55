//! Monedas que acepta la maquina

/// Denominaciones reconocidas. Cualquier otro token no es una moneda.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coin {
    TenStotinki,
    TwentyStotinki,
    FiftyStotinki,
    OneLev,
}

impl Coin {
    pub const ALL: [Coin; 4] = [
        Coin::TenStotinki,
        Coin::TwentyStotinki,
        Coin::FiftyStotinki,
        Coin::OneLev,
    ];

    /// Devuelve la moneda que corresponde al token, o `None` si no se reconoce.
    pub fn from_token(token: &str) -> Option<Coin> {
        match token {
            "10st" => Some(Coin::TenStotinki),
            "20st" => Some(Coin::TwentyStotinki),
            "50st" => Some(Coin::FiftyStotinki),
            "1lv" => Some(Coin::OneLev),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Coin::TenStotinki => "10st",
            Coin::TwentyStotinki => "20st",
            Coin::FiftyStotinki => "50st",
            Coin::OneLev => "1lv",
        }
    }

    /// Valor en la unidad mas chica (stotinki)
    pub fn value(&self) -> u64 {
        match self {
            Coin::TenStotinki => 10,
            Coin::TwentyStotinki => 20,
            Coin::FiftyStotinki => 50,
            Coin::OneLev => 100,
        }
    }
}
