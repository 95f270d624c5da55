//! Parametros de configuracion de la maquina expendedora

/// Capacidad inicial de agua
pub const WATER_STORAGE: f64 = 5000.0;

/// Capacidad inicial de cafe
pub const COFFEE_STORAGE: f64 = 100.0;

/// Capacidad inicial de te
pub const TEA_STORAGE: f64 = 50.0;

/// Los residuos arrancan vacios
pub const WASTE_STORAGE: f64 = 0.0;

/// Precio del cafe, en stotinki
pub const COFFEE_PRICE: u64 = 20;

/// Precio del te, en stotinki
pub const TEA_PRICE: u64 = 10;

/// Cafe que se usa por vaso. Es tambien lo que va a parar a los residuos.
pub const COFFEE_PER_CUP: f64 = 10.0;

/// Te que se usa por vaso. Es tambien lo que va a parar a los residuos.
pub const TEA_PER_CUP: f64 = 5.0;

/// Agua que se usa en cualquier bebida
pub const WATER_PER_CUP: f64 = 200.0;

/// Tension de alimentacion de la maquina
pub const VOLTAGE: u32 = 220;

/// Archivo de pedidos que se lee si no se indica otro por linea de comandos
pub const DEFAULT_ORDERS_FILE: &str = "orders.json";
