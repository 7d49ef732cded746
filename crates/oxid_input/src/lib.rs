use bitflags::bitflags;
use minifb::{Key, Window};
use std::collections::HashMap;

// ============================================================================
//  DEFINICIÓN DEL KEYPAD (LAYOUT DEL REGISTRO KEYINPUT)
// ============================================================================

bitflags! {
    /// Los bits siguen el orden del registro de botones del hardware,
    /// así `KeyInput` puede decodificar el valor crudo sin tablas.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GamepadButtons: u16 {
        const A        = 1 << 0; // Botón principal (Action/Confirm)
        const B        = 1 << 1; // Botón secundario (Back/Cancel)
        const SELECT   = 1 << 2;
        const START    = 1 << 3;
        const RIGHT    = 1 << 4;
        const LEFT     = 1 << 5;
        const UP       = 1 << 6;
        const DOWN     = 1 << 7;
        const R        = 1 << 8;
        const L        = 1 << 9;
    }
}

// ============================================================================
//  TRAIT PARA SISTEMAS (CONTRACT)
// ============================================================================

/// Consulta síncrona y no bloqueante del estado de los botones.
/// Se consulta una vez por tick.
pub trait InputPort {
    fn is_pressed(&self, button: GamepadButtons) -> bool;
}

// ============================================================================
//  REGISTRO CRUDO (ACTIVE LOW)
// ============================================================================

/// Snapshot del registro de botones. En el hardware un bit en 0 significa
/// "presionado", así que guardamos el valor tal cual y lo invertimos al consultar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    raw: u16,
}

impl KeyInput {
    /// Máscara de los 10 bits que el registro define
    pub const MASK: u16 = 0x03FF;

    /// Ningún botón presionado (todos los bits en 1)
    pub const RELEASED: Self = Self { raw: Self::MASK };

    pub fn from_register(raw: u16) -> Self {
        Self { raw: raw & Self::MASK }
    }

    /// Construye el valor que el hardware reportaría con `held` presionados
    pub fn from_held(held: GamepadButtons) -> Self {
        Self { raw: !held.bits() & Self::MASK }
    }

    pub fn raw(&self) -> u16 {
        self.raw
    }

    /// Botones presionados en lógica positiva
    pub fn held(&self) -> GamepadButtons {
        GamepadButtons::from_bits_truncate(!self.raw & Self::MASK)
    }
}

impl Default for KeyInput {
    fn default() -> Self {
        Self::RELEASED
    }
}

impl InputPort for KeyInput {
    fn is_pressed(&self, button: GamepadButtons) -> bool {
        // Bit en cero -> presionado
        (self.raw & button.bits()) == 0
    }
}

// ============================================================================
//  GESTOR DE INPUT (INPUT MANAGER)
// ============================================================================

pub struct OxidInput {
    // Estado actual del keypad virtual
    pub player1: GamepadButtons,

    // Configuración de Mapeo (Teclado -> Botón Virtual)
    key_map_p1: HashMap<Key, GamepadButtons>,
}

impl OxidInput {
    /// Crea un nuevo gestor de entrada con un mapeo por defecto inteligente
    pub fn new() -> Self {
        let mut input = Self {
            player1: GamepadButtons::empty(),
            key_map_p1: HashMap::new(),
        };
        input.load_default_mapping();
        input
    }

    /// Carga un esquema de controles estándar (Flechas + W/S)
    fn load_default_mapping(&mut self) {
        // --- Jugador 1 (Teclado: Flechas + Z/X/Enter) ---
        self.map_p1(Key::Up, GamepadButtons::UP);
        self.map_p1(Key::Down, GamepadButtons::DOWN);
        self.map_p1(Key::Left, GamepadButtons::LEFT);
        self.map_p1(Key::Right, GamepadButtons::RIGHT);

        // Alternativa WASD para la paleta
        self.map_p1(Key::W, GamepadButtons::UP);
        self.map_p1(Key::S, GamepadButtons::DOWN);

        self.map_p1(Key::X, GamepadButtons::A);
        self.map_p1(Key::Z, GamepadButtons::B);
        self.map_p1(Key::A, GamepadButtons::L);
        self.map_p1(Key::D, GamepadButtons::R);

        self.map_p1(Key::Enter, GamepadButtons::START);
        self.map_p1(Key::RightShift, GamepadButtons::SELECT);
    }

    /// Asocia una tecla física a un botón virtual del Jugador 1
    pub fn map_p1(&mut self, key: Key, button: GamepadButtons) {
        self.key_map_p1.insert(key, button);
    }

    /// Traduce un conjunto de teclas físicas a botones virtuales
    pub fn apply_keys(&mut self, keys: &[Key]) {
        self.player1 = GamepadButtons::empty();
        for key in keys {
            if let Some(btn) = self.key_map_p1.get(key) {
                self.player1.insert(*btn);
            }
        }
    }

    /// El corazón del Input: Lee la ventana física y actualiza los estados virtuales
    pub fn update(&mut self, window: &Window) {
        // window.get_keys() retorna Vec<Key> directamente en minifb 0.24
        let keys = window.get_keys();
        self.apply_keys(&keys);
    }

    /// Snapshot en el formato del registro de hardware
    pub fn key_input(&self) -> KeyInput {
        KeyInput::from_held(self.player1)
    }
}

impl Default for OxidInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPort for OxidInput {
    fn is_pressed(&self, button: GamepadButtons) -> bool {
        self.player1.contains(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_input_is_active_low() {
        // DOWN (bit 7) en cero, el resto en uno
        let reg = KeyInput::from_register(0x03FF & !(1 << 7));
        assert!(reg.is_pressed(GamepadButtons::DOWN));
        assert!(!reg.is_pressed(GamepadButtons::UP));
        assert_eq!(reg.held(), GamepadButtons::DOWN);
    }

    #[test]
    fn test_key_input_released_by_default() {
        let reg = KeyInput::default();
        assert_eq!(reg.raw(), 0x03FF);
        assert!(reg.held().is_empty());
        assert!(!reg.is_pressed(GamepadButtons::A));
    }

    #[test]
    fn test_from_held_round_trips_through_register() {
        let held = GamepadButtons::UP | GamepadButtons::START;
        let reg = KeyInput::from_held(held);
        assert_eq!(reg.raw() & (1 << 6), 0);
        assert_eq!(reg.raw() & (1 << 3), 0);
        assert_eq!(KeyInput::from_register(reg.raw()).held(), held);
    }

    #[test]
    fn test_keyboard_mapping() {
        let mut input = OxidInput::new();
        input.apply_keys(&[Key::Down, Key::W, Key::F1]);
        assert!(input.is_pressed(GamepadButtons::DOWN));
        assert!(input.is_pressed(GamepadButtons::UP));
        assert!(!input.is_pressed(GamepadButtons::A));

        input.apply_keys(&[]);
        assert!(input.player1.is_empty());
        assert_eq!(input.key_input(), KeyInput::RELEASED);
    }
}
