//! WebAssembly bindings for the tic-tac-toe engine.
//!
//! This module exposes the session API to JavaScript through wasm-bindgen.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::game::Session;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed session wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmSession {
    session: Session,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmSession {
    /// Create a fresh session with placeholder player names
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmSession {
        WasmSession {
            session: Session::new(),
        }
    }

    /// Start a game, returns false when either name is empty
    pub fn launch(&mut self, player1: &str, player2: &str) -> bool {
        self.session.launch(player1, player2)
    }

    /// Attempt a move at a cell index, returns whether it was accepted
    #[wasm_bindgen(js_name = attemptMove)]
    pub fn attempt_move(&mut self, index: usize) -> bool {
        self.session.attempt_move(index).is_ok()
    }

    /// Check if a cell index holds a mark
    #[wasm_bindgen(js_name = isFilled)]
    pub fn is_filled(&self, index: usize) -> bool {
        self.session.is_filled(index)
    }

    /// Get the mark at a cell index, or null for an empty cell
    #[wasm_bindgen(js_name = symbolAt)]
    pub fn symbol_at(&self, index: usize) -> Option<String> {
        self.session.symbol_at(index).map(str::to_string)
    }

    /// Clear the board and start over with the same players
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Check if the game has ended
    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    /// Get the winner's mark (if the game finished with a win)
    #[wasm_bindgen(js_name = getWinner)]
    pub fn get_winner(&self) -> Option<String> {
        self.session.winner().map(|player| player.mark().to_string())
    }

    /// Get the current session snapshot as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        serde_json::to_string(&self.session.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_wasm_module_compiles() {
        // This test just verifies the module compiles
        assert!(true);
    }
}
