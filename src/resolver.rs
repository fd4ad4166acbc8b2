//! Seam for the external natural-language move resolver

use crate::game::GameStateSnapshot;

/// Turns a free-text move description into a notation token.
///
/// Implemented outside the engine (the production resolver wraps a language
/// model); the engine defines the seam and never assumes an implementation is
/// present. Callers typically run [`classify`] first and only resolve inputs
/// tagged [`NeedsResolution`].
///
/// [`classify`]: crate::notation::classify
/// [`NeedsResolution`]: crate::notation::MoveInput::NeedsResolution
pub trait MoveResolver {
    /// Best-guess token for `text` given the current game state, or `None`
    /// when the text cannot be understood as a move.
    fn resolve(&self, text: &str, snapshot: &GameStateSnapshot) -> Option<String>;
}
