// Service exports
pub mod deck;

pub use deck::{default_deck, load_deck, load_queue, parse_deck, DeckError, DeckFormat};
