use thiserror::Error;

/// Error types for game construction and coalition lookups
#[derive(Debug, Error)]
pub enum GameError {
    /// Characteristic function does not cover the full coalition lattice
    #[error(
        "characteristic function is not defined over a complete coalition lattice: {players} players require {expected} coalitions, found {found}"
    )]
    IncompleteCoalitionTable {
        players: usize,
        expected: usize,
        found: usize,
    },

    /// Same unordered coalition supplied under more than one key
    #[error("coalition {{{coalition}}} appears more than once after normalization")]
    DuplicateCoalition { coalition: String },

    /// Coalition references a player outside the player set
    #[error("player {player} is not part of this game")]
    UnknownPlayer { player: String },

    /// Player cap exceeded; coalition enumeration is exponential in player count
    #[error(
        "there are too many players ({count}); we limit to {limit} to keep the coalition table tractable"
    )]
    TooManyPlayers { count: usize, limit: usize },

    /// Malformed external input
    #[error("invalid characteristic function input: {0}")]
    InvalidInput(String),
}

/// Result type alias for game operations
pub type Result<T> = std::result::Result<T, GameError>;
