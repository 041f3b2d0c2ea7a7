pub mod archive;
pub mod board;
pub mod roster;

pub use archive::Archive;
pub use board::Board;
pub use roster::Roster;
