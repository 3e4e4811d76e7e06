pub mod movie;

pub use movie::{MovieFilter, MoviePatch, NewMovie};
