pub mod triangulation;

#[doc(inline)]
pub use triangulation::{triangulate, Triangulate, Triangulation, Triangulator};
