mod coordinates;
mod place;
mod trip;

pub use coordinates::Coordinates;
pub use place::Place;
pub use trip::Trip;
