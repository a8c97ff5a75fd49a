mod coordinates;
mod hit_testing;

pub use coordinates::Canvas;
pub use hit_testing::in_square;
