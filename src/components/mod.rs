pub mod greeting;
pub mod scene;
pub mod shapes;
pub mod snowfall;
pub mod tree;
