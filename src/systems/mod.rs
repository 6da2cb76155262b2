pub mod camera;
pub mod export;
pub mod grid;
pub mod interaction;
pub mod lighting;
pub mod mesh;
pub mod ui;
