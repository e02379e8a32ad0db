pub mod detections;
pub mod entity;
pub mod errors;
pub mod recognizer;
pub mod value_objects;
