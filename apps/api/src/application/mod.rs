pub mod recognize_image;
