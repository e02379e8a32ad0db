pub mod rekognition_client;
