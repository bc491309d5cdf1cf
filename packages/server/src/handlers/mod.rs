pub mod root;
pub mod yolo_module;
pub mod yolo_version;
