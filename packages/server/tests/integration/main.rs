mod yolo_module;
