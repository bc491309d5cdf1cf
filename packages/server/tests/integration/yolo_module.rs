use serde_json::json;

use crate::common::{TestApp, routes};

mod module_creation {
    use super::*;

    #[tokio::test]
    async fn create_returns_the_stored_module() {
        let app = TestApp::spawn().await;
        let version_id = app.create_version("YOLOv5").await;

        let res = app
            .post(
                routes::YOLO_MODULES,
                &json!({
                    "name": "CSPDarknet53",
                    "module_type": "backbone",
                    "config_path": "configs/backbone.yaml",
                    "yolo_version_id": version_id,
                    "performance_metrics": {"mAP50": 0.56, "latency_ms": 6.4},
                }),
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["name"], "CSPDarknet53");
        assert_eq!(res.body["module_type"], "backbone");
        assert_eq!(res.body["config_path"], "configs/backbone.yaml");
        assert_eq!(res.body["yolo_version_id"], version_id);
        assert_eq!(res.body["performance_metrics"]["latency_ms"], 6.4);
        assert_eq!(res.body["config_schema"], json!(null));

        let fetched = app.get(&routes::yolo_module(res.id())).await;
        assert_eq!(fetched.status, 200);
        assert_eq!(fetched.body, res.body);
    }

    #[tokio::test]
    async fn module_names_need_not_be_unique() {
        let app = TestApp::spawn().await;
        let version_id = app.create_version("YOLOv5").await;

        let first = app.create_module(version_id, "Detect", "head").await;
        let second = app.create_module(version_id, "Detect", "head").await;
        assert_ne!(first, second);

        let list = app.get(routes::YOLO_MODULES).await;
        assert_eq!(list.names(), vec!["Detect", "Detect"]);
    }

    #[tokio::test]
    async fn module_for_missing_version_is_a_conflict() {
        let app = TestApp::spawn().await;
        app.create_version("YOLOv5").await;

        let res = app
            .post(
                routes::YOLO_MODULES,
                &json!({"name": "Detect", "module_type": "head", "yolo_version_id": 999}),
            )
            .await;
        assert_eq!(res.status, 409, "{}", res.text);
        assert_eq!(res.body["code"], "CONFLICT");

        let list = app.get(routes::YOLO_MODULES).await;
        assert_eq!(list.body, json!([]));
    }

    #[tokio::test]
    async fn missing_module_type_is_a_validation_error() {
        let app = TestApp::spawn().await;
        let version_id = app.create_version("YOLOv5").await;

        let res = app
            .post(
                routes::YOLO_MODULES,
                &json!({"name": "PANet", "yolo_version_id": version_id}),
            )
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");

        let list = app.get(routes::YOLO_MODULES).await;
        assert_eq!(list.body, json!([]));
    }
}

mod module_crud {
    use super::*;

    #[tokio::test]
    async fn list_pages_in_insertion_order() {
        let app = TestApp::spawn().await;
        let version_id = app.create_version("YOLOv5").await;
        for (name, kind) in [("CSP", "backbone"), ("PAN", "neck"), ("Detect", "head")] {
            app.create_module(version_id, name, kind).await;
        }

        let res = app.get("/api/v1/yolo-modules?skip=1&limit=1").await;
        assert_eq!(res.status, 200);
        assert_eq!(res.names(), vec!["PAN"]);
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let app = TestApp::spawn().await;
        let version_id = app.create_version("YOLOv5").await;
        let id = app.create_module(version_id, "PAN", "neck").await;

        let res = app
            .put(
                &routes::yolo_module(id),
                &json!({
                    "name": "BiFPN",
                    "module_type": "neck",
                    "yolo_version_id": version_id,
                    "default_input_size": "640x640",
                }),
            )
            .await;
        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["id"], id);
        assert_eq!(res.body["name"], "BiFPN");
        assert_eq!(res.body["default_input_size"], "640x640");
        assert_eq!(res.body["config_path"], json!(null));
    }

    #[tokio::test]
    async fn delete_returns_last_state_and_removes_record() {
        let app = TestApp::spawn().await;
        let version_id = app.create_version("YOLOv5").await;
        let id = app.create_module(version_id, "Detect", "head").await;

        let before = app.get(&routes::yolo_module(id)).await;
        let deleted = app.delete(&routes::yolo_module(id)).await;
        assert_eq!(deleted.status, 200, "{}", deleted.text);
        assert_eq!(deleted.body, before.body);

        let after = app.get(&routes::yolo_module(id)).await;
        assert_eq!(after.status, 404);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let app = TestApp::spawn().await;
        let path = routes::yolo_module(77);

        let get = app.get(&path).await;
        assert_eq!(get.status, 404);
        assert!(get.body["message"].as_str().unwrap().contains("YOLO module"));

        let put = app
            .put(
                &path,
                &json!({"name": "x", "module_type": "head", "yolo_version_id": 1}),
            )
            .await;
        assert_eq!(put.status, 404);

        let delete = app.delete(&path).await;
        assert_eq!(delete.status, 404);
    }

    #[tokio::test]
    async fn non_numeric_id_is_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app.get("/api/v1/yolo-modules/not-a-number").await;
        assert_eq!(res.status, 400, "{}", res.text);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn oversized_limit_is_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app
            .get("/api/v1/yolo-modules?limit=18446744073709551615")
            .await;
        assert_eq!(res.status, 400, "{}", res.text);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}
