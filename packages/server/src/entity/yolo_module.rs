use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "yolo_module")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    pub module_type: String, // backbone, neck, head, ...
    pub config_path: Option<String>,
    pub default_input_size: Option<String>,
    #[sea_orm(column_type = "Json", nullable)]
    pub performance_metrics: Option<serde_json::Value>,
    #[sea_orm(column_type = "Json", nullable)]
    pub config_schema: Option<serde_json::Value>,

    pub yolo_version_id: i32,
    #[sea_orm(belongs_to, from = "yolo_version_id", to = "id")]
    pub yolo_version: HasOne<super::yolo_version::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
