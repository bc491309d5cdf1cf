use sea_orm::Set;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entity::yolo_module;
use crate::error::AppError;
use crate::repository::WriteContract;

use super::shared::validate_name;

/// Fields shared by the create and update bodies of a YOLO module.
///
/// Both operations take the full shape; an update replaces every field.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct YoloModuleRequest {
    #[schema(example = "CSPDarknet53")]
    pub name: String,
    /// Free-text category such as `backbone`, `neck` or `head`.
    #[schema(example = "backbone")]
    pub module_type: String,
    #[schema(example = "configs/backbone/cspdarknet53.yaml")]
    pub config_path: Option<String>,
    /// Owning YOLO version.
    #[schema(example = 1)]
    pub yolo_version_id: i32,
    #[schema(example = "640x640")]
    pub default_input_size: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub performance_metrics: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub config_schema: Option<Value>,
}

pub type CreateYoloModuleRequest = YoloModuleRequest;
pub type UpdateYoloModuleRequest = YoloModuleRequest;

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct YoloModuleResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "CSPDarknet53")]
    pub name: String,
    #[schema(example = "backbone")]
    pub module_type: String,
    pub config_path: Option<String>,
    #[schema(example = 1)]
    pub yolo_version_id: i32,
    pub default_input_size: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub performance_metrics: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub config_schema: Option<Value>,
}

impl From<yolo_module::Model> for YoloModuleResponse {
    fn from(m: yolo_module::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            module_type: m.module_type,
            config_path: m.config_path,
            yolo_version_id: m.yolo_version_id,
            default_input_size: m.default_input_size,
            performance_metrics: m.performance_metrics,
            config_schema: m.config_schema,
        }
    }
}

impl YoloModuleRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_name(&self.name, "Name")?;
        if self.module_type.trim().is_empty() {
            return Err(AppError::Validation("Module type must not be empty".into()));
        }
        Ok(())
    }
}

impl WriteContract<yolo_module::ActiveModel> for YoloModuleRequest {
    fn write(self, active: &mut yolo_module::ActiveModel) {
        active.name = Set(self.name.trim().to_string());
        active.module_type = Set(self.module_type.trim().to_string());
        active.config_path = Set(self.config_path);
        active.yolo_version_id = Set(self.yolo_version_id);
        active.default_input_size = Set(self.default_input_size);
        active.performance_metrics = Set(self.performance_metrics);
        active.config_schema = Set(self.config_schema);
    }
}
