use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::entity::yolo_version;
use crate::error::AppError;
use crate::repository::WriteContract;

use super::shared::validate_name;

/// Body for `POST /yolo-versions`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateYoloVersionRequest {
    /// Unique version name.
    #[schema(example = "YOLOv5-test")]
    pub name: String,
    #[schema(example = "A test version of YOLOv5")]
    pub description: Option<String>,
    /// Model architecture as a YAML document. Stored verbatim.
    #[schema(example = "nc: 80\ndepth_multiple: 0.33\n")]
    pub architecture: Option<String>,
}

/// Body for `PUT /yolo-versions/{id}`. Every field is replaced.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateYoloVersionRequest {
    #[schema(example = "YOLOv5s")]
    pub name: String,
    pub description: Option<String>,
    pub architecture: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct YoloVersionResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "YOLOv5-test")]
    pub name: String,
    pub description: Option<String>,
    pub architecture: Option<String>,
}

impl From<yolo_version::Model> for YoloVersionResponse {
    fn from(m: yolo_version::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            architecture: m.architecture,
        }
    }
}

impl CreateYoloVersionRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_name(&self.name, "Name")
    }

    /// Name as it will be stored and compared for uniqueness.
    pub fn normalized_name(&self) -> &str {
        self.name.trim()
    }
}

impl UpdateYoloVersionRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_name(&self.name, "Name")
    }
}

fn write_fields(
    active: &mut yolo_version::ActiveModel,
    name: String,
    description: Option<String>,
    architecture: Option<String>,
) {
    active.name = Set(name.trim().to_string());
    active.description = Set(description);
    active.architecture = Set(architecture);
}

impl WriteContract<yolo_version::ActiveModel> for CreateYoloVersionRequest {
    fn write(self, active: &mut yolo_version::ActiveModel) {
        write_fields(active, self.name, self.description, self.architecture);
    }
}

impl WriteContract<yolo_version::ActiveModel> for UpdateYoloVersionRequest {
    fn write(self, active: &mut yolo_version::ActiveModel) {
        write_fields(active, self.name, self.description, self.architecture);
    }
}
