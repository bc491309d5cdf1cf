use sea_orm::{ConnectionTrait, DbErr};
use tracing::info;

use crate::models::yolo_version::CreateYoloVersionRequest;
use crate::repository::YoloVersions;

/// YOLO versions seeded on startup: `(name, description, architecture)`.
const DEFAULT_VERSIONS: &[(&str, &str, &str)] = &[(
    "YOLOv5-test",
    "A test version of YOLOv5 with a full YAML architecture.",
    YOLOV5_TEST_YAML,
)];

const YOLOV5_TEST_YAML: &str = r#"# Ultralytics YOLO 🚀, AGPL-3.0 license
# YOLOv5-P5 640-resolution model configuration for COCO dataset

# Parameters
nc: 80  # number of classes
depth_multiple: 0.33  # model depth multiple
width_multiple: 0.50  # layer channel multiple
anchors:
  - [10,13, 16,30, 33,23]  # P3/8
  - [30,61, 62,45, 59,119]  # P4/16
  - [116,90, 156,198, 373,326]  # P5/32

# YOLOv5 v6.0 backbone
backbone:
  # [from, number, module, args]
  [[-1, 1, Conv, [64, 6, 2, 2]],  # 0-P1/2
   [-1, 1, Conv, [128, 3, 2]],  # 1-P2/4
   [-1, 3, C3, [128]],
   [-1, 1, Conv, [256, 3, 2]],  # 3-P3/8
   [-1, 6, C3, [256]],
   [-1, 1, Conv, [512, 3, 2]],  # 5-P4/16
   [-1, 9, C3, [512]],
   [-1, 1, Conv, [1024, 3, 2]],  # 7-P5/32
   [-1, 3, C3, [1024]],
   [-1, 1, SPPF, [1024, 5]],  # 9
  ]

# YOLOv5 v6.0 head
head:
  [[-1, 1, Conv, [512, 1, 1]],
   [-1, 1, nn.Upsample, [None, 2, 'nearest']],
   [[-1, 6], 1, Concat, [1]],  # cat backbone P4
   [-1, 3, C3, [512, False]],  # 13

   [-1, 1, Conv, [256, 1, 1]],
   [-1, 1, nn.Upsample, [None, 2, 'nearest']],
   [[-1, 4], 1, Concat, [1]],  # cat backbone P3
   [-1, 3, C3, [256, False]],  # 17 (P3/8-small)

   [-1, 1, Conv, [256, 3, 2]],
   [[-1, 14], 1, Concat, [1]],  # cat head P4
   [-1, 3, C3, [512, False]],  # 20 (P4/16-medium)

   [-1, 1, Conv, [512, 3, 2]],
   [[-1, 10], 1, Concat, [1]],  # cat head P5
   [-1, 3, C3, [1024, False]],  # 23 (P5/32-large)

   [[17, 20, 23], 1, Detect, [nc, anchors]],  # Detect(P3, P4, P5)
  ]
"#;

/// Insert every default YOLO version whose name is not taken yet.
///
/// Safe to run on every startup. Returns how many versions were created.
pub async fn seed_yolo_versions<C: ConnectionTrait>(db: &C) -> Result<u32, DbErr> {
    let mut inserted = 0u32;
    for &(name, description, architecture) in DEFAULT_VERSIONS {
        if YoloVersions::get_by_name(db, name).await?.is_some() {
            info!("{name} version already exists");
            continue;
        }

        YoloVersions::create(
            db,
            CreateYoloVersionRequest {
                name: name.to_string(),
                description: Some(description.to_string()),
                architecture: Some(architecture.to_string()),
            },
        )
        .await?;
        info!("{name} version created");
        inserted += 1;
    }

    if inserted > 0 {
        info!("Seeded {} new YOLO versions", inserted);
    }

    Ok(inserted)
}
