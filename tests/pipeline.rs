// 该文件是 Chuangjian （床检） 项目的一部分。
// tests/pipeline.rs - 检测到布点的端到端测试
//
// 本文件根据 Apache 许可证第 2.0 版（以下简称“许可证”）授权使用；
// 除非遵守该许可证条款，否则您不得使用本文件。
// 您可通过以下网址获取许可证副本：
// http://www.apache.org/licenses/LICENSE-2.0
// 除非适用法律要求或书面同意，根据本许可协议分发的软件均按“原样”提供，
// 不附带任何形式的明示或暗示的保证或条件。
// 有关许可权限与限制的具体条款，请参阅本许可协议。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, Wareless Group

use std::io::Write;

use chuangjian::{
  FromUrl,
  frame::RgbaFrame,
  host::DetectorHost,
  model::{DecodeConfig, OutputLayout, ReplayModelBuilder},
  pin::{REPEAT_CORNERS_SUFFIX, generate_pins},
  task::Inspection,
};
use url::Url;

const INPUT_SIZE: u32 = 32;
const BED: usize = 59;
const CHAIR: usize = 56;
const PERSON: usize = 0;

/// 21 个候选框（32 输入），其中 3 个有效：床、椅子、人
fn recorded_tensor() -> tempfile::NamedTempFile {
  let layout = OutputLayout::for_input_size(INPUT_SIZE, 80);
  let n = layout.num_candidates;
  let mut output = vec![0.0f32; layout.expected_len()];

  let mut put = |idx: usize, bbox: [f32; 4], class: usize, score: f32| {
    for (k, v) in bbox.iter().enumerate() {
      output[k * n + idx] = *v;
    }
    output[(4 + class) * n + idx] = score;
  };
  put(0, [16.0, 16.0, 24.0, 16.0], BED, 0.9);
  put(1, [8.0, 8.0, 8.0, 8.0], CHAIR, 0.8);
  put(2, [20.0, 16.0, 4.0, 10.0], PERSON, 0.95);

  let mut file = tempfile::NamedTempFile::new().unwrap();
  for v in &output {
    file.write_all(&v.to_le_bytes()).unwrap();
  }
  file
}

fn replay_url(file: &tempfile::NamedTempFile) -> Url {
  Url::parse(&format!(
    "replay://{}?size={}&classes=80",
    file.path().display(),
    INPUT_SIZE
  ))
  .unwrap()
}

fn ready_host(
  file: &tempfile::NamedTempFile,
  config: DecodeConfig,
) -> DetectorHost<ReplayModelBuilder> {
  let builder = ReplayModelBuilder::from_url(&replay_url(file)).unwrap();
  let mut host = DetectorHost::new(builder).with_config(config);
  assert!(host.initialize());
  host
}

/// 64x32 横图：缩放 0.5，上下各填充 8 像素
fn landscape_frame() -> RgbaFrame {
  RgbaFrame::filled(64, 32, [200, 180, 160, 255])
}

#[test]
fn detections_are_filtered_sorted_and_normalized() {
  let tensor = recorded_tensor();
  let host = ready_host(&tensor, DecodeConfig::default());

  let result = host.detect(&landscape_frame());
  let names: Vec<&str> = result.items.iter().map(|d| d.class_name()).collect();
  assert_eq!(names, vec!["bed", "chair"]);

  let [x1, y1, x2, y2] = result.items[0].corners();
  assert!((x1 - 0.125).abs() < 1e-5 && (x2 - 0.875).abs() < 1e-5);
  assert!(y1.abs() < 1e-5 && (y2 - 1.0).abs() < 1e-5);

  // 椅子框越过上边缘，被裁剪
  let [_, y1, _, y2] = result.items[1].corners();
  assert_eq!(y1, 0.0);
  assert!((y2 - 0.25).abs() < 1e-5);
}

#[test]
fn all_classes_keeps_people() {
  let tensor = recorded_tensor();
  let host = ready_host(&tensor, DecodeConfig::default().filter_relevant(false));

  let result = host.detect(&landscape_frame());
  assert_eq!(result.len(), 3);
  assert_eq!(result.items[0].class_name(), "person");
}

#[test]
fn headboard_pins_follow_detected_bed() {
  let tensor = recorded_tensor();
  let host = ready_host(&tensor, DecodeConfig::default());

  let inspection = Inspection::run("HEADBOARD", &landscape_frame(), Some(&host));
  assert_eq!(inspection.detections.len(), 2);
  assert_eq!(inspection.pins.len(), 3);
  // x1 + 0.2 * w, y1 + 0.15 * h
  assert!((inspection.pins[0].x - 0.275).abs() < 1e-5);
  assert!((inspection.pins[0].y - 0.15).abs() < 1e-5);
}

#[test]
fn missing_model_degrades_to_template() {
  let builder = ReplayModelBuilder::from_path("/nonexistent/chuangjian/output.bin");
  let mut host = DetectorHost::new(builder);
  assert!(!host.initialize());
  assert!(host.last_error().is_some());

  let inspection = Inspection::run("MATTRESS_SEAMS", &landscape_frame(), Some(&host));
  assert!(inspection.detections.is_empty());
  assert_eq!(inspection.pins.len(), 1);
  assert!(inspection.pins[0].label.ends_with(REPEAT_CORNERS_SUFFIX));
}

#[test]
fn templates_match_generate_pins_without_detector() {
  let without_host = Inspection::run::<ReplayModelBuilder>("COUCH", &landscape_frame(), None);
  let direct = generate_pins("COUCH", None);
  let positions = |pins: &[chuangjian::pin::Pin]| {
    pins.iter().map(|p| (p.x, p.y, p.label.clone())).collect::<Vec<_>>()
  };
  assert_eq!(positions(&without_host.pins), positions(&direct));
}

#[cfg(all(feature = "read_image_file", feature = "save_json_file"))]
#[test]
fn image_to_json_report() {
  use chuangjian::{
    input::ImageFileInput,
    output::OutputWrapper,
    task::{OneShotTask, Task},
  };

  let dir = tempfile::tempdir().unwrap();
  let image_path = dir.path().join("room.png");
  image::RgbaImage::from_pixel(64, 32, image::Rgba([200, 180, 160, 255]))
    .save(&image_path)
    .unwrap();
  let report_path = dir.path().join("reports/room.json");

  let input =
    ImageFileInput::from_url(&Url::parse(&format!("image://{}", image_path.display())).unwrap())
      .unwrap();
  let output =
    OutputWrapper::from_url(&Url::parse(&format!("json://{}", report_path.display())).unwrap())
      .unwrap();

  let tensor = recorded_tensor();
  let host = ready_host(&tensor, DecodeConfig::default());
  OneShotTask::new("BED_OVERVIEW")
    .run_task(input, Some(&host), output)
    .unwrap();

  let json: serde_json::Value =
    serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
  assert_eq!(json["scenario"], "BED_OVERVIEW");
  assert_eq!(json["imageWidth"], 64);
  assert_eq!(json["imageHeight"], 32);
  assert_eq!(json["detections"].as_array().unwrap().len(), 2);
  // 床框 5 个偏移点，椅子在床场景下无规则
  let pins = json["pins"].as_array().unwrap();
  assert_eq!(pins.len(), 5);
  assert!(pins.iter().all(|p| p["status"] == "unchecked"));
}
