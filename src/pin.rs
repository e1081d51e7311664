// 该文件是 Chuangjian （床检） 项目的一部分。
// src/pin.rs - 检查标记（pin）生成
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

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::model::{Detection, FurnitureKind};

mod layout;
mod scenario;
mod template;

pub use self::layout::detection_offsets;
pub use self::scenario::{BED_MAX_PINS, DEFAULT_MAX_PINS, Density, Scenario, ScenarioKey};
pub use self::template::{GENERIC, template};

pub const REPEAT_CORNERS_SUFFIX: &str = "(repeat on other corners)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PinStatus {
  #[default]
  Unchecked,
  Checked,
  Concerned,
}

/// 叠加在照片上的检查标记，坐标为归一化 [0, 1]。
///
/// 生成后归调用方所有；拖动与状态切换均在外部完成。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pin {
  pub id: Uuid,
  pub x: f32,
  pub y: f32,
  pub label: String,
  pub description: String,
  pub what_to_look: String,
  pub status: PinStatus,
}

/// 静态布点条目。模板中 `(x, y)` 为归一化坐标，偏移表中为检测框宽高的比例
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinSpec {
  pub x: f32,
  pub y: f32,
  pub label: &'static str,
  pub why: &'static str,
  pub what_to_look: &'static str,
}

impl PinSpec {
  pub const fn new(
    x: f32,
    y: f32,
    label: &'static str,
    why: &'static str,
    what_to_look: &'static str,
  ) -> Self {
    PinSpec {
      x,
      y,
      label,
      why,
      what_to_look,
    }
  }
}

struct PinDraft {
  x: f32,
  y: f32,
  label: String,
  spec: PinSpec,
}

impl PinDraft {
  fn at(spec: &PinSpec, x: f32, y: f32) -> Self {
    PinDraft {
      x: x.clamp(0.0, 1.0),
      y: y.clamp(0.0, 1.0),
      label: spec.label.to_string(),
      spec: *spec,
    }
  }

  fn into_pin(self) -> Pin {
    Pin {
      id: Uuid::new_v4(),
      x: self.x,
      y: self.y,
      label: self.label,
      description: self.spec.why.to_string(),
      what_to_look: self.spec.what_to_look.to_string(),
      status: PinStatus::Unchecked,
    }
  }
}

/// 为指定场景生成检查标记。
///
/// 有检测结果时按检测框布点；没有结果或该组合无规则时退回静态模板，
/// 未知场景使用四角兜底。最后按场景密度截断，单角场景压缩为一个标记。
pub fn generate_pins(scenario_key: &str, detections: Option<&[Detection]>) -> Vec<Pin> {
  let key = ScenarioKey::parse(scenario_key);

  let mut drafts = match detections {
    Some(detections) if !detections.is_empty() => from_detections(&key, detections),
    _ => Vec::new(),
  };

  let source = if drafts.is_empty() {
    drafts = from_template(&key);
    "模板"
  } else {
    "检测框"
  };

  let drafts = enforce_density(&key, drafts);
  debug!(
    "场景 {}: 由{}生成 {} 个标记",
    scenario_key,
    source,
    drafts.len()
  );

  drafts.into_iter().map(PinDraft::into_pin).collect()
}

fn from_detections(key: &ScenarioKey, detections: &[Detection]) -> Vec<PinDraft> {
  let Some(scenario) = key.scenario() else {
    return Vec::new();
  };

  detections
    .iter()
    .flat_map(|detection| {
      let kind = FurnitureKind::from_class_id(detection.class_id());
      let [x1, y1, _, _] = detection.corners();
      let (width, height) = detection.size();
      detection_offsets(kind, scenario)
        .iter()
        .map(move |spec| PinDraft::at(spec, x1 + spec.x * width, y1 + spec.y * height))
    })
    .collect()
}

fn from_template(key: &ScenarioKey) -> Vec<PinDraft> {
  let specs = match key {
    ScenarioKey::Known(scenario) => template(*scenario),
    ScenarioKey::Unknown(_) => GENERIC,
  };
  specs
    .iter()
    .map(|spec| PinDraft::at(spec, spec.x, spec.y))
    .collect()
}

fn enforce_density(key: &ScenarioKey, mut drafts: Vec<PinDraft>) -> Vec<PinDraft> {
  match key.density() {
    Density::SingleCorner => {
      drafts.truncate(1);
      if let Some(first) = drafts.first_mut() {
        first.label = format!("{} {}", first.label, REPEAT_CORNERS_SUFFIX);
      }
      drafts
    }
    Density::Capped(max) => {
      drafts.truncate(max);
      drafts
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const BED: u32 = 59;
  const COUCH: u32 = 57;
  const SUITCASE: u32 = 28;
  const PERSON: u32 = 0;

  fn assert_bounded(pins: &[Pin]) {
    for pin in pins {
      assert!((0.0..=1.0).contains(&pin.x), "{pin:?}");
      assert!((0.0..=1.0).contains(&pin.y), "{pin:?}");
      assert_eq!(pin.status, PinStatus::Unchecked);
    }
  }

  #[test]
  fn mattress_seams_collapse_to_one_pin() {
    let pins = generate_pins("MATTRESS_SEAMS", None);
    assert_eq!(pins.len(), 1);
    assert!(pins[0].label.ends_with(REPEAT_CORNERS_SUFFIX));
    assert!(pins[0].label.contains("repeat on other corners"));
  }

  #[test]
  fn single_corner_applies_to_detections_too() {
    let bed = Detection::from_corners(BED, 0.9, [0.1, 0.2, 0.9, 0.9]);
    let pins = generate_pins("BOX_SPRING", Some(&[bed][..]));
    assert_eq!(pins.len(), 1);
    assert!(pins[0].label.starts_with("Box spring corner"));
  }

  #[test]
  fn headboard_pins_follow_the_bed_box() {
    let bed = Detection::from_corners(BED, 0.9, [0.2, 0.4, 0.8, 0.8]);
    let pins = generate_pins("HEADBOARD", Some(&[bed][..]));

    assert_eq!(pins.len(), 3);
    // 左上：x1 + 0.2 * 0.6, y1 + 0.15 * 0.4
    assert!((pins[0].x - 0.32).abs() < 1e-5);
    assert!((pins[0].y - 0.46).abs() < 1e-5);
    assert!((pins[1].x - 0.68).abs() < 1e-5);
    assert!((pins[2].x - 0.5).abs() < 1e-5);
    assert_bounded(&pins);
  }

  #[test]
  fn bed_scenarios_cap_at_six() {
    let beds = [
      Detection::from_corners(BED, 0.9, [0.0, 0.0, 0.5, 0.5]),
      Detection::from_corners(BED, 0.8, [0.5, 0.5, 1.0, 1.0]),
    ];
    let pins = generate_pins("BED_OVERVIEW", Some(&beds[..]));
    assert_eq!(pins.len(), BED_MAX_PINS);
    // 先生成的第一张床的 5 个标记全部保留
    assert_eq!(pins[4].label, "Foot right corner");
    assert!(pins[5].x < 0.6);
    assert_bounded(&pins);
  }

  #[test]
  fn default_scenarios_cap_at_four() {
    let couches = [
      Detection::from_corners(COUCH, 0.9, [0.0, 0.3, 0.6, 0.8]),
      Detection::from_corners(COUCH, 0.7, [0.6, 0.3, 1.0, 0.8]),
    ];
    let pins = generate_pins("COUCH", Some(&couches[..]));
    assert_eq!(pins.len(), DEFAULT_MAX_PINS);
    assert_eq!(pins[0].label, "Left arm crevice");
  }

  #[test]
  fn unmatched_detections_fall_back_to_template() {
    let suitcase = Detection::from_corners(SUITCASE, 0.9, [0.1, 0.1, 0.4, 0.4]);
    let with_detection = generate_pins("CURTAINS", Some(&[suitcase][..]));
    let without = generate_pins("CURTAINS", None);

    let positions = |pins: &[Pin]| pins.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>();
    assert_eq!(positions(&with_detection), positions(&without));
  }

  #[test]
  fn empty_detections_use_template() {
    let pins = generate_pins("NIGHTSTAND", Some(&[][..]));
    assert_eq!(pins.len(), 3);
    assert_eq!(pins[2].label, "Underside");
  }

  #[test]
  fn unknown_key_gets_four_corners() {
    let person = Detection::from_corners(PERSON, 0.9, [0.1, 0.1, 0.4, 0.4]);
    for detections in [None, Some(&[person][..])] {
      let pins = generate_pins("ATTIC", detections);
      let positions: Vec<(f32, f32)> = pins.iter().map(|p| (p.x, p.y)).collect();
      assert_eq!(positions, vec![(0.2, 0.2), (0.8, 0.2), (0.2, 0.8), (0.8, 0.8)]);
    }
  }

  #[test]
  fn every_key_respects_its_bound() {
    let keys = Scenario::ALL
      .iter()
      .map(|s| s.key().to_string())
      .chain(["SPARE_BED".to_string(), "".to_string(), "closet".to_string()]);

    let bed = Detection::from_corners(BED, 0.9, [0.05, 0.3, 0.95, 0.98]);
    let couch = Detection::from_corners(COUCH, 0.8, [0.0, 0.4, 0.7, 1.0]);
    let both = [bed.clone(), couch.clone()];

    for key in keys {
      let parsed = ScenarioKey::parse(&key);
      let inputs: [Option<&[Detection]>; 4] = [
        None,
        Some(std::slice::from_ref(&bed)),
        Some(std::slice::from_ref(&couch)),
        Some(&both[..]),
      ];
      for detections in inputs {
        let pins = generate_pins(&key, detections);
        assert!(!pins.is_empty(), "{key}");
        assert!(pins.len() <= parsed.max_pins(), "{key}: {}", pins.len());
        if parsed.density() == Density::SingleCorner {
          assert_eq!(pins.len(), 1, "{key}");
          assert!(pins[0].label.ends_with(REPEAT_CORNERS_SUFFIX));
        }
        assert_bounded(&pins);
      }
    }
  }

  #[test]
  fn pins_near_edges_are_clamped() {
    let bed = Detection::from_corners(BED, 0.9, [0.9, 0.95, 1.0, 1.0]);
    let pins = generate_pins("BED_FRAME", Some(&[bed][..]));
    assert_eq!(pins.len(), 4);
    assert_bounded(&pins);
  }

  #[test]
  fn every_call_mints_fresh_ids() {
    let first = generate_pins("COUCH", None);
    let second = generate_pins("COUCH", None);
    let mut ids: Vec<Uuid> = first.iter().chain(second.iter()).map(|p| p.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), first.len() + second.len());
  }

  #[test]
  fn status_serializes_lowercase() {
    let pins = generate_pins("CHAIR", None);
    let json = serde_json::to_value(&pins[0]).unwrap();
    assert_eq!(json["status"], "unchecked");
    assert!(json.get("whatToLook").is_some());
  }
}
