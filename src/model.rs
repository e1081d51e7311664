// 该文件是 Chuangjian （床检） 项目的一部分。
// src/model.rs - 模型与检测结果
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

use crate::frame::TensorFrame;

/// 推理后端。输入为预处理后的张量，输出为通道优先的原始浮点张量
pub trait Model {
  type Error: std::error::Error;

  /// 模型输入边长（正方形）
  fn input_size(&self) -> u32;
  fn layout(&self) -> OutputLayout;
  fn infer(&self, input: &TensorFrame) -> Result<Box<[f32]>, Self::Error>;
}

/// 延迟加载模型，由 [`crate::host::DetectorHost`] 在首次初始化时调用
pub trait ModelLoader {
  type Model: Model;
  type Error: std::fmt::Display;

  fn load(&self) -> Result<Self::Model, Self::Error>;
}

/// 输出张量布局：每个候选框 4 个框通道 + `num_classes` 个类别通道，
/// 按通道优先排列，`value = output[channel * num_candidates + index]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputLayout {
  pub num_classes: usize,
  pub num_candidates: usize,
}

const BOX_CHANNELS: usize = 4;
const DETECT_STRIDES: [u32; 3] = [8, 16, 32];

impl OutputLayout {
  /// 按 8/16/32 三个步长的检测头计算候选框数量，640 输入对应 8400
  pub fn for_input_size(input_size: u32, num_classes: usize) -> Self {
    let num_candidates = DETECT_STRIDES
      .iter()
      .map(|stride| {
        let side = (input_size / stride) as usize;
        side * side
      })
      .sum();
    OutputLayout {
      num_classes,
      num_candidates,
    }
  }

  pub fn channels(&self) -> usize {
    BOX_CHANNELS + self.num_classes
  }

  pub fn expected_len(&self) -> usize {
    self.channels() * self.num_candidates
  }
}

impl Default for OutputLayout {
  fn default() -> Self {
    OutputLayout::for_input_size(DEFAULT_INPUT_SIZE, COCO_CLASSES.len())
  }
}

pub const DEFAULT_INPUT_SIZE: u32 = 640;
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.45;
pub const DEFAULT_IOU_THRESHOLD: f32 = 0.5;

/// 后处理配置，宿主应用可按需覆盖
#[derive(Debug, Clone)]
pub struct DecodeConfig {
  pub confidence_threshold: f32,
  pub iou_threshold: f32,
  pub filter_relevant: bool,
  pub relevant_classes: Vec<u32>,
  pub layout: OutputLayout,
}

impl Default for DecodeConfig {
  fn default() -> Self {
    DecodeConfig {
      confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
      iou_threshold: DEFAULT_IOU_THRESHOLD,
      filter_relevant: true,
      relevant_classes: RELEVANT_CLASSES.to_vec(),
      layout: OutputLayout::default(),
    }
  }
}

impl DecodeConfig {
  pub fn confidence_threshold(mut self, threshold: f32) -> Self {
    self.confidence_threshold = threshold;
    self
  }

  pub fn iou_threshold(mut self, threshold: f32) -> Self {
    self.iou_threshold = threshold;
    self
  }

  pub fn filter_relevant(mut self, filter: bool) -> Self {
    self.filter_relevant = filter;
    self
  }

  pub fn relevant_classes(mut self, classes: Vec<u32>) -> Self {
    self.relevant_classes = classes;
    self
  }

  pub fn layout(mut self, layout: OutputLayout) -> Self {
    self.layout = layout;
    self
  }

  pub fn is_relevant(&self, class_id: u32) -> bool {
    self.relevant_classes.contains(&class_id)
  }
}

/// 单个检测目标，坐标均相对原图归一化到 [0, 1]。
///
/// 中心/尺寸与角点两种表示总是一起构造，构造后不可修改。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
  class_id: u32,
  class_name: &'static str,
  confidence: f32,
  x: f32,
  y: f32,
  width: f32,
  height: f32,
  x1: f32,
  y1: f32,
  x2: f32,
  y2: f32,
}

impl Detection {
  /// 以角点构造，每个角点独立裁剪到 [0, 1]，允许退化为零面积
  pub fn from_corners(class_id: u32, confidence: f32, corners: [f32; 4]) -> Self {
    let x1 = corners[0].clamp(0.0, 1.0);
    let y1 = corners[1].clamp(0.0, 1.0);
    let x2 = corners[2].clamp(0.0, 1.0).max(x1);
    let y2 = corners[3].clamp(0.0, 1.0).max(y1);

    Detection {
      class_id,
      class_name: label_name(class_id),
      confidence,
      x: (x1 + x2) / 2.0,
      y: (y1 + y2) / 2.0,
      width: x2 - x1,
      height: y2 - y1,
      x1,
      y1,
      x2,
      y2,
    }
  }

  pub fn from_center(
    class_id: u32,
    confidence: f32,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
  ) -> Self {
    Self::from_corners(
      class_id,
      confidence,
      [
        x - width / 2.0,
        y - height / 2.0,
        x + width / 2.0,
        y + height / 2.0,
      ],
    )
  }

  pub fn class_id(&self) -> u32 {
    self.class_id
  }

  pub fn class_name(&self) -> &'static str {
    self.class_name
  }

  pub fn confidence(&self) -> f32 {
    self.confidence
  }

  pub fn center(&self) -> (f32, f32) {
    (self.x, self.y)
  }

  pub fn size(&self) -> (f32, f32) {
    (self.width, self.height)
  }

  /// [x_min, y_min, x_max, y_max]
  pub fn corners(&self) -> [f32; 4] {
    [self.x1, self.y1, self.x2, self.y2]
  }

  pub fn area(&self) -> f32 {
    self.width * self.height
  }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DetectResult {
  pub items: Box<[Detection]>,
}

impl DetectResult {
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }
}

impl IntoIterator for DetectResult {
  type Item = Detection;
  type IntoIter = std::vec::IntoIter<Detection>;

  fn into_iter(self) -> Self::IntoIter {
    self.items.into_vec().into_iter()
  }
}

mod decode;
mod labels;
mod replay;

pub use self::decode::{decode, iou, nms};
pub use self::labels::{COCO_CLASSES, FurnitureKind, RELEVANT_CLASSES, label_name};
pub use self::replay::{ReplayModel, ReplayModelBuilder, ReplayModelError};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_layout_matches_yolo_640() {
    let layout = OutputLayout::default();
    assert_eq!(layout.num_candidates, 8400);
    assert_eq!(layout.channels(), 84);
    assert_eq!(layout.expected_len(), 84 * 8400);
  }

  #[test]
  fn detection_fields_stay_consistent() {
    let det = Detection::from_center(59, 0.8, 0.5, 0.4, 0.2, 0.3);
    let [x1, y1, x2, y2] = det.corners();
    assert!((x1 - 0.4).abs() < 1e-6);
    assert!((y1 - 0.25).abs() < 1e-6);
    assert!((x2 - 0.6).abs() < 1e-6);
    assert!((y2 - 0.55).abs() < 1e-6);
    assert_eq!(det.class_name(), "bed");
  }

  #[test]
  fn detection_clamps_each_corner() {
    let det = Detection::from_corners(56, 0.7, [-0.2, 0.9, 0.3, 1.4]);
    assert_eq!(det.corners(), [0.0, 0.9, 0.3, 1.0]);
    let (cx, cy) = det.center();
    assert!((cx - 0.15).abs() < 1e-6);
    assert!((cy - 0.95).abs() < 1e-6);
  }

  #[test]
  fn box_outside_image_degenerates() {
    let det = Detection::from_corners(59, 0.9, [1.2, 0.1, 1.5, 0.4]);
    assert_eq!(det.corners()[0], 1.0);
    assert_eq!(det.corners()[2], 1.0);
    assert_eq!(det.area(), 0.0);
  }
}
