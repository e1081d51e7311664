// 该文件是 Chuangjian （床检） 项目的一部分。
// src/model/decode.rs - 输出张量解码与非极大值抑制
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

use tracing::debug;

use crate::input::{BBox, Letterbox, to_normalized, to_original_coords};
use crate::model::{DecodeConfig, DetectResult, Detection};

/// 解码检测器输出。
///
/// `output` 必须严格等于 `config.layout.expected_len()`，否则视为调用方错误直接 panic。
/// 返回结果为 NMS 后按置信度降序排列的检测目标。
pub fn decode(
  output: &[f32],
  image_width: u32,
  image_height: u32,
  letterbox: &Letterbox,
  config: &DecodeConfig,
) -> DetectResult {
  let layout = config.layout;
  assert_eq!(
    output.len(),
    layout.expected_len(),
    "输出张量长度不匹配: 期望 {} ({} 通道 x {} 候选框), 实际 {}",
    layout.expected_len(),
    layout.channels(),
    layout.num_candidates,
    output.len()
  );

  let n = layout.num_candidates;
  let mut candidates = Vec::new();

  for idx in 0..n {
    let (score, class_id) = {
      let mut max_score = f32::NEG_INFINITY;
      let mut cls_idx = 0usize;
      for c in 0..layout.num_classes {
        let score = output[(4 + c) * n + idx];
        if score > max_score {
          max_score = score;
          cls_idx = c;
        }
      }
      (max_score, cls_idx as u32)
    };

    if score.is_nan() || score < config.confidence_threshold {
      continue;
    }

    if config.filter_relevant && !config.is_relevant(class_id) {
      continue;
    }

    let model_box = BBox {
      x: output[idx],
      y: output[n + idx],
      width: output[2 * n + idx],
      height: output[3 * n + idx],
    };
    let bbox = to_normalized(
      to_original_coords(model_box, letterbox),
      image_width,
      image_height,
    );

    if ![bbox.x, bbox.y, bbox.width, bbox.height]
      .iter()
      .all(|v| v.is_finite())
    {
      debug!("丢弃坐标非有限值的候选框 {}: {:?}", idx, bbox);
      continue;
    }

    candidates.push(Detection::from_center(
      class_id,
      score,
      bbox.x,
      bbox.y,
      bbox.width,
      bbox.height,
    ));
  }

  let before = candidates.len();
  let items = nms(candidates, config.iou_threshold);
  debug!("候选框 {} 个, NMS 后保留 {} 个", before, items.len());

  DetectResult {
    items: items.into_boxed_slice(),
  }
}

/// 同类别非极大值抑制，不同类别之间互不抑制
pub fn nms(mut detections: Vec<Detection>, iou_threshold: f32) -> Vec<Detection> {
  // 稳定排序，置信度相同时保持原顺序
  detections.sort_by(|a, b| b.confidence().total_cmp(&a.confidence()));

  let n = detections.len();
  let mut suppressed = vec![false; n];

  for i in 0..n {
    if suppressed[i] {
      continue;
    }
    for j in (i + 1)..n {
      if suppressed[j] || detections[j].class_id() != detections[i].class_id() {
        continue;
      }
      if iou(&detections[i], &detections[j]) > iou_threshold {
        suppressed[j] = true;
      }
    }
  }

  detections
    .into_iter()
    .zip(suppressed)
    .filter_map(|(det, suppressed)| (!suppressed).then_some(det))
    .collect()
}

/// 计算两个检测框的 IoU，并集为 0 时返回 0
pub fn iou(a: &Detection, b: &Detection) -> f32 {
  let [ax1, ay1, ax2, ay2] = a.corners();
  let [bx1, by1, bx2, by2] = b.corners();

  let inter_w = (ax2.min(bx2) - ax1.max(bx1)).max(0.0);
  let inter_h = (ay2.min(by2) - ay1.max(by1)).max(0.0);
  let intersection = inter_w * inter_h;
  let union = a.area() + b.area() - intersection;

  if union > 0.0 { intersection / union } else { 0.0 }
}
