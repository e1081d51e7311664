// 该文件是 Chuangjian （床检） 项目的一部分。
// src/input/letterbox.rs - 等比缩放填充（letterbox）与坐标映射
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

use crate::frame::{RGB_CHANNELS, RgbaFrame, TensorFrame};

/// 填充区域的中性灰
pub const NEUTRAL_GRAY: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
  pub x: f32,
  pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
  pub x: f32,
  pub y: f32,
}

/// 一次预处理所做的变换：先乘 scale，再加 padding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
  pub scale: Scale,
  pub padding: Padding,
}

impl Letterbox {
  /// 恒等变换，模型输入与原图同尺寸时使用
  pub fn identity() -> Self {
    Letterbox {
      scale: Scale { x: 1.0, y: 1.0 },
      padding: Padding { x: 0.0, y: 0.0 },
    }
  }
}

impl Default for Letterbox {
  fn default() -> Self {
    Self::identity()
  }
}

/// 矩形框，`(x, y)` 为参考点（中心点或左上角均可），`width`/`height` 为尺寸
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
  pub x: f32,
  pub y: f32,
  pub width: f32,
  pub height: f32,
}

fn non_zero(value: f32) -> f32 {
  if value == 0.0 { 1.0 } else { value }
}

/// 将 RGBA 图像等比缩放到 `target_size x target_size` 的正方形中，
/// 居中放置，其余区域填充中性灰，输出 NCHW 平面浮点张量（取值 [0, 1]）。
///
/// 采用最近邻采样；alpha 通道被丢弃。
pub fn to_tensor(frame: &RgbaFrame, target_size: u32) -> (TensorFrame, Letterbox) {
  let target = target_size as f32;
  let scale = (target / frame.width().max(1) as f32).min(target / frame.height().max(1) as f32);

  let new_width = ((frame.width() as f32 * scale).round() as u32).min(target_size);
  let new_height = ((frame.height() as f32 * scale).round() as u32).min(target_size);

  let pad_x = (target_size - new_width) / 2;
  let pad_y = (target_size - new_height) / 2;

  debug!(
    "letterbox: {}x{} -> {}x{}, 缩放 {:.4}, 填充 ({}, {})",
    frame.width(),
    frame.height(),
    new_width,
    new_height,
    scale,
    pad_x,
    pad_y
  );

  let mut tensor = TensorFrame::filled(target_size, NEUTRAL_GRAY);

  if frame.width() > 0 && frame.height() > 0 {
    for y in 0..new_height {
      let src_y = ((y as f32 / scale) as u32).min(frame.height() - 1);
      for x in 0..new_width {
        let src_x = ((x as f32 / scale) as u32).min(frame.width() - 1);
        let pixel = frame.pixel(src_x, src_y);
        for (c, value) in pixel.iter().take(RGB_CHANNELS).enumerate() {
          tensor.set(c, pad_y + y, pad_x + x, *value as f32 / 255.0);
        }
      }
    }
  }

  let letterbox = Letterbox {
    scale: Scale { x: scale, y: scale },
    padding: Padding {
      x: pad_x as f32,
      y: pad_y as f32,
    },
  };

  (tensor, letterbox)
}

/// 模型输入空间 -> 原图像素空间：先减去填充，再除以缩放
pub fn to_original_coords(bbox: BBox, letterbox: &Letterbox) -> BBox {
  let sx = non_zero(letterbox.scale.x);
  let sy = non_zero(letterbox.scale.y);
  BBox {
    x: (bbox.x - letterbox.padding.x) / sx,
    y: (bbox.y - letterbox.padding.y) / sy,
    width: bbox.width / sx,
    height: bbox.height / sy,
  }
}

/// 原图像素空间 -> 归一化空间 [0, 1]
pub fn to_normalized(bbox: BBox, image_width: u32, image_height: u32) -> BBox {
  let w = image_width.max(1) as f32;
  let h = image_height.max(1) as f32;
  BBox {
    x: bbox.x / w,
    y: bbox.y / h,
    width: bbox.width / w,
    height: bbox.height / h,
  }
}
