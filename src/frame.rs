// 该文件是 Chuangjian （床检） 项目的一部分。
// src/frame.rs - RGBA 帧与 NCHW 张量定义
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

pub const RGBA_CHANNELS: usize = 4;
pub const RGB_CHANNELS: usize = 3;

/// 拍摄得到的原始图像，像素按 RGBA 交错排列
#[derive(Debug, Clone)]
pub struct RgbaFrame {
  width: u32,
  height: u32,
  data: Box<[u8]>,
}

impl RgbaFrame {
  /// 像素长度必须等于 `width * height * 4`，否则直接 panic
  pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
    let expected = RGBA_CHANNELS * width as usize * height as usize;
    if data.len() != expected {
      panic!(
        "数据长度不匹配: 期望长度 {}, 实际长度 {}",
        expected,
        data.len()
      );
    }

    Self {
      width,
      height,
      data: data.into_boxed_slice(),
    }
  }

  /// 纯色图像，主要用于测试与占位
  pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
    let data = rgba
      .iter()
      .copied()
      .cycle()
      .take(RGBA_CHANNELS * width as usize * height as usize)
      .collect();
    Self::from_raw(width, height, data)
  }

  pub fn width(&self) -> u32 {
    self.width
  }

  pub fn height(&self) -> u32 {
    self.height
  }

  pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
    let idx = (y as usize * self.width as usize + x as usize) * RGBA_CHANNELS;
    [
      self.data[idx],
      self.data[idx + 1],
      self.data[idx + 2],
      self.data[idx + 3],
    ]
  }

  pub fn as_rgba(&self) -> &[u8] {
    &self.data
  }
}

#[cfg(feature = "read_image_file")]
impl From<image::RgbaImage> for RgbaFrame {
  fn from(image: image::RgbaImage) -> Self {
    let (width, height) = image.dimensions();
    RgbaFrame::from_raw(width, height, image.into_raw())
  }
}

/// 检测器输入张量，3 x size x size 的平面 (NCHW, N = 1) 浮点数据
#[derive(Debug, Clone)]
pub struct TensorFrame {
  size: u32,
  data: Box<[f32]>,
}

impl TensorFrame {
  pub fn filled(size: u32, value: f32) -> Self {
    let len = RGB_CHANNELS * size as usize * size as usize;
    Self {
      size,
      data: vec![value; len].into_boxed_slice(),
    }
  }

  pub fn size(&self) -> u32 {
    self.size
  }

  pub fn plane_len(&self) -> usize {
    self.size as usize * self.size as usize
  }

  pub fn get(&self, c: usize, y: u32, x: u32) -> f32 {
    self.data[self.index(c, y, x)]
  }

  pub fn set(&mut self, c: usize, y: u32, x: u32, value: f32) {
    let idx = self.index(c, y, x);
    self.data[idx] = value;
  }

  fn index(&self, c: usize, y: u32, x: u32) -> usize {
    c * self.plane_len() + y as usize * self.size as usize + x as usize
  }

  pub fn as_nchw(&self) -> &[f32] {
    &self.data
  }
}
