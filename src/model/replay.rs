// 该文件是 Chuangjian （床检） 项目的一部分。
// src/model/replay.rs - 回放已录制的模型输出张量
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

use thiserror::Error;
use tracing::{debug, error, info};
use url::Url;

use crate::{
  FromUrl, FromUrlWithScheme,
  frame::TensorFrame,
  model::{COCO_CLASSES, DEFAULT_INPUT_SIZE, Model, ModelLoader, OutputLayout},
};

const F32_BYTES: usize = 4;

#[derive(Error, Debug)]
pub enum ReplayModelError {
  #[error("张量文件加载错误: {0}")]
  LoadError(std::io::Error),
  #[error("张量文件无效: {0}")]
  Invalid(String),
  #[error("模型路径错误: {0}")]
  PathError(String),
  #[error("输入尺寸不匹配: 期望 {expected}, 实际 {actual}")]
  InputSizeMismatch { expected: u32, actual: u32 },
}

impl From<std::io::Error> for ReplayModelError {
  fn from(err: std::io::Error) -> Self {
    ReplayModelError::LoadError(err)
  }
}

/// 回放模型：无论输入为何，总是返回同一份录制的输出张量。
///
/// 张量文件为小端 `f32` 原始数据，按通道优先排列。
pub struct ReplayModel {
  input_size: u32,
  layout: OutputLayout,
  output: Box<[f32]>,
}

impl ReplayModel {
  pub fn from_output(
    output: Vec<f32>,
    input_size: u32,
    layout: OutputLayout,
  ) -> Result<Self, ReplayModelError> {
    if output.len() != layout.expected_len() {
      error!(
        "张量长度不匹配: 期望 {}, 实际 {}",
        layout.expected_len(),
        output.len()
      );
      return Err(ReplayModelError::Invalid(format!(
        "期望 {} 个元素 ({} 通道 x {} 候选框), 实际 {} 个",
        layout.expected_len(),
        layout.channels(),
        layout.num_candidates,
        output.len()
      )));
    }

    Ok(ReplayModel {
      input_size,
      layout,
      output: output.into_boxed_slice(),
    })
  }
}

impl Model for ReplayModel {
  type Error = ReplayModelError;

  fn input_size(&self) -> u32 {
    self.input_size
  }

  fn layout(&self) -> OutputLayout {
    self.layout
  }

  fn infer(&self, input: &TensorFrame) -> Result<Box<[f32]>, Self::Error> {
    if input.size() != self.input_size {
      return Err(ReplayModelError::InputSizeMismatch {
        expected: self.input_size,
        actual: input.size(),
      });
    }
    debug!("回放输出张量, {} 个元素", self.output.len());
    Ok(self.output.clone())
  }
}

pub struct ReplayModelBuilder {
  path: String,
  input_size: u32,
  num_classes: usize,
}

impl FromUrlWithScheme for ReplayModelBuilder {
  const SCHEME: &'static str = "replay";
}

impl FromUrl for ReplayModelBuilder {
  type Error = ReplayModelError;

  /// `replay:///path/to/output.bin?size=640&classes=80`
  fn from_url(url: &Url) -> Result<Self, Self::Error> {
    if url.scheme() != Self::SCHEME {
      return Err(ReplayModelError::PathError(format!(
        "模型路径必须使用 {} 方案",
        Self::SCHEME
      )));
    }

    let mut builder = ReplayModelBuilder::from_path(url.path());

    for (key, value) in url.query_pairs() {
      match key.as_ref() {
        "size" => {
          builder.input_size = value
            .parse()
            .map_err(|_| ReplayModelError::PathError(format!("无效的输入尺寸: {}", value)))?;
        }
        "classes" => {
          builder.num_classes = value
            .parse()
            .map_err(|_| ReplayModelError::PathError(format!("无效的类别数量: {}", value)))?;
        }
        _ => debug!("忽略未知参数: {}={}", key, value),
      }
    }

    Ok(builder)
  }
}

impl ReplayModelBuilder {
  pub fn from_path(path: impl Into<String>) -> Self {
    ReplayModelBuilder {
      path: path.into(),
      input_size: DEFAULT_INPUT_SIZE,
      num_classes: COCO_CLASSES.len(),
    }
  }

  pub fn input_size(mut self, input_size: u32) -> Self {
    self.input_size = input_size;
    self
  }

  pub fn num_classes(mut self, num_classes: usize) -> Self {
    self.num_classes = num_classes;
    self
  }

  pub fn layout(&self) -> OutputLayout {
    OutputLayout::for_input_size(self.input_size, self.num_classes)
  }

  pub fn build(&self) -> Result<ReplayModel, ReplayModelError> {
    info!("加载张量文件: {}", self.path);
    let bytes = std::fs::read(&self.path)?;
    debug!(
      "张量文件大小: {:.2} MB",
      bytes.len() as f64 / (1024.0 * 1024.0)
    );

    if bytes.len() % F32_BYTES != 0 {
      return Err(ReplayModelError::Invalid(format!(
        "文件大小 {} 不是 {} 的整数倍",
        bytes.len(),
        F32_BYTES
      )));
    }

    let output: Vec<f32> = bytes
      .chunks_exact(F32_BYTES)
      .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
      .collect();

    let model = ReplayModel::from_output(output, self.input_size, self.layout())?;
    info!("张量加载完成");
    Ok(model)
  }
}

impl ModelLoader for ReplayModelBuilder {
  type Model = ReplayModel;
  type Error = ReplayModelError;

  fn load(&self) -> Result<Self::Model, Self::Error> {
    self.build()
  }
}
