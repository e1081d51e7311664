// 该文件是 Chuangjian （床检） 项目的一部分。
// src/host.rs - 检测器宿主：延迟加载、就绪状态与降级
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
use tracing::{debug, error, info, warn};

use crate::{
  frame::RgbaFrame,
  input::to_tensor,
  model::{DecodeConfig, DetectResult, Model, ModelLoader, decode},
};

#[derive(Error, Debug)]
pub enum HostError {
  #[error("检测器未就绪")]
  NotReady,
  #[error("推理失败: {0}")]
  Inference(String),
  #[error("输出张量长度不匹配: 期望 {expected}, 实际 {actual}")]
  OutputShape { expected: usize, actual: usize },
}

/// 检测器状态。加载失败的原因保存在 `Unavailable` 中
pub enum DetectorState<M> {
  Unloaded,
  Ready(M),
  Unavailable(String),
}

/// 持有至多一个已加载的模型。
///
/// 由应用的组合根创建并以引用传递；`detect` 永远不会把推理失败传给调用方，
/// 只会返回空结果。
pub struct DetectorHost<L: ModelLoader> {
  loader: L,
  state: DetectorState<L::Model>,
  config: DecodeConfig,
}

impl<L: ModelLoader> DetectorHost<L> {
  pub fn new(loader: L) -> Self {
    DetectorHost {
      loader,
      state: DetectorState::Unloaded,
      config: DecodeConfig::default(),
    }
  }

  /// 覆盖阈值与类别白名单；输出布局始终以已加载模型为准
  pub fn with_config(mut self, mut config: DecodeConfig) -> Self {
    if let DetectorState::Ready(model) = &self.state {
      config.layout = model.layout();
    }
    self.config = config;
    self
  }

  pub fn config(&self) -> &DecodeConfig {
    &self.config
  }

  pub fn is_ready(&self) -> bool {
    matches!(self.state, DetectorState::Ready(_))
  }

  pub fn last_error(&self) -> Option<&str> {
    match &self.state {
      DetectorState::Unavailable(reason) => Some(reason),
      DetectorState::Unloaded | DetectorState::Ready(_) => None,
    }
  }

  /// 幂等；已就绪时直接返回 true，之前失败时会重新尝试加载
  pub fn initialize(&mut self) -> bool {
    if self.is_ready() {
      return true;
    }

    info!("加载检测模型");
    match self.loader.load() {
      Ok(model) => {
        self.config.layout = model.layout();
        debug!(
          "模型输入 {}x{}, 候选框 {}, 类别 {}",
          model.input_size(),
          model.input_size(),
          self.config.layout.num_candidates,
          self.config.layout.num_classes
        );
        self.state = DetectorState::Ready(model);
        info!("模型加载完成");
        true
      }
      Err(e) => {
        error!("模型加载失败: {}", e);
        self.state = DetectorState::Unavailable(e.to_string());
        false
      }
    }
  }

  /// 预处理 -> 推理 -> 解码，失败在返回类型中可见
  pub fn try_detect(&self, frame: &RgbaFrame) -> Result<DetectResult, HostError> {
    let DetectorState::Ready(model) = &self.state else {
      return Err(HostError::NotReady);
    };

    let (tensor, letterbox) = to_tensor(frame, model.input_size());

    let now = std::time::Instant::now();
    let output = model
      .infer(&tensor)
      .map_err(|e| HostError::Inference(e.to_string()))?;
    debug!("推理完成，耗时: {:.2?}", now.elapsed());

    let expected = self.config.layout.expected_len();
    if output.len() != expected {
      return Err(HostError::OutputShape {
        expected,
        actual: output.len(),
      });
    }

    let result = decode(
      &output,
      frame.width(),
      frame.height(),
      &letterbox,
      &self.config,
    );
    info!("检测到 {} 个物体", result.len());
    Ok(result)
  }

  /// 未就绪或推理失败时返回空结果
  pub fn detect(&self, frame: &RgbaFrame) -> DetectResult {
    match self.try_detect(frame) {
      Ok(result) => result,
      Err(HostError::NotReady) => {
        debug!("检测器未就绪，跳过检测");
        DetectResult::default()
      }
      Err(e) => {
        warn!("检测失败，降级为空结果: {}", e);
        DetectResult::default()
      }
    }
  }
}
