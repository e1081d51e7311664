// 该文件是 Chuangjian （床检） 项目的一部分。
// src/task.rs - 检查任务：取帧、检测、布点、输出
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
use tracing::info;

use crate::{
  frame::RgbaFrame,
  host::DetectorHost,
  model::{DetectResult, ModelLoader},
  output::Render,
  pin::{Pin, generate_pins},
};

/// 一次检查的结果
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
  pub scenario: String,
  pub detections: DetectResult,
  pub pins: Vec<Pin>,
}

impl Inspection {
  /// 检测器可用时先检测，再按结果布点；否则直接使用模板
  pub fn run<L: ModelLoader>(
    scenario: &str,
    frame: &RgbaFrame,
    host: Option<&DetectorHost<L>>,
  ) -> Self {
    let detections = host.map(|host| host.detect(frame)).unwrap_or_default();
    let pins = match host {
      Some(_) => generate_pins(scenario, Some(&detections.items[..])),
      None => generate_pins(scenario, None),
    };
    Inspection {
      scenario: scenario.to_string(),
      detections,
      pins,
    }
  }
}

pub trait Task<I, L: ModelLoader, O>: Sized {
  type Error;
  fn run_task(
    self,
    input: I,
    host: Option<&DetectorHost<L>>,
    output: O,
  ) -> Result<(), Self::Error>;
}

/// 只处理输入中的第一帧
pub struct OneShotTask {
  scenario: String,
}

impl OneShotTask {
  pub fn new(scenario: impl Into<String>) -> Self {
    OneShotTask {
      scenario: scenario.into(),
    }
  }
}

impl<
  RE: std::error::Error + Sync + Send + 'static,
  I: Iterator<Item = RgbaFrame>,
  L: ModelLoader,
  O: Render<RgbaFrame, Inspection, Error = RE>,
> Task<I, L, O> for OneShotTask
{
  type Error = anyhow::Error;

  fn run_task(
    self,
    mut input: I,
    host: Option<&DetectorHost<L>>,
    output: O,
  ) -> Result<(), Self::Error> {
    info!("开始任务, 场景: {}", self.scenario);
    let frame = input.next().ok_or_else(|| anyhow::anyhow!("没有输入帧"))?;
    info!(
      "输入帧获取成功: {}x{}, 开始检查...",
      frame.width(),
      frame.height()
    );
    let now = std::time::Instant::now();
    let inspection = Inspection::run(&self.scenario, &frame, host);
    let elapsed = now.elapsed();
    info!(
      "检查完成，{} 个检测, {} 个标记，耗时: {:.2?}",
      inspection.detections.len(),
      inspection.pins.len(),
      elapsed
    );
    output.render_result(&frame, &inspection)?;
    info!("渲染完成，耗时: {:.2?}", now.elapsed());

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;

  use thiserror::Error;

  use super::*;
  use crate::model::ReplayModelBuilder;

  #[derive(Debug, Error)]
  #[error("渲染失败")]
  struct RecordError;

  #[derive(Default)]
  struct Record {
    seen: RefCell<Vec<(u32, usize)>>,
    fail: bool,
  }

  impl Render<RgbaFrame, Inspection> for &Record {
    type Error = RecordError;

    fn render_result(&self, frame: &RgbaFrame, result: &Inspection) -> Result<(), Self::Error> {
      if self.fail {
        return Err(RecordError);
      }
      self.seen.borrow_mut().push((frame.width(), result.pins.len()));
      Ok(())
    }
  }

  fn frames(n: usize) -> impl Iterator<Item = RgbaFrame> {
    (0..n).map(|i| RgbaFrame::filled(10 + i as u32, 10, [0, 0, 0, 255]))
  }

  #[test]
  fn one_shot_renders_first_frame_with_template() {
    let record = Record::default();
    OneShotTask::new("CHAIR")
      .run_task(frames(3), None::<&DetectorHost<ReplayModelBuilder>>, &record)
      .unwrap();
    assert_eq!(*record.seen.borrow(), vec![(10, 3)]);
  }

  #[test]
  fn unavailable_detector_still_produces_pins() {
    let builder = ReplayModelBuilder::from_path("/nonexistent/output.bin");
    let mut host = DetectorHost::new(builder);
    assert!(!host.initialize());
    assert!(matches!(host.last_error(), Some(_)));

    let frame = RgbaFrame::filled(8, 8, [0; 4]);
    let inspection = Inspection::run("BED_OVERVIEW", &frame, Some(&host));
    assert!(inspection.detections.is_empty());
    assert_eq!(inspection.pins.len(), 6);
  }

  #[test]
  fn empty_input_is_an_error() {
    let record = Record::default();
    let err = OneShotTask::new("CHAIR")
      .run_task(frames(0), None::<&DetectorHost<ReplayModelBuilder>>, &record)
      .unwrap_err();
    assert_eq!(err.to_string(), "没有输入帧");
  }

  #[test]
  fn render_error_propagates() {
    let record = Record {
      fail: true,
      ..Default::default()
    };
    let err = OneShotTask::new("CHAIR")
      .run_task(frames(1), None::<&DetectorHost<ReplayModelBuilder>>, &record)
      .unwrap_err();
    assert!(err.downcast_ref::<RecordError>().is_some());
  }
}
