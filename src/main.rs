// 该文件是 Chuangjian （床检） 项目的一部分。
// src/main.rs - 项目主程序
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

mod args;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use chuangjian::{
  FromUrl,
  host::DetectorHost,
  input::ImageFileInput,
  model::{DecodeConfig, ReplayModelBuilder},
  output::OutputWrapper,
  pin::ScenarioKey,
  task::{OneShotTask, Task},
};

fn main() -> Result<()> {
  tracing_subscriber::fmt::init();

  let args = args::Args::parse();

  info!("检查场景: {}", args.scenario);
  info!("输入来源: {}", args.input);
  info!("输出路径: {}", args.output);
  if let ScenarioKey::Unknown(key) = ScenarioKey::parse(&args.scenario) {
    warn!("未知场景 '{}'，使用通用四角布点", key);
  }

  let input = ImageFileInput::from_url(&args.input)?;
  let output = OutputWrapper::from_url(&args.output)?;
  let task = OneShotTask::new(args.scenario.as_str());

  let Some(model_url) = &args.model else {
    info!("未指定模型，仅使用场景模板布点");
    return task.run_task(input, None::<&DetectorHost<ReplayModelBuilder>>, output);
  };

  info!("模型来源: {}", model_url);
  let config = DecodeConfig::default()
    .confidence_threshold(args.confidence)
    .iou_threshold(args.iou_threshold)
    .filter_relevant(!args.all_classes);
  let mut host = DetectorHost::new(ReplayModelBuilder::from_url(model_url)?).with_config(config);
  if !host.initialize() {
    warn!("检测器不可用，降级为模板布点");
  }

  task.run_task(input, Some(&host), output)
}
