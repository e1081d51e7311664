// 该文件是 Chuangjian （床检） 项目的一部分。
// src/bin/scenario_pins.rs - 输出各场景的模板布点
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

use std::collections::BTreeMap;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use chuangjian::pin::{Pin, Scenario, generate_pins};

/// 打印场景模板布点，便于审阅文案
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
  /// 只输出指定场景；缺省时输出全部已知场景
  #[arg(long, value_name = "SCENARIO")]
  pub scenario: Option<String>,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt::init();

  let args = Args::parse();

  let keys: Vec<String> = match args.scenario {
    Some(key) => vec![key],
    None => Scenario::ALL.iter().map(|s| s.key().to_string()).collect(),
  };

  let pins: BTreeMap<String, Vec<Pin>> = keys
    .into_iter()
    .map(|key| {
      let pins = generate_pins(&key, None);
      info!("场景 {}: {} 个标记", key, pins.len());
      (key, pins)
    })
    .collect();

  println!("{}", serde_json::to_string_pretty(&pins)?);

  Ok(())
}
