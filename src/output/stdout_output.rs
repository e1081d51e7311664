// 该文件是 Chuangjian （床检） 项目的一部分。
// src/output/stdout_output.rs - 报告输出到标准输出
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

use std::io::Write;

use thiserror::Error;
use tracing::info;
use url::Url;

use crate::{
  FromUrl, FromUrlWithScheme,
  frame::RgbaFrame,
  output::{InspectionReport, Render},
  task::Inspection,
};

#[derive(Error, Debug)]
pub enum StdoutOutputError {
  #[error("I/O 错误: {0}")]
  IoError(#[from] std::io::Error),
  #[error("JSON 序列化错误: {0}")]
  JsonError(#[from] serde_json::Error),
  #[error("URI 方案不匹配: {0}")]
  SchemeMismatch(String),
}

/// `stdout:` 输出，紧凑 JSON 一行一份报告；`stdout:?pretty` 时格式化输出
#[derive(Debug)]
pub struct StdoutOutput {
  pretty: bool,
}

impl FromUrlWithScheme for StdoutOutput {
  const SCHEME: &'static str = "stdout";
}

impl FromUrl for StdoutOutput {
  type Error = StdoutOutputError;

  fn from_url(url: &Url) -> Result<Self, Self::Error> {
    if url.scheme() != Self::SCHEME {
      return Err(StdoutOutputError::SchemeMismatch(format!(
        "期望输出方式 '{}', 实际输出方式 '{}'",
        Self::SCHEME,
        url.scheme()
      )));
    }

    let pretty = url.query_pairs().any(|(key, _)| key == "pretty");
    Ok(StdoutOutput { pretty })
  }
}

impl Render<RgbaFrame, Inspection> for StdoutOutput {
  type Error = StdoutOutputError;

  fn render_result(&self, frame: &RgbaFrame, result: &Inspection) -> Result<(), Self::Error> {
    let report = InspectionReport::new(frame, result);
    let json = if self.pretty {
      serde_json::to_string_pretty(&report)?
    } else {
      serde_json::to_string(&report)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;

    info!("输出 {} 个检查标记到标准输出", result.pins.len());
    Ok(())
  }
}
