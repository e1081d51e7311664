// 该文件是 Chuangjian （床检） 项目的一部分。
// src/args.rs - 项目参数配置
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

use clap::Parser;
use url::Url;

use chuangjian::model::{DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_IOU_THRESHOLD};

/// Chuangjian 项目参数配置
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
  /// 检查场景，例如 BED_OVERVIEW、HEADBOARD、MATTRESS_SEAMS
  #[arg(long, value_name = "SCENARIO")]
  pub scenario: String,

  /// 输入来源
  /// 支持格式:
  /// - 图片: image:///path/to/photo.jpg
  #[arg(long, value_name = "SOURCE")]
  pub input: Url,

  /// 模型来源，缺省时只使用场景模板布点
  /// 支持格式:
  /// - 张量回放: replay:///path/to/output.bin?size=640&classes=80
  #[arg(long, value_name = "MODEL")]
  pub model: Option<Url>,

  /// 输出路径
  /// 支持格式:
  /// - JSON 文件: json:///path/to/report.json
  /// - 标准输出: stdout: 或 stdout:?pretty
  #[arg(long, default_value = "stdout:", value_name = "OUTPUT")]
  pub output: Url,

  /// 置信度阈值 (0.0 - 1.0)
  #[arg(long, default_value_t = DEFAULT_CONFIDENCE_THRESHOLD, value_name = "THRESHOLD")]
  pub confidence: f32,

  /// NMS IOU 阈值 (0.0 - 1.0)
  #[arg(long, default_value_t = DEFAULT_IOU_THRESHOLD, value_name = "THRESHOLD")]
  pub iou_threshold: f32,

  /// 保留全部 COCO 类别，不按家具白名单过滤
  #[arg(long)]
  pub all_classes: bool,
}
